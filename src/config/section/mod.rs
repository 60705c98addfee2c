//! Configuration section definitions.
//!
//! Each module corresponds to a section in `sitebio.toml`:
//!
//! | Module  | TOML Section | Purpose                                  |
//! |---------|--------------|------------------------------------------|
//! | `build` | `[build]`    | Asset dirs, output path, handle encoding |
//! | `site`  | `[site]`     | Author info, social handles, avatar      |

pub mod build;
pub mod site;

pub use build::{BuildSectionConfig, HandleEncoding};
pub use site::{AvatarConfig, SiteInfoConfig, SiteSectionConfig, SocialConfig};
