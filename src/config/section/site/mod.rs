//! `[site]` section configuration.
//!
//! Supplies the metadata the bio query resolves against.
//!
//! # Example
//!
//! ```toml
//! [site.info]
//! author = "Jane Doe"
//!
//! [site.social]
//! twitter = "janedoe"
//!
//! [site.avatar]
//! pattern = "avatar.(png|jpe?g|webp)$"
//! required = false
//! ```

mod avatar;
mod info;
mod social;

pub use avatar::AvatarConfig;
pub use info::SiteInfoConfig;
pub use social::SocialConfig;

use macros::Config;
use serde::{Deserialize, Serialize};

/// Site section configuration containing author metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site")]
pub struct SiteSectionConfig {
    /// Site metadata (author)
    #[config(sub)]
    pub info: SiteInfoConfig,

    /// Social handles. Left `None` when the section is absent so the
    /// missing field is reported at render time.
    #[config(skip)]
    pub social: Option<SocialConfig>,

    /// Avatar lookup settings.
    #[config(sub)]
    pub avatar: AvatarConfig,
}
