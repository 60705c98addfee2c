//! Site initialization.
//!
//! Writes a commented `sitebio.toml` and creates the default asset directory.

use crate::config::{
    AvatarConfig, BuildSectionConfig, SiteConfig, SiteInfoConfig, SocialConfig,
};
use crate::log;
use anyhow::{Context, Result, bail};
use std::fs;

/// Generate sitebio.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "# sitebio configuration file (v{})\n\n",
        env!("CARGO_PKG_VERSION")
    ));

    // [site.info] section
    out.push_str(&SiteInfoConfig::template_with_header());
    out.push('\n');

    // [site.social] section
    out.push_str(&SocialConfig::template_with_header());
    out.push('\n');

    // [site.avatar] section
    out.push_str(&AvatarConfig::template_with_header());
    out.push('\n');

    // [build] section
    out.push_str(&BuildSectionConfig::template_with_header());

    out
}

/// Write the config template and asset directories under the site root.
///
/// Refuses to overwrite an existing config file.
pub fn new_site(config: &SiteConfig) -> Result<()> {
    let path = &config.config_path;
    if path.exists() {
        bail!(
            "'{}' already exists.\n\
             Remove it or choose a different directory.",
            path.display()
        );
    }

    let root = config.get_root();
    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create directory '{}'", root.display()))?;

    for dir in &config.build.assets {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory '{}'", dir.display()))?;
    }

    fs::write(path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    log!("init"; "created {}", config.root_relative(path).display());
    Ok(())
}
