//! `[site.avatar]` configuration.
//!
//! The avatar is located by a regex over site-relative asset paths and
//! carried in the query result at the fixed size the bio query requests.

use crate::config::ConfigDiagnostics;
use macros::Config;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Avatar image lookup.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site.avatar")]
pub struct AvatarConfig {
    /// Regex matched against asset paths relative to the site root.
    #[config(default = "avatar.(png|jpe?g|webp)$", inline_doc)]
    pub pattern: String,

    /// Fail when no asset matches the pattern.
    #[config(inline_doc)]
    pub required: bool,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            pattern: "avatar.(png|jpe?g|webp)$".into(),
            required: false,
        }
    }
}

impl AvatarConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Err(e) = Regex::new(&self.pattern) {
            diag.error_with_hint(
                Self::FIELDS.pattern,
                format!("invalid pattern: {}", e),
                "use a regular expression such as \"avatar\\\\.png$\"",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.site.avatar.pattern, "avatar.(png|jpe?g|webp)$");
        assert!(!config.site.avatar.required);
    }

    #[test]
    fn test_invalid_pattern_reported() {
        let config = test_parse_config("[site.avatar]\npattern = \"(dwit\"\n");
        let mut diag = ConfigDiagnostics::new();
        config.site.avatar.validate(&mut diag);
        assert_eq!(diag.errors().len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "site.avatar.pattern");
    }

    #[test]
    fn test_template_parses_back() {
        let template = AvatarConfig::template_with_header();
        let value: toml::Value = toml::from_str(&template).unwrap();
        assert_eq!(
            value["site"]["avatar"]["pattern"].as_str(),
            Some("avatar.(png|jpe?g|webp)$")
        );
    }
}
