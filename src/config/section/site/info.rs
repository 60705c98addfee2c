//! `[site.info]` configuration.

use macros::Config;
use serde::{Deserialize, Serialize};

/// Basic site information.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site.info")]
pub struct SiteInfoConfig {
    /// Author name shown in the byline.
    #[config(inline_doc)]
    pub author: String,
}

impl SiteInfoConfig {
    /// Validate site information.
    ///
    /// An empty author still renders; it is only worth a hint.
    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        if self.author.trim().is_empty() {
            diag.hint(
                Self::FIELDS.author,
                "author is empty, the bio will read \"Written by .\"",
            );
        }
    }
}
