//! Metadata providers.
//!
//! A provider plays the part of the build-time query engine: it receives the
//! declarative [`BioQuery`] and returns a fully resolved [`BioQueryResult`].
//!
//! | Provider         | Source                                      |
//! |------------------|---------------------------------------------|
//! | `ConfigProvider` | `[site.info]`, `[site.social]`, `[site.avatar]` |
//! | `JsonProvider`   | Pre-resolved query result (`--data file.json`) |

use super::avatar::{AvatarPattern, find_avatar};
use super::error::{BioError, Result};
use super::query::{BioQuery, BioQueryResult, Site, SiteMetadata, Social};
use crate::config::SiteConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// Supplies the resolved query result at composition time.
pub trait MetadataProvider {
    /// Resolve the query. Called once per render.
    fn resolve(&self, query: &BioQuery) -> Result<BioQueryResult>;

    /// Short label for log output.
    fn name(&self) -> &str;
}

// ============================================================================
// ConfigProvider
// ============================================================================

/// Resolves metadata from the loaded site configuration.
pub struct ConfigProvider<'a> {
    config: &'a SiteConfig,
}

impl<'a> ConfigProvider<'a> {
    pub const fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }
}

impl MetadataProvider for ConfigProvider<'_> {
    fn resolve(&self, query: &BioQuery) -> Result<BioQueryResult> {
        let site = &self.config.site;
        let avatar_config = &site.avatar;

        let pattern = AvatarPattern::new(&avatar_config.pattern)?;
        let avatar = find_avatar(
            &pattern,
            &self.config.build.assets,
            self.config.get_root(),
            query.avatar,
        );
        if avatar.is_none() && avatar_config.required {
            return Err(BioError::AvatarNotFound(avatar_config.pattern.clone()));
        }

        let metadata = SiteMetadata {
            author: site.info.author.clone(),
            social: site.social.as_ref().map(|social| Social {
                twitter: social.twitter.clone(),
            }),
        };

        Ok(BioQueryResult {
            avatar,
            site: Some(Site {
                site_metadata: Some(metadata),
            }),
        })
    }

    fn name(&self) -> &str {
        "config"
    }
}

// ============================================================================
// JsonProvider
// ============================================================================

/// Serves a pre-resolved query result from JSON.
///
/// The document is parsed on each resolve, so every render observes the
/// same immutable input.
pub struct JsonProvider {
    source: String,
    content: String,
}

impl JsonProvider {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            source: "json".into(),
            content: content.into(),
        }
    }

    /// Read the result document from a file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| BioError::Io(path.to_path_buf(), err))?;
        Ok(Self {
            source: path.display().to_string(),
            content,
        })
    }
}

impl MetadataProvider for JsonProvider {
    fn resolve(&self, _query: &BioQuery) -> Result<BioQueryResult> {
        Ok(serde_json::from_str(&self.content)?)
    }

    fn name(&self) -> &str {
        &self.source
    }
}

/// Pick the provider for this run: JSON data file when given, config otherwise.
pub fn select_provider<'a>(
    data: Option<&PathBuf>,
    config: &'a SiteConfig,
) -> Result<Box<dyn MetadataProvider + 'a>> {
    Ok(match data {
        Some(path) => Box::new(JsonProvider::from_path(path)?),
        None => Box::new(ConfigProvider::new(config)),
    })
}
