//! Build-time data requirement of the bio component and its resolved result.
//!
//! The component declares what it needs through [`BIO_QUERY`] and receives a
//! fully resolved [`BioQueryResult`] from a [`MetadataProvider`]. Resolution
//! happens before rendering; there is no pending state to observe.
//!
//! Result shape (JSON, keys as written):
//!
//! ```json
//! {
//!   "avatar": { "path": "assets/dwit.jpg", "width": 25, "height": 25 },
//!   "site": { "siteMetadata": { "author": "Jane Doe", "social": { "twitter": "janedoe" } } }
//! }
//! ```

use super::error::{BioError, Result};
use super::provider::MetadataProvider;
use crate::debug;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Fixed output size requested for an image asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedSize {
    pub width: u32,
    pub height: u32,
}

/// Declarative data requirement.
///
/// Providers receive it verbatim; it never varies between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BioQuery {
    /// Avatar image, transformed to a fixed size by the asset pipeline.
    pub avatar: FixedSize,
    /// Dotted paths of the metadata fields read by the renderer.
    pub fields: &'static [&'static str],
}

/// The query issued on every render.
pub const BIO_QUERY: BioQuery = BioQuery {
    avatar: FixedSize {
        width: 25,
        height: 25,
    },
    fields: &[
        "site.siteMetadata.author",
        "site.siteMetadata.social.twitter",
    ],
};

impl fmt::Display for BioQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "avatar(fixed {}x{}) {}",
            self.avatar.width,
            self.avatar.height,
            self.fields.join(" ")
        )
    }
}

// ============================================================================
// Result shape
// ============================================================================

/// Resolved query result.
///
/// Every level is optional so that an incomplete result can be detected
/// by [`BioQueryResult::site_metadata`] instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BioQueryResult {
    /// Never rendered, so any shape other than [`AvatarAsset`] reads as `None`.
    #[serde(default, deserialize_with = "lenient_avatar")]
    pub avatar: Option<AvatarAsset>,
    #[serde(default)]
    pub site: Option<Site>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    #[serde(rename = "siteMetadata", default)]
    pub site_metadata: Option<SiteMetadata>,
}

/// Site-wide author metadata, immutable for one build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteMetadata {
    pub author: String,
    #[serde(default)]
    pub social: Option<Social>,
}

/// Social handles. `twitter` is stored without the `@` prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Social {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub twitter: String,
}

/// Image reference located by pattern, sized by the query.
///
/// Resolved but not part of the rendered markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarAsset {
    /// Site-relative path with `/` separators.
    pub path: String,
    pub width: u32,
    pub height: u32,
}

fn lenient_avatar<'de, D>(deserializer: D) -> std::result::Result<Option<AvatarAsset>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

/// `null` counts the same as an absent handle.
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl SiteMetadata {
    pub fn new(author: impl Into<String>, twitter: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            social: Some(Social {
                twitter: twitter.into(),
            }),
        }
    }

    /// Social handles, failing when the section is absent.
    pub fn social(&self) -> Result<&Social> {
        self.social
            .as_ref()
            .ok_or(BioError::MissingField("site.siteMetadata.social"))
    }
}

impl BioQueryResult {
    /// Destructure the metadata the renderer needs.
    ///
    /// No defaulting: an absent `site` or `siteMetadata` is an error.
    pub fn site_metadata(&self) -> Result<&SiteMetadata> {
        self.site
            .as_ref()
            .ok_or(BioError::MissingField("site"))?
            .site_metadata
            .as_ref()
            .ok_or(BioError::MissingField("site.siteMetadata"))
    }
}

/// Resolve [`BIO_QUERY`] through the given provider.
pub fn use_static_query(provider: &dyn MetadataProvider) -> Result<BioQueryResult> {
    debug!("query"; "resolving {} via {}", BIO_QUERY, provider.name());
    let result = provider.resolve(&BIO_QUERY)?;
    debug!(
        "query";
        "avatar: {}",
        result.avatar.as_ref().map_or("none", |a| a.path.as_str())
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_metadata_destructure() {
        let result: BioQueryResult = serde_json::from_str(
            r#"{"site":{"siteMetadata":{"author":"Jane Doe","social":{"twitter":"janedoe"}}}}"#,
        )
        .unwrap();

        let meta = result.site_metadata().unwrap();
        assert_eq!(meta.author, "Jane Doe");
        assert_eq!(meta.social().unwrap().twitter, "janedoe");
        assert!(result.avatar.is_none());
    }

    #[test]
    fn test_missing_site() {
        let result: BioQueryResult = serde_json::from_str("{}").unwrap();
        assert!(matches!(
            result.site_metadata(),
            Err(BioError::MissingField("site"))
        ));
    }

    #[test]
    fn test_missing_site_metadata() {
        let result: BioQueryResult = serde_json::from_str(r#"{"site":{}}"#).unwrap();
        assert!(matches!(
            result.site_metadata(),
            Err(BioError::MissingField("site.siteMetadata"))
        ));
    }

    #[test]
    fn test_missing_social_detected() {
        let result: BioQueryResult =
            serde_json::from_str(r#"{"site":{"siteMetadata":{"author":"Jane"}}}"#).unwrap();
        let meta = result.site_metadata().unwrap();
        assert!(matches!(
            meta.social(),
            Err(BioError::MissingField("site.siteMetadata.social"))
        ));
    }

    #[test]
    fn test_missing_twitter_defaults_to_empty() {
        let result: BioQueryResult =
            serde_json::from_str(r#"{"site":{"siteMetadata":{"author":"Jane","social":{}}}}"#)
                .unwrap();
        let social = result.site_metadata().unwrap().social().unwrap();
        assert_eq!(social.twitter, "");
    }

    #[test]
    fn test_null_twitter_is_empty() {
        let result: BioQueryResult = serde_json::from_str(
            r#"{"site":{"siteMetadata":{"author":"Jane","social":{"twitter":null}}}}"#,
        )
        .unwrap();
        assert_eq!(result.site_metadata().unwrap().social().unwrap().twitter, "");
    }

    #[test]
    fn test_avatar_shapes() {
        let result: BioQueryResult = serde_json::from_str(
            r#"{"avatar":{"path":"assets/me.png","width":25,"height":25},"site":null}"#,
        )
        .unwrap();
        assert_eq!(result.avatar.unwrap().path, "assets/me.png");

        let result: BioQueryResult = serde_json::from_str(
            r#"{"avatar":{"childImageSharp":{"fixed":{"width":25,"height":25,"src":"/static/me.jpg"}}},
                "site":{"siteMetadata":{"author":"Jane Doe","social":{"twitter":"janedoe"}}}}"#,
        )
        .unwrap();
        assert!(result.avatar.is_none());
        assert_eq!(result.site_metadata().unwrap().author, "Jane Doe");

        let result: BioQueryResult = serde_json::from_str(r#"{"avatar":null}"#).unwrap();
        assert!(result.avatar.is_none());
    }

    #[test]
    fn test_serialize_keeps_camel_case_key() {
        let result = BioQueryResult {
            avatar: None,
            site: Some(Site {
                site_metadata: Some(SiteMetadata::new("Jane", "janedoe")),
            }),
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"siteMetadata\""));
        assert!(json.contains("\"twitter\":\"janedoe\""));
    }

    #[test]
    fn test_query_display() {
        let text = BIO_QUERY.to_string();
        assert!(text.starts_with("avatar(fixed 25x25)"));
        assert!(text.contains("site.siteMetadata.social.twitter"));
    }
}
