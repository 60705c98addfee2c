//! Author bio component.
//!
//! ```text
//! MetadataProvider ──resolve(BIO_QUERY)──► BioQueryResult
//!                                              │ site_metadata()
//!                                              ▼
//!                    render(&SiteMetadata) ──► Fragment ──► HTML
//! ```
//!
//! | Module     | Purpose                                        |
//! |------------|------------------------------------------------|
//! | `query`    | Data requirement and resolved result shape     |
//! | `provider` | Config and JSON metadata providers             |
//! | `avatar`   | Avatar lookup by path pattern                  |
//! | `markup`   | Markup tree and HTML serialization             |
//! | `render`   | Bio markup construction                        |

mod avatar;
mod error;
pub mod markup;
mod provider;
mod query;
mod render;

pub use error::Result;
pub use provider::{MetadataProvider, select_provider};
pub use query::use_static_query;
pub use render::{Fragment, RenderOptions, render};

#[cfg(test)]
pub use error::BioError;
#[cfg(test)]
pub use provider::{ConfigProvider, JsonProvider};

/// Resolve the query and render in one step.
pub fn render_bio(provider: &dyn MetadataProvider, options: &RenderOptions) -> Result<Fragment> {
    let result = use_static_query(provider)?;
    render(result.site_metadata()?, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_bio_from_json() {
        let provider = JsonProvider::new(
            r#"{"avatar":null,"site":{"siteMetadata":{"author":"Jane Doe","social":{"twitter":"janedoe"}}}}"#,
        );
        let fragment = render_bio(&provider, &RenderOptions::default()).unwrap();
        assert_eq!(fragment.href(), Some("https://twitter.com/janedoe"));
    }

    #[test]
    fn test_render_bio_ignores_foreign_avatar_shape() {
        let provider = JsonProvider::new(
            r#"{"avatar":{"childImageSharp":{"fixed":{"width":25,"height":25,"src":"/static/dwit.jpg"}}},"site":{"siteMetadata":{"author":"Jane Doe","social":{"twitter":"janedoe"}}}}"#,
        );
        let fragment = render_bio(&provider, &RenderOptions::default()).unwrap();
        assert_eq!(fragment.href(), Some("https://twitter.com/janedoe"));
        assert_eq!(fragment.text(), "Written by Jane Doe.");
    }

    #[test]
    fn test_render_bio_missing_social() {
        let provider = JsonProvider::new(r#"{"site":{"siteMetadata":{"author":"Jane Doe"}}}"#);
        let err = render_bio(&provider, &RenderOptions::default()).unwrap_err();
        assert!(matches!(err, BioError::MissingField("site.siteMetadata.social")));
    }
}
