//! Bio component error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving or rendering the bio fragment.
#[derive(Debug, Error)]
pub enum BioError {
    /// A required field of the query result is absent.
    ///
    /// Carries the dotted path in query-result terms, e.g. `site.siteMetadata.social`.
    #[error("query result is missing `{0}`")]
    MissingField(&'static str),

    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("malformed query result")]
    Json(#[from] serde_json::Error),

    #[error("no asset matches avatar pattern `{0}`")]
    AvatarNotFound(String),

    #[error("invalid avatar pattern `{0}`")]
    Pattern(String, #[source] regex::Error),
}

pub type Result<T> = std::result::Result<T, BioError>;
