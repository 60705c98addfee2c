//! `[site.social]` configuration.

use crate::config::{ConfigDiagnostics, HandleEncoding};
use macros::Config;
use serde::{Deserialize, Serialize};

/// Social account handles linked from the bio.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site.social")]
pub struct SocialConfig {
    /// Twitter handle without the `@` prefix.
    #[config(inline_doc)]
    pub twitter: String,
}

impl SocialConfig {
    /// Check the handle against how it will be placed in the link.
    ///
    /// The handle is trusted configuration, so problems are hints only.
    pub fn validate(&self, encoding: HandleEncoding, diag: &mut ConfigDiagnostics) {
        if self.twitter.starts_with('@') {
            diag.hint(
                Self::FIELDS.twitter,
                format!(
                    "handle starts with '@', the link will be https://twitter.com/{}",
                    self.twitter
                ),
            );
        }

        if encoding == HandleEncoding::Raw && needs_encoding(&self.twitter) {
            diag.hint(
                Self::FIELDS.twitter,
                "handle contains characters that are not URL-safe and will be inserted as-is; \
                 set build.handle_encoding = \"percent\" to escape them",
            );
        }
    }
}

/// Whether `handle` has characters outside the RFC 3986 unreserved set.
fn needs_encoding(handle: &str) -> bool {
    !handle
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b'~'))
}
