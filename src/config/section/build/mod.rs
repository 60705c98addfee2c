//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! assets = ["assets"]            # Directories searched for the avatar (relative to site root)
//! output = "public"              # Output directory (relative to site root)
//! path = "partials/bio.html"     # Fragment file inside the output directory
//! handle_encoding = "raw"        # Handle in link target: raw | percent
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

/// How the social handle is placed into the link target.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum HandleEncoding {
    /// Concatenate the handle as-is (trusted configuration).
    #[default]
    Raw,
    /// Percent-encode everything outside the URL unreserved set.
    Percent,
}

/// Build settings.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "build")]
pub struct BuildSectionConfig {
    /// Directories searched for the avatar image.
    #[config(default = "[\"assets\"]", inline_doc)]
    pub assets: Vec<PathBuf>,

    /// Build output directory.
    #[config(default = "public", inline_doc)]
    pub output: PathBuf,

    /// Fragment file path inside the output directory.
    #[config(default = "partials/bio.html", inline_doc)]
    pub path: PathBuf,

    /// Handle encoding in the link target: raw | percent.
    #[config(default = "raw", inline_doc)]
    pub handle_encoding: HandleEncoding,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            assets: vec!["assets".into()],
            output: "public".into(),
            path: "partials/bio.html".into(),
            handle_encoding: HandleEncoding::Raw,
        }
    }
}

impl BuildSectionConfig {
    /// Check raw paths before they are joined onto the site root.
    pub fn validate_paths(&self, diag: &mut ConfigDiagnostics) {
        Self::validate_path_safety(&self.path, Self::FIELDS.path, diag);
        for asset in &self.assets {
            Self::validate_path_safety(asset, Self::FIELDS.assets, diag);
        }
    }

    /// Reject `..` and absolute paths.
    fn validate_path_safety(path: &Path, field: FieldPath, diag: &mut ConfigDiagnostics) {
        for comp in path.components() {
            let msg = match comp {
                Component::ParentDir => Some("parent directory '..' not allowed"),
                Component::Prefix(_) | Component::RootDir => Some("absolute paths not allowed"),
                _ => None,
            };
            if let Some(reason) = msg {
                diag.error(field, format!("path '{}': {reason}", path.display()));
                return;
            }
        }
    }

    /// Hint about asset directories that do not exist.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for dir in &self.assets {
            if !dir.is_dir() {
                let name = dir
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| dir.display().to_string());
                diag.hint(
                    Self::FIELDS.assets,
                    format!("directory '{}' not found, skipping", name),
                );
            }
        }
    }

    /// Absolute path of the fragment file.
    pub fn fragment_path(&self) -> PathBuf {
        self.output.join(&self.path)
    }
}
