//! Site configuration management for `sitebio.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── build      # [build]
//! │   └── site/      # [site.info], [site.social], [site.avatar]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section         | Purpose                                       |
//! |-----------------|-----------------------------------------------|
//! | `[site.info]`   | Author name                                   |
//! | `[site.social]` | Social handles linked from the bio            |
//! | `[site.avatar]` | Avatar lookup pattern                         |
//! | `[build]`       | Asset dirs, output path, handle encoding      |
//!
//! The loaded `SiteConfig` is owned by `main` and passed down by reference.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{
    AvatarConfig, BuildSectionConfig, HandleEncoding, SiteInfoConfig, SiteSectionConfig,
    SocialConfig,
};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{Cli, Commands},
    log,
    utils::path::normalize_path,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing sitebio.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site metadata (info, social, avatar)
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildSectionConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// For non-Init commands, searches upward from cwd to find config file.
    /// The project root is determined by the config file's parent directory.
    /// A missing config file is accepted when `--data` supplies the metadata.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        let (config_path, exists) = Self::resolve_config_path(cli, &cwd);

        if !cli.is_init() && !exists && cli.data.is_none() {
            return Err(ConfigError::NotFound(cli.config.clone()).into());
        }

        let read_file = exists && !cli.is_init();
        let mut config = if read_file {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };

        // Validate raw paths before normalization
        if read_file {
            config.validate_paths()?;
        }

        config.config_path = config_path;
        config.finalize(cli, &cwd);

        if read_file {
            config.validate()?;
        }

        Ok(config)
    }

    /// Resolve config file path based on command.
    fn resolve_config_path(cli: &Cli, cwd: &Path) -> (PathBuf, bool) {
        match &cli.command {
            Commands::Init { name } => {
                let dir = name.as_ref().map_or_else(|| cwd.to_path_buf(), |n| cwd.join(n));
                let path = dir.join(&cli.config);
                let exists = path.exists();
                (path, exists)
            }
            _ => match find_config_file(&cli.config, cwd) {
                Some(path) => (path, true),
                None => (cwd.join(&cli.config), false),
            },
        }
    }

    /// Finalize configuration after loading.
    fn finalize(&mut self, cli: &Cli, cwd: &Path) {
        let root = match &cli.command {
            Commands::Init { name } => name.as_ref().map_or_else(|| cwd.to_path_buf(), |n| cwd.join(n)),
            _ => self
                .config_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| cwd.to_path_buf()),
        };

        self.normalize_paths(&root);
        self.apply_command_options(cli);
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.root = path.to_path_buf();
    }

    /// Get path relative to the site root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Render { encoding, .. } => {
                Self::update_option(&mut self.build.handle_encoding, encoding.as_ref());
            }
            Commands::Build { encoding, output } => {
                Self::update_option(&mut self.build.handle_encoding, encoding.as_ref());
                if let Some(output) = output {
                    self.build.output = normalize_path(&self.root.join(output));
                }
            }
            Commands::Init { .. } | Commands::Query { .. } => {}
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Normalize all paths relative to root directory.
    fn normalize_paths(&mut self, root: &Path) {
        let root = normalize_path(root);
        self.set_root(&root);

        self.config_path = normalize_path(&self.config_path);
        self.build.output = normalize_path(&root.join(&self.build.output));
        self.build.assets = self
            .build
            .assets
            .iter()
            .map(|p| normalize_path(&root.join(p)))
            .collect();
        // build.path stays relative to output
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Pre-validate paths before normalization.
    ///
    /// Must run before `finalize()`: once joined onto the root every path
    /// is absolute and a user-supplied absolute path can't be told apart.
    fn validate_paths(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();
        self.build.validate_paths(&mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.info.validate(&mut diag);
        if let Some(social) = &self.site.social {
            social.validate(self.build.handle_encoding, &mut diag);
        }
        self.site.avatar.validate(&mut diag);
        self.build.validate(&mut diag);

        diag.print_hints();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with minimal required `[site.info]` fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[site.info]\nauthor = \"Jane Doe\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn test_from_str_invalid_toml() {
        let result = SiteConfig::from_str("[site\nauthor = \"Jane\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();
        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.get_root(), Path::new(""));
        assert_eq!(config.site.info.author, "");
        assert!(config.site.social.is_none());
        assert_eq!(config.build.output, PathBuf::from("public"));
    }

    #[test]
    fn test_set_root_and_relative() {
        let mut config = SiteConfig::default();
        config.set_root(Path::new("/site"));
        assert_eq!(config.get_root(), Path::new("/site"));
        assert_eq!(
            config.root_relative("/site/public/bio.html"),
            PathBuf::from("public/bio.html")
        );
        assert_eq!(config.root_relative("/other"), PathBuf::from("/other"));
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site.info]\nauthor = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.site.info.author, "Test");
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[site.info]\nauthor = \"Test\"\n[site.social]\ntwitter = \"t\"";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_validate_collects_errors() {
        let mut config = test_parse_config("[site.avatar]\npattern = \"[\"\n");
        config.build.assets.clear();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("site.avatar.pattern"));
    }

    #[test]
    fn test_normalize_paths() {
        let dir = TempDir::new().unwrap();
        let mut config = test_parse_config("");
        config.normalize_paths(dir.path());

        let root = normalize_path(dir.path());
        assert_eq!(config.get_root(), root);
        assert_eq!(config.build.output, root.join("public"));
        assert_eq!(config.build.assets, vec![root.join("assets")]);
        assert_eq!(config.build.fragment_path(), root.join("public/partials/bio.html"));
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from(["sitebio", "build", "--encoding", "percent", "-o", "dist"]);
        let mut config = test_parse_config("");
        config.set_root(Path::new("/site"));
        config.apply_command_options(&cli);

        assert_eq!(config.build.handle_encoding, HandleEncoding::Percent);
        assert!(config.build.output.ends_with("dist"));
    }
}
