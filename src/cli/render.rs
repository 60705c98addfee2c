//! `render` and `build` commands.

use crate::bio::{self, MetadataProvider, RenderOptions};
use crate::config::SiteConfig;
use crate::{debug, log};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

fn render_html(provider: &dyn MetadataProvider, config: &SiteConfig) -> Result<String> {
    let options = RenderOptions {
        encoding: config.build.handle_encoding,
    };
    debug!("render"; "provider: {}, encoding: {:?}", provider.name(), options.encoding);

    let fragment = bio::render_bio(provider, &options)
        .with_context(|| format!("Failed to render bio from {}", provider.name()))?;
    Ok(fragment.to_html())
}

/// Render the fragment to stdout, or to `output` when given.
pub fn render(
    provider: &dyn MetadataProvider,
    config: &SiteConfig,
    output: Option<&Path>,
) -> Result<()> {
    let html = render_html(provider, config)?;

    match output {
        Some(path) => {
            write_file(path, &html)?;
            log!("render"; "wrote {}", path.display());
        }
        None => println!("{html}"),
    }
    Ok(())
}

/// Render the fragment into `build.output`/`build.path`.
pub fn build(provider: &dyn MetadataProvider, config: &SiteConfig) -> Result<PathBuf> {
    let html = render_html(provider, config)?;

    let path = config.build.fragment_path();
    write_file(&path, &html)?;
    log!("build"; "wrote {}", config.root_relative(&path).display());
    Ok(path)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write '{}'", path.display()))
}
