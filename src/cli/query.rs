//! `query` command: print the resolved query result as JSON.

use crate::bio::{self, MetadataProvider};
use crate::log;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Resolve the bio query and format the result.
pub fn query_json(provider: &dyn MetadataProvider, pretty: bool) -> Result<String> {
    let result = bio::use_static_query(provider)
        .with_context(|| format!("Failed to resolve query from {}", provider.name()))?;

    let formatted = if pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    Ok(formatted)
}

/// Print the query result to stdout, or to `output` when given.
pub fn run(provider: &dyn MetadataProvider, pretty: bool, output: Option<&Path>) -> Result<()> {
    let formatted = query_json(provider, pretty)?;

    if let Some(output_path) = output {
        fs::write(output_path, format!("{formatted}\n"))
            .with_context(|| format!("Failed to write '{}'", output_path.display()))?;
        log!("query"; "wrote output to {}", output_path.display());
    } else {
        println!("{formatted}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bio::{ConfigProvider, JsonProvider};
    use crate::config::test_parse_config;
    use serde_json::Value as JsonValue;
    use tempfile::TempDir;

    #[test]
    fn test_query_json_shape() {
        let dir = TempDir::new().unwrap();
        let mut config = test_parse_config("[site.social]\ntwitter = \"janedoe\"\n");
        config.set_root(dir.path());
        config.build.assets = vec![dir.path().join("assets")];

        let json = query_json(&ConfigProvider::new(&config), false).unwrap();
        let value: JsonValue = serde_json::from_str(&json).unwrap();

        assert_eq!(value["site"]["siteMetadata"]["author"], "Jane Doe");
        assert_eq!(value["site"]["siteMetadata"]["social"]["twitter"], "janedoe");
        assert!(value["avatar"].is_null());
    }

    #[test]
    fn test_query_output_feeds_json_provider() {
        let dir = TempDir::new().unwrap();
        let source = JsonProvider::new(
            r#"{"avatar":{"path":"assets/a.png","width":25,"height":25},"site":{"siteMetadata":{"author":"A","social":{"twitter":"a"}}}}"#,
        );

        let out = dir.path().join("query.json");
        run(&source, true, Some(&out)).unwrap();

        let reloaded = JsonProvider::from_path(&out).unwrap();
        assert_eq!(
            bio::use_static_query(&reloaded).unwrap(),
            bio::use_static_query(&source).unwrap()
        );
    }

    #[test]
    fn test_query_invalid_json() {
        let provider = JsonProvider::new("{ not json");
        assert!(query_json(&provider, false).is_err());
    }
}
