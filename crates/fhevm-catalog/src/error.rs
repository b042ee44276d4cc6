//! Catalog error types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Unknown example: {key}\n\nAvailable examples:\n{}", format_keys(.available))]
    UnknownExample { key: String, available: Vec<String> },

    #[error("duplicate catalog key: {0}")]
    DuplicateKey(String),

    #[error("invalid catalog file {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("cannot read catalog file {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
}

fn format_keys(keys: &[String]) -> String {
    keys.iter()
        .map(|k| format!("  - {}", k))
        .collect::<Vec<_>>()
        .join("\n")
}
