//! Catalog entry records

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// How demanding an example is for a newcomer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One named example: its metadata and the repository paths it points at.
///
/// Paths are relative to the repository root. Nothing here checks that they
/// exist; callers do that right before use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleEntry {
    pub key: String,
    pub title: String,
    pub description: String,
    /// Contract source file
    #[serde(alias = "contract")]
    pub source_path: String,
    #[serde(alias = "test")]
    pub test_path: String,
    /// Where the generated documentation page goes
    #[serde(alias = "output")]
    pub output_doc_path: String,
    pub category: String,
    #[serde(default)]
    pub difficulty: Difficulty,
}

impl ExampleEntry {
    /// File name of the contract source, e.g. `FHECounter.sol`
    pub fn source_file_name(&self) -> &str {
        file_name(&self.source_path)
    }

    /// File name of the test, e.g. `FHECounter.ts`
    pub fn test_file_name(&self) -> &str {
        file_name(&self.test_path)
    }

    /// Directory slug used for cross-links between doc pages
    pub fn category_slug(&self) -> String {
        self.category
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
    }
}

fn file_name(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}
