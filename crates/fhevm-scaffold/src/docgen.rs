//! Batch documentation generation

use std::fmt;
use std::path::PathBuf;

use fhevm_catalog::{Catalog, ExampleEntry};
use fhevm_codegen::{example_page, summary_index, RELATED_LIMIT};
use fhevm_scan::{exported_function_names, extract_doc_tags};
use tracing::{error, info, warn};

use crate::layout::WorkspaceLayout;
use crate::scripts::{read_source, write_file};
use crate::{Result, ScaffoldError};

/// Outcome counts of a batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocsTally {
    pub succeeded: usize,
    pub failed: usize,
    pub total: usize,
}

impl DocsTally {
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

impl fmt::Display for DocsTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Success: {}, Errors: {}, Total: {}",
            self.succeeded, self.failed, self.total
        )
    }
}

pub struct DocsGenerator<'a> {
    catalog: &'a Catalog,
    layout: &'a WorkspaceLayout,
}

impl<'a> DocsGenerator<'a> {
    pub fn new(catalog: &'a Catalog, layout: &'a WorkspaceLayout) -> Self {
        Self { catalog, layout }
    }

    /// Generate every page, then the index.
    ///
    /// Per-entry failures are logged and counted, never propagated. Only a
    /// failure to write the index is returned as an error.
    pub fn generate_all(&self) -> Result<DocsTally> {
        let mut tally = DocsTally {
            total: self.catalog.len(),
            ..DocsTally::default()
        };

        for entry in self.catalog.iter() {
            match self.generate_page(entry) {
                Ok(path) => {
                    info!(key = %entry.key, page = %path.display(), "generated documentation");
                    tally.succeeded += 1;
                }
                Err(e) => {
                    error!(key = %entry.key, error = %e, "documentation failed");
                    tally.failed += 1;
                }
            }
        }

        let index = self.write_index()?;
        info!(index = %index.display(), %tally, "documentation batch finished");
        Ok(tally)
    }

    /// Generate and write the page for one entry, returning its path
    pub fn generate_page(&self, entry: &ExampleEntry) -> Result<PathBuf> {
        let source_path = self.layout.resolve(&entry.source_path);
        let source = match read_source(&source_path) {
            Ok(text) => text,
            Err(e @ ScaffoldError::MissingSource(_)) => {
                warn!(key = %entry.key, path = %source_path.display(), "contract not found");
                return Err(e);
            }
            Err(e) => return Err(e),
        };

        let tags = extract_doc_tags(&source);
        let functions = exported_function_names(&source);
        let related = self.catalog.related(&entry.key, RELATED_LIMIT);
        let page = example_page(entry, &tags, &functions, &related);

        let output = self.layout.resolve(&entry.output_doc_path);
        write_file(&output, &page)?;
        Ok(output)
    }

    /// Write `SUMMARY.md` into the docs directory, returning its path
    pub fn write_index(&self) -> Result<PathBuf> {
        let index = summary_index(&self.catalog.by_category(), &self.layout.docs_dir);
        let path = self.layout.docs_path().join("SUMMARY.md");
        write_file(&path, &index)?;
        Ok(path)
    }
}
