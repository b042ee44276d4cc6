//! Error types for scaffolding operations

use std::io;
use std::path::{Path, PathBuf};

use fhevm_catalog::CatalogError;
use fhevm_codegen::CodegenError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScaffoldError>;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Contract not found: {}", .0.display())]
    MissingSource(PathBuf),

    #[error("Test not found: {}", .0.display())]
    MissingTest(PathBuf),

    #[error("Output directory already exists: {}", .0.display())]
    DestinationExists(PathBuf),

    #[error("Could not extract contract name from {}", .0.display())]
    MissingContract(PathBuf),

    #[error("Template directory not found: {}", .0.display())]
    MissingTemplate(PathBuf),

    #[error("IO error at {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Codegen(#[from] CodegenError),
}

/// Attach a path to an I/O error: `.map_err(io_at(&path))?`
pub(crate) fn io_at(path: &Path) -> impl FnOnce(io::Error) -> ScaffoldError + '_ {
    move |source| ScaffoldError::Io {
        path: path.to_path_buf(),
        source,
    }
}
