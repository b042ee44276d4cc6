//! Repository layout configuration

use std::path::{Path, PathBuf};

/// Where things live inside an examples repository.
///
/// Directory fields are relative to `root`; the `*_path` accessors join them.
/// Catalog paths are resolved against `root` as well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceLayout {
    pub root: PathBuf,
    pub template_dir: PathBuf,
    pub frontend_dir: PathBuf,
    pub docs_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl WorkspaceLayout {
    pub const TEMPLATE_DIR: &'static str = "fhevm-hardhat-template";
    pub const FRONTEND_DIR: &'static str = "frontend-template";
    pub const DOCS_DIR: &'static str = "docs";
    pub const OUTPUT_DIR: &'static str = "output";

    /// Standard layout under `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            template_dir: PathBuf::from(Self::TEMPLATE_DIR),
            frontend_dir: PathBuf::from(Self::FRONTEND_DIR),
            docs_dir: PathBuf::from(Self::DOCS_DIR),
            output_dir: PathBuf::from(Self::OUTPUT_DIR),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a root-relative path such as a catalog source path
    pub fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }

    pub fn template_path(&self) -> PathBuf {
        self.resolve(&self.template_dir)
    }

    pub fn frontend_path(&self) -> PathBuf {
        self.resolve(&self.frontend_dir)
    }

    pub fn docs_path(&self) -> PathBuf {
        self.resolve(&self.docs_dir)
    }

    /// Destination used when the caller does not pick one
    pub fn default_destination(&self, key: &str) -> PathBuf {
        self.resolve(&self.output_dir)
            .join(format!("fhevm-example-{}", key))
    }
}
