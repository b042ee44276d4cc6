//! FHEVM Scaffold - Filesystem side of the examples tooling
//!
//! Everything that touches disk lives here: copying template trees,
//! materializing a standalone example project from the catalog, batch
//! documentation generation, and writing standalone scripts. Text is produced
//! by `fhevm-codegen`; this crate decides where it goes.

mod copy;
mod docgen;
mod error;
mod layout;
mod materialize;
mod scripts;

pub use copy::{copy_tree, EXCLUDED_DIRS};
pub use docgen::{DocsGenerator, DocsTally};
pub use error::{Result, ScaffoldError};
pub use layout::WorkspaceLayout;
pub use materialize::{Materialized, Materializer, FRONTEND_ENV, HOMEPAGE_BASE};
pub use scripts::{make_executable, read_source, render_component, write_file, write_quick_interact};
