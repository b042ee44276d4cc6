//! Recursive template copy

use std::fs;
use std::path::Path;

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::error::io_at;
use crate::Result;

/// Generated or dependency directories never copied out of a template
pub const EXCLUDED_DIRS: &[&str] = &[
    "node_modules",
    "artifacts",
    "cache",
    "coverage",
    "types",
    "dist",
];

fn is_excluded(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .map_or(false, |name| EXCLUDED_DIRS.contains(&name))
}

/// Copy `source` into `destination`, skipping [`EXCLUDED_DIRS`] at any depth.
///
/// Returns the number of files copied.
pub fn copy_tree(source: &Path, destination: &Path) -> Result<usize> {
    fs::create_dir_all(destination).map_err(io_at(destination))?;

    let mut copied = 0;
    let walker = WalkDir::new(source)
        .min_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| !is_excluded(e));

    for entry in walker {
        let entry = entry?;
        let Ok(relative) = entry.path().strip_prefix(source) else {
            continue;
        };
        let target = destination.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(io_at(&target))?;
        } else {
            fs::copy(entry.path(), &target).map_err(io_at(&target))?;
            copied += 1;
        }
    }

    debug!(
        source = %source.display(),
        destination = %destination.display(),
        files = copied,
        "copied tree"
    );
    Ok(copied)
}
