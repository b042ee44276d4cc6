use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Every file under `dir` keyed by relative path, with its bytes
pub fn snapshot(dir: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    WalkDir::new(dir)
        .into_iter()
        .map(|e| e.expect("Failed to walk directory"))
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let relative = e.path().strip_prefix(dir).unwrap().to_path_buf();
            let bytes = fs::read(e.path()).unwrap();
            (relative, bytes)
        })
        .collect()
}

/// Files directly inside `dir` with the given extension
pub fn files_with_extension(dir: &Path, ext: &str) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect(&format!("Failed to read {}", dir.display()))
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|e| e.to_str()) == Some(ext))
        .filter_map(|path| path.file_name()?.to_str().map(String::from))
        .collect();
    names.sort();
    names
}

/// Assert that `text` contains `needle`, showing the text on failure
pub fn assert_contains(text: &str, needle: &str) {
    assert!(
        text.contains(needle),
        "Expected to find {:?} in:\n{}",
        needle,
        text
    );
}
