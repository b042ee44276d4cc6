//! Writing generated helper files to disk

use std::fs;
use std::path::Path;

use fhevm_codegen::{contract_component, generate_quick_interact, parse_artifact};
use tracing::{debug, warn};

use crate::error::io_at;
use crate::{Result, ScaffoldError};

/// Read a contract source file, reporting a missing file as `MissingSource`
pub fn read_source(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(ScaffoldError::MissingSource(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(io_at(path))
}

/// Write `contents` to `path`, creating parent directories
pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_at(parent))?;
    }
    fs::write(path, contents).map_err(io_at(path))
}

/// Mark a generated script executable (no-op off Unix)
pub fn make_executable(path: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).map_err(io_at(path))?;
    }
    #[cfg(not(unix))]
    let _ = path;
    Ok(())
}

/// Generate a quick-interact script for the contract at `contract` and write
/// it to `output` as an executable file.
pub fn write_quick_interact(contract: &Path, output: &Path) -> Result<()> {
    let source = read_source(contract)?;
    let script = generate_quick_interact(&source)?;
    write_file(output, &script)?;
    make_executable(output)?;
    debug!(script = %output.display(), "wrote quick-interact script");
    Ok(())
}

/// Render the React component for a compiled artifact.
///
/// A missing artifact is not an error: it warns and renders a component with
/// no functions.
pub fn render_component(artifact: &Path, contract_name: &str) -> Result<String> {
    let functions = if artifact.is_file() {
        let json = fs::read_to_string(artifact).map_err(io_at(artifact))?;
        parse_artifact(&json)?
    } else {
        warn!(artifact = %artifact.display(), "artifact not found, generating empty component");
        Vec::new()
    };
    Ok(contract_component(contract_name, &functions))
}
