//! Catalog-driven project materialization
//!
//! All validation (catalog key, source and test files, destination, contract
//! declaration, templates) happens before the first write, so a rejected run
//! leaves the filesystem untouched.

use std::fs;
use std::path::{Path, PathBuf};

use fhevm_catalog::{Catalog, ExampleEntry};
use fhevm_codegen::{deploy_script, project_readme};
use fhevm_scan::contract_name;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::copy::copy_tree;
use crate::error::io_at;
use crate::layout::WorkspaceLayout;
use crate::scripts::{read_source, write_file, write_quick_interact};
use crate::{Result, ScaffoldError};

/// Examples repository; each generated project links to `<base>/<key>`
pub const HOMEPAGE_BASE: &str = "https://github.com/zama-ai/fhevm-examples";

/// Contents of the frontend environment file
pub const FRONTEND_ENV: &str = "NEXT_PUBLIC_CONTRACT_ADDRESS=\"\"\n";

/// What a successful materialization produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Materialized {
    pub key: String,
    pub destination: PathBuf,
    pub contract_name: String,
    /// `None` when script generation degraded to a warning
    pub interact_script: Option<PathBuf>,
    pub frontend: Option<PathBuf>,
}

/// Validated inputs for one run
struct Plan<'a> {
    entry: &'a ExampleEntry,
    source: PathBuf,
    test: PathBuf,
    contract_name: String,
}

pub struct Materializer<'a> {
    catalog: &'a Catalog,
    layout: &'a WorkspaceLayout,
}

impl<'a> Materializer<'a> {
    pub fn new(catalog: &'a Catalog, layout: &'a WorkspaceLayout) -> Self {
        Self { catalog, layout }
    }

    /// Scaffold the example `key` into `destination`, which must not exist.
    pub fn create(
        &self,
        key: &str,
        destination: &Path,
        include_frontend: bool,
    ) -> Result<Materialized> {
        let plan = self.plan(key, destination, include_frontend)?;
        let entry = plan.entry;
        info!(key = %entry.key, destination = %destination.display(), "creating example project");

        info!("copying template");
        copy_tree(&self.layout.template_path(), destination)?;

        info!(contract = %plan.contract_name, "copying contract and test");
        let contracts_dir = destination.join("contracts");
        let contract_ext = extension_of(&plan.source, "sol");
        replace_placeholders(&contracts_dir, contract_ext)?;
        let contract_target =
            contracts_dir.join(format!("{}.{}", plan.contract_name, contract_ext));
        fs::copy(&plan.source, &contract_target).map_err(io_at(&contract_target))?;

        let test_dir = destination.join("test");
        replace_placeholders(&test_dir, extension_of(&plan.test, "ts"))?;
        let test_target = test_dir.join(entry.test_file_name());
        fs::copy(&plan.test, &test_target).map_err(io_at(&test_target))?;

        info!("updating configuration");
        write_file(
            &destination.join("deploy").join("deploy.ts"),
            &deploy_script(&plan.contract_name),
        )?;
        rewrite_package_json(&destination.join("package.json"), entry)?;

        info!("generating quick-interact script");
        let script = destination.join("scripts").join("quick-interact.ts");
        let interact_script = match write_quick_interact(&plan.source, &script) {
            Ok(()) => Some(script),
            Err(e) => {
                warn!(error = %e, "could not generate quick-interact script");
                None
            }
        };

        let frontend = if include_frontend {
            info!("adding frontend");
            let frontend_dir = destination.join("frontend");
            copy_tree(&self.layout.frontend_path(), &frontend_dir)?;
            write_file(&frontend_dir.join(".env.local"), FRONTEND_ENV)?;
            Some(frontend_dir)
        } else {
            None
        };

        info!("generating README");
        write_file(
            &destination.join("README.md"),
            &project_readme(entry, &plan.contract_name, include_frontend),
        )?;

        info!(key = %entry.key, "example project created");
        Ok(Materialized {
            key: entry.key.clone(),
            destination: destination.to_path_buf(),
            contract_name: plan.contract_name,
            interact_script,
            frontend,
        })
    }

    fn plan(&self, key: &str, destination: &Path, include_frontend: bool) -> Result<Plan<'a>> {
        let entry = self.catalog.resolve(key)?;

        let source = self.layout.resolve(&entry.source_path);
        if !source.is_file() {
            return Err(ScaffoldError::MissingSource(source));
        }
        let test = self.layout.resolve(&entry.test_path);
        if !test.is_file() {
            return Err(ScaffoldError::MissingTest(test));
        }

        if destination.exists() {
            return Err(ScaffoldError::DestinationExists(destination.to_path_buf()));
        }

        let text = read_source(&source)?;
        let contract_name =
            contract_name(&text).ok_or_else(|| ScaffoldError::MissingContract(source.clone()))?;

        let template = self.layout.template_path();
        if !template.is_dir() {
            return Err(ScaffoldError::MissingTemplate(template));
        }
        if include_frontend {
            let frontend = self.layout.frontend_path();
            if !frontend.is_dir() {
                return Err(ScaffoldError::MissingTemplate(frontend));
            }
        }

        Ok(Plan {
            entry,
            source,
            test,
            contract_name,
        })
    }
}

fn extension_of<'p>(path: &'p Path, fallback: &'p str) -> &'p str {
    path.extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or(fallback)
}

/// Remove files with extension `ext` directly inside `dir`, creating it if absent
fn replace_placeholders(dir: &Path, ext: &str) -> Result<()> {
    fs::create_dir_all(dir).map_err(io_at(dir))?;
    for item in fs::read_dir(dir).map_err(io_at(dir))? {
        let path = item.map_err(io_at(dir))?.path();
        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(ext) {
            debug!(file = %path.display(), "removing template placeholder");
            fs::remove_file(&path).map_err(io_at(&path))?;
        }
    }
    Ok(())
}

/// Set `name`, `description` and `homepage`, keeping every other field and
/// the original key order.
fn rewrite_package_json(path: &Path, entry: &ExampleEntry) -> Result<()> {
    let text = fs::read_to_string(path).map_err(io_at(path))?;
    let mut package: Value = serde_json::from_str(&text).map_err(|source| ScaffoldError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    match package.as_object_mut() {
        Some(fields) => {
            fields.insert(
                "name".to_string(),
                Value::String(format!("fhevm-example-{}", entry.key)),
            );
            fields.insert(
                "description".to_string(),
                Value::String(entry.description.clone()),
            );
            fields.insert(
                "homepage".to_string(),
                Value::String(format!("{}/{}", HOMEPAGE_BASE, entry.key)),
            );
        }
        None => warn!(file = %path.display(), "package.json is not an object, leaving it as is"),
    }

    let rendered = serde_json::to_string_pretty(&package).map_err(|source| ScaffoldError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, rendered + "\n").map_err(io_at(path))
}
