//! FHEVM Examples CLI - Scaffold example projects and generate their docs

mod logging;

use std::fmt::Write;
use std::path::{Path, PathBuf};
use std::process;

use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use tracing::debug;

use fhevm_catalog::Catalog;
use fhevm_codegen::{functions_summary, generate_quick_interact};
use fhevm_scaffold::{
    read_source, render_component, write_file, write_quick_interact, DocsGenerator,
    Materialized, Materializer, ScaffoldError, WorkspaceLayout,
};
use fhevm_scan::{contract_name, extract_functions};

#[derive(Parser)]
#[command(name = "fhevm-examples")]
#[command(about = "Generate standalone FHEVM example projects and documentation", long_about = None)]
struct Cli {
    /// Repository root holding contracts, tests and templates
    #[arg(long, global = true, env = "FHEVM_EXAMPLES_ROOT")]
    root: Option<PathBuf>,

    /// Catalog JSON file used instead of the built-in examples
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Log level when RUST_LOG is not set
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List examples grouped by category
    List,
    /// Create a standalone project for one example
    Create {
        /// Example key, e.g. fhe-counter
        key: String,
        /// Destination directory (must not exist)
        output: Option<PathBuf>,
        /// Also copy the frontend template
        #[arg(long)]
        frontend: bool,
    },
    /// Generate documentation for every example
    Docs,
    /// Generate a quick-interact script for a contract
    Interact {
        /// Contract source file
        contract: PathBuf,
        /// Output file (prints to stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Summarize a contract's public functions
    Functions {
        /// Contract source file
        contract: PathBuf,
        /// Print the extracted functions as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate a React component from a compiled artifact
    Component {
        /// Artifact JSON containing an `abi` array
        artifact: PathBuf,
        /// Contract name used for the component
        #[arg(long)]
        name: String,
        /// Output file (prints to stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let matches = Cli::command()
        .after_help(catalog_listing(
            &Catalog::builtin(),
            "Built-in examples (a --catalog file replaces these):",
        ))
        .get_matches();
    let cli = match Cli::from_arg_matches(&matches) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    if let Err(e) = logging::init(&cli.log_level, cli.log_json) {
        eprintln!("Warning: could not initialize logging: {}", e);
    }

    let layout = WorkspaceLayout::new(cli.root.clone().unwrap_or_else(|| PathBuf::from(".")));
    debug!(root = %layout.root().display(), "resolved workspace");

    let catalog = match &cli.catalog {
        Some(path) => Catalog::load(path),
        None => Ok(Catalog::builtin()),
    };
    let catalog = match catalog {
        Ok(c) => c,
        Err(e) => fail(e),
    };

    let result = match cli.command {
        None => {
            println!("{}", catalog_listing(&catalog, "Available examples:"));
            Ok(())
        }
        Some(Commands::List) => {
            cmd_list(&catalog);
            Ok(())
        }
        Some(Commands::Create {
            key,
            output,
            frontend,
        }) => cmd_create(&catalog, &layout, &key, output, frontend),
        Some(Commands::Docs) => cmd_docs(&catalog, &layout),
        Some(Commands::Interact { contract, output }) => cmd_interact(&contract, output),
        Some(Commands::Functions { contract, json }) => cmd_functions(&contract, json),
        Some(Commands::Component {
            artifact,
            name,
            output,
        }) => cmd_component(&artifact, &name, output),
    };

    if let Err(e) = result {
        fail(e);
    }
}

fn fail(err: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", err);
    process::exit(1);
}

/// Keys with descriptions, used for the bare invocation and `--help`
fn catalog_listing(catalog: &Catalog, heading: &str) -> String {
    let mut out = format!("{}\n", heading);
    for entry in catalog.iter() {
        let _ = writeln!(out, "  {}", entry.key);
        let _ = writeln!(out, "    {}", entry.description);
    }
    out.push_str("\nExample:\n  fhevm-examples create fhe-counter ./my-fhe-counter --frontend");
    out
}

fn cmd_list(catalog: &Catalog) {
    for (category, entries) in catalog.by_category() {
        println!("{}", category);
        for entry in entries {
            println!(
                "  {:<28} [{}] {}",
                entry.key, entry.difficulty, entry.title
            );
        }
        println!();
    }
    println!("{} examples", catalog.len());
}

fn cmd_create(
    catalog: &Catalog,
    layout: &WorkspaceLayout,
    key: &str,
    output: Option<PathBuf>,
    frontend: bool,
) -> Result<(), ScaffoldError> {
    let destination = output.unwrap_or_else(|| layout.default_destination(key));
    let created = Materializer::new(catalog, layout).create(key, &destination, frontend)?;
    print_next_steps(&created);
    Ok(())
}

fn print_next_steps(created: &Materialized) {
    println!("\n✓ FHEVM example \"{}\" created successfully!", created.key);
    println!("\nNext steps:");
    println!("  cd {}", created.destination.display());
    println!("  npm install");
    println!("  npm run compile");
    println!("  npm run test");
    if created.interact_script.is_some() {
        println!("  npx hardhat node &");
        println!("  npx hardhat run scripts/quick-interact.ts --network localhost");
    }
    if created.frontend.is_some() {
        println!("  cd frontend && npm install && npm run sync-abi && npm run dev");
    }
}

fn cmd_docs(catalog: &Catalog, layout: &WorkspaceLayout) -> Result<(), ScaffoldError> {
    let tally = DocsGenerator::new(catalog, layout).generate_all()?;
    println!("{}", tally);
    if !tally.is_clean() {
        process::exit(1);
    }
    Ok(())
}

fn cmd_interact(contract: &Path, output: Option<PathBuf>) -> Result<(), ScaffoldError> {
    match output {
        Some(out) => {
            write_quick_interact(contract, &out)?;
            println!("✓ Generated {}", out.display());
        }
        None => {
            let source = read_source(contract)?;
            print!("{}", generate_quick_interact(&source)?);
        }
    }
    Ok(())
}

fn cmd_functions(contract: &Path, json: bool) -> Result<(), ScaffoldError> {
    let source = read_source(contract)?;
    let functions = extract_functions(&source);

    if json {
        let rendered =
            serde_json::to_string_pretty(&functions).map_err(|source| ScaffoldError::Json {
                path: contract.to_path_buf(),
                source,
            })?;
        println!("{}", rendered);
        return Ok(());
    }

    let name = contract_name(&source)
        .ok_or_else(|| ScaffoldError::MissingContract(contract.to_path_buf()))?;
    print!("{}", functions_summary(&name, &functions));
    Ok(())
}

fn cmd_component(artifact: &Path, name: &str, output: Option<PathBuf>) -> Result<(), ScaffoldError> {
    let component = render_component(artifact, name)?;
    match output {
        Some(out) => {
            write_file(&out, &component)?;
            println!("✓ Generated {}", out.display());
        }
        None => print!("{}", component),
    }
    Ok(())
}
