//! Integration tests for the fhevm-examples binary

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const COUNTER_SOL: &str = "contract FHECounter {\n    function increment() external {}\n    function getCount() external view returns (uint32) {}\n}\n";

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// Repository with the hardhat template and the built-in fhe-counter sources
fn fixture_repo() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "fhevm-hardhat-template/package.json", "{\"name\":\"template\"}");
    write(root, "fhevm-hardhat-template/contracts/Placeholder.sol", "contract P {}");
    write(root, "fhevm-hardhat-template/test/Placeholder.ts", "");
    write(root, "contracts/basic/FHECounter.sol", COUNTER_SOL);
    write(root, "test/basic/FHECounter.ts", "describe('FHECounter', () => {});");
    dir
}

fn cli(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("fhevm-examples").unwrap();
    cmd.env_remove("FHEVM_EXAMPLES_ROOT")
        .env_remove("RUST_LOG")
        .arg("--root")
        .arg(root);
    cmd
}

// ================================================================
// catalog listing
// ================================================================

#[test]
fn bare_invocation_lists_catalog() {
    let dir = tempfile::tempdir().unwrap();
    cli(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Available examples:"))
        .stdout(predicate::str::contains("fhe-counter"))
        .stdout(predicate::str::contains("confidential-governor"));
}

#[test]
fn help_lists_builtin_catalog() {
    let dir = tempfile::tempdir().unwrap();
    cli(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Built-in examples"))
        .stdout(predicate::str::contains("blind-auction"));
}

#[test]
fn list_groups_by_category() {
    let dir = tempfile::tempdir().unwrap();
    cli(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("OpenZeppelin"))
        .stdout(predicate::str::contains("25 examples"));
}

// ================================================================
// create command
// ================================================================

#[test]
fn create_unknown_key_fails_and_lists_keys() {
    let dir = tempfile::tempdir().unwrap();
    let mut assert = cli(dir.path())
        .args(["create", "no-such-example"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown example: no-such-example"));
    for key in ["fhe-counter", "handle-reuse", "vesting-wallet-confidential"] {
        assert = assert.stderr(predicate::str::contains(format!("  - {}", key)));
    }
    assert!(!dir.path().join("output").exists());
}

#[test]
fn create_scaffolds_project_and_prints_next_steps() {
    let repo = fixture_repo();
    let dest = repo.path().join("out/counter");

    cli(repo.path())
        .arg("create")
        .arg("fhe-counter")
        .arg(&dest)
        .assert()
        .success()
        .stdout(predicate::str::contains("Next steps:"))
        .stdout(predicate::str::contains("npm run compile"));

    assert!(dest.join("contracts/FHECounter.sol").is_file());
    assert!(!dest.join("contracts/Placeholder.sol").exists());
    assert!(dest.join("scripts/quick-interact.ts").is_file());
}

#[test]
fn create_into_existing_destination_fails() {
    let repo = fixture_repo();
    let dest = repo.path().join("taken");
    fs::create_dir_all(&dest).unwrap();

    cli(repo.path())
        .arg("create")
        .arg("fhe-counter")
        .arg(&dest)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Output directory already exists"));

    assert_eq!(fs::read_dir(&dest).unwrap().count(), 0);
}

// ================================================================
// docs command
// ================================================================

#[test]
fn docs_exits_nonzero_when_an_entry_fails() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "contracts/B.sol", COUNTER_SOL);
    write(
        root,
        "catalog.json",
        r#"[
  {"key": "a", "title": "A", "description": "missing source", "sourcePath": "contracts/A.sol",
   "testPath": "test/A.ts", "outputDocPath": "docs/basic/a.md", "category": "Basic"},
  {"key": "b", "title": "B", "description": "present source", "sourcePath": "contracts/B.sol",
   "testPath": "test/B.ts", "outputDocPath": "docs/basic/b.md", "category": "Basic"}
]"#,
    );

    cli(root)
        .arg("--catalog")
        .arg(root.join("catalog.json"))
        .arg("docs")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Success: 1, Errors: 1, Total: 2"));

    assert!(root.join("docs/basic/b.md").is_file());
    assert!(!root.join("docs/basic/a.md").exists());
    assert!(root.join("docs/SUMMARY.md").is_file());
}

// ================================================================
// generators
// ================================================================

#[test]
fn functions_json_lists_descriptors() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "Counter.sol", COUNTER_SOL);

    cli(dir.path())
        .arg("functions")
        .arg(dir.path().join("Counter.sol"))
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"increment\""))
        .stdout(predicate::str::contains("\"isViewOrPure\": true"));
}

#[test]
fn interact_missing_contract_fails() {
    let dir = tempfile::tempdir().unwrap();
    cli(dir.path())
        .arg("interact")
        .arg(dir.path().join("Missing.sol"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Contract not found"));
}
