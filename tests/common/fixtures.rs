use std::fs;
use std::path::{Path, PathBuf};

use fhevm_catalog::{Catalog, ExampleEntry};
use fhevm_scaffold::WorkspaceLayout;
use tempfile::TempDir;

pub const FHE_COUNTER_SOL: &str = r#"// SPDX-License-Identifier: BSD-3-Clause-Clear
pragma solidity ^0.8.24;

import { FHE, euint32, externalEuint32 } from "@fhevm/solidity/lib/FHE.sol";
import { SepoliaConfig } from "@fhevm/solidity/config/ZamaConfig.sol";

/// @title A simple FHE counter contract
/// @notice Increments and decrements an encrypted counter
/// @dev Uses FHE.add and FHE.sub on euint32 handles
contract FHECounter is SepoliaConfig {
    euint32 private _count;

    /// Returns the encrypted count
    function getCount() external view returns (euint32) {
        return _count;
    }

    function increment(externalEuint32 inputEuint32, bytes calldata inputProof) external {
        euint32 encryptedEuint32 = FHE.fromExternal(inputEuint32, inputProof);
        _count = FHE.add(_count, encryptedEuint32);
        FHE.allowThis(_count);
        FHE.allow(_count, msg.sender);
    }

    function decrement(externalEuint32 inputEuint32, bytes calldata inputProof) external {
        euint32 encryptedEuint32 = FHE.fromExternal(inputEuint32, inputProof);
        _count = FHE.sub(_count, encryptedEuint32);
        FHE.allowThis(_count);
        FHE.allow(_count, msg.sender);
    }
}
"#;

pub const FHE_COUNTER_TEST: &str = r#"import { ethers, fhevm } from "hardhat";

describe("FHECounter", function () {
  it("encrypted count should be uninitialized after deployment", async function () {});
});
"#;

pub const TEMPLATE_PACKAGE_JSON: &str = r#"{
  "name": "fhevm-hardhat-template",
  "version": "0.1.0",
  "description": "Hardhat-based template for developing FHEVM Solidity smart contracts",
  "scripts": {
    "compile": "hardhat compile",
    "test": "hardhat test"
  }
}
"#;

/// Throwaway examples repository: hardhat template, frontend template and
/// whatever example sources a test adds.
pub struct FixtureRepo {
    dir: TempDir,
}

impl FixtureRepo {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let repo = Self { dir };
        repo.write_template();
        repo
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn layout(&self) -> WorkspaceLayout {
        WorkspaceLayout::new(self.root())
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    pub fn write(&self, relative: &str, contents: &str) {
        let path = self.path(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, contents).unwrap();
    }

    /// Add the source and test files an entry points at
    pub fn add_example(&self, entry: &ExampleEntry, contract: &str) {
        self.write(&entry.source_path, contract);
        self.write(&entry.test_path, "describe('example', () => {});\n");
    }

    /// The built-in `fhe-counter` example with realistic contents
    pub fn add_fhe_counter(&self) -> Catalog {
        let catalog = Catalog::builtin();
        let entry = catalog.get("fhe-counter").unwrap();
        self.write(&entry.source_path, FHE_COUNTER_SOL);
        self.write(&entry.test_path, FHE_COUNTER_TEST);
        catalog
    }

    fn write_template(&self) {
        let template = WorkspaceLayout::TEMPLATE_DIR;
        self.write(&format!("{}/package.json", template), TEMPLATE_PACKAGE_JSON);
        self.write(&format!("{}/hardhat.config.ts", template), "export default {};\n");
        self.write(
            &format!("{}/contracts/FHECounter.sol", template),
            "contract Placeholder {}\n",
        );
        self.write(&format!("{}/test/FHECounter.ts", template), "// placeholder\n");
        self.write(&format!("{}/deploy/deploy.ts", template), "// placeholder\n");
        self.write(&format!("{}/node_modules/hardhat/index.js", template), "");
        self.write(&format!("{}/artifacts/build-info.json", template), "{}");

        let frontend = WorkspaceLayout::FRONTEND_DIR;
        self.write(&format!("{}/package.json", frontend), "{\"name\":\"frontend\"}\n");
        self.write(&format!("{}/app/page.tsx", frontend), "export default function Page() {}\n");
        self.write(&format!("{}/.next/cache.bin", frontend), "");
    }
}
