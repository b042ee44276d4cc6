//! The examples shipped with this repository

use crate::{Difficulty, ExampleEntry};

use Difficulty::{Advanced, Beginner, Intermediate};

/// (key, title, description, contract, test, output, category, difficulty)
type Row = (
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    Difficulty,
);

const ROWS: &[Row] = &[
    // Basic
    (
        "fhe-counter",
        "FHE Counter",
        "This example demonstrates how to build a confidential counter using FHEVM, in comparison to a simple counter.",
        "contracts/basic/FHECounter.sol",
        "test/basic/FHECounter.ts",
        "docs/basic/fhe-counter.md",
        "Basic",
        Beginner,
    ),
    (
        "encrypt-single-value",
        "Encrypt Single Value",
        "This example demonstrates the FHE encryption mechanism and highlights a common pitfall developers may encounter.",
        "contracts/basic/encrypt/EncryptSingleValue.sol",
        "test/basic/encrypt/EncryptSingleValue.ts",
        "docs/basic/encrypt-single-value.md",
        "Basic - Encryption",
        Beginner,
    ),
    (
        "encrypt-multiple-values",
        "Encrypt Multiple Values",
        "This example shows how to encrypt and handle multiple values in a single transaction.",
        "contracts/basic/encrypt/EncryptMultipleValues.sol",
        "test/basic/encrypt/EncryptMultipleValues.ts",
        "docs/basic/encrypt-multiple-values.md",
        "Basic - Encryption",
        Intermediate,
    ),
    (
        "fhe-add",
        "FHE Add Operation",
        "This example demonstrates how to perform addition operations on encrypted values.",
        "contracts/basic/fhe-operations/FHEAdd.sol",
        "test/basic/fhe-operations/FHEAdd.ts",
        "docs/basic/fhe-add.md",
        "Basic - FHE Operations",
        Beginner,
    ),
    (
        "fhe-comparison",
        "FHE Comparison",
        "Demonstrates FHE comparison operations (gt, lt, eq, etc).",
        "contracts/basic/FHEComparison.sol",
        "test/basic/fhe-operations/FHEComparison.ts",
        "docs/basic/fhe-comparison.md",
        "Basic - FHE Operations",
        Beginner,
    ),
    (
        "fhe-if-then-else",
        "FHE If-Then-Else",
        "This example shows conditional operations on encrypted values using FHE.",
        "contracts/basic/fhe-operations/FHEIfThenElse.sol",
        "test/basic/fhe-operations/FHEIfThenElse.ts",
        "docs/basic/fhe-if-then-else.md",
        "Basic - FHE Operations",
        Intermediate,
    ),
    // Decryption
    (
        "user-decrypt-single-value",
        "User Decrypt Single Value",
        "Demonstrates user decryption and permission requirements.",
        "contracts/basic/decrypt/UserDecryptSingleValue.sol",
        "test/basic/decrypt/UserDecryptSingleValue.ts",
        "docs/decryption/user-decrypt-single-value.md",
        "Decryption",
        Intermediate,
    ),
    (
        "user-decrypt-multiple-values",
        "User Decrypt Multiple Values",
        "Shows how to decrypt multiple encrypted values for a user.",
        "contracts/basic/decrypt/UserDecryptMultipleValues.sol",
        "test/basic/decrypt/UserDecryptMultipleValues.ts",
        "docs/decryption/user-decrypt-multiple-values.md",
        "Decryption",
        Intermediate,
    ),
    (
        "public-decrypt-single-value",
        "Public Decrypt Single Value",
        "Demonstrates public decryption mechanism for single values.",
        "contracts/basic/decrypt/PublicDecryptSingleValue.sol",
        "test/basic/decrypt/PublicDecryptSingleValue.ts",
        "docs/decryption/public-decrypt-single-value.md",
        "Decryption",
        Intermediate,
    ),
    (
        "public-decrypt-multiple-values",
        "Public Decrypt Multiple Values",
        "Shows public decryption with multiple values.",
        "contracts/basic/decrypt/PublicDecryptMultipleValues.sol",
        "test/basic/decrypt/PublicDecryptMultipleValues.ts",
        "docs/decryption/public-decrypt-multiple-values.md",
        "Decryption",
        Intermediate,
    ),
    // Access control
    (
        "access-control-basics",
        "Access Control Basics",
        "Fundamental access control patterns for FHE contracts.",
        "contracts/access-control/AccessControlBasics.sol",
        "test/access-control/AccessControlBasics.ts",
        "docs/access-control/basics.md",
        "Access Control",
        Intermediate,
    ),
    (
        "access-control-transient",
        "Transient Permissions",
        "Using transient storage for temporary access control in computations.",
        "contracts/access-control/AccessControlTransient.sol",
        "test/access-control/AccessControlTransient.ts",
        "docs/access-control/transient.md",
        "Access Control",
        Advanced,
    ),
    (
        "permission-patterns",
        "Permission Patterns",
        "Common patterns for managing permissions in complex scenarios.",
        "contracts/access-control/PermissionPatterns.sol",
        "test/access-control/PermissionPatterns.ts",
        "docs/access-control/patterns.md",
        "Access Control",
        Advanced,
    ),
    // Antipatterns
    (
        "antipattern-handle-reuse",
        "Antipattern: Handle Reuse",
        "Demonstrates why improper handle reuse leads to errors.",
        "contracts/antipatterns/HandleReuseErrors.sol",
        "test/antipatterns/HandleReuseErrors.ts",
        "docs/antipatterns/handle-reuse.md",
        "Antipatterns",
        Intermediate,
    ),
    (
        "antipattern-missing-permissions",
        "Antipattern: Missing Permissions",
        "Shows errors arising from missing permissions.",
        "contracts/antipatterns/MissingPermissions.sol",
        "test/antipatterns/MissingPermissions.ts",
        "docs/antipatterns/missing-permissions.md",
        "Antipatterns",
        Beginner,
    ),
    (
        "antipattern-signer-mismatch",
        "Antipattern: Signer Mismatch",
        "Demonstrates signer mismatch errors validation.",
        "contracts/antipatterns/SignerMismatch.sol",
        "test/antipatterns/SignerMismatch.ts",
        "docs/antipatterns/signer-mismatch.md",
        "Antipatterns",
        Intermediate,
    ),
    (
        "antipattern-view-function",
        "Antipattern: View Functions",
        "Why view functions cannot decrypt data and workarounds.",
        "contracts/antipatterns/ViewFunctionAntipattern.sol",
        "test/antipatterns/ViewFunctionAntipattern.ts",
        "docs/antipatterns/view-functions.md",
        "Antipatterns",
        Intermediate,
    ),
    // Advanced
    (
        "blind-auction",
        "Blind Auction",
        "Sealed-bid auction implementation with confidential bids.",
        "contracts/advanced/BlindAuction.sol",
        "test/advanced/BlindAuction.ts",
        "docs/advanced/blind-auction.md",
        "Advanced",
        Advanced,
    ),
    (
        "confidential-voting",
        "Confidential Voting",
        "Secure voting system where votes remain encrypted.",
        "contracts/advanced/ConfidentialVoting.sol",
        "test/advanced/ConfidentialVoting.ts",
        "docs/advanced/confidential-voting.md",
        "Advanced",
        Advanced,
    ),
    (
        "private-token-swap",
        "Private Token Swap",
        "Mechanism for swapping tokens confidentially.",
        "contracts/advanced/PrivateTokenSwap.sol",
        "test/advanced/PrivateTokenSwap.ts",
        "docs/advanced/private-token-swap.md",
        "Advanced",
        Advanced,
    ),
    // OpenZeppelin confidential contracts
    (
        "confidential-erc20",
        "Confidential ERC20 Token",
        "Basic confidential token with encrypted balances (ERC7984).",
        "contracts/openzeppelin/ConfidentialERC20.sol",
        "test/openzeppelin/ConfidentialERC20.ts",
        "docs/openzeppelin/confidential-erc20.md",
        "OpenZeppelin",
        Intermediate,
    ),
    (
        "erc7984-wrapper",
        "ERC7984 Wrapper",
        "Wrap standard ERC20 tokens into confidential balances.",
        "contracts/openzeppelin/ERC7984Wrapper.sol",
        "test/openzeppelin/ERC7984Wrapper.ts",
        "docs/openzeppelin/erc7984-wrapper.md",
        "OpenZeppelin",
        Intermediate,
    ),
    (
        "token-swap-erc7984",
        "Token Swap ERC7984",
        "Confidential AMM-style token swaps with hidden amounts.",
        "contracts/openzeppelin/TokenSwapERC7984.sol",
        "test/openzeppelin/TokenSwapERC7984.ts",
        "docs/openzeppelin/token-swap.md",
        "OpenZeppelin",
        Advanced,
    ),
    (
        "vesting-wallet-confidential",
        "Confidential Vesting Wallet",
        "Time-locked token vesting with encrypted amounts.",
        "contracts/openzeppelin/VestingWalletConfidential.sol",
        "test/openzeppelin/VestingWalletConfidential.ts",
        "docs/openzeppelin/vesting-wallet.md",
        "OpenZeppelin",
        Intermediate,
    ),
    (
        "confidential-governor",
        "Confidential Governor",
        "Private voting and governance with encrypted vote weights.",
        "contracts/openzeppelin/ConfidentialGovernor.sol",
        "test/openzeppelin/ConfidentialGovernor.ts",
        "docs/openzeppelin/governor.md",
        "OpenZeppelin",
        Advanced,
    ),
];

pub(crate) fn entries() -> Vec<ExampleEntry> {
    ROWS.iter()
        .map(
            |&(key, title, description, source, test, output, category, difficulty)| ExampleEntry {
                key: key.to_string(),
                title: title.to_string(),
                description: description.to_string(),
                source_path: source.to_string(),
                test_path: test.to_string(),
                output_doc_path: output.to_string(),
                category: category.to_string(),
                difficulty,
            },
        )
        .collect()
}
