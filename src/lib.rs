//! FHEVM Examples - Code generation tooling for the FHEVM examples repository
//!
//! This is the root workspace crate that provides integration tests.
//! The actual implementation is in the workspace member crates.

// Re-export main crates for convenience
pub use fhevm_catalog as catalog;
pub use fhevm_codegen as codegen;
pub use fhevm_scaffold as scaffold;
pub use fhevm_scan as scan;
