//! FHEVM Codegen - Text generation for example projects
//!
//! Every generator here is a pure function from structured input to source
//! text. Composition is layered so each stage can be tested on literal values:
//! descriptor -> interaction step -> full script, entry -> page -> index.

mod component;
mod deploy;
mod docs;
mod interact;
mod readme;
mod summary;

pub use component::*;
pub use deploy::*;
pub use docs::*;
pub use interact::*;
pub use readme::*;
pub use summary::*;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodegenError {
    #[error("could not find a contract declaration in the source")]
    MissingContract,

    #[error("invalid contract artifact: {0}")]
    InvalidArtifact(#[from] serde_json::Error),
}
