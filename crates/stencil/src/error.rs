//! Error types for the stencil CLI.

use std::path::PathBuf;
use stencil_atlas::{GraphError, WalkError};
use thiserror::Error;

/// Errors that abort a stencil run.
#[derive(Debug, Error)]
pub enum StencilError {
    /// The namespace document could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The namespace document is malformed.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// The namespace graph could not be traversed.
    #[error(transparent)]
    Walk(#[from] WalkError),

    /// A snippet file or the output directory could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Registry serialization failed.
    #[error("Failed to serialize registry: {0}")]
    Serialize(#[from] serde_json::Error),
}
