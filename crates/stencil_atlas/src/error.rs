//! Error types for namespace ingestion and traversal.

use thiserror::Error;

/// Errors raised while turning a namespace document into a [`crate::NamespaceGraph`].
#[derive(Debug, Error)]
pub enum GraphError {
    /// The document is not valid JSON.
    #[error("Failed to parse namespace document: {0}")]
    Json(#[from] serde_json::Error),

    /// The document root must be an object.
    #[error("Namespace document root must be an object")]
    RootNotObject,

    /// `$ref` must be a string and must be the only key of its object.
    #[error("Invalid reference at '{path}': {message}")]
    InvalidRef { path: String, message: String },

    /// A `$ref` names a member that does not exist.
    #[error("Unresolved reference '{target}' at '{path}'")]
    UnresolvedRef { path: String, target: String },

    /// A chain of `$ref`s never reaches a real node.
    #[error("Reference loop through '{target}' at '{path}'")]
    RefLoop { path: String, target: String },
}

/// Errors raised by the namespace walker.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalkError {
    /// Traversal re-entered a namespace that is already on the current path.
    #[error("Cyclic namespace: '{path}' refers back to one of its ancestors")]
    CyclicNamespace { path: String },
}
