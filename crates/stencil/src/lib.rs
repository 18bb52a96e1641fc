//! # Stencil
//!
//! Editor snippet generator for UI component libraries.
//!
//! Stencil reads a serialized namespace of a component library, discovers
//! every component in it and writes one editor snippet per component.
//!
//! ## Crates
//!
//! - [`atlas`] - Namespace graph, component discovery and registry
//! - [`press`] - Usage templates and snippet files
//!
//! ## Modules
//!
//! - [`config`] - `stencil.config.json` loading
//! - [`emit`] - Discovery and snippet emission pipeline
//! - [`error`] - Run-aborting errors
//! - [`logging`] - stderr tracing subscriber

pub mod config;
pub mod emit;
pub mod error;
pub mod logging;

/// Namespace graph, component discovery and registry.
pub use stencil_atlas as atlas;

/// Usage templates and snippet files.
pub use stencil_press as press;

pub use config::{load_config, StencilConfig, CONFIG_FILE, STENCIL_CONFIG_SCHEMA};
pub use emit::{discover, generate, render_all, write_snippets, Report};
pub use error::StencilError;
