//! # stencil_press
//!
//! Press - Snippet rendering for Stencil.
//!
//! ## Name Origin
//!
//! A **press** stamps the same plate onto sheet after sheet. `stencil_press`
//! takes each component charted by `stencil_atlas` and stamps out an editor
//! snippet that inserts a correctly shaped usage of it.
//!
//! ## Usage
//!
//! ```rust
//! use stencil_atlas::{walk, NamespaceGraph, WalkOptions};
//! use stencil_press::{render_snippet, PressOptions};
//!
//! let graph = NamespaceGraph::from_json_str(
//!     r#"{ "Alert": { "propTypes": { "message": {}, "children": {} },
//!                    "defaultProps": { "message": "hi" } } }"#,
//! )
//! .unwrap();
//! let registry = walk(&graph, &WalkOptions::default()).unwrap();
//!
//! let snippet = render_snippet(registry.get("Alert").unwrap(), &PressOptions::default());
//! assert_eq!(snippet.template, "<Alert message=\"hi\">\n\t$1\n</Alert>");
//! assert_eq!(snippet.filename, "alert.sublime-snippet");
//! ```

pub mod attrs;
pub mod snippet;
pub mod template;

pub use attrs::{render_attribute, stringify_defaults, RenderedProps};
pub use snippet::{render_snippet, snippet_filename, PressOptions, Snippet, SNIPPET_EXTENSION};
pub use template::{render_template, TemplateShape, CURSOR_PLACEHOLDER};
