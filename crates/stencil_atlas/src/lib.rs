//! # stencil_atlas
//!
//! Atlas - Component discovery for Stencil.
//!
//! ## Name Origin
//!
//! An **atlas** is a bound collection of maps. `stencil_atlas` reads the map
//! of a component library's namespace and charts every component it finds,
//! along with the props each one declares.
//!
//! ## Concepts
//!
//! - **Namespace graph**: exported names of a library, nested arbitrarily
//! - **Capability marker**: `propTypes`, `displayName` or `defaultProps`
//! - **Registry**: flat, insertion-ordered set of discovered components
//!
//! ## Usage
//!
//! ```rust
//! use stencil_atlas::{walk, NamespaceGraph, WalkOptions};
//!
//! let source = r#"{
//!   "Form": {
//!     "displayName": "Form",
//!     "Item": { "propTypes": { "label": {}, "children": {} } }
//!   }
//! }"#;
//!
//! let graph = NamespaceGraph::from_json_str(source).unwrap();
//! let registry = walk(&graph, &WalkOptions::default()).unwrap();
//!
//! let item = registry.get("Form.Item").unwrap();
//! assert_eq!(item.alias, "form-item");
//! assert!(item.has_children);
//! ```

pub mod error;
pub mod graph;
pub mod naming;
pub mod registry;
pub mod schema;
pub mod value;
pub mod walk;

pub use error::{GraphError, WalkError};
pub use graph::{Capabilities, Member, NamespaceGraph, Node, NodeId};
pub use naming::{is_component_name, registry_key, to_alias};
pub use registry::{ComponentEntry, Registry};
pub use schema::{extract_schema, Schema, CHILDREN};
pub use value::{DefaultProps, DefaultValue};
pub use walk::{resolve_component, walk, Resolution, WalkOptions};
