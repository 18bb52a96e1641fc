//! Property schema extraction.

/// Reserved prop name for nested content.
pub const CHILDREN: &str = "children";

/// Normalized property schema of a component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    /// Whether the component declares `children`.
    pub has_children: bool,
    /// Declared prop names other than `children`, in declaration order.
    pub props: Vec<String>,
}

/// Extract a [`Schema`] from a component's property declarations.
///
/// Only the presence of a declaration matters; declared types and
/// validators were already discarded during ingestion.
pub fn extract_schema(prop_types: Option<&[String]>) -> Schema {
    let mut schema = Schema::default();

    for name in prop_types.unwrap_or_default() {
        if name == CHILDREN {
            schema.has_children = true;
        } else {
            schema.props.push(name.clone());
        }
    }

    schema
}
