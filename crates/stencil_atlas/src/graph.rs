//! Namespace graph model and document ingestion.
//!
//! A namespace document is a JSON object whose keys are exported names.
//! Every nested object is a node. Three reserved keys are lifted out of the
//! member list and become the node's [`Capabilities`]:
//!
//! - `propTypes` - property declarations (only the keys matter)
//! - `displayName` - human-readable component name
//! - `defaultProps` - default value mapping
//!
//! An object of the form `{ "$ref": "Form.Item" }` is an alias of the node
//! reached by following those member names from the root. Aliases share a
//! [`NodeId`] with their target, which is how re-exports and reference
//! cycles are expressed.

use rustc_hash::FxHashSet;
use serde_json::Value;

use crate::error::GraphError;
use crate::value::DefaultProps;

/// Reserved key holding property declarations.
pub const PROP_TYPES_KEY: &str = "propTypes";
/// Reserved key holding the display name.
pub const DISPLAY_NAME_KEY: &str = "displayName";
/// Reserved key holding default values.
pub const DEFAULT_PROPS_KEY: &str = "defaultProps";
/// Reserved key marking an alias node.
pub const REF_KEY: &str = "$ref";
/// Member name of the default-export slot.
pub const DEFAULT_EXPORT: &str = "default";

/// Index of a node in a [`NamespaceGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// The three capability markers a component may carry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Capabilities {
    /// Declared property names, in declaration order.
    pub prop_types: Option<Vec<String>>,
    /// Non-empty display name.
    pub display_name: Option<String>,
    /// Default values.
    pub default_props: Option<DefaultProps>,
}

impl Capabilities {
    #[inline]
    pub fn has_prop_types(&self) -> bool {
        self.prop_types.is_some()
    }

    #[inline]
    pub fn has_display_name(&self) -> bool {
        self.display_name.is_some()
    }

    #[inline]
    pub fn has_default_props(&self) -> bool {
        self.default_props.is_some()
    }

    /// A node is a component iff it carries at least one marker.
    #[inline]
    pub fn is_component(&self) -> bool {
        self.has_prop_types() || self.has_display_name() || self.has_default_props()
    }
}

/// A named child of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub name: String,
    pub node: NodeId,
}

/// A node of the namespace graph.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// An object without capability markers.
    Namespace { members: Vec<Member> },
    /// An object carrying at least one capability marker.
    Candidate {
        capabilities: Capabilities,
        members: Vec<Member>,
    },
    /// A string, number, boolean, null or array.
    Leaf,
}

impl Node {
    /// Members in document order. Leaves have none.
    pub fn members(&self) -> &[Member] {
        match self {
            Node::Namespace { members } | Node::Candidate { members, .. } => members,
            Node::Leaf => &[],
        }
    }

    /// Capability markers, if this node is a candidate.
    pub fn capabilities(&self) -> Option<&Capabilities> {
        match self {
            Node::Candidate { capabilities, .. } => Some(capabilities),
            _ => None,
        }
    }

    /// Look up a member by name.
    pub fn member(&self, name: &str) -> Option<NodeId> {
        self.members()
            .iter()
            .find(|m| m.name == name)
            .map(|m| m.node)
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf)
    }
}

/// An immutable, possibly cyclic namespace graph.
#[derive(Debug, Clone)]
pub struct NamespaceGraph {
    nodes: Vec<Node>,
    root: NodeId,
}

impl NamespaceGraph {
    /// Parse a namespace document from JSON text.
    pub fn from_json_str(source: &str) -> Result<Self, GraphError> {
        let value: Value = serde_json::from_str(source)?;
        Self::from_value(&value)
    }

    /// Build a graph from an already parsed document.
    pub fn from_value(value: &Value) -> Result<Self, GraphError> {
        if !value.is_object() {
            return Err(GraphError::RootNotObject);
        }

        let mut builder = Builder::default();
        let root = builder.ingest(value, "")?;
        builder.finish(root)
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Number of nodes, including unreachable alias slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

enum Slot {
    Node(Node),
    Ref { target: String, path: String },
}

#[derive(Default)]
struct Builder {
    slots: Vec<Slot>,
}

impl Builder {
    fn push(&mut self, slot: Slot) -> NodeId {
        let id = NodeId(self.slots.len() as u32);
        self.slots.push(slot);
        id
    }

    fn ingest(&mut self, value: &Value, path: &str) -> Result<NodeId, GraphError> {
        let Value::Object(map) = value else {
            return Ok(self.push(Slot::Node(Node::Leaf)));
        };

        if let Some(target) = map.get(REF_KEY) {
            let Value::String(target) = target else {
                return Err(invalid_ref(path, "'$ref' must be a string"));
            };
            if map.len() != 1 {
                return Err(invalid_ref(path, "'$ref' must be the only key"));
            }
            return Ok(self.push(Slot::Ref {
                target: target.clone(),
                path: path.to_string(),
            }));
        }

        let mut capabilities = Capabilities::default();
        let mut members = Vec::new();

        for (name, child) in map {
            match name.as_str() {
                PROP_TYPES_KEY => capabilities.prop_types = prop_types(child, path),
                DISPLAY_NAME_KEY => capabilities.display_name = display_name(child, path),
                DEFAULT_PROPS_KEY => capabilities.default_props = default_props(child, path),
                _ => {
                    let child_path = join_path(path, name);
                    let node = self.ingest(child, &child_path)?;
                    members.push(Member {
                        name: name.clone(),
                        node,
                    });
                }
            }
        }

        let node = if capabilities.is_component() {
            Node::Candidate {
                capabilities,
                members,
            }
        } else {
            Node::Namespace { members }
        };
        Ok(self.push(Slot::Node(node)))
    }

    fn finish(self, root: NodeId) -> Result<NamespaceGraph, GraphError> {
        let mut resolved: Vec<Option<NodeId>> = vec![None; self.slots.len()];
        let mut in_progress = FxHashSet::default();
        let mut targets = Vec::with_capacity(self.slots.len());
        for index in 0..self.slots.len() {
            let id = NodeId(index as u32);
            targets.push(self.resolve(id, root, &mut resolved, &mut in_progress)?);
        }

        // Alias slots stay behind as unreachable leaves so ids remain stable.
        let nodes = self
            .slots
            .into_iter()
            .map(|slot| match slot {
                Slot::Node(Node::Namespace { members }) => Node::Namespace {
                    members: retarget(members, &targets),
                },
                Slot::Node(Node::Candidate {
                    capabilities,
                    members,
                }) => Node::Candidate {
                    capabilities,
                    members: retarget(members, &targets),
                },
                Slot::Node(Node::Leaf) | Slot::Ref { .. } => Node::Leaf,
            })
            .collect();

        Ok(NamespaceGraph { nodes, root })
    }

    fn resolve(
        &self,
        id: NodeId,
        root: NodeId,
        resolved: &mut [Option<NodeId>],
        in_progress: &mut FxHashSet<NodeId>,
    ) -> Result<NodeId, GraphError> {
        let Slot::Ref { target, path } = &self.slots[id.index()] else {
            return Ok(id);
        };
        if let Some(done) = resolved[id.index()] {
            return Ok(done);
        }
        if !in_progress.insert(id) {
            return Err(GraphError::RefLoop {
                path: path.clone(),
                target: target.clone(),
            });
        }

        let mut current = root;
        for segment in target.split('.').filter(|s| !s.is_empty()) {
            let next = match &self.slots[current.index()] {
                Slot::Node(node) => node.member(segment),
                Slot::Ref { .. } => None,
            };
            let Some(next) = next else {
                return Err(GraphError::UnresolvedRef {
                    path: path.clone(),
                    target: target.clone(),
                });
            };
            current = self.resolve(next, root, resolved, in_progress)?;
        }

        in_progress.remove(&id);
        resolved[id.index()] = Some(current);
        Ok(current)
    }
}

fn retarget(members: Vec<Member>, targets: &[NodeId]) -> Vec<Member> {
    members
        .into_iter()
        .map(|m| Member {
            node: targets[m.node.index()],
            name: m.name,
        })
        .collect()
}

fn prop_types(value: &Value, path: &str) -> Option<Vec<String>> {
    match value {
        Value::Null => None,
        Value::Object(map) => Some(map.keys().cloned().collect()),
        _ => malformed_marker(path, PROP_TYPES_KEY, value),
    }
}

fn display_name(value: &Value, path: &str) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        _ => malformed_marker(path, DISPLAY_NAME_KEY, value),
    }
}

fn default_props(value: &Value, path: &str) -> Option<DefaultProps> {
    match value {
        Value::Null => None,
        Value::Object(map) => Some(DefaultProps::from_map(map)),
        _ => malformed_marker(path, DEFAULT_PROPS_KEY, value),
    }
}

/// A marker of the wrong JSON type counts as absent.
fn malformed_marker<T>(path: &str, marker: &str, value: &Value) -> Option<T> {
    tracing::debug!("Ignore malformed '{}' at '{}': {}", marker, display_path(path), value);
    None
}

fn invalid_ref(path: &str, message: &str) -> GraphError {
    GraphError::InvalidRef {
        path: display_path(path),
        message: message.to_string(),
    }
}

#[inline]
fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}.{name}")
    }
}

#[inline]
fn display_path(path: &str) -> String {
    if path.is_empty() {
        "<root>".to_string()
    } else {
        path.to_string()
    }
}
