//! Namespace walker.
//!
//! Visits every member of the namespace graph in document order, classifies
//! component candidates and fills a [`Registry`]. Traversal continues into
//! every uppercase member whether or not it was registered, so namespaces
//! that are not components themselves are still explored.

use rustc_hash::FxHashSet;

use crate::error::WalkError;
use crate::graph::{Capabilities, Member, NamespaceGraph, NodeId, DEFAULT_EXPORT};
use crate::naming::{is_component_name, registry_key};
use crate::registry::{ComponentEntry, Registry};
use crate::schema::extract_schema;

/// Exclusion rules applied during traversal.
#[derive(Debug, Clone, Default)]
pub struct WalkOptions {
    /// Registry keys that are never registered.
    pub skip: FxHashSet<String>,
    /// Parent names whose children are never prefixed.
    pub skip_parent_name: FxHashSet<String>,
}

impl WalkOptions {
    pub fn new<S, P>(skip: S, skip_parent_name: P) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            skip: skip.into_iter().map(Into::into).collect(),
            skip_parent_name: skip_parent_name.into_iter().map(Into::into).collect(),
        }
    }
}

/// How a candidate resolved to a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The candidate itself carries a capability marker.
    Direct(NodeId),
    /// The candidate's `default` member carries a capability marker.
    DefaultExport(NodeId),
}

impl Resolution {
    #[inline]
    pub fn node(self) -> NodeId {
        match self {
            Resolution::Direct(id) | Resolution::DefaultExport(id) => id,
        }
    }
}

/// Resolve a candidate to a component node, looking through the `default`
/// member at most once.
pub fn resolve_component(graph: &NamespaceGraph, id: NodeId) -> Option<Resolution> {
    let node = graph.node(id);
    if probe(graph, id) {
        return Some(Resolution::Direct(id));
    }

    let default = node.member(DEFAULT_EXPORT)?;
    probe(graph, default).then_some(Resolution::DefaultExport(default))
}

#[inline]
fn probe(graph: &NamespaceGraph, id: NodeId) -> bool {
    graph
        .node(id)
        .capabilities()
        .is_some_and(Capabilities::is_component)
}

/// Walk the whole graph and return the discovered components.
pub fn walk(graph: &NamespaceGraph, options: &WalkOptions) -> Result<Registry, WalkError> {
    let mut walker = Walker {
        graph,
        options,
        registry: Registry::new(),
        on_path: FxHashSet::default(),
        path: Vec::new(),
    };
    walker.walk_node(graph.root(), None)?;
    Ok(walker.registry)
}

struct Walker<'g> {
    graph: &'g NamespaceGraph,
    options: &'g WalkOptions,
    registry: Registry,
    /// Nodes on the current traversal path.
    on_path: FxHashSet<NodeId>,
    /// Member names on the current traversal path, for error reporting.
    path: Vec<&'g str>,
}

impl<'g> Walker<'g> {
    fn walk_node(&mut self, id: NodeId, parent: Option<&'g str>) -> Result<(), WalkError> {
        let graph = self.graph;
        let node = graph.node(id);
        if node.is_leaf() {
            return Ok(());
        }

        if !self.on_path.insert(id) {
            return Err(WalkError::CyclicNamespace {
                path: self.path.join("."),
            });
        }

        for member in node.members() {
            self.visit_member(member, parent)?;
        }

        self.on_path.remove(&id);
        Ok(())
    }

    fn visit_member(
        &mut self,
        member: &'g Member,
        parent: Option<&'g str>,
    ) -> Result<(), WalkError> {
        let name = member.name.as_str();
        if !is_component_name(name) {
            return Ok(());
        }

        let key = registry_key(name, parent, &self.options.skip_parent_name);
        let resolution = resolve_component(self.graph, member.node);

        if self.options.skip.contains(&key) {
            tracing::debug!("Skipping {} (listed in skip)", key);
        } else if self.registry.contains_key(&key) {
            tracing::debug!("Skipping {} (already registered)", key);
        } else if let Some(resolution) = resolution {
            self.register(key, resolution.node());
        }

        self.path.push(name);
        self.walk_node(member.node, Some(name))?;
        if let Some(Resolution::DefaultExport(default)) = resolution {
            self.path.push(DEFAULT_EXPORT);
            self.walk_node(default, Some(name))?;
            self.path.pop();
        }
        self.path.pop();

        Ok(())
    }

    fn register(&mut self, key: String, component: NodeId) {
        let Some(capabilities) = self.graph.node(component).capabilities() else {
            return;
        };

        let schema = extract_schema(capabilities.prop_types.as_deref());
        let entry = ComponentEntry::new(
            key,
            schema,
            capabilities.display_name.clone(),
            capabilities.default_props.clone().unwrap_or_default(),
        );
        tracing::debug!("Found component {} ({})", entry.key, entry.alias);
        self.registry.insert(entry);
    }
}
