//! Component registry.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::naming::to_alias;
use crate::schema::Schema;
use crate::value::DefaultProps;

/// A discovered component.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentEntry {
    /// Unique registry key, also the tag name in generated markup.
    pub key: String,
    /// Kebab-case form of the key, used for file names and triggers.
    pub alias: String,
    /// Declared display name, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Whether the component accepts nested content.
    pub has_children: bool,
    /// Declared prop names, excluding `children`.
    pub prop_types: Vec<String>,
    /// Declared default values.
    pub default_props: DefaultProps,
}

impl ComponentEntry {
    pub fn new(
        key: String,
        schema: Schema,
        display_name: Option<String>,
        default_props: DefaultProps,
    ) -> Self {
        Self {
            alias: to_alias(&key),
            key,
            display_name,
            has_children: schema.has_children,
            prop_types: schema.props,
            default_props,
        }
    }
}

/// Insertion-ordered set of components with unique keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    entries: Vec<ComponentEntry>,
    index: FxHashMap<String, usize>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry unless its key is already taken.
    ///
    /// Returns `false` when the key exists; the first entry is kept.
    pub fn insert(&mut self, entry: ComponentEntry) -> bool {
        if self.index.contains_key(&entry.key) {
            return false;
        }
        self.index.insert(entry.key.clone(), self.entries.len());
        self.entries.push(entry);
        true
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&ComponentEntry> {
        self.index.get(key).map(|&i| &self.entries[i])
    }

    /// Entries in discovery order.
    #[inline]
    pub fn entries(&self) -> &[ComponentEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ComponentEntry> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a ComponentEntry;
    type IntoIter = std::slice::Iter<'a, ComponentEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for Registry {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, display_name: Option<&str>) -> ComponentEntry {
        ComponentEntry::new(
            key.to_string(),
            Schema::default(),
            display_name.map(|s| s.to_string()),
            DefaultProps::default(),
        )
    }

    #[test]
    fn test_entry_alias() {
        let e = entry("Form.Item", None);
        assert_eq!(e.alias, "form-item");
    }

    #[test]
    fn test_first_insert_wins() {
        let mut registry = Registry::new();
        assert!(registry.insert(entry("Icon", Some("first"))));
        assert!(!registry.insert(entry("Icon", Some("second"))));

        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get("Icon").and_then(|e| e.display_name.as_deref()),
            Some("first")
        );
    }

    #[test]
    fn test_discovery_order() {
        let mut registry = Registry::new();
        registry.insert(entry("Table", None));
        registry.insert(entry("Button", None));
        registry.insert(entry("Alert", None));

        let keys: Vec<_> = registry.keys().collect();
        assert_eq!(keys, vec!["Table", "Button", "Alert"]);
    }

    #[test]
    fn test_serialize() {
        let mut registry = Registry::new();
        registry.insert(entry("Button", None));
        let json = serde_json::to_string(&registry).unwrap();
        assert_eq!(
            json,
            r#"[{"key":"Button","alias":"button","hasChildren":false,"propTypes":[],"defaultProps":{}}]"#
        );
    }
}
