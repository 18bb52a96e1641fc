//! Registry key and alias rules.

use rustc_hash::FxHashSet;

/// Separator between a parent name and a member name in a registry key.
pub const KEY_SEPARATOR: char = '.';

/// Only exports whose name starts with an ASCII uppercase letter are
/// component candidates.
#[inline]
pub fn is_component_name(name: &str) -> bool {
    name.as_bytes().first().is_some_and(u8::is_ascii_uppercase)
}

/// Compute the registry key of `name` found under `parent`.
///
/// The key is `parent.name` unless there is no parent, the parent is listed
/// in `skip_parent_name`, or `name` already contains the parent's name.
pub fn registry_key(
    name: &str,
    parent: Option<&str>,
    skip_parent_name: &FxHashSet<String>,
) -> String {
    match parent {
        Some(parent)
            if !parent.is_empty()
                && !skip_parent_name.contains(parent)
                && !name.contains(parent) =>
        {
            format!("{parent}{KEY_SEPARATOR}{name}")
        }
        _ => name.to_string(),
    }
}

/// Convert a registry key into its kebab-case alias.
///
/// e.g., "DatePicker.RangePicker" -> "date-picker-range-picker"
pub fn to_alias(key: &str) -> String {
    let mut alias = String::with_capacity(key.len() + 4);
    for (i, c) in key.chars().filter(|&c| c != KEY_SEPARATOR).enumerate() {
        if c.is_ascii_uppercase() {
            if i != 0 {
                alias.push('-');
            }
            alias.push(c.to_ascii_lowercase());
        } else {
            alias.push(c);
        }
    }
    alias
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> FxHashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_is_component_name() {
        assert!(is_component_name("Button"));
        assert!(!is_component_name("button"));
        assert!(!is_component_name("_Button"));
        assert!(!is_component_name(""));
        assert!(!is_component_name("Écran"));
    }

    #[test]
    fn test_top_level_key() {
        assert_eq!(registry_key("Button", None, &set(&[])), "Button");
    }

    #[test]
    fn test_prefixed_key() {
        assert_eq!(registry_key("Item", Some("Form"), &set(&[])), "Form.Item");
    }

    #[test]
    fn test_skip_parent_name() {
        assert_eq!(registry_key("Field", Some("Form"), &set(&["Form"])), "Field");
    }

    #[test]
    fn test_name_contains_parent() {
        assert_eq!(registry_key("Form", Some("Form"), &set(&[])), "Form");
        assert_eq!(registry_key("MenuItem", Some("Menu"), &set(&[])), "MenuItem");
        assert_eq!(registry_key("SubMenu", Some("Menu"), &set(&[])), "SubMenu");
    }

    #[test]
    fn test_to_alias() {
        assert_eq!(to_alias("Button"), "button");
        assert_eq!(to_alias("Form.Item"), "form-item");
        assert_eq!(
            to_alias("DatePicker.RangePicker"),
            "date-picker-range-picker"
        );
        assert_eq!(to_alias("UIKit"), "u-i-kit");
        assert_eq!(to_alias("Tabs.pane"), "tabspane");
    }

    #[test]
    fn test_alias_is_deterministic() {
        assert_eq!(to_alias("Table.Column"), to_alias("Table.Column"));
    }
}
