//! Discovery snapshot tests.
//!
//! These tests walk namespace documents shaped like real component libraries
//! and compare the resulting registry listing against inline snapshots.

use stencil_atlas::{walk, NamespaceGraph, Registry, WalkOptions};

/// Walk `source` and list one registry entry per line.
fn listing(source: &str, options: &WalkOptions) -> String {
    let graph = NamespaceGraph::from_json_str(source).unwrap();
    let registry = walk(&graph, options).unwrap();
    format_registry(&registry)
}

fn format_registry(registry: &Registry) -> String {
    registry
        .iter()
        .map(|entry| {
            format!(
                "{} -> {} children={} props=[{}] defaults={}",
                entry.key,
                entry.alias,
                entry.has_children,
                entry.prop_types.join(","),
                entry.default_props.len()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

const LIBRARY: &str = r#"{
  "__esModule": true,
  "version": "0.1.0",
  "Affix": { "propTypes": { "offsetTop": "number", "children": "node" } },
  "DatePicker": {
    "displayName": "DatePicker",
    "RangePicker": { "defaultProps": { "format": "YYYY-MM-DD" } },
    "DatePickerPanel": { "displayName": "Panel" }
  },
  "Form": {
    "default": {
      "propTypes": { "layout": "string", "children": "node" },
      "Item": { "propTypes": { "label": "node", "children": "node" } }
    }
  },
  "Grid": {
    "Row": { "propTypes": { "gutter": "number" } },
    "Col": { "propTypes": { "span": "number" } }
  },
  "Menu": {
    "displayName": "Menu",
    "MenuItem": { "displayName": "MenuItem" },
    "SubMenu": { "displayName": "SubMenu" }
  },
  "message": { "info": { "displayName": "info" } }
}"#;

#[test]
fn library_listing() {
    insta::assert_snapshot!(listing(LIBRARY, &WalkOptions::default()), @r"
    Affix -> affix children=true props=[offsetTop] defaults=0
    DatePicker -> date-picker children=false props=[] defaults=0
    DatePicker.RangePicker -> date-picker-range-picker children=false props=[] defaults=1
    DatePickerPanel -> date-picker-panel children=false props=[] defaults=0
    Form -> form children=true props=[layout] defaults=0
    Form.Item -> form-item children=true props=[label] defaults=0
    Grid.Row -> grid-row children=false props=[gutter] defaults=0
    Grid.Col -> grid-col children=false props=[span] defaults=0
    Menu -> menu children=false props=[] defaults=0
    MenuItem -> menu-item children=false props=[] defaults=0
    SubMenu -> sub-menu children=false props=[] defaults=0
    ");
}

#[test]
fn library_listing_with_exclusions() {
    let options = WalkOptions::new(["Affix", "MenuItem"], ["Grid", "Form"]);
    insta::assert_snapshot!(listing(LIBRARY, &options), @r"
    DatePicker -> date-picker children=false props=[] defaults=0
    DatePicker.RangePicker -> date-picker-range-picker children=false props=[] defaults=1
    DatePickerPanel -> date-picker-panel children=false props=[] defaults=0
    Form -> form children=true props=[layout] defaults=0
    Item -> item children=true props=[label] defaults=0
    Row -> row children=false props=[gutter] defaults=0
    Col -> col children=false props=[span] defaults=0
    Menu -> menu children=false props=[] defaults=0
    SubMenu -> sub-menu children=false props=[] defaults=0
    ");
}

#[test]
fn discovery_is_repeatable() {
    let options = WalkOptions::default();
    assert_eq!(listing(LIBRARY, &options), listing(LIBRARY, &options));
}
