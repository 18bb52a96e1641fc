//! Usage template rendering.

use stencil_atlas::ComponentEntry;

use crate::attrs::{stringify_defaults, RenderedProps};

/// Cursor placeholder used when no child content is known.
pub const CURSOR_PLACEHOLDER: &str = "$1";

/// Layout of a usage template, selected by children support and the number
/// of rendered attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateShape {
    /// `<Key />`
    SelfClosing,
    /// `<Key attr />`
    SelfClosingInline,
    /// Attributes on indented lines before `/>`.
    SelfClosingMultiline,
    /// `<Key>` children `</Key>`
    Wrapping,
    /// `<Key attr>` children `</Key>`
    WrappingInline,
    /// Attributes on indented lines, then children, then `</Key>`.
    WrappingMultiline,
}

impl TemplateShape {
    pub fn select(has_children: bool, attribute_count: usize) -> Self {
        match (has_children, attribute_count) {
            (false, 0) => Self::SelfClosing,
            (false, 1) => Self::SelfClosingInline,
            (false, _) => Self::SelfClosingMultiline,
            (true, 0) => Self::Wrapping,
            (true, 1) => Self::WrappingInline,
            (true, _) => Self::WrappingMultiline,
        }
    }

    #[inline]
    pub fn has_children(self) -> bool {
        matches!(
            self,
            Self::Wrapping | Self::WrappingInline | Self::WrappingMultiline
        )
    }
}

/// Render the usage template of a component.
///
/// The tag name is the registry key, so nested components render as
/// member expressions (`<Form.Item />`).
pub fn render_template(entry: &ComponentEntry, tab: &str) -> String {
    let rendered = stringify_defaults(&entry.default_props);
    let shape = TemplateShape::select(entry.has_children, rendered.len());
    layout(&entry.key, shape, &rendered, tab)
}

fn layout(key: &str, shape: TemplateShape, rendered: &RenderedProps, tab: &str) -> String {
    let props = rendered.join(tab);
    let children = rendered.children.as_deref().unwrap_or(CURSOR_PLACEHOLDER);

    match shape {
        TemplateShape::SelfClosing => format!("<{key} />"),
        TemplateShape::SelfClosingInline => format!("<{key} {props} />"),
        TemplateShape::SelfClosingMultiline => format!("<{key}\n{tab}{props}\n/>"),
        TemplateShape::Wrapping => format!("<{key}>\n{tab}{children}\n</{key}>"),
        TemplateShape::WrappingInline => {
            format!("<{key} {props}>\n{tab}{children}\n</{key}>")
        }
        TemplateShape::WrappingMultiline => {
            format!("<{key}\n{tab}{props}\n>\n{tab}{children}\n</{key}>")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use stencil_atlas::{DefaultProps, Schema};

    fn entry(key: &str, has_children: bool, defaults: Value) -> ComponentEntry {
        ComponentEntry::new(
            key.to_string(),
            Schema {
                has_children,
                props: Vec::new(),
            },
            None,
            DefaultProps::from_map(defaults.as_object().unwrap()),
        )
    }

    #[test]
    fn test_shape_selection_is_exhaustive() {
        let cases = [
            (false, 0, TemplateShape::SelfClosing),
            (false, 1, TemplateShape::SelfClosingInline),
            (false, 2, TemplateShape::SelfClosingMultiline),
            (false, 7, TemplateShape::SelfClosingMultiline),
            (true, 0, TemplateShape::Wrapping),
            (true, 1, TemplateShape::WrappingInline),
            (true, 2, TemplateShape::WrappingMultiline),
            (true, 7, TemplateShape::WrappingMultiline),
        ];
        for (has_children, count, expected) in cases {
            let shape = TemplateShape::select(has_children, count);
            assert_eq!(shape, expected);
            assert_eq!(shape.has_children(), has_children);
        }
    }

    #[test]
    fn test_self_closing() {
        let e = entry("Button", false, json!({}));
        assert_eq!(render_template(&e, "\t"), "<Button />");
    }

    #[test]
    fn test_self_closing_inline() {
        let e = entry("Icon", false, json!({ "type": "plus" }));
        assert_eq!(render_template(&e, "\t"), "<Icon type=\"plus\" />");
    }

    #[test]
    fn test_self_closing_multiline() {
        let e = entry(
            "Input",
            false,
            json!({ "size": 12, "disabled": true, "label": "ok" }),
        );
        assert_eq!(
            render_template(&e, "\t"),
            "<Input\n\tsize={12}\n\tdisabled\n\tlabel=\"ok\"\n/>"
        );
    }

    #[test]
    fn test_wrapping() {
        let e = entry("Card", true, json!({}));
        assert_eq!(render_template(&e, "\t"), "<Card>\n\t$1\n</Card>");
    }

    #[test]
    fn test_wrapping_inline() {
        let e = entry("Alert", true, json!({ "message": "hi" }));
        assert_eq!(
            render_template(&e, "\t"),
            "<Alert message=\"hi\">\n\t$1\n</Alert>"
        );
    }

    #[test]
    fn test_wrapping_multiline_with_children_default() {
        let e = entry(
            "Form.Item",
            true,
            json!({ "label": "Name", "required": false, "children": "text" }),
        );
        assert_eq!(
            render_template(&e, "  "),
            "<Form.Item\n  label=\"Name\"\n  required={false}\n>\n  text\n</Form.Item>"
        );
    }

    #[test]
    fn test_children_default_ignored_without_children_support() {
        let e = entry("Tag", false, json!({ "children": "x" }));
        assert_eq!(render_template(&e, "\t"), "<Tag />");
    }

    #[test]
    fn test_element_default_does_not_count() {
        let e = entry(
            "Empty",
            false,
            json!({ "image": { "type": "img", "key": null, "ref": null }, "description": "None" }),
        );
        assert_eq!(render_template(&e, "\t"), "<Empty description=\"None\" />");
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let e = entry("Alert", true, json!({ "message": "hi", "closable": true }));
        assert_eq!(render_template(&e, "\t"), render_template(&e, "\t"));
    }
}
