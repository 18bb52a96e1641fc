//! Default value stringification.
//!
//! Each default becomes one attribute in the generated markup:
//!
//! | Value            | Attribute         |
//! |------------------|-------------------|
//! | number           | `key={12}`        |
//! | `true`           | `key`             |
//! | `false`          | `key={false}`     |
//! | string           | `key="text"`      |
//! | element          | omitted           |
//! | object           | `key={{"a":1}}`   |
//! | anything else    | `key={}`          |

use serde::Serialize;
use serde_json::ser::Formatter;
use serde_json::{Number, Value};
use std::io;
use stencil_atlas::{DefaultProps, DefaultValue, CHILDREN};

/// Attributes and child content derived from a component's defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedProps {
    /// One rendered attribute per representable default, in order.
    pub attributes: Vec<String>,
    /// Literal child content from a `children` default.
    pub children: Option<String>,
}

impl RenderedProps {
    /// Join the attributes with a newline followed by `tab`.
    pub fn join(&self, tab: &str) -> String {
        self.attributes.join(&format!("\n{tab}"))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

/// Stringify every default except `children`, which is captured separately.
pub fn stringify_defaults(defaults: &DefaultProps) -> RenderedProps {
    let mut rendered = RenderedProps::default();

    for (name, value) in defaults.iter() {
        if name == CHILDREN {
            rendered.children = child_content(value);
            continue;
        }
        if let Some(attr) = render_attribute(name, value) {
            rendered.attributes.push(attr);
        }
    }

    rendered
}

/// Render a single attribute, or `None` when the value is an embedded element.
pub fn render_attribute(name: &str, value: &DefaultValue) -> Option<String> {
    let attr = match value {
        DefaultValue::Number(n) => format!("{name}={{{}}}", number_literal(n)),
        DefaultValue::Bool(true) => name.to_string(),
        DefaultValue::Bool(false) => format!("{name}={{false}}"),
        DefaultValue::String(s) => format!("{name}=\"{s}\""),
        DefaultValue::Element => return None,
        DefaultValue::Object(v) => {
            format!("{name}={{{}}}", object_literal(v).unwrap_or_default())
        }
        DefaultValue::Other => format!("{name}={{}}"),
    };
    Some(attr)
}

/// Render a number the way it would be written in source.
///
/// Whole floats drop their fraction (`12.0` -> `12`); very large and very
/// small magnitudes use exponent form (`1e+21`, `1e-7`).
pub fn number_literal(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() => float_literal(f),
        _ => n.to_string(),
    }
}

fn float_literal(f: f64) -> String {
    if f == 0.0 {
        return "0".to_string();
    }
    if (1e-6..1e21).contains(&f.abs()) {
        return f.to_string();
    }

    let exp = format!("{f:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exp,
    }
}

/// Compact JSON whose numbers are written like [`number_literal`].
fn object_literal(value: &Value) -> Option<String> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, LiteralFormatter);
    value.serialize(&mut ser).ok()?;
    String::from_utf8(buf).ok()
}

struct LiteralFormatter;

impl Formatter for LiteralFormatter {
    fn write_f64<W>(&mut self, writer: &mut W, value: f64) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(float_literal(value).as_bytes())
    }
}

/// Child content from a `children` default. Empty-ish values fall back to
/// the cursor placeholder.
fn child_content(value: &DefaultValue) -> Option<String> {
    match value {
        DefaultValue::String(s) if !s.is_empty() => Some(s.clone()),
        DefaultValue::Number(n) if n.as_f64().is_some_and(|f| f != 0.0) => {
            Some(number_literal(n))
        }
        DefaultValue::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn defaults(value: serde_json::Value) -> DefaultProps {
        DefaultProps::from_map(value.as_object().unwrap())
    }

    #[test]
    fn test_scalars() {
        let rendered = stringify_defaults(&defaults(json!({
            "size": 12,
            "disabled": true,
            "label": "ok",
            "visible": false
        })));
        assert_eq!(
            rendered.attributes,
            vec!["size={12}", "disabled", "label=\"ok\"", "visible={false}"]
        );
        assert_eq!(rendered.children, None);
    }

    #[test]
    fn test_whole_float() {
        assert_eq!(number_literal(&Number::from_f64(12.0).unwrap()), "12");
        assert_eq!(number_literal(&Number::from_f64(0.5).unwrap()), "0.5");
        assert_eq!(number_literal(&Number::from(-3)), "-3");
        assert_eq!(number_literal(&Number::from_f64(-0.0).unwrap()), "0");
    }

    #[test]
    fn test_exponent_floats() {
        assert_eq!(number_literal(&Number::from_f64(1e21).unwrap()), "1e+21");
        assert_eq!(number_literal(&Number::from_f64(1.5e22).unwrap()), "1.5e+22");
        assert_eq!(number_literal(&Number::from_f64(1e-7).unwrap()), "1e-7");
        assert_eq!(number_literal(&Number::from_f64(1e20).unwrap()), "100000000000000000000");
        assert_eq!(number_literal(&Number::from_f64(0.000001).unwrap()), "0.000001");
    }

    #[test]
    fn test_floats_inside_objects_match_attributes() {
        let rendered = stringify_defaults(&defaults(json!({
            "w": 12.0,
            "style": { "w": 12.0, "ratio": 0.5, "big": 1e21, "tiny": 1e-7, "n": [2.0] }
        })));
        assert_eq!(
            rendered.attributes,
            vec![
                "w={12}",
                r#"style={{"w":12,"ratio":0.5,"big":1e+21,"tiny":1e-7,"n":[2]}}"#,
            ]
        );
    }

    #[test]
    fn test_strings_are_not_escaped() {
        let rendered = stringify_defaults(&defaults(json!({ "title": "say \"hi\"" })));
        assert_eq!(rendered.attributes, vec![r#"title="say "hi"""#]);
    }

    #[test]
    fn test_objects() {
        let rendered = stringify_defaults(&defaults(json!({
            "style": { "width": 100, "color": "red" },
            "icon": { "type": "span", "key": null, "ref": null, "props": {} },
            "onChange": { "$opaque": "function" },
            "items": [1, 2],
            "value": null
        })));
        assert_eq!(
            rendered.attributes,
            vec![
                r#"style={{"width":100,"color":"red"}}"#,
                "onChange={}",
                "items={}",
                "value={}",
            ]
        );
    }

    #[test]
    fn test_children_default() {
        let rendered = stringify_defaults(&defaults(json!({
            "children": "Click me",
            "type": "primary"
        })));
        assert_eq!(rendered.children.as_deref(), Some("Click me"));
        assert_eq!(rendered.attributes, vec!["type=\"primary\""]);
    }

    #[test]
    fn test_empty_children_default_is_dropped() {
        for value in [json!(""), json!(0), json!(false), json!(null), json!({})] {
            let rendered = stringify_defaults(&defaults(json!({ "children": value })));
            assert_eq!(rendered.children, None);
            assert!(rendered.is_empty());
        }
    }

    #[test]
    fn test_join() {
        let rendered = RenderedProps {
            attributes: vec!["a".to_string(), "b={1}".to_string()],
            children: None,
        };
        assert_eq!(rendered.join("\t"), "a\n\tb={1}");
        assert_eq!(rendered.join("  "), "a\n  b={1}");
    }
}
