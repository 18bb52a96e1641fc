//! Snippet file envelope.

use serde::{Deserialize, Serialize};
use stencil_atlas::ComponentEntry;

use crate::template::render_template;

/// File extension of generated snippets.
pub const SNIPPET_EXTENSION: &str = "sublime-snippet";

const CDATA_END: &str = "]]>";

/// Layout options shared by every snippet of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PressOptions {
    /// Indentation unit.
    #[serde(default = "default_tab")]
    pub tab: String,

    /// Prepended to every alias to form the trigger.
    #[serde(default)]
    pub prefix: String,
}

impl Default for PressOptions {
    fn default() -> Self {
        Self {
            tab: default_tab(),
            prefix: String::new(),
        }
    }
}

fn default_tab() -> String {
    "\t".to_string()
}

/// A rendered snippet ready to be written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    /// File name, e.g. `form-item.sublime-snippet`.
    pub filename: String,
    /// Tab trigger, e.g. `uxform-item`.
    pub trigger: String,
    /// Usage template alone.
    pub template: String,
    /// Complete file content.
    pub content: String,
}

/// Render the snippet file of a component.
pub fn render_snippet(entry: &ComponentEntry, options: &PressOptions) -> Snippet {
    let template = render_template(entry, &options.tab);
    let trigger = format!("{}{}", options.prefix, entry.alias);
    let tab = &options.tab;

    let mut content = String::with_capacity(template.len() + 128);
    content.push_str("<snippet>\n");
    content.push_str(tab);
    content.push_str("<content><![CDATA[\n");
    content.push_str(&escape_cdata(&template));
    content.push_str("\n]]></content>\n");
    content.push_str(tab);
    content.push_str("<tabTrigger>");
    content.push_str(&trigger);
    content.push_str("</tabTrigger>\n");
    content.push_str("</snippet>\n");

    Snippet {
        filename: snippet_filename(&entry.alias),
        trigger,
        template,
        content,
    }
}

/// File name for an alias.
#[inline]
pub fn snippet_filename(alias: &str) -> String {
    format!("{alias}.{SNIPPET_EXTENSION}")
}

/// Split any `]]>` across two CDATA sections.
fn escape_cdata(text: &str) -> String {
    text.replace(CDATA_END, "]]]]><![CDATA[>")
}
