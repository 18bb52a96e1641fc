//! Configuration file loading for stencil.
//!
//! Reads `stencil.config.json` from the current working directory, or the
//! file given with `--config`. Also provides the JSON Schema of the file for
//! editor autocompletion.

use serde::{Deserialize, Serialize};
use std::path::Path;
use stencil_atlas::WalkOptions;
use stencil_press::PressOptions;

/// Default configuration file name.
pub const CONFIG_FILE: &str = "stencil.config.json";

/// Top-level stencil configuration.
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StencilConfig {
    /// JSON Schema reference (for editor autocompletion).
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Registry keys that are never turned into snippets (e.g., `["Icon"]`).
    #[serde(default)]
    pub skip: Vec<String>,

    /// Parent names whose members keep their bare name (e.g., `["Form"]`
    /// turns `Form.Item` into `Item`).
    #[serde(default)]
    pub skip_parent_name: Vec<String>,

    /// Indentation and trigger prefix.
    #[serde(flatten)]
    pub press: PressOptions,
}

impl StencilConfig {
    /// Exclusion rules for the namespace walker.
    pub fn walk_options(&self) -> WalkOptions {
        WalkOptions::new(self.skip.iter().cloned(), self.skip_parent_name.iter().cloned())
    }
}

/// Load the configuration.
///
/// With no explicit path, a missing `stencil.config.json` means defaults.
/// Unreadable or malformed files are reported and replaced by defaults.
pub fn load_config(path: Option<&Path>) -> StencilConfig {
    let config_path = path.map(Path::to_path_buf).unwrap_or_else(|| {
        std::env::current_dir()
            .unwrap_or_default()
            .join(CONFIG_FILE)
    });

    if path.is_none() && !config_path.exists() {
        return StencilConfig::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => parse_config(&content, &config_path),
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", config_path.display(), e);
            StencilConfig::default()
        }
    }
}

fn parse_config(content: &str, config_path: &Path) -> StencilConfig {
    match serde_json::from_str(content) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Failed to parse {}: {}", config_path.display(), e);
            StencilConfig::default()
        }
    }
}

/// JSON Schema for `stencil.config.json`.
pub const STENCIL_CONFIG_SCHEMA: &str = r#"{
  "$schema": "http://json-schema.org/draft-07/schema#",
  "title": "Stencil Configuration",
  "description": "Configuration file for stencil - editor snippet generator for UI component libraries",
  "type": "object",
  "properties": {
    "$schema": {
      "type": "string",
      "description": "JSON Schema reference for editor autocompletion"
    },
    "skip": {
      "type": "array",
      "description": "Registry keys that never produce a snippet, e.g. \"Icon\" or \"Form.Item\".",
      "items": { "type": "string" },
      "default": []
    },
    "skipParentName": {
      "type": "array",
      "description": "Parent names whose members are registered under their bare name instead of \"Parent.Name\".",
      "items": { "type": "string" },
      "default": []
    },
    "tab": {
      "type": "string",
      "description": "Indentation used inside snippet files and multi-line templates.",
      "default": "\t"
    },
    "prefix": {
      "type": "string",
      "description": "Prepended to every alias to form the snippet trigger.",
      "default": ""
    }
  },
  "additionalProperties": false
}"#;
