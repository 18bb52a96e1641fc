//! List command - Print the component registry

use clap::{Args, ValueEnum};
use std::path::PathBuf;
use stencil::atlas::Registry;
use stencil::StencilError;

use super::generate::DEFAULT_GRAPH;

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum ListFormat {
    /// One line per component
    #[default]
    Text,
    /// Registry as JSON
    Json,
}

#[derive(Args)]
pub struct ListArgs {
    /// Namespace document describing the component library
    #[arg(default_value = DEFAULT_GRAPH)]
    pub graph: PathBuf,

    /// Configuration file (default: ./stencil.config.json if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ListFormat,
}

pub fn run(args: ListArgs) {
    let config = stencil::load_config(args.config.as_deref());

    let result = stencil::discover(&args.graph, &config)
        .and_then(|registry| format_registry(&registry, args.format));

    match result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    }
}

fn format_registry(registry: &Registry, format: ListFormat) -> Result<String, StencilError> {
    match format {
        ListFormat::Json => Ok(serde_json::to_string_pretty(registry)?),
        ListFormat::Text => {
            let mut out = String::new();
            for entry in registry {
                let children = if entry.has_children { " [children]" } else { "" };
                out.push_str(&format!("{} ({}){}", entry.key, entry.alias, children));
                if !entry.prop_types.is_empty() {
                    out.push_str(&format!(": {}", entry.prop_types.join(", ")));
                }
                out.push('\n');
            }
            out.push_str(&format!("{} components", registry.len()));
            Ok(out)
        }
    }
}
