//! Schema command - Print the configuration JSON Schema

use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct SchemaArgs {
    /// Write the schema to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: SchemaArgs) {
    let Some(path) = args.output else {
        println!("{}", stencil::STENCIL_CONFIG_SCHEMA);
        return;
    };

    if let Err(e) = std::fs::write(&path, stencil::STENCIL_CONFIG_SCHEMA) {
        eprintln!("✗ Failed to write {}: {}", path.display(), e);
        std::process::exit(1);
    }
    eprintln!("✓ Schema written to {}", path.display());
}
