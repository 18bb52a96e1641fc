//! # stencil
//!
//! Stencil - Editor snippet generator for UI component libraries.
//!
//! ## Name Origin
//!
//! A **stencil** lets you paint the same shape again and again. This binary
//! cuts one stencil per component of a library so an editor can paint a
//! correctly shaped usage of it with a single trigger.

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "stencil")]
#[command(about = "Editor snippet generator for UI component libraries", long_about = None)]
#[command(version, disable_version_flag = true)]
struct Cli {
    /// Print version
    #[arg(short = 'v', short_alias = 'V', long, action = clap::ArgAction::Version)]
    version: (),

    /// Show debug logs (skipped entries, discovered components)
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate snippet files (default command)
    Generate(commands::generate::GenerateArgs),

    /// List discovered components without writing anything
    List(commands::list::ListArgs),

    /// Print the JSON Schema of stencil.config.json
    Schema(commands::schema::SchemaArgs),
}

fn main() {
    let cli = Cli::parse();
    stencil::logging::init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Generate(args)) => commands::generate::run(args),
        Some(Commands::List(args)) => commands::list::run(args),
        Some(Commands::Schema(args)) => commands::schema::run(args),
        None => {
            // Default to generate command with default args
            commands::generate::run(commands::generate::GenerateArgs::default());
        }
    }
}
