//! Generate command - Write one snippet per discovered component

use clap::Args;
use std::path::PathBuf;
use std::time::Instant;

/// Default namespace document.
pub const DEFAULT_GRAPH: &str = "./components.json";

/// Default output directory.
pub const DEFAULT_OUTPUT: &str = "./snippets";

#[derive(Args)]
pub struct GenerateArgs {
    /// Namespace document describing the component library
    #[arg(default_value = DEFAULT_GRAPH)]
    pub graph: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Configuration file (default: ./stencil.config.json if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Render snippets without writing them
    #[arg(long)]
    pub dry_run: bool,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            graph: PathBuf::from(DEFAULT_GRAPH),
            output: PathBuf::from(DEFAULT_OUTPUT),
            config: None,
            dry_run: false,
        }
    }
}

pub fn run(args: GenerateArgs) {
    let start = Instant::now();
    let config = stencil::load_config(args.config.as_deref());

    match stencil::generate(&args.graph, &args.output, &config, args.dry_run) {
        Ok(report) => {
            let elapsed = start.elapsed().as_secs_f64();
            if args.dry_run {
                eprintln!(
                    "✓ {} snippet(s) rendered in {:.4}s (dry run)",
                    report.components, elapsed
                );
            } else {
                let file_word = if report.written.len() == 1 {
                    "snippet"
                } else {
                    "snippets"
                };
                eprintln!(
                    "✓ {} {} written to {} in {:.4}s",
                    report.written.len(),
                    file_word,
                    args.output.display(),
                    elapsed
                );
            }
        }
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    }
}
