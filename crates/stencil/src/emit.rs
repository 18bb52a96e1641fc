//! Discovery and snippet emission pipeline.
//!
//! Reading the namespace document and writing snippet files are the only
//! I/O of a run. Any failure aborts the whole run; there is no partial mode.

use rustc_hash::FxHashSet;
use std::fs;
use std::path::{Path, PathBuf};
use stencil_atlas::{walk, NamespaceGraph, Registry};
use stencil_press::{render_snippet, PressOptions, Snippet};

use crate::config::StencilConfig;
use crate::error::StencilError;

/// Outcome of a generation run.
#[derive(Debug, Clone, Default)]
pub struct Report {
    /// Number of discovered components.
    pub components: usize,
    /// Files written, in registry order.
    pub written: Vec<PathBuf>,
}

/// Read a namespace document and discover its components.
pub fn discover(graph_path: &Path, config: &StencilConfig) -> Result<Registry, StencilError> {
    let source = fs::read_to_string(graph_path).map_err(|source| StencilError::Read {
        path: graph_path.to_path_buf(),
        source,
    })?;

    let graph = NamespaceGraph::from_json_str(&source)?;
    let registry = walk(&graph, &config.walk_options())?;
    tracing::info!("Found {} components", registry.len());
    Ok(registry)
}

/// Render one snippet per registry entry.
///
/// Keys that collapse to the same alias produce the same file name; the
/// later snippet overwrites the earlier one when written.
pub fn render_all(registry: &Registry, options: &PressOptions) -> Vec<Snippet> {
    let mut seen = FxHashSet::default();

    registry
        .iter()
        .map(|entry| {
            let snippet = render_snippet(entry, options);
            if !seen.insert(snippet.filename.clone()) {
                tracing::warn!(
                    "{} maps to {} which is already taken",
                    entry.key,
                    snippet.filename
                );
            }
            snippet
        })
        .collect()
}

/// Write snippets into `out_dir`, creating it if needed.
pub fn write_snippets(
    snippets: &[Snippet],
    out_dir: &Path,
) -> Result<Vec<PathBuf>, StencilError> {
    fs::create_dir_all(out_dir).map_err(|source| StencilError::Write {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(snippets.len());
    for snippet in snippets {
        let path = out_dir.join(&snippet.filename);
        tracing::info!("Create {}", snippet.filename);
        fs::write(&path, &snippet.content).map_err(|source| StencilError::Write {
            path: path.clone(),
            source,
        })?;
        written.push(path);
    }

    Ok(written)
}

/// Run the whole pipeline: discover, render, and (unless `dry_run`) write.
pub fn generate(
    graph_path: &Path,
    out_dir: &Path,
    config: &StencilConfig,
    dry_run: bool,
) -> Result<Report, StencilError> {
    let registry = discover(graph_path, config)?;
    let snippets = render_all(&registry, &config.press);

    let written = if dry_run {
        for snippet in &snippets {
            tracing::info!("Would create {}", snippet.filename);
        }
        Vec::new()
    } else {
        write_snippets(&snippets, out_dir)?
    };

    Ok(Report {
        components: registry.len(),
        written,
    })
}
