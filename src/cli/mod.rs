//! Command-line interface for specindex
//!
//! A single command: run it inside the document root and it rewrites
//! `manifest.json` and `search_data.json` there.
//!
//! ```text
//! +------------------+
//! |      cli/        |
//! | (clap adapter)   |
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |      core/       |
//! | walk -> parse -> |
//! | segment -> write |
//! +------------------+
//! ```

pub mod output;

use std::path::Path;

use clap::Parser;

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::indexer::{IndexOutput, IndexingPipeline};
use crate::core::output::{write_artifacts, WrittenArtifacts};

/// specindex - HTML standards manifest and search index builder
///
/// Run from the document root. Every sub-directory becomes a group in
/// manifest.json; every document is split into TOC sections for
/// search_data.json.
#[derive(Parser, Debug)]
#[command(name = "specindex")]
#[command(version)]
#[command(about = "Build manifest.json and search_data.json for an HTML document tree", long_about = None)]
pub struct Cli {}

/// Outcome of one run
#[derive(Debug)]
pub struct RunSummary {
    pub config: Config,
    pub output: IndexOutput,
    pub written: WrittenArtifacts,
}

impl RunSummary {
    /// The one-line progress summary printed on completion
    pub fn summary_line(&self) -> String {
        format!(
            "Generated {} and {}. Indexed {} documents/sections.",
            self.config.output.manifest_file,
            self.config.output.search_data_file,
            self.output.records.len()
        )
    }
}

/// Index `root` and write both artifacts into it
///
/// Per-document problems end up in the returned diagnostics. Only
/// configuration and write failures are errors.
pub fn index_root(root: &Path) -> Result<RunSummary> {
    let config = Config::load(root)?;
    config.log_config();

    let pipeline = IndexingPipeline::new(&config)?;
    let output = pipeline.index_directory(root)?;

    let written = write_artifacts(root, &config.output, &output.manifest, &output.records)?;

    Ok(RunSummary {
        config,
        output,
        written,
    })
}

/// Run the CLI in the current working directory
pub fn run(_cli: Cli) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let root = std::env::current_dir()?;

    output::print_status(&format!(
        "Indexing HTML files under {}...",
        output::colors::file_path(&root.display().to_string())
    ));

    let summary = index_root(&root)?;

    for diagnostic in summary.output.skipped_documents() {
        output::print_warning(&diagnostic.to_string());
    }

    output::print_success(&summary.summary_line());

    Ok(())
}
