//! specindex - manifest and search corpus builder for HTML standards
//!
//! Walks a tree of HTML documents (one directory per specification)
//! and produces two artifacts for a static viewer:
//!
//! - `manifest.json`: groups and their documents with display titles
//! - `search_data.json`: one record per TOC-listed section, deep-linked
//!   to its anchor, plus a record for each whole TOC
//!
//! # Architecture
//!
//! - **core**: Indexing pipeline (walk, parse, segment, serialize)
//! - **cli**: Command-line adapter (clap)
//!
//! # Example
//!
//! ```no_run
//! use specindex::{Config, IndexingPipeline};
//! use std::path::Path;
//!
//! let root = Path::new(".");
//! let config = Config::load(root)?;
//! let output = IndexingPipeline::new(&config)?.index_directory(root)?;
//! println!("{} records", output.records.len());
//! # Ok::<(), specindex::IndexError>(())
//! ```

// Core indexing logic
pub mod core;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use crate::core::config::Config;
pub use crate::core::error::{IndexError, Result};
pub use crate::core::indexer::{IndexOutput, IndexingPipeline};
pub use crate::core::types::*;
