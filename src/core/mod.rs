//! Core indexing logic (independent of the command line)
//!
//! # Architecture
//!
//! - **config**: Configuration loading (optional TOML in the root)
//! - **error**: Error types and Result alias
//! - **types**: Manifest, search record and diagnostic types
//! - **document**: HTML parsing into a queryable node tree
//! - **indexer**: Walking, titles, segmentation, corpus, pipeline
//! - **manifest**: Group accumulation and ordering
//! - **output**: Atomic JSON artifact writing

pub mod config;
pub mod document;
pub mod error;
pub mod indexer;
pub mod manifest;
pub mod output;
pub mod types;

// Re-export key types for convenience
pub use config::Config;
pub use error::{IndexError, Result};
pub use indexer::IndexingPipeline;
