//! Document indexing module.
//!
//! Turns a directory tree of HTML documents into manifest groups and
//! search records. Key pieces:
//!
//! - Directory walking and grouping by directory name
//! - File-name based display titles
//! - TOC-driven section segmentation
//! - Search corpus assembly
//! - Indexing pipeline orchestration
//!
//! # Best effort
//!
//! A document that cannot be read or has no body loses its search
//! records but keeps its manifest entry. Such cases are returned as
//! [`Diagnostic`](crate::core::types::Diagnostic)s, never as errors.

pub mod corpus;
pub mod pipeline;
pub mod segmenter;
pub mod title;
pub mod walker;

pub use corpus::CorpusBuilder;
pub use pipeline::{IndexOutput, IndexingPipeline};
pub use segmenter::{segment, Section, Segmentation};
pub use title::normalize_title;
pub use walker::DocumentWalker;
