//! Core data types for specindex.
//!
//! Defines the manifest entries, search records, per-run statistics
//! and the diagnostics emitted for skipped input. Field names of the
//! serializable types are the JSON wire format read by the viewer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A logical document collection, one per accepted directory name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// Directory name
    pub id: String,

    /// Display title
    pub title: String,

    /// Documents in file-name order
    pub files: Vec<FileEntry>,
}

/// One document within a group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Path relative to the root, always `/` separated
    pub path: String,

    /// Display title derived from the file name
    pub title: String,
}

/// One independently retrievable unit of indexed text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRecord {
    /// Unique within the corpus: document path plus optional `#suffix`
    pub id: String,

    pub title: String,

    /// Extracted text
    pub body: String,

    /// Deep link: document path, optionally with `#anchor`
    pub path: String,

    /// Owning document path
    pub doc_path: String,

    /// Owning document title
    pub doc_title: String,
}

/// Something the pipeline skipped or folded instead of failing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A document could not be read; its manifest entry remains
    ReadFailed { path: String, message: String },

    /// A document parsed without a body region
    MissingBody { path: String },

    /// A TOC link points at an id that does not exist in the body
    DanglingAnchor { path: String, anchor: String },

    /// A TOC link has no visible text
    EmptyAnchorTitle { path: String, anchor: String },

    /// A second directory with an already seen name joined its group
    GroupMerged { group: String, directory: String },

    /// The directory walk hit an unreadable entry
    WalkError { message: String },
}

impl Diagnostic {
    /// True for diagnostics that cost a whole document its search records
    pub fn skips_document(&self) -> bool {
        matches!(
            self,
            Diagnostic::ReadFailed { .. } | Diagnostic::MissingBody { .. }
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::ReadFailed { path, message } => {
                write!(f, "Error reading {path}: {message}")
            }
            Diagnostic::MissingBody { path } => write!(f, "No <body> in {path}"),
            Diagnostic::DanglingAnchor { path, anchor } => {
                write!(f, "TOC link #{anchor} in {path} has no target")
            }
            Diagnostic::EmptyAnchorTitle { path, anchor } => {
                write!(f, "TOC link #{anchor} in {path} has no title")
            }
            Diagnostic::GroupMerged { group, directory } => {
                write!(f, "Directory {directory} merged into group '{group}'")
            }
            Diagnostic::WalkError { message } => write!(f, "Walk error: {message}"),
        }
    }
}

/// Statistics from an indexing run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Groups in the manifest
    pub groups: usize,

    /// Documents listed in the manifest
    pub files_discovered: usize,

    /// Documents that produced search records
    pub documents_indexed: usize,

    /// Documents abandoned (unreadable or without body)
    pub documents_skipped: usize,

    /// Total search records
    pub records_created: usize,

    /// Run duration in milliseconds
    pub duration_ms: u64,
}
