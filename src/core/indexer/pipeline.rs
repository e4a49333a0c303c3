//! Indexing pipeline orchestration.
//!
//! Coordinates one indexing run:
//! 1. Walk the directory tree, building manifest groups
//! 2. Read and parse each document
//! 3. Segment it by its table of contents
//! 4. Add its search records to the corpus
//!
//! Problems with individual documents are collected as diagnostics
//! and never stop the run.

use std::path::Path;
use std::time::Instant;

use crate::core::config::Config;
use crate::core::document::{read_source, ParsedDocument};
use crate::core::error::{IndexError, Result};
use crate::core::indexer::corpus::{CorpusBuilder, DocumentRef};
use crate::core::indexer::segmenter::{segment, SkipReason};
use crate::core::indexer::walker::{DiscoveredDocument, DocumentWalker};
use crate::core::manifest::ManifestBuilder;
use crate::core::types::{Diagnostic, Group, IndexStats, SearchRecord};

/// Everything one run produces
#[derive(Debug, Clone)]
pub struct IndexOutput {
    /// Groups sorted by id
    pub manifest: Vec<Group>,

    /// Search records in walk order
    pub records: Vec<SearchRecord>,

    pub diagnostics: Vec<Diagnostic>,

    pub stats: IndexStats,
}

impl IndexOutput {
    /// Diagnostics that cost a whole document its search records
    pub fn skipped_documents(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.skips_document())
    }
}

/// Result of indexing a single document
enum DocumentOutcome {
    Indexed { records: usize },
    Skipped,
}

/// Orchestrates the indexing pipeline
pub struct IndexingPipeline {
    walker: DocumentWalker,
    toc_id: String,
    toc_record_suffix: String,
}

impl IndexingPipeline {
    /// Create a new indexing pipeline
    ///
    /// # Returns
    ///
    /// A new `IndexingPipeline`, or an error if the configuration
    /// is invalid
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        let walker = DocumentWalker::from_config(config)?;

        Ok(Self {
            walker,
            toc_id: config.document.toc_id.clone(),
            toc_record_suffix: config.document.toc_record_suffix.clone(),
        })
    }

    /// Index a document tree and return manifest, corpus and stats
    ///
    /// # Arguments
    ///
    /// * `root` - Root of the document tree
    ///
    /// # Returns
    ///
    /// The run output, or an error if `root` is not a directory
    pub fn index_directory(&self, root: &Path) -> Result<IndexOutput> {
        let start = Instant::now();

        if !root.is_dir() {
            return Err(IndexError::InvalidPath(format!(
                "{} is not a directory",
                root.display()
            )));
        }

        // Step 1: Walk and group
        tracing::info!("Starting document walk from {:?}", root);
        let mut manifest = ManifestBuilder::new();
        let walk = self.walker.walk(root, &mut manifest);
        let mut diagnostics = walk.diagnostics;
        tracing::info!(
            "Found {} documents in {} groups",
            walk.documents.len(),
            manifest.group_count()
        );

        // Step 2: Parse, segment and collect records
        let mut corpus = CorpusBuilder::new(self.toc_record_suffix.clone());
        let mut documents_indexed = 0;
        let mut documents_skipped = 0;

        for (idx, document) in walk.documents.iter().enumerate() {
            if idx % 100 == 0 && idx > 0 {
                tracing::info!(
                    "Progress: {}/{} documents processed",
                    idx,
                    walk.documents.len()
                );
            }

            match self.process_document(document, &mut corpus, &mut diagnostics) {
                DocumentOutcome::Indexed { records } => {
                    documents_indexed += 1;
                    tracing::debug!("Indexed {} ({} records)", document.entry.path, records);
                }
                DocumentOutcome::Skipped => documents_skipped += 1,
            }
        }

        let stats = IndexStats {
            groups: manifest.group_count(),
            files_discovered: manifest.file_count(),
            documents_indexed,
            documents_skipped,
            records_created: corpus.len(),
            duration_ms: start.elapsed().as_millis() as u64,
        };

        tracing::info!(
            "Indexing complete: {} documents indexed, {} skipped, \
             {} records created in {}ms",
            stats.documents_indexed,
            stats.documents_skipped,
            stats.records_created,
            stats.duration_ms
        );

        Ok(IndexOutput {
            manifest: manifest.build(),
            records: corpus.build(),
            diagnostics,
            stats,
        })
    }

    /// Process a single document: read, parse, segment, add records
    fn process_document(
        &self,
        document: &DiscoveredDocument,
        corpus: &mut CorpusBuilder,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> DocumentOutcome {
        let path = document.entry.path.as_str();

        let source = match read_source(&document.source) {
            Ok(source) => source,
            Err(e) => {
                tracing::warn!("Error reading {}: {}", path, e);
                diagnostics.push(Diagnostic::ReadFailed {
                    path: path.to_string(),
                    message: e.to_string(),
                });
                return DocumentOutcome::Skipped;
            }
        };

        let Some(parsed) = ParsedDocument::parse(&source, &document.file_name, &self.toc_id) else {
            tracing::warn!("Skipping {}: no <body> element", path);
            diagnostics.push(Diagnostic::MissingBody {
                path: path.to_string(),
            });
            return DocumentOutcome::Skipped;
        };

        let segmentation = segment(&parsed.tree, parsed.body, parsed.toc);

        if let Some(segmentation) = &segmentation {
            for skipped in &segmentation.skipped {
                let anchor = skipped.anchor.anchor_id.clone();
                tracing::debug!("Skipping TOC link #{} in {}: {:?}", anchor, path, skipped.reason);
                diagnostics.push(match skipped.reason {
                    SkipReason::EmptyTitle => Diagnostic::EmptyAnchorTitle {
                        path: path.to_string(),
                        anchor,
                    },
                    SkipReason::Dangling => Diagnostic::DanglingAnchor {
                        path: path.to_string(),
                        anchor,
                    },
                });
            }
        }

        let doc = DocumentRef {
            path,
            title: &parsed.title,
        };
        let records = corpus.add_document(doc, segmentation.as_ref(), || {
            parsed.tree.text(parsed.body)
        });

        DocumentOutcome::Indexed { records }
    }
}
