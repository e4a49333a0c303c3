//! Search corpus assembly.
//!
//! Turns per-document segmentation results into [`SearchRecord`]s:
//! one record for the whole TOC, one per section (deep-linked to its
//! anchor), or a single whole-body record for documents without a TOC.

use std::collections::HashSet;

use crate::core::indexer::segmenter::{Section, Segmentation};
use crate::core::types::SearchRecord;

/// Default suffix of the whole-TOC record id
pub const TOC_RECORD_SUFFIX: &str = "TOC_entire";

/// Owning document of the records being added
#[derive(Debug, Clone, Copy)]
pub struct DocumentRef<'a> {
    pub path: &'a str,
    pub title: &'a str,
}

/// Accumulates the search corpus for one run
#[derive(Debug)]
pub struct CorpusBuilder {
    records: Vec<SearchRecord>,
    seen: HashSet<String>,
    toc_suffix: String,
    duplicates: usize,
}

impl Default for CorpusBuilder {
    fn default() -> Self {
        Self::new(TOC_RECORD_SUFFIX)
    }
}

impl CorpusBuilder {
    pub fn new(toc_suffix: impl Into<String>) -> Self {
        Self {
            records: Vec::new(),
            seen: HashSet::new(),
            toc_suffix: toc_suffix.into(),
            duplicates: 0,
        }
    }

    /// Add the records of one document
    ///
    /// # Arguments
    ///
    /// * `doc` - Owning document path and title
    /// * `segmentation` - Result of segmenting the document, `None` when
    ///   it has no TOC
    /// * `body_text` - Produces the whole-body text; only called for the
    ///   fallback record
    ///
    /// # Returns
    ///
    /// Number of records added
    pub fn add_document(
        &mut self,
        doc: DocumentRef<'_>,
        segmentation: Option<&Segmentation>,
        body_text: impl FnOnce() -> String,
    ) -> usize {
        let before = self.records.len();

        match segmentation {
            Some(segmentation) => {
                if !segmentation.toc_text.is_empty() {
                    self.push_toc(doc, &segmentation.toc_text);
                }
                for section in &segmentation.sections {
                    self.push_section(doc, section);
                }
            }
            None => self.push_fallback(doc, body_text()),
        }

        self.records.len() - before
    }

    fn push_toc(&mut self, doc: DocumentRef<'_>, toc_text: &str) {
        self.push(SearchRecord {
            id: format!("{}#{}", doc.path, self.toc_suffix),
            title: format!("TOC for {}", doc.title),
            body: toc_text.to_string(),
            path: doc.path.to_string(),
            doc_path: doc.path.to_string(),
            doc_title: doc.title.to_string(),
        });
    }

    fn push_section(&mut self, doc: DocumentRef<'_>, section: &Section) {
        let deep_link = format!("{}#{}", doc.path, section.anchor_id);
        self.push(SearchRecord {
            id: deep_link.clone(),
            title: section.title.clone(),
            body: section.text.clone(),
            path: deep_link,
            doc_path: doc.path.to_string(),
            doc_title: doc.title.to_string(),
        });
    }

    fn push_fallback(&mut self, doc: DocumentRef<'_>, body: String) {
        self.push(SearchRecord {
            id: doc.path.to_string(),
            title: doc.title.to_string(),
            body,
            path: doc.path.to_string(),
            doc_path: doc.path.to_string(),
            doc_title: doc.title.to_string(),
        });
    }

    /// Keeps the first record for an id; later ones are dropped
    fn push(&mut self, record: SearchRecord) {
        if self.seen.insert(record.id.clone()) {
            self.records.push(record);
        } else {
            tracing::debug!("Dropping duplicate search record {}", record.id);
            self.duplicates += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records dropped because their id was already taken
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    pub fn build(self) -> Vec<SearchRecord> {
        self.records
    }
}
