// Test helper functions

use specindex::core::config::Config;
use specindex::core::indexer::{IndexOutput, IndexingPipeline};
use specindex::core::types::SearchRecord;
use std::path::Path;

/// Index a tree with the default configuration
#[allow(dead_code)] // Used in integration tests
pub fn index_tree(root: &Path) -> IndexOutput {
    IndexingPipeline::new(&Config::default())
        .expect("Failed to create pipeline")
        .index_directory(root)
        .expect("Indexing failed")
}

/// Find a record by id, panicking with the available ids if absent
#[allow(dead_code)] // Used in integration tests
pub fn record_by_id<'a>(output: &'a IndexOutput, id: &str) -> &'a SearchRecord {
    output
        .records
        .iter()
        .find(|r| r.id == id)
        .unwrap_or_else(|| {
            let ids: Vec<_> = output.records.iter().map(|r| r.id.as_str()).collect();
            panic!("No record with id {id}; have {ids:?}")
        })
}

/// All records owned by one document
#[allow(dead_code)] // Used in integration tests
pub fn records_for<'a>(output: &'a IndexOutput, doc_path: &str) -> Vec<&'a SearchRecord> {
    output
        .records
        .iter()
        .filter(|r| r.doc_path == doc_path)
        .collect()
}
