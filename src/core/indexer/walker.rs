//! Directory walker and grouper.
//!
//! Every directory below the root becomes a group named after the
//! directory itself, regardless of depth. Asset directories and
//! hidden directories are skipped together with everything under
//! them. Documents are the files directly inside a group directory
//! whose name matches the document pattern, in file-name order.
//! Walk errors (permission denied, etc.) are recorded and the walk
//! carries on.

use glob::Pattern;
use std::path::{Component, Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::core::config::Config;
use crate::core::error::{IndexError, Result};
use crate::core::indexer::title::normalize_title_with;
use crate::core::manifest::{GroupSlot, ManifestBuilder};
use crate::core::types::{Diagnostic, FileEntry};

/// A document found by the walker, already listed in the manifest
#[derive(Debug, Clone)]
pub struct DiscoveredDocument {
    /// Path on disk
    pub source: PathBuf,

    /// Owning group id
    pub group: String,

    /// File name including extension
    pub file_name: String,

    /// Manifest entry (relative path and display title)
    pub entry: FileEntry,
}

/// Documents found by one walk, in walk order
#[derive(Debug, Default)]
pub struct WalkOutput {
    pub documents: Vec<DiscoveredDocument>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Directory walker that builds manifest groups
pub struct DocumentWalker {
    /// Directory name holding assets (e.g. "media")
    asset_dir: String,

    /// Prefix of hidden directory names (e.g. ".")
    hidden_prefix: String,

    /// Pattern matched against file names
    document_pattern: Pattern,

    /// Title for files whose name reduces to nothing
    fallback_title: String,
}

impl DocumentWalker {
    /// Create a new walker
    ///
    /// # Arguments
    ///
    /// * `asset_dir` - Directory name to skip
    /// * `hidden_prefix` - Directory name prefix to skip
    /// * `document_pattern` - Glob for document file names
    /// * `fallback_title` - Title when a file name reduces to nothing
    ///
    /// # Returns
    ///
    /// A new `DocumentWalker` or an error if the pattern is invalid
    pub fn new(
        asset_dir: impl Into<String>,
        hidden_prefix: impl Into<String>,
        document_pattern: &str,
        fallback_title: impl Into<String>,
    ) -> Result<Self> {
        let document_pattern = Pattern::new(document_pattern).map_err(|e| {
            IndexError::ConfigError(format!("Invalid document pattern '{document_pattern}': {e}"))
        })?;

        Ok(Self {
            asset_dir: asset_dir.into(),
            hidden_prefix: hidden_prefix.into(),
            document_pattern,
            fallback_title: fallback_title.into(),
        })
    }

    /// Create a walker from the walk section of a configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.walk.asset_dir.clone(),
            config.walk.hidden_prefix.clone(),
            &config.walk.document_pattern,
            config.document.fallback_title.clone(),
        )
    }

    /// Walk `root`, registering groups and files on `manifest`
    ///
    /// # Returns
    ///
    /// The discovered documents in walk order plus any diagnostics
    pub fn walk(&self, root: &Path, manifest: &mut ManifestBuilder) -> WalkOutput {
        let mut output = WalkOutput::default();

        for entry in WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| self.should_process_entry(e))
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Walk error: {}", e);
                    output.diagnostics.push(Diagnostic::WalkError {
                        message: e.to_string(),
                    });
                    continue;
                }
            };

            // The root itself is never a group
            if entry.depth() == 0 || !entry.file_type().is_dir() {
                continue;
            }

            let group_id = entry.file_name().to_string_lossy().into_owned();
            let directory = relative_path(root, entry.path());

            if manifest.ensure_group(&group_id, &directory) == GroupSlot::Merged {
                tracing::debug!("Merging {} into group '{}'", directory, group_id);
                output.diagnostics.push(Diagnostic::GroupMerged {
                    group: group_id.clone(),
                    directory: directory.clone(),
                });
            }

            self.collect_documents(root, entry.path(), &group_id, manifest, &mut output);
        }

        output
    }

    /// Add the matching files directly inside `dir` to its group
    fn collect_documents(
        &self,
        root: &Path,
        dir: &Path,
        group_id: &str,
        manifest: &mut ManifestBuilder,
        output: &mut WalkOutput,
    ) {
        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Walk error: {}", e);
                    output.diagnostics.push(Diagnostic::WalkError {
                        message: e.to_string(),
                    });
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                continue;
            }

            let file_name = entry.file_name().to_string_lossy().into_owned();
            if !self.document_pattern.matches(&file_name) {
                continue;
            }

            let stem = Path::new(&file_name)
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();

            let file_entry = FileEntry {
                path: relative_path(root, entry.path()),
                title: normalize_title_with(&stem, group_id, &self.fallback_title),
            };

            manifest.add_file(group_id, file_entry.clone());
            output.documents.push(DiscoveredDocument {
                source: entry.path().to_path_buf(),
                group: group_id.to_string(),
                file_name,
                entry: file_entry,
            });
        }
    }

    /// Determine if a directory entry should be processed
    ///
    /// Filters out asset and hidden directories along with their
    /// subtrees. Never filters the root directory itself.
    fn should_process_entry(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return true;
        }

        let name = entry.file_name().to_string_lossy();
        if name == self.asset_dir.as_str() {
            tracing::debug!("Skipping asset directory: {:?}", entry.path());
            return false;
        }
        if name.starts_with(self.hidden_prefix.as_str()) {
            tracing::debug!("Skipping hidden directory: {:?}", entry.path());
            return false;
        }

        true
    }
}

/// Path of `path` relative to `root`, `/` separated on every OS
pub fn relative_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
