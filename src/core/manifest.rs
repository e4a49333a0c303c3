//! Manifest assembly.
//!
//! The walker registers groups and files on a [`ManifestBuilder`] as it
//! discovers them; [`ManifestBuilder::build`] produces the final,
//! id-sorted list of groups.

use std::collections::HashMap;

use crate::core::types::{FileEntry, Group};

/// Outcome of registering a directory as a group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupSlot {
    /// First directory with this name
    Created,
    /// The same directory registered again
    Reused,
    /// A different directory with an already known name
    Merged,
}

#[derive(Debug)]
struct PendingGroup {
    group: Group,
    /// Relative path of the first directory that created the group
    origin: String,
}

/// Accumulates groups for one run
#[derive(Debug, Default)]
pub struct ManifestBuilder {
    groups: HashMap<String, PendingGroup>,
}

impl ManifestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create or reuse the group named `id` for `directory`
    ///
    /// Groups are keyed by directory name only, so differently nested
    /// directories sharing a name fold into one group. That case is
    /// reported as [`GroupSlot::Merged`].
    pub fn ensure_group(&mut self, id: &str, directory: &str) -> GroupSlot {
        match self.groups.get(id) {
            Some(pending) if pending.origin == directory => GroupSlot::Reused,
            Some(_) => GroupSlot::Merged,
            None => {
                self.groups.insert(
                    id.to_string(),
                    PendingGroup {
                        group: Group {
                            id: id.to_string(),
                            title: id.to_string(),
                            files: Vec::new(),
                        },
                        origin: directory.to_string(),
                    },
                );
                GroupSlot::Created
            }
        }
    }

    /// Append a file to an existing group. Returns false if the group
    /// was never registered.
    pub fn add_file(&mut self, group_id: &str, entry: FileEntry) -> bool {
        match self.groups.get_mut(group_id) {
            Some(pending) => {
                pending.group.files.push(entry);
                true
            }
            None => false,
        }
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn file_count(&self) -> usize {
        self.groups.values().map(|p| p.group.files.len()).sum()
    }

    /// Final manifest, sorted by group id. File order is kept as added.
    pub fn build(self) -> Vec<Group> {
        let mut groups: Vec<Group> = self.groups.into_values().map(|p| p.group).collect();
        groups.sort_by(|a, b| a.id.cmp(&b.id));
        groups
    }
}
