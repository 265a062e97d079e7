use crate::filter::PatternFilter;
use crate::model::FileChange;

/// Accumulates file changes into created/updated/deleted paths.
///
/// Sequences keep arrival order and tolerate duplicates; a file touched by
/// several commits of a push is listed once per commit.
#[derive(Clone, Debug)]
pub struct ChangeSet {
    filter: PatternFilter,
    created: Vec<String>,
    updated: Vec<String>,
    deleted: Vec<String>,
}

impl ChangeSet {
    pub fn new(filter: PatternFilter) -> Self {
        Self {
            filter,
            created: Vec::new(),
            updated: Vec::new(),
            deleted: Vec::new(),
        }
    }

    pub fn apply(&mut self, change: &FileChange) {
        if !self.filter.matches(change.filename()) {
            return;
        }

        match change {
            FileChange::Added { filename } => self.created.push(filename.clone()),
            FileChange::Removed { filename } => self.deleted.push(filename.clone()),
            FileChange::Modified { filename } => self.updated.push(filename.clone()),
            FileChange::Renamed {
                filename,
                previous_filename,
            } => {
                self.created.push(filename.clone());
                // The old path only counts as deleted if it was in scope itself.
                if let Some(prev) = previous_filename {
                    if self.filter.matches(prev) {
                        self.deleted.push(prev.clone());
                    }
                }
            }
            FileChange::Other { status, filename } => {
                tracing::debug!(status = %status, filename = %filename, "ignoring file status");
            }
        }
    }

    pub fn extend<'a>(&mut self, changes: impl IntoIterator<Item = &'a FileChange>) {
        for change in changes {
            self.apply(change);
        }
    }

    pub fn created(&self) -> &[String] {
        &self.created
    }

    pub fn updated(&self) -> &[String] {
        &self.updated
    }

    pub fn deleted(&self) -> &[String] {
        &self.deleted
    }

    pub fn len(&self) -> usize {
        self.created.len() + self.updated.len() + self.deleted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
#[path = "tests/changes_tests.rs"]
mod tests;
