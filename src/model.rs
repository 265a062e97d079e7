use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// One file entry from an upstream diff listing.
///
/// Deserializes from the provider's `{status, filename, previous_filename}`
/// shape. Statuses other than the four classified ones are kept as `Other`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "FileChangeWire")]
pub enum FileChange {
    Added {
        filename: String,
    },
    Removed {
        filename: String,
    },
    Modified {
        filename: String,
    },
    Renamed {
        filename: String,
        previous_filename: Option<String>,
    },
    Other {
        status: String,
        filename: String,
    },
}

impl FileChange {
    pub fn filename(&self) -> &str {
        match self {
            FileChange::Added { filename }
            | FileChange::Removed { filename }
            | FileChange::Modified { filename }
            | FileChange::Renamed { filename, .. }
            | FileChange::Other { filename, .. } => filename,
        }
    }

    pub fn status(&self) -> &str {
        match self {
            FileChange::Added { .. } => "added",
            FileChange::Removed { .. } => "removed",
            FileChange::Modified { .. } => "modified",
            FileChange::Renamed { .. } => "renamed",
            FileChange::Other { status, .. } => status,
        }
    }
}

#[derive(Deserialize)]
struct FileChangeWire {
    status: String,
    filename: String,
    #[serde(default)]
    previous_filename: Option<String>,
}

impl From<FileChangeWire> for FileChange {
    fn from(w: FileChangeWire) -> Self {
        let filename = w.filename;
        match w.status.as_str() {
            "added" => FileChange::Added { filename },
            "removed" => FileChange::Removed { filename },
            "modified" => FileChange::Modified { filename },
            "renamed" => FileChange::Renamed {
                filename,
                previous_filename: w.previous_filename,
            },
            _ => FileChange::Other {
                status: w.status,
                filename,
            },
        }
    }
}

/// A commit listed in a push payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRef {
    pub id: String,

    // Commits already on another branch (e.g. merged) arrive with distinct=false.
    #[serde(default)]
    pub distinct: bool,
}

impl CommitRef {
    pub fn new(id: impl Into<String>, distinct: bool) -> Self {
        Self {
            id: id.into(),
            distinct,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    #[serde(default)]
    pub changed_files: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
}

impl FromStr for RepoRef {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidRepository(s.to_string());
        let (owner, repo) = s.split_once('/').ok_or_else(invalid)?;
        if owner.is_empty() || repo.is_empty() || repo.contains('/') {
            return Err(invalid());
        }
        Ok(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

#[cfg(test)]
#[path = "tests/model_tests.rs"]
mod tests;
