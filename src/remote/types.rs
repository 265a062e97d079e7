//! Response shapes that differ from the model types.

use crate::model::FileChange;

#[derive(Debug, serde::Deserialize)]
pub(super) struct CommitResponse {
    pub(super) sha: String,

    // Omitted for commits GitHub cannot diff (e.g. too large).
    #[serde(default)]
    pub(super) files: Option<Vec<FileChange>>,
}
