use anyhow::{Context, Result};

use super::ChangeProvider;
use crate::changes::ChangeSet;
use crate::filter::PatternFilter;
use crate::model::{CommitRef, FileChange};

/// Classifies the files touched by the distinct commits of a push.
///
/// Every distinct commit is fetched on its own scoped thread. All fetches are
/// joined before any result is applied, then each commit's files are applied
/// as one batch in commit-list order, so completion order never shows up in
/// the output. The first failure in commit order fails the whole push.
pub fn changed_files_for_push<P: ChangeProvider + ?Sized>(
    provider: &P,
    filter: PatternFilter,
    commits: &[CommitRef],
) -> Result<ChangeSet> {
    let distinct: Vec<&CommitRef> = commits
        .iter()
        .filter(|c| {
            if !c.distinct {
                tracing::debug!(commit = %c.id, "skipping non-distinct commit");
            }
            c.distinct
        })
        .collect();

    let fetched: Vec<Result<Vec<FileChange>>> = std::thread::scope(|s| {
        let handles = distinct
            .iter()
            .map(|c| {
                let id = c.id.as_str();
                s.spawn(move || {
                    tracing::debug!(commit = %id, "fetching commit files");
                    provider.get_commit_files(id)
                })
            })
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .zip(&distinct)
            .map(|(h, c)| {
                h.join()
                    .unwrap_or_else(|_| Err(anyhow::anyhow!("fetch of commit {} panicked", c.id)))
            })
            .collect()
    });

    let mut changes = ChangeSet::new(filter);
    for (commit, files) in distinct.iter().zip(fetched) {
        let files = files.with_context(|| format!("get files of commit {}", commit.id))?;
        changes.extend(&files);
    }
    Ok(changes)
}
