use std::iter::FusedIterator;

use anyhow::Result;

use super::{ChangeProvider, Pagination};
use crate::changes::ChangeSet;
use crate::filter::PatternFilter;
use crate::model::FileChange;

/// Files per page requested from the provider (the GitHub maximum).
pub const PAGE_SIZE: u32 = 100;

/// Lazily fetches the pages of a pull request's file listing, in order.
///
/// Each call to `next` issues at most one provider request. The sequence ends
/// after a short or empty page, once an expected count is covered, or after
/// the first error.
pub struct PullRequestPages<'a, P: ?Sized> {
    provider: &'a P,
    pr: u64,
    per_page: u32,
    max_pages: Option<u64>,
    fetched: u32,
    done: bool,
}

impl<'a, P: ChangeProvider + ?Sized> PullRequestPages<'a, P> {
    pub fn new(provider: &'a P, pr: u64, pagination: Pagination) -> Self {
        Self::with_page_size(provider, pr, pagination, PAGE_SIZE)
    }

    pub fn with_page_size(provider: &'a P, pr: u64, pagination: Pagination, per_page: u32) -> Self {
        let per_page = per_page.max(1);
        let max_pages = match pagination {
            Pagination::UntilExhausted => None,
            Pagination::ExpectedCount(n) => Some(n.div_ceil(u64::from(per_page))),
        };
        Self {
            provider,
            pr,
            per_page,
            max_pages,
            fetched: 0,
            done: false,
        }
    }

    pub fn pages_fetched(&self) -> u32 {
        self.fetched
    }
}

impl<P: ChangeProvider + ?Sized> Iterator for PullRequestPages<'_, P> {
    type Item = Result<Vec<FileChange>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self
            .max_pages
            .is_some_and(|max| u64::from(self.fetched) >= max)
        {
            self.done = true;
            return None;
        }

        let page = self.fetched + 1;
        let files = match self
            .provider
            .list_pull_request_files(self.pr, page, self.per_page)
        {
            Ok(files) => files,
            Err(err) => {
                self.done = true;
                return Some(Err(err.context(format!(
                    "list files of pull request #{} (page {})",
                    self.pr, page
                ))));
            }
        };
        self.fetched = page;
        tracing::debug!(pr = self.pr, page, files = files.len(), "fetched pull request page");

        if files.len() < self.per_page as usize {
            self.done = true;
        }
        if files.is_empty() {
            return None;
        }
        Some(Ok(files))
    }
}

impl<P: ChangeProvider + ?Sized> FusedIterator for PullRequestPages<'_, P> {}

/// Classifies every file of a pull request, fetching pages one at a time.
pub fn changed_files_for_pull_request<P: ChangeProvider + ?Sized>(
    provider: &P,
    filter: PatternFilter,
    pr: u64,
    pagination: Pagination,
) -> Result<ChangeSet> {
    let mut changes = ChangeSet::new(filter);
    let mut pages = PullRequestPages::new(provider, pr, pagination);
    for page in &mut pages {
        let files = page?;
        changes.extend(&files);
    }
    tracing::debug!(pr, pages = pages.pages_fetched(), "pull request listing exhausted");
    Ok(changes)
}
