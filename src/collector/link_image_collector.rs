use serde::Deserialize;
use thiserror::Error;

use crate::collector::progress::{NoProgress, Progress};
use crate::collector::result_set::ResultSet;
use crate::extractors::swatch_filter::is_large_swatch;
use crate::fetcher::fetch_page::{FetchError, FetchPage, Page};

/// What to do when a page cannot be fetched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Stop at the first failing URL.
    #[default]
    Abort,
    /// Record the failure and go on with the next URL.
    Skip,
}

#[derive(Debug)]
pub struct FetchFailure {
    pub url: String,
    pub error: FetchError,
}

/// Outcome of a completed run.
#[derive(Debug)]
pub struct Collection {
    /// Matching image URLs in first-seen order.
    pub images: Vec<String>,
    /// Pages skipped under [`FailurePolicy::Skip`].
    pub failures: Vec<FetchFailure>,
}

/// A run stopped by a fetch failure, with what had been collected before it.
#[derive(Debug, Error)]
#[error("failed to fetch {url}")]
pub struct CollectError {
    pub url: String,
    pub partial: Vec<String>,
    #[source]
    pub source: FetchError,
}

/// Walks a URL list sequentially and gathers the large swatch images of every page.
pub struct LinkImageCollector<F, P = NoProgress> {
    fetcher: F,
    policy: FailurePolicy,
    progress: P,
}

impl<F: FetchPage> LinkImageCollector<F> {
    pub fn new(fetcher: F) -> Self {
        LinkImageCollector {
            fetcher,
            policy: FailurePolicy::default(),
            progress: NoProgress,
        }
    }
}

impl<F: FetchPage, P: Progress> LinkImageCollector<F, P> {
    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_progress<Q: Progress>(self, progress: Q) -> LinkImageCollector<F, Q> {
        LinkImageCollector {
            fetcher: self.fetcher,
            policy: self.policy,
            progress,
        }
    }

    /// Fetch every non-blank line of `urls` in order and collect the distinct
    /// `src` values that name a large swatch image.
    ///
    /// # Errors
    ///
    /// Under [`FailurePolicy::Abort`], the first fetch failure ends the run
    /// with a [`CollectError`] holding the images found so far.
    pub async fn collect<S: AsRef<str>>(&self, urls: &[S]) -> Result<Collection, CollectError> {
        let total = urls.len();
        let mut results = ResultSet::new();
        let mut failures = Vec::new();

        for (index, line) in urls.iter().enumerate() {
            let url = line.as_ref().trim();
            if url.is_empty() {
                continue;
            }

            let page = match self.fetcher.fetch_page(url).await {
                Ok(page) => page,
                Err(error) => {
                    self.progress.page_failed(index + 1, total, url, &error);
                    match self.policy {
                        FailurePolicy::Abort => {
                            return Err(CollectError {
                                url: url.to_string(),
                                partial: results.into_vec(),
                                source: error,
                            });
                        }
                        FailurePolicy::Skip => {
                            failures.push(FetchFailure {
                                url: url.to_string(),
                                error,
                            });
                            continue;
                        }
                    }
                }
            };

            let new_images = collect_page(&page, &mut results);
            self.progress.page_done(index + 1, total, &page.url, new_images);
        }

        self.progress.finished(results.len(), failures.len());

        Ok(Collection {
            images: results.into_vec(),
            failures,
        })
    }
}

/// Adds the page's qualifying images to `results`, returning how many were new.
fn collect_page(page: &Page, results: &mut ResultSet) -> usize {
    let mut new_images = 0;

    for image in page.find_images() {
        let Some(src) = image.attr("src") else {
            continue;
        };
        if is_large_swatch(src) && results.insert(src) {
            new_images += 1;
        }
    }

    new_images
}
