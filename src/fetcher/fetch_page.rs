use reqwest::StatusCode;
use thiserror::Error;

use crate::extractors::image_elements::{find_images, ImageElement};

/// A fetched HTML page, dropped once its images have been read.
#[derive(Debug, Clone)]
pub struct Page {
    /// Final URL of the page, after redirects.
    pub url: String,
    pub html: String,
}

impl Page {
    pub fn new(url: impl Into<String>, html: impl Into<String>) -> Self {
        Page {
            url: url.into(),
            html: html.into(),
        }
    }

    pub fn find_images(&self) -> Vec<ImageElement> {
        find_images(&self.html)
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{url} answered with HTTP status {status}")]
    Status { url: String, status: StatusCode },

    #[error("FlareSolverr could not fetch {url}: {message}")]
    FlareSolverr { url: String, message: String },
}

pub trait FetchPage {
    async fn fetch_page(&self, url: &str) -> Result<Page, FetchError>;
}
