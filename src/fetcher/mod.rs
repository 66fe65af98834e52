use anyhow::{Context, Result};
use reqwest::Client;

use crate::config::configuration::{AppConfig, FetchMode};
use crate::fetcher::direct::DirectFetcher;
use crate::fetcher::fetch_page::{FetchError, FetchPage, Page};
use crate::fetcher::flaresolverr::FlareSolverrFetcher;

pub mod direct;
pub mod fetch_page;
pub mod flaresolverr;
#[cfg(test)]
mod test_server;

/// The page fetcher selected by `fetch.mode`.
pub enum Fetcher {
    Direct(DirectFetcher),
    FlareSolverr(FlareSolverrFetcher),
}

impl Fetcher {
    pub fn from_config(config: &AppConfig, client: Client) -> Result<Self> {
        match config.fetch.mode {
            FetchMode::Direct => Ok(Fetcher::Direct(DirectFetcher::new(client))),
            FetchMode::FlareSolverr => {
                let flaresolverr_url = config
                    .flaresolverr
                    .url
                    .clone()
                    .context("flaresolverr.url must be set to use FlareSolverr")?;
                Ok(Fetcher::FlareSolverr(FlareSolverrFetcher::new(
                    client,
                    flaresolverr_url,
                    config.flaresolverr.max_timeout_ms,
                )))
            }
        }
    }
}

impl FetchPage for Fetcher {
    async fn fetch_page(&self, url: &str) -> Result<Page, FetchError> {
        match self {
            Fetcher::Direct(fetcher) => fetcher.fetch_page(url).await,
            Fetcher::FlareSolverr(fetcher) => fetcher.fetch_page(url).await,
        }
    }
}
