use reqwest::{header, Client, StatusCode};
use serde::Deserialize;
use serde_json::json;

use crate::fetcher::fetch_page::{FetchError, FetchPage, Page};

#[derive(Debug, Deserialize)]
struct FlareSolverrResponse {
    status: String,
    #[serde(default)]
    message: String,
    solution: Option<Solution>,
}

#[derive(Debug, Deserialize)]
struct Solution {
    url: String,
    status: u16,
    response: String,
}

/// Fetches pages through a FlareSolverr proxy, which renders them in a
/// headless browser and returns the resulting HTML.
pub struct FlareSolverrFetcher {
    client: Client,
    flaresolverr_url: String,
    max_timeout_ms: u64,
}

impl FlareSolverrFetcher {
    pub fn new(client: Client, flaresolverr_url: String, max_timeout_ms: u64) -> Self {
        FlareSolverrFetcher {
            client,
            flaresolverr_url,
            max_timeout_ms,
        }
    }
}

impl FetchPage for FlareSolverrFetcher {
    async fn fetch_page(&self, url: &str) -> Result<Page, FetchError> {
        let data = json!({
            "cmd": "request.get",
            "url": url,
            "maxTimeout": self.max_timeout_ms
        });

        let response = self
            .client
            .post(&self.flaresolverr_url)
            .header(header::CONTENT_TYPE, "application/json")
            .json(&data)
            .send()
            .await?;

        let proxy_status = response.status();
        if !proxy_status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::FlareSolverr {
                url: url.to_string(),
                message: format!("proxy answered {}: {}", proxy_status, body.trim()),
            });
        }

        let body: FlareSolverrResponse = response.json().await?;

        if body.status != "ok" {
            return Err(FetchError::FlareSolverr {
                url: url.to_string(),
                message: body.message,
            });
        }

        let solution = body.solution.ok_or_else(|| FetchError::FlareSolverr {
            url: url.to_string(),
            message: "response carries no solution".to_string(),
        })?;

        // Status of the target page, as seen by the proxy's browser
        let status = StatusCode::from_u16(solution.status).map_err(|_| FetchError::FlareSolverr {
            url: url.to_string(),
            message: format!("invalid page status {}", solution.status),
        })?;
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        Ok(Page::new(solution.url, solution.response))
    }
}
