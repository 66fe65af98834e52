use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;

use crate::config::configuration::HttpConfig;

/// Builds the shared HTTP client. No timeout is applied unless `http.timeout_secs` is set.
pub fn build_client(http: &HttpConfig) -> Result<Client> {
    let mut builder = Client::builder().user_agent(http.user_agent.as_str());

    if let Some(timeout_secs) = http.timeout_secs {
        builder = builder.timeout(Duration::from_secs(timeout_secs));
    }

    builder.build().context("Failed to build HTTP client")
}
