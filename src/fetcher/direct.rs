use reqwest::Client;

use crate::fetcher::fetch_page::{FetchError, FetchPage, Page};

/// Fetches pages with a plain GET request.
pub struct DirectFetcher {
    client: Client,
}

impl DirectFetcher {
    pub fn new(client: Client) -> Self {
        DirectFetcher { client }
    }
}

impl FetchPage for DirectFetcher {
    async fn fetch_page(&self, url: &str) -> Result<Page, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let final_url = response.url().to_string();
        let html = response.text().await?;

        Ok(Page::new(final_url, html))
    }
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::*;
    use crate::fetcher::test_server::serve_once;

    fn fetcher() -> DirectFetcher {
        DirectFetcher::new(Client::builder().no_proxy().build().unwrap())
    }

    #[tokio::test]
    async fn returns_page_body() {
        let (base_url, request) = serve_once(
            "200 OK",
            "text/html; charset=utf-8",
            r#"<img src="/swatches/red-l.jpg">"#,
        )
        .await;

        let page = fetcher()
            .fetch_page(&format!("{}/colors", base_url))
            .await
            .unwrap();

        assert_eq!(page.url, format!("{}/colors", base_url));
        assert_eq!(page.find_images()[0].attr("src"), Some("/swatches/red-l.jpg"));
        assert!(request.await.unwrap().starts_with("GET /colors HTTP/1.1"));
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let (base_url, _request) = serve_once("404 Not Found", "text/html", "gone").await;

        let err = fetcher()
            .fetch_page(&format!("{}/missing", base_url))
            .await
            .unwrap_err();

        match err {
            FetchError::Status { url, status } => {
                assert_eq!(url, format!("{}/missing", base_url));
                assert_eq!(status, StatusCode::NOT_FOUND);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn unreachable_host_is_a_request_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = fetcher()
            .fetch_page(&format!("http://{}/", addr))
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Request(_)));
    }
}
