//! Curated video feed: one fixed endpoint serving a JSON array of URLs.

use super::Unavailable;

const FEED_URL: &str = "https://raw.githubusercontent.com/atrium-sh/feeds/main/videos.json";

#[derive(Debug, Clone)]
pub struct VideoFeedClient {
    client: reqwest::Client,
    feed_url: String,
}

impl VideoFeedClient {
    pub fn new() -> Self {
        Self {
            client: super::http_client(),
            feed_url: FEED_URL.to_string(),
        }
    }

    #[cfg(test)]
    pub fn with_feed_url(feed_url: impl Into<String>) -> Self {
        Self {
            client: super::http_client(),
            feed_url: feed_url.into(),
        }
    }

    /// Single attempt. HTTP error, malformed JSON, and an empty array are
    /// all the same failure to the caller.
    pub async fn fetch(&self) -> Result<Vec<String>, Unavailable> {
        let response = self
            .client
            .get(&self.feed_url)
            .send()
            .await
            .map_err(|e| Unavailable::new(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(Unavailable::new(format!("status {}", response.status())));
        }

        let urls: Vec<String> = response
            .json()
            .await
            .map_err(|e| Unavailable::new(format!("malformed feed: {e}")))?;

        if urls.is_empty() {
            return Err(Unavailable::new("empty feed"));
        }
        Ok(urls)
    }
}

impl Default for VideoFeedClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unreachable_endpoint_is_unavailable() {
        // Nothing listens on the discard port; the connection is refused.
        let client = VideoFeedClient::with_feed_url("http://127.0.0.1:9/videos.json");
        let err = client.fetch().await.unwrap_err();
        assert!(err.reason.contains("request failed"));
    }
}
