use std::time::Duration;

use anyhow::Error;
use async_trait::async_trait;

use crate::config::YoutubeConfig;
use crate::domain::channel::errors::ChannelError;
use crate::domain::channel::models::ChannelData;
use crate::domain::channel::models::ChannelId;
use crate::domain::channel::ports::ChannelDataFetcher;

/// Channel data fetcher backed by the YouTube Data API `channels` resource.
///
/// The upstream document is returned untouched as [`ChannelData`].
pub struct YoutubeChannelClient {
    client: reqwest::Client,
    channels_url: String,
    api_key: String,
    part: String,
}

impl YoutubeChannelClient {
    /// Build a client with its own connection pool and request timeout.
    ///
    /// # Errors
    /// Returns error if the underlying HTTP client cannot be constructed
    pub fn new(config: &YoutubeConfig) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self::with_client(client, config))
    }

    /// Build a client on top of an existing `reqwest::Client`.
    pub fn with_client(client: reqwest::Client, config: &YoutubeConfig) -> Self {
        Self {
            client,
            channels_url: format!("{}/channels", config.base_url.trim_end_matches('/')),
            api_key: config.api_key.clone(),
            part: config.part.clone(),
        }
    }
}

#[async_trait]
impl ChannelDataFetcher for YoutubeChannelClient {
    type Data = ChannelData;

    async fn fetch_channel_data(&self, id: &ChannelId) -> Result<ChannelData, ChannelError> {
        tracing::debug!(
            channel_id = %id,
            url = %self.channels_url,
            part = %self.part,
            "Fetching channel data"
        );

        // without_url keeps the api key out of error messages
        let response = self
            .client
            .get(&self.channels_url)
            .query(&[
                ("part", self.part.as_str()),
                ("id", id.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ChannelError::Upstream(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChannelError::UpstreamStatus(status.as_u16()));
        }

        response
            .json::<serde_json::Value>()
            .await
            .map(ChannelData::new)
            .map_err(|e| ChannelError::InvalidPayload(e.without_url().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;
    use serde_json::json;

    use super::*;

    fn test_config(base_url: String) -> YoutubeConfig {
        YoutubeConfig {
            base_url,
            api_key: "test-key".to_string(),
            part: "snippet,statistics".to_string(),
            timeout_seconds: 5,
        }
    }

    #[tokio::test]
    async fn test_fetch_channel_data_success() {
        let mut server = mockito::Server::new_async().await;
        let upstream = json!({
            "kind": "youtube#channelListResponse",
            "items": [{"id": "UC123", "statistics": {"subscriberCount": "42"}}]
        });
        let mock = server
            .mock("GET", "/channels")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("part".into(), "snippet,statistics".into()),
                Matcher::UrlEncoded("id".into(), "UC123".into()),
                Matcher::UrlEncoded("key".into(), "test-key".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(upstream.to_string())
            .expect(1)
            .create_async()
            .await;

        let client = YoutubeChannelClient::new(&test_config(server.url())).unwrap();
        let data = client
            .fetch_channel_data(&ChannelId::new("UC123"))
            .await
            .unwrap();

        assert_eq!(data.into_value(), upstream);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_channel_data_trailing_slash_in_base_url() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/channels")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let client = YoutubeChannelClient::new(&test_config(format!("{}/", server.url()))).unwrap();
        let data = client
            .fetch_channel_data(&ChannelId::new("UC123"))
            .await
            .unwrap();

        assert_eq!(data.into_value(), json!({}));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_channel_data_upstream_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/channels")
            .match_query(Matcher::Any)
            .with_status(403)
            .with_body(r#"{"error": {"code": 403}}"#)
            .create_async()
            .await;

        let client = YoutubeChannelClient::new(&test_config(server.url())).unwrap();
        let result = client.fetch_channel_data(&ChannelId::new("UC123")).await;

        assert_eq!(result.unwrap_err(), ChannelError::UpstreamStatus(403));
    }

    #[tokio::test]
    async fn test_fetch_channel_data_invalid_payload() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/channels")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let client = YoutubeChannelClient::new(&test_config(server.url())).unwrap();
        let result = client.fetch_channel_data(&ChannelId::new("UC123")).await;

        assert!(matches!(result, Err(ChannelError::InvalidPayload(_))));
    }

    #[tokio::test]
    async fn test_fetch_channel_data_connection_refused() {
        // Reserve a free port, then release it so nothing is listening
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let client =
            YoutubeChannelClient::new(&test_config(format!("http://127.0.0.1:{}", port))).unwrap();
        let result = client.fetch_channel_data(&ChannelId::new("UC123")).await;

        match result {
            Err(ChannelError::Upstream(message)) => assert!(!message.contains("test-key")),
            other => panic!("expected upstream error, got {:?}", other),
        }
    }
}
