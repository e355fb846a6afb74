use std::sync::Arc;

use channel_service::channel::ports::ChannelDataFetcher;
use channel_service::config::YoutubeConfig;
use channel_service::inbound::http::router::create_router;
use channel_service::outbound::youtube::YoutubeChannelClient;

pub const TEST_API_KEY: &str = "test-api-key";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application backed by the YouTube client pointed at `upstream_url`
    pub async fn spawn(upstream_url: &str) -> Self {
        let config = YoutubeConfig {
            base_url: upstream_url.to_string(),
            api_key: TEST_API_KEY.to_string(),
            part: "snippet,statistics".to_string(),
            timeout_seconds: 5,
        };
        let fetcher =
            YoutubeChannelClient::new(&config).expect("Failed to create YouTube channel client");

        Self::spawn_with(fetcher).await
    }

    /// Spawn the application in a background task with the given fetcher
    pub async fn spawn_with<F: ChannelDataFetcher>(fetcher: F) -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let router = create_router(Arc::new(fetcher));

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            api_client: reqwest::Client::new(),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }
}
