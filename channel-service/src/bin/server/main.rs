use std::sync::Arc;

use channel_service::config::Config;
use channel_service::inbound::http::router::create_router;
use channel_service::outbound::youtube::YoutubeChannelClient;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "channel_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "channel-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        youtube_base_url = %config.youtube.base_url,
        youtube_part = %config.youtube.part,
        youtube_api_key_set = !config.youtube.api_key.is_empty(),
        youtube_timeout_seconds = config.youtube.timeout_seconds,
        "Configuration loaded"
    );

    if config.youtube.api_key.is_empty() {
        tracing::warn!("YOUTUBE__API_KEY is empty, upstream requests will be rejected");
    }

    let channel_fetcher = Arc::new(YoutubeChannelClient::new(&config.youtube)?);

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(channel_fetcher);

    if let Err(e) = axum::serve(http_listener, http_application).await {
        tracing::error!(error = %e, "Server error");
        return Err(e.into());
    }

    tracing::info!("Server exited successfully");

    Ok(())
}
