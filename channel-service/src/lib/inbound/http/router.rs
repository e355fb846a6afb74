use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::get_channel_info::get_channel_info;
use crate::domain::channel::ports::ChannelDataFetcher;

/// Application state shared by the HTTP handlers.
pub struct AppState<F: ChannelDataFetcher> {
    pub channel_fetcher: Arc<F>,
}

impl<F: ChannelDataFetcher> Clone for AppState<F> {
    fn clone(&self) -> Self {
        Self {
            channel_fetcher: Arc::clone(&self.channel_fetcher),
        }
    }
}

pub fn create_router<F: ChannelDataFetcher>(channel_fetcher: Arc<F>) -> Router {
    let state = AppState { channel_fetcher };

    let api_routes = Router::new().route("/api/youtube/channels/:id", get(get_channel_info::<F>));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(api_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
