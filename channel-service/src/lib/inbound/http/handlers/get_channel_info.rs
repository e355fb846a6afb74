use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use crate::domain::channel::models::ChannelId;
use crate::domain::channel::ports::ChannelDataFetcher;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Route variables of `/api/youtube/channels/:id`
#[derive(Debug, Clone, Deserialize)]
pub struct ChannelInfoPath {
    pub id: String,
}

/// Fetch channel data for the route id and return it as JSON.
///
/// The fetcher is called exactly once; the id is not validated.
pub async fn get_channel_info<F: ChannelDataFetcher>(
    State(state): State<AppState<F>>,
    Path(path): Path<ChannelInfoPath>,
) -> Result<ApiSuccess, ApiError> {
    let channel_id = ChannelId::new(path.id);

    let data = state
        .channel_fetcher
        .fetch_channel_data(&channel_id)
        .await
        .map_err(|e| {
            tracing::error!(channel_id = %channel_id, error = %e, "Error fetching channel data");
            ApiError::from(e)
        })?;

    ApiSuccess::new(StatusCode::OK, &data).inspect_err(|e| {
        tracing::error!(channel_id = %channel_id, error = ?e, "Error encoding channel data");
    })
}
