use async_trait::async_trait;
use serde::Serialize;

use super::models::ChannelId;
use crate::domain::channel::errors::ChannelError;

/// Port for fetching channel data from an external source.
#[async_trait]
pub trait ChannelDataFetcher: Send + Sync + 'static {
    /// Document produced by the fetcher, serialized as-is into the response.
    type Data: Serialize + Send;

    /// Fetch data for a single channel.
    ///
    /// # Arguments
    /// * `id` - Channel identifier, unvalidated
    ///
    /// # Returns
    /// Channel data document
    ///
    /// # Errors
    /// * `Upstream` - Request to the data source failed
    /// * `UpstreamStatus` - Data source answered with a non-success status
    /// * `InvalidPayload` - Data source answered with a body that is not JSON
    async fn fetch_channel_data(&self, id: &ChannelId) -> Result<Self::Data, ChannelError>;
}
