use axum::http::header;
use axum::http::HeaderValue;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use serde::Serialize;

use crate::channel::errors::ChannelError;

pub mod get_channel_info;

/// Successful JSON response.
///
/// The body is fully encoded before the response is built, so an encoding
/// failure can never leave a half-written body behind a `200` status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSuccess(StatusCode, Vec<u8>);

impl ApiSuccess {
    /// Encode `data` as a newline-terminated JSON document.
    ///
    /// # Errors
    /// * `EncodeFailed` - `data` could not be serialized
    pub fn new<T: Serialize>(status: StatusCode, data: &T) -> Result<Self, ApiError> {
        let mut body =
            serde_json::to_vec(data).map_err(|e| ApiError::EncodeFailed(e.to_string()))?;
        body.push(b'\n');
        Ok(ApiSuccess(status, body))
    }
}

impl IntoResponse for ApiSuccess {
    fn into_response(self) -> Response {
        (
            self.0,
            [(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            )],
            self.1,
        )
            .into_response()
    }
}

/// Errors surfaced to HTTP clients.
///
/// The inner message is the cause for logs only; clients always get an opaque
/// plain-text body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    FetchFailed(String),
    EncodeFailed(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    pub fn public_message(&self) -> &'static str {
        match self {
            ApiError::FetchFailed(_) => "Error fetching data",
            ApiError::EncodeFailed(_) => "Error encoding response",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.public_message()).into_response()
    }
}

impl From<ChannelError> for ApiError {
    fn from(err: ChannelError) -> Self {
        match err {
            ChannelError::Upstream(_)
            | ChannelError::UpstreamStatus(_)
            | ChannelError::InvalidPayload(_) => ApiError::FetchFailed(err.to_string()),
        }
    }
}
