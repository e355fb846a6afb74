use thiserror::Error;

/// Top-level error type for channel data retrieval
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChannelError {
    // Infrastructure errors
    #[error("Upstream request failed: {0}")]
    Upstream(String),

    #[error("Upstream responded with status {0}")]
    UpstreamStatus(u16),

    #[error("Upstream payload is not valid JSON: {0}")]
    InvalidPayload(String),
}

