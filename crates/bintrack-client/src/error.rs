use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("authentication required")]
    AuthRequired,

    #[error("{message}")]
    NeedsConfig { message: String },

    #[error("{0}")]
    Rejected(String),

    #[error("unexpected response ({status}): {body}")]
    Status { status: u16, body: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid client configuration: {0}")]
    Config(String),
}

impl ClientError {
    pub fn is_auth_required(&self) -> bool {
        matches!(self, ClientError::AuthRequired)
    }

    pub fn is_needs_config(&self) -> bool {
        matches!(self, ClientError::NeedsConfig { .. })
    }
}
