use thiserror::Error;

pub const HTTP_CONFLICT: u16 = 409;

/// Failure of a call to the transactions API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The request never produced a response
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with HTTP {status}")]
    Http { status: u16 },
    #[error("failed to decode response: {0}")]
    Parse(String),
    #[error("failed to encode request: {0}")]
    Encode(String),
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Http { status } => Some(*status),
            _ => None,
        }
    }

    /// True when the server reported a duplicate (HTTP 409)
    pub fn is_conflict(&self) -> bool {
        self.status() == Some(HTTP_CONFLICT)
    }
}
