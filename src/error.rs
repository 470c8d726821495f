use thiserror::Error;

/// Failures talking to the users service.
///
/// This is the only place failures carry a kind. Past the HTTP boundary the
/// widget keeps nothing but the display string.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("{0}")]
    Transport(String),
    #[error("Request failed with status code {0}")]
    Status(u16),
    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            ApiError::Status(status.as_u16())
        } else if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Errors seen by holders of a [`ProfileWidgetClient`](crate::clients::ProfileWidgetClient).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum WidgetError {
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
