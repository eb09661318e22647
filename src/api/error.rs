//! Error handling for the API module

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// Reqwest error, typically related to network issues or request failures.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not the JSON shape we expected.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub async fn from_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        ApiError::Http { status, message }
    }

    /// Status code of the failed request, if this was an HTTP-level failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
