//! Data source error handling
//!
//! Every failure mode of a list fetch collapses into [`FetchError`]. The
//! controller logs these and keeps showing its last known page.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("List endpoint unavailable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("List endpoint returned {status}: {message}")]
    Status { status: StatusCode, message: String },

    #[error("Invalid list payload: {0}")]
    Decode(String),

    #[error("List fetch ended without a response")]
    Interrupted,
}

impl FetchError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Transport(_) => "TRANSPORT_ERROR",
            Self::Status { .. } => "STATUS_ERROR",
            Self::Decode(_) => "DECODE_ERROR",
            Self::Interrupted => "INTERRUPTED",
        }
    }

    /// Log the failure at the level its kind warrants.
    pub fn log(&self) {
        match self {
            Self::Transport(e) => {
                tracing::warn!(code = self.error_code(), error = %e, "List fetch failed");
            }
            Self::Interrupted => {
                tracing::error!(code = self.error_code(), "List fetch ended without a response");
            }
            Self::Status { status, .. } if status.is_server_error() => {
                tracing::error!(code = self.error_code(), error = %self, "List endpoint error");
            }
            _ => {
                tracing::warn!(code = self.error_code(), error = %self, "List fetch rejected");
            }
        }
    }
}

pub type FetchResult<T> = Result<T, FetchError>;
