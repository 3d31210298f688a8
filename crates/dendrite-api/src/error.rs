use http::StatusCode;
use serde::Serialize;
use thiserror::Error;

/// Errors that invalidate a whole request during normalization
#[derive(Debug, Error)]
pub enum ApiError {
    /// Required field missing or a field has the wrong JSON type
    #[error("malformed request: {0}")]
    MalformedRequest(String),

    /// Request body is not valid JSON
    #[error("invalid JSON body: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl ApiError {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedRequest(message.into())
    }

    /// Prefix the message with the location of the offending value
    #[must_use]
    pub(crate) fn at(self, location: &str) -> Self {
        match self {
            Self::MalformedRequest(message) => Self::MalformedRequest(format!("{location}: {message}")),
            other => other,
        }
    }

    /// HTTP status the transport layer should answer with
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MalformedRequest(_) | Self::InvalidJson(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Machine-readable error type (e.g. `invalid_request_error`)
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::MalformedRequest(_) | Self::InvalidJson(_) => "invalid_request_error",
        }
    }

    /// Build the `OpenAI` error envelope for this error
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: ErrorDetail {
                message: self.to_string(),
                error_type: self.error_type().to_owned(),
                param: None,
                code: None,
            },
        }
    }
}

/// `OpenAI` error response body
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error details
    pub error: ErrorDetail,
}

/// `OpenAI` error detail
#[derive(Debug, Clone, Serialize)]
pub struct ErrorDetail {
    /// Error message
    pub message: String,
    /// Error type
    #[serde(rename = "type")]
    pub error_type: String,
    /// Parameter that caused the error
    pub param: Option<String>,
    /// Error code
    pub code: Option<String>,
}
