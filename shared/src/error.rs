//! Error types for the places function.

use thiserror::Error;

use crate::models::ErrorBody;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while serving a places request.
#[derive(Error, Debug)]
pub enum Error {
    /// Token or base id not configured
    #[error("Airtable credentials not configured")]
    CredentialsMissing,

    /// Airtable answered with a non-2xx status
    #[error("Airtable API error: {status} {status_text}")]
    Upstream { status: u16, status_text: String },

    /// Request could not be sent or its body could not be read.
    /// The URL is stripped before it is stored here.
    #[error("Airtable request failed: {0}")]
    Transport(reqwest::Error),

    /// Response body is not the expected JSON shape
    #[error("Invalid Airtable response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err.without_url())
    }
}

impl Error {
    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        500
    }

    /// Response body for this error.
    pub fn body(&self) -> ErrorBody {
        match self {
            Error::CredentialsMissing => ErrorBody::new(
                "Airtable credentials not configured",
                "Please set environment variables in Netlify",
            ),
            _ => ErrorBody::new("Failed to fetch places", self.to_string()),
        }
    }

    /// Short name of the error kind, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::CredentialsMissing => "credentials_missing",
            Error::Upstream { .. } => "upstream_status",
            Error::Transport(_) => "transport",
            Error::Decode(_) => "decode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_message_includes_status() {
        let err = Error::Upstream {
            status: 404,
            status_text: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "Airtable API error: 404 Not Found");
        assert_eq!(err.status_code(), 500);

        let body = err.body();
        assert_eq!(body.error, "Failed to fetch places");
        assert_eq!(body.message, "Airtable API error: 404 Not Found");
    }

    #[test]
    fn test_credentials_body() {
        let body = Error::CredentialsMissing.body();
        assert_eq!(body.error, "Airtable credentials not configured");
        assert_eq!(body.message, "Please set environment variables in Netlify");
    }

    #[test]
    fn test_decode_error_uses_runtime_body() {
        let err: Error = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert_eq!(err.kind(), "decode");
        assert_eq!(err.body().error, "Failed to fetch places");
    }
}
