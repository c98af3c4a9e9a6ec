use http::StatusCode;
use serde::Serialize;
use thiserror::Error;

/// Lowest code accepted as an HTTP error status
const MIN_ERROR_STATUS: i32 = 400;

/// Highest code accepted as an HTTP error status
const MAX_ERROR_STATUS: i32 = 511;

/// A failure condition with a client-facing message and an HTTP status code
///
/// The message never contains newlines, so it can be embedded in single-line
/// contexts such as log lines or header values. The code is advisory and only
/// validated by [`Error::http_status`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Error)]
#[error("{message}")]
pub struct Error {
    #[serde(skip_serializing_if = "String::is_empty")]
    message: String,
    #[serde(rename = "status")]
    code: i32,
}

impl Error {
    /// Create an error, stripping every newline from the message
    pub fn new(message: impl Into<String>, code: i32) -> Self {
        let mut message = message.into();
        message.retain(|c| c != '\n');

        Self { message, code }
    }

    /// Client-facing description of the failure
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Raw status code as given at construction
    pub const fn code(&self) -> i32 {
        self.code
    }

    /// Status to put on the wire
    ///
    /// Codes outside `400..=511` fall back to `503 Service Unavailable`.
    pub fn http_status(&self) -> StatusCode {
        if !(MIN_ERROR_STATUS..=MAX_ERROR_STATUS).contains(&self.code) {
            return StatusCode::SERVICE_UNAVAILABLE;
        }

        u16::try_from(self.code)
            .ok()
            .and_then(|code| StatusCode::from_u16(code).ok())
            .unwrap_or(StatusCode::SERVICE_UNAVAILABLE)
    }

    /// JSON body of the form `{"message": "...", "status": 404}`
    ///
    /// `message` is left out when empty. Encoding failures yield an empty
    /// buffer.
    pub fn to_json(&self) -> Vec<u8> {
        serde_json::to_vec(self).unwrap_or_else(|e| {
            tracing::warn!(error = %e, code = self.code, "failed to encode error as JSON");
            Vec::new()
        })
    }
}
