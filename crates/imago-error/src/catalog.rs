use std::sync::LazyLock;

use http::StatusCode;
use strum::{EnumCount, EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::Error;

/// Shared error values, one per [`ErrorKind`] in declaration order
static CATALOG: LazyLock<Vec<Error>> = LazyLock::new(|| {
    ErrorKind::iter()
        .map(|kind| Error::new(kind.message(), i32::from(kind.status().as_u16())))
        .collect()
});

/// Named failure conditions reported by the image service
///
/// Every kind resolves to one process-wide [`Error`] built on first use and
/// never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCount, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// No route or resource matches the request
    NotFound,
    /// API key is missing or does not match
    InvalidApiKey,
    /// Method is not accepted by the endpoint
    MethodNotAllowed,
    /// GET requested while remote URL sources are disabled
    GetMethodNotAllowed,
    /// Request body has a media type the service cannot read
    UnsupportedMedia,
    /// Requested output format cannot be produced
    OutputFormat,
    /// Request body is empty or not a readable image
    EmptyBody,
    /// `file` query parameter is required but absent
    MissingParamFile,
    /// Local file path is malformed or outside the mount
    InvalidFilePath,
    /// Remote image URL is malformed or not allowed
    InvalidImageUrl,
    /// No usable image source in the request
    MissingImageSource,
    /// Endpoint exists but is not implemented
    NotImplemented,
    /// URL signature is malformed
    InvalidUrlSignature,
    /// URL signature does not match the request
    UrlSignatureMismatch,
    /// Image exceeds the allowed resolution
    ResolutionTooBig,
}

impl ErrorKind {
    /// Shared catalog value for this kind
    pub fn error(self) -> &'static Error {
        &CATALOG[self as usize]
    }

    /// Status declared for this kind
    pub const fn status(self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::InvalidApiKey => StatusCode::UNAUTHORIZED,
            Self::MethodNotAllowed | Self::GetMethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::UnsupportedMedia => StatusCode::NOT_ACCEPTABLE,
            Self::OutputFormat
            | Self::EmptyBody
            | Self::MissingParamFile
            | Self::InvalidFilePath
            | Self::InvalidImageUrl
            | Self::MissingImageSource
            | Self::InvalidUrlSignature => StatusCode::BAD_REQUEST,
            Self::NotImplemented => StatusCode::NOT_IMPLEMENTED,
            Self::UrlSignatureMismatch => StatusCode::FORBIDDEN,
            Self::ResolutionTooBig => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    /// Client-facing message for this kind
    pub const fn message(self) -> &'static str {
        match self {
            Self::NotFound => "Not found",
            Self::InvalidApiKey => "Invalid or missing API key",
            Self::MethodNotAllowed => {
                "HTTP method not allowed. Try with a POST or GET method (-enable-url-source flag must be defined)"
            }
            Self::GetMethodNotAllowed => {
                "GET method not allowed. Make sure remote URL source is enabled by using the flag: -enable-url-source"
            }
            Self::UnsupportedMedia => "Unsupported media type",
            Self::OutputFormat => "Unsupported output image format",
            Self::EmptyBody => "Empty or unreadable image",
            Self::MissingParamFile => "Missing required param: file",
            Self::InvalidFilePath => "Invalid file path",
            Self::InvalidImageUrl => "Invalid image URL",
            Self::MissingImageSource => "Cannot process the image due to missing or invalid params",
            Self::NotImplemented => "Not implemented endpoint",
            Self::InvalidUrlSignature => "Invalid URL signature",
            Self::UrlSignatureMismatch => "URL signature mismatch",
            Self::ResolutionTooBig => "Image resolution is too big",
        }
    }

    /// Stable `snake_case` name, e.g. `url_signature_mismatch`
    pub fn name(self) -> &'static str {
        self.into()
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        kind.error().clone()
    }
}
