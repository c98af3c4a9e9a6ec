use std::convert::Infallible;
use std::fmt::Display;

use axum::body::Body;
use axum::response::{IntoResponse, Response};
use http::{
    StatusCode,
    header::{self, HeaderName, HeaderValue},
};

use crate::{Error, ErrorKind};

/// Writable target for a single HTTP response
///
/// Callers set headers first, then the status, then the body.
pub trait ResponseSink {
    /// Failure reported by [`ResponseSink::write_body`]
    type Error: Display;

    /// Set a header, replacing any previous value
    fn set_header(&mut self, name: HeaderName, value: HeaderValue);

    /// Set the status line
    fn write_status(&mut self, status: StatusCode);

    /// Write the response body
    fn write_body(&mut self, body: Vec<u8>) -> Result<(), Self::Error>;
}

impl ResponseSink for Response {
    type Error = Infallible;

    fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers_mut().insert(name, value);
    }

    fn write_status(&mut self, status: StatusCode) {
        *self.status_mut() = status;
    }

    fn write_body(&mut self, body: Vec<u8>) -> Result<(), Self::Error> {
        *self.body_mut() = Body::from(body);
        Ok(())
    }
}

/// Write a JSON error response to `sink`
///
/// The body has the form `{"error":"<description>", "status": <status>}`. The
/// status is written as given. A failed body write is logged and dropped since
/// there is nothing left to report it to.
pub fn send_error_response<S, E>(sink: &mut S, status: StatusCode, err: &E)
where
    S: ResponseSink + ?Sized,
    E: Display + ?Sized,
{
    let description = err.to_string();

    tracing::debug!(status = status.as_u16(), error = %description, "sending error response");

    sink.set_header(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    sink.write_status(status);

    if let Err(e) = sink.write_body(encode_error_body(&description, status)) {
        tracing::warn!(error = %e, status = status.as_u16(), "failed to write error response body");
    }
}

/// Build a JSON error response for `err` with the given status
pub fn error_response<E>(status: StatusCode, err: &E) -> Response
where
    E: Display + ?Sized,
{
    let mut response = Response::default();
    send_error_response(&mut response, status, err);
    response
}

fn encode_error_body(description: &str, status: StatusCode) -> Vec<u8> {
    // A plain string always encodes; the fallback keeps the body valid JSON.
    let description = serde_json::to_string(description).unwrap_or_else(|_| String::from("\"\""));

    format!("{{\"error\":{description}, \"status\": {}}}", status.as_u16()).into_bytes()
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        error_response(self.http_status(), &self)
    }
}

impl IntoResponse for ErrorKind {
    fn into_response(self) -> Response {
        let error = self.error();

        tracing::debug!(kind = self.name(), "responding with catalog error");

        error_response(error.http_status(), error)
    }
}
