//! Error values for the Imago image service
//!
//! A closed catalog of failure conditions ([`ErrorKind`]), the error value
//! they resolve to ([`Error`]), and the helpers that turn either into a JSON
//! HTTP response.

#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]

mod catalog;
mod error;
mod response;

pub use catalog::ErrorKind;
pub use error::Error;
pub use response::{ResponseSink, error_response, send_error_response};
