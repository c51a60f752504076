use crate::constants::status;
use crate::headers::Headers;
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure raised by a request handler or a configuration resolver.
///
/// The error carries an optional header bag so that an outer layer turning it
/// into a response can still emit the headers the engine already decided on.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpError {
    status: u16,
    message: String,
    headers: Option<Headers>,
    #[source]
    source: Option<BoxError>,
}

impl HttpError {
    pub fn new<S: Into<String>>(status: u16, message: S) -> Self {
        Self {
            status,
            message: message.into(),
            headers: None,
            source: None,
        }
    }

    /// Wraps an arbitrary error as a `500 Internal Server Error`.
    pub fn internal<E: Into<BoxError>>(err: E) -> Self {
        let source = err.into();
        Self {
            status: status::INTERNAL_SERVER_ERROR,
            message: source.to_string(),
            headers: None,
            source: Some(source),
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn headers(&self) -> Option<&Headers> {
        self.headers.as_ref()
    }

    pub fn with_header<N, V>(mut self, name: N, value: V) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        self.headers
            .get_or_insert_with(Headers::new)
            .insert(name, value);
        self
    }

    /// Replaces the carried header bag.
    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers = Some(headers);
        self
    }
}

/// Errors returned by [`crate::vary::append`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VaryError {
    #[error("field name `{0}` is not a valid HTTP header token")]
    InvalidFieldName(String),
}

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;
