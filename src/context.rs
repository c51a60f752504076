use crate::headers::Headers;

/// The request/response exchange a host hands to the engine.
///
/// Header lookups are case-insensitive. Implementations are `Send + Sync` so
/// that resolver futures borrowing the context can cross threads.
pub trait Context: Send + Sync {
    /// HTTP method of the incoming request, as received.
    fn method(&self) -> &str;

    fn request_header(&self, name: &str) -> Option<&str>;

    fn response_header(&self, name: &str) -> Option<&str>;

    fn set_response_header(&mut self, name: &str, value: &str);

    fn set_status(&mut self, status: u16);
}

/// In-memory [`Context`] for hosts that translate their own request types.
///
/// Response headers start empty; after the engine runs they contain exactly
/// what it set and can be copied onto the outgoing response.
#[derive(Debug, Clone, Default)]
pub struct Exchange {
    method: String,
    request_headers: Headers,
    response_headers: Headers,
    status: Option<u16>,
}

impl Exchange {
    pub fn new<M: Into<String>>(method: M) -> Self {
        Self {
            method: method.into(),
            ..Self::default()
        }
    }

    pub fn with_request_header<N, V>(mut self, name: N, value: V) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        self.request_headers.insert(name, value);
        self
    }

    pub fn with_response_header<N, V>(mut self, name: N, value: V) -> Self
    where
        N: Into<String>,
        V: Into<String>,
    {
        self.response_headers.insert(name, value);
        self
    }

    pub fn insert_request_header<N, V>(&mut self, name: N, value: V)
    where
        N: Into<String>,
        V: Into<String>,
    {
        self.request_headers.insert(name, value);
    }

    pub fn request_headers(&self) -> &Headers {
        &self.request_headers
    }

    pub fn response_headers(&self) -> &Headers {
        &self.response_headers
    }

    pub fn into_response_headers(self) -> Headers {
        self.response_headers
    }

    pub fn status(&self) -> Option<u16> {
        self.status
    }
}

impl Context for Exchange {
    fn method(&self) -> &str {
        &self.method
    }

    fn request_header(&self, name: &str) -> Option<&str> {
        self.request_headers.get(name)
    }

    fn response_header(&self, name: &str) -> Option<&str> {
        self.response_headers.get(name)
    }

    fn set_response_header(&mut self, name: &str, value: &str) {
        self.response_headers.insert(name, value);
    }

    fn set_status(&mut self, status: u16) {
        self.status = Some(status);
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
