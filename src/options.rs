use crate::constants::method;
use crate::credentials::Credentials;
use crate::header_list::HeaderList;
use crate::origin::Origin;

/// Configuration for a [`crate::Cors`] instance.
///
/// Empty values behave as if the field were not configured.
#[derive(Clone, Debug)]
pub struct CorsOptions {
    pub origin: Origin,
    /// `Access-Control-Allow-Methods` on preflight. `None` omits the header.
    pub allow_methods: Option<HeaderList>,
    /// `Access-Control-Expose-Headers` on simple requests.
    pub expose_headers: Option<HeaderList>,
    /// `Access-Control-Allow-Headers` on preflight. When absent the request's
    /// `Access-Control-Request-Headers` is echoed back.
    pub allow_headers: Option<HeaderList>,
    /// `Access-Control-Max-Age` in seconds.
    pub max_age: Option<String>,
    pub credentials: Credentials,
    /// Copy the headers set on a simple request onto a downstream failure.
    pub keep_headers_on_error: bool,
    /// Emit `Cross-Origin-Opener-Policy` and `Cross-Origin-Embedder-Policy`.
    pub secure_context: bool,
    /// Answer `Access-Control-Request-Private-Network` on preflight.
    pub private_network_access: bool,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            origin: Origin::Any,
            allow_methods: Some(HeaderList::list([
                method::GET,
                method::HEAD,
                method::PUT,
                method::POST,
                method::DELETE,
                method::PATCH,
            ])),
            expose_headers: None,
            allow_headers: None,
            max_age: None,
            credentials: Credentials::default(),
            keep_headers_on_error: true,
            secure_context: false,
            private_network_access: false,
        }
    }
}

/// [`CorsOptions`] with every list joined into its header value.
#[derive(Clone, Debug)]
pub(crate) struct NormalizedOptions {
    pub(crate) origin: Origin,
    pub(crate) allow_methods: Option<String>,
    pub(crate) expose_headers: Option<String>,
    pub(crate) allow_headers: Option<String>,
    pub(crate) max_age: Option<String>,
    pub(crate) credentials: Credentials,
    pub(crate) keep_headers_on_error: bool,
    pub(crate) secure_context: bool,
    pub(crate) private_network_access: bool,
}

impl CorsOptions {
    /// Sets `max_age` from seconds given as a number or a string.
    pub fn with_max_age<V: ToString>(mut self, seconds: V) -> Self {
        self.max_age = Some(seconds.to_string());
        self
    }

    pub(crate) fn normalize(self) -> NormalizedOptions {
        NormalizedOptions {
            origin: self.origin,
            allow_methods: self.allow_methods.as_ref().and_then(HeaderList::header_value),
            expose_headers: self.expose_headers.as_ref().and_then(HeaderList::header_value),
            allow_headers: self.allow_headers.as_ref().and_then(HeaderList::header_value),
            max_age: self.max_age.filter(|value| !value.is_empty()),
            credentials: self.credentials,
            keep_headers_on_error: self.keep_headers_on_error,
            secure_context: self.secure_context,
            private_network_access: self.private_network_access,
        }
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
