use crate::constants::{header, value};
use crate::context::Context;
use crate::headers::Headers;
use crate::options::NormalizedOptions;
use crate::util::non_empty;

pub(crate) struct HeaderBuilder<'a> {
    options: &'a NormalizedOptions,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(options: &'a NormalizedOptions) -> Self {
        Self { options }
    }

    /// Headers for an actual (non-preflight) request, in emission order.
    pub(crate) fn simple_headers(&self, origin: &str, credentials: bool) -> Headers {
        let mut headers = Headers::with_capacity(5);
        headers.extend(self.build_origin_header(origin));
        headers.extend(self.build_credentials_header(credentials));
        headers.extend(self.build_exposed_headers());
        headers.extend(self.build_secure_context_headers());
        headers
    }

    /// Headers answering a preflight request, in emission order.
    pub(crate) fn preflight_headers(
        &self,
        request: &dyn Context,
        origin: &str,
        credentials: bool,
    ) -> Headers {
        let mut headers = Headers::with_capacity(8);
        headers.extend(self.build_origin_header(origin));
        headers.extend(self.build_credentials_header(credentials));
        headers.extend(self.build_max_age_header());
        headers.extend(self.build_private_network_header(request));
        headers.extend(self.build_methods_header());
        headers.extend(self.build_secure_context_headers());
        headers.extend(self.build_allowed_headers(request));
        headers
    }

    pub(crate) fn build_origin_header(&self, origin: &str) -> Headers {
        single(header::ACCESS_CONTROL_ALLOW_ORIGIN, non_empty(Some(origin)))
    }

    pub(crate) fn build_credentials_header(&self, credentials: bool) -> Headers {
        single(
            header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
            credentials.then_some(value::TRUE),
        )
    }

    pub(crate) fn build_exposed_headers(&self) -> Headers {
        single(
            header::ACCESS_CONTROL_EXPOSE_HEADERS,
            self.options.expose_headers.as_deref(),
        )
    }

    pub(crate) fn build_max_age_header(&self) -> Headers {
        single(
            header::ACCESS_CONTROL_MAX_AGE,
            self.options.max_age.as_deref(),
        )
    }

    pub(crate) fn build_methods_header(&self) -> Headers {
        single(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            self.options.allow_methods.as_deref(),
        )
    }

    pub(crate) fn build_private_network_header(&self, request: &dyn Context) -> Headers {
        let requested =
            non_empty(request.request_header(header::ACCESS_CONTROL_REQUEST_PRIVATE_NETWORK))
                .is_some();
        single(
            header::ACCESS_CONTROL_ALLOW_PRIVATE_NETWORK,
            (self.options.private_network_access && requested).then_some(value::TRUE),
        )
    }

    pub(crate) fn build_secure_context_headers(&self) -> Headers {
        let mut headers = Headers::with_capacity(2);
        if self.options.secure_context {
            headers.insert(header::CROSS_ORIGIN_OPENER_POLICY, value::SAME_ORIGIN);
            headers.insert(header::CROSS_ORIGIN_EMBEDDER_POLICY, value::REQUIRE_CORP);
        }
        headers
    }

    /// Configured allow-headers, or the request's own
    /// `Access-Control-Request-Headers` echoed verbatim.
    pub(crate) fn build_allowed_headers(&self, request: &dyn Context) -> Headers {
        let allowed = self.options.allow_headers.as_deref().or_else(|| {
            non_empty(request.request_header(header::ACCESS_CONTROL_REQUEST_HEADERS))
        });
        single(header::ACCESS_CONTROL_ALLOW_HEADERS, allowed)
    }
}

fn single(name: &str, value: Option<&str>) -> Headers {
    let mut headers = Headers::with_capacity(1);
    if let Some(value) = non_empty(value) {
        headers.insert(name, value);
    }
    headers
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
