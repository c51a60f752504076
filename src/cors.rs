use crate::constants::{header, method, status, value};
use crate::context::Context;
use crate::error::HttpError;
use crate::header_builder::HeaderBuilder;
use crate::headers::Headers;
use crate::options::{CorsOptions, NormalizedOptions};
use crate::origin::OriginDecision;
use crate::util::non_empty;
use crate::vary;
use std::future::Future;
use tracing::{debug, trace};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOutcome<T> {
    Forwarded(T),
    /// Answered with `204 No Content` without running the continuation.
    Preflight,
}

impl<T> CorsOutcome<T> {
    pub fn forwarded(self) -> Option<T> {
        match self {
            CorsOutcome::Forwarded(value) => Some(value),
            CorsOutcome::Preflight => None,
        }
    }

    pub fn is_preflight(&self) -> bool {
        matches!(self, CorsOutcome::Preflight)
    }
}

/// CORS decision engine that applies [`CorsOptions`] around a request handler.
#[derive(Debug, Clone)]
pub struct Cors {
    options: NormalizedOptions,
}

impl Default for Cors {
    fn default() -> Self {
        Self::new(CorsOptions::default())
    }
}

impl Cors {
    pub fn new(options: CorsOptions) -> Self {
        Self {
            options: options.normalize(),
        }
    }

    /// Runs the CORS protocol for one request. `next` is invoked at most once
    /// and never for a preflight.
    pub async fn handle<C, F, Fut, T>(
        &self,
        ctx: &mut C,
        next: F,
    ) -> Result<CorsOutcome<T>, HttpError>
    where
        C: Context,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, HttpError>>,
    {
        let request_origin = ctx
            .request_header(header::ORIGIN)
            .unwrap_or_default()
            .to_owned();
        let vary = vary::merge(
            ctx.response_header(header::VARY).unwrap_or_default(),
            header::ORIGIN,
        );
        ctx.set_response_header(header::VARY, &vary);

        let credentials = self.options.credentials.resolve(&*ctx).await?;
        let origin = match self.options.origin.resolve(&*ctx).await? {
            OriginDecision::Allow(origin) => origin,
            OriginDecision::Skip => {
                debug!("origin resolver opted out; forwarding without CORS headers");
                return next().await.map(CorsOutcome::Forwarded);
            }
        };
        let origin = if credentials && origin == value::WILDCARD {
            request_origin
        } else {
            origin
        };

        let is_options = ctx.method().eq_ignore_ascii_case(method::OPTIONS);
        trace!(
            method = ctx.method(),
            origin = %origin,
            credentials,
            "evaluating CORS request"
        );

        if is_options {
            self.process_preflight(ctx, &origin, credentials, next).await
        } else {
            self.process_simple(ctx, &origin, credentials, next).await
        }
    }

    async fn process_preflight<C, F, Fut, T>(
        &self,
        ctx: &mut C,
        origin: &str,
        credentials: bool,
        next: F,
    ) -> Result<CorsOutcome<T>, HttpError>
    where
        C: Context,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, HttpError>>,
    {
        if non_empty(ctx.request_header(header::ACCESS_CONTROL_REQUEST_METHOD)).is_none() {
            debug!("OPTIONS request without Access-Control-Request-Method; forwarding");
            return next().await.map(CorsOutcome::Forwarded);
        }

        let headers = HeaderBuilder::new(&self.options).preflight_headers(&*ctx, origin, credentials);
        apply(ctx, &headers);
        ctx.set_status(status::NO_CONTENT);
        debug!(headers = headers.len(), "answered preflight request");

        Ok(CorsOutcome::Preflight)
    }

    async fn process_simple<C, F, Fut, T>(
        &self,
        ctx: &mut C,
        origin: &str,
        credentials: bool,
        next: F,
    ) -> Result<CorsOutcome<T>, HttpError>
    where
        C: Context,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, HttpError>>,
    {
        let headers = HeaderBuilder::new(&self.options).simple_headers(origin, credentials);
        apply(ctx, &headers);

        if !self.options.keep_headers_on_error {
            return next().await.map(CorsOutcome::Forwarded);
        }

        match next().await {
            Ok(value) => Ok(CorsOutcome::Forwarded(value)),
            Err(err) => {
                debug!(
                    status = err.status(),
                    "re-attaching CORS headers to downstream failure"
                );
                Err(reattach_headers(err, &headers))
            }
        }
    }
}

fn apply<C: Context>(ctx: &mut C, headers: &Headers) {
    for (name, value) in headers.iter() {
        ctx.set_response_header(name, value);
    }
}

fn reattach_headers(err: HttpError, written: &Headers) -> HttpError {
    let carried = err.headers().cloned().unwrap_or_default();
    let vary = vary::merge(carried.get(header::VARY).unwrap_or_default(), header::ORIGIN);

    let mut headers = carried.without(header::VARY).merged(written);
    headers.insert(header::VARY.to_ascii_lowercase(), vary);
    err.with_headers(headers)
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
