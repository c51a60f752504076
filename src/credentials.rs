use crate::context::Context;
use crate::error::HttpError;
use crate::resolver::{self, ResolveFuture, ResolverFn};
use crate::truthy::Truthy;
use std::fmt;
use std::future::IntoFuture;
use std::sync::Arc;

/// Whether `Access-Control-Allow-Credentials: true` is emitted.
#[derive(Clone)]
pub enum Credentials {
    Static(bool),
    Resolver(Arc<ResolverFn<bool>>),
}

impl Default for Credentials {
    fn default() -> Self {
        Self::Static(false)
    }
}

impl Credentials {
    /// Builds a resolver from a function returning any awaitable.
    ///
    /// The output is coerced with [`Truthy`]: a non-empty string such as
    /// `"false"` enables credentials.
    pub fn from_fn<F, Fut, R>(resolver: F) -> Self
    where
        F: Fn(&dyn Context) -> Fut + Send + Sync + 'static,
        Fut: IntoFuture<Output = Result<R, HttpError>>,
        Fut::IntoFuture: Send + 'static,
        R: Truthy + 'static,
    {
        Self::Resolver(resolver::owned(resolver, |value: R| value.is_truthy()))
    }

    pub fn borrowing<F>(resolver: F) -> Self
    where
        F: for<'a> Fn(&'a dyn Context) -> ResolveFuture<'a, bool> + Send + Sync + 'static,
    {
        Self::Resolver(resolver::borrowing(resolver))
    }

    /// # Errors
    ///
    /// Propagates the resolver's error unchanged.
    pub async fn resolve(&self, ctx: &dyn Context) -> Result<bool, HttpError> {
        match self {
            Credentials::Static(enabled) => Ok(*enabled),
            Credentials::Resolver(resolver) => resolver(ctx).await,
        }
    }
}

impl From<bool> for Credentials {
    fn from(value: bool) -> Self {
        Credentials::Static(value)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::Static(enabled) => f.debug_tuple("Static").field(enabled).finish(),
            Credentials::Resolver(_) => f.write_str("Resolver(..)"),
        }
    }
}

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;
