use crate::constants::value;
use crate::context::Context;
use crate::error::HttpError;
use crate::resolver::{self, ResolveFuture, ResolverFn};
use std::fmt;
use std::future::IntoFuture;
use std::sync::Arc;

/// Source of the `Access-Control-Allow-Origin` value.
#[derive(Clone, Default)]
pub enum Origin {
    #[default]
    Any,
    Exact(String),
    /// `None` or an empty string disables CORS for the request.
    Resolver(Arc<ResolverFn<Option<String>>>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginDecision {
    Allow(String),
    Skip,
}

impl Origin {
    pub fn any() -> Self {
        Self::Any
    }

    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::Exact(value.into())
    }

    /// Builds a resolver from a function returning any awaitable that owns its
    /// data; see [`Origin::borrowing`] for futures that borrow the context.
    pub fn from_fn<F, Fut, R>(resolver: F) -> Self
    where
        F: Fn(&dyn Context) -> Fut + Send + Sync + 'static,
        Fut: IntoFuture<Output = Result<R, HttpError>>,
        Fut::IntoFuture: Send + 'static,
        R: Into<Option<String>> + 'static,
    {
        Self::Resolver(resolver::owned(resolver, Into::into))
    }

    pub fn borrowing<F>(resolver: F) -> Self
    where
        F: for<'a> Fn(&'a dyn Context) -> ResolveFuture<'a, Option<String>>
            + Send
            + Sync
            + 'static,
    {
        Self::Resolver(resolver::borrowing(resolver))
    }

    pub async fn resolve(&self, ctx: &dyn Context) -> Result<OriginDecision, HttpError> {
        match self {
            Origin::Any => Ok(OriginDecision::Allow(value::WILDCARD.to_string())),
            Origin::Exact(origin) if origin.is_empty() => {
                Ok(OriginDecision::Allow(value::WILDCARD.to_string()))
            }
            Origin::Exact(origin) => Ok(OriginDecision::Allow(origin.clone())),
            Origin::Resolver(resolver) => match resolver(ctx).await? {
                Some(origin) if !origin.is_empty() => Ok(OriginDecision::Allow(origin)),
                _ => Ok(OriginDecision::Skip),
            },
        }
    }
}

impl From<&str> for Origin {
    fn from(value: &str) -> Self {
        Origin::Exact(value.to_owned())
    }
}

impl From<String> for Origin {
    fn from(value: String) -> Self {
        Origin::Exact(value)
    }
}

impl fmt::Debug for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Any => f.write_str("Any"),
            Origin::Exact(value) => f.debug_tuple("Exact").field(value).finish(),
            Origin::Resolver(_) => f.write_str("Resolver(..)"),
        }
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
