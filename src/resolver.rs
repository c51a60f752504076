use crate::context::Context;
use crate::error::HttpError;
use futures::future::BoxFuture;
use std::future::IntoFuture;
use std::sync::Arc;

pub type ResolveFuture<'a, T> = BoxFuture<'a, Result<T, HttpError>>;

/// Per-request resolver stored in the configuration.
pub type ResolverFn<T> = dyn for<'a> Fn(&'a dyn Context) -> ResolveFuture<'a, T> + Send + Sync;

pub(crate) fn borrowing<T, F>(resolver: F) -> Arc<ResolverFn<T>>
where
    F: for<'a> Fn(&'a dyn Context) -> ResolveFuture<'a, T> + Send + Sync + 'static,
{
    Arc::new(resolver)
}

/// Adapts a resolver whose awaitable does not borrow the context.
///
/// Anything implementing [`IntoFuture`] is accepted; it is converted and
/// polled exactly once per request, then `map` coerces the raw output.
pub(crate) fn owned<T, R, F, Fut>(resolver: F, map: fn(R) -> T) -> Arc<ResolverFn<T>>
where
    F: Fn(&dyn Context) -> Fut + Send + Sync + 'static,
    Fut: IntoFuture<Output = Result<R, HttpError>>,
    Fut::IntoFuture: Send + 'static,
    R: 'static,
    T: 'static,
{
    borrowing(move |ctx| {
        let pending = resolver(ctx).into_future();
        Box::pin(async move { pending.await.map(map) })
    })
}
