use async_trait::async_trait;
use std::future::Future;

use crate::http_helpers::{HandlerResult, IntoResponse, Request};

/// The final step of a route: turns a request into a response.
///
/// Implemented for every `Fn(Request) -> impl Future<Output = impl IntoResponse>`,
/// so plain async closures and functions can be registered directly.
#[async_trait]
pub trait Handler: Send + Sync {
    async fn call(&self, req: Request) -> HandlerResult;
}

#[async_trait]
impl<F, Fut, R> Handler for F
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    async fn call(&self, req: Request) -> HandlerResult {
        (self)(req).await.into_response()
    }
}
