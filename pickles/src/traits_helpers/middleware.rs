use async_trait::async_trait;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::http_helpers::{HandlerResult, Request};

/// Result type for middleware chain execution
pub type MiddlewareResult = HandlerResult;

/// Next function in the middleware chain
#[async_trait]
pub trait Next: Send + Sync {
    async fn run(self: Box<Self>, req: Request) -> MiddlewareResult;
}

/// Core middleware trait
///
/// A middleware either returns a response of its own, which stops the chain,
/// or hands the (possibly modified) request on through `next`. Whatever it
/// returns becomes the response seen by the middleware before it.
#[async_trait]
pub trait Middleware: Send + Sync {
    async fn handle(&self, req: Request, next: Box<dyn Next>) -> MiddlewareResult;
}

pub type MiddlewareFuture = Pin<Box<dyn Future<Output = MiddlewareResult> + Send>>;

/// Functional middleware - simpler alternative using closures
pub type MiddlewareFn = Arc<dyn Fn(Request, Box<dyn Next>) -> MiddlewareFuture + Send + Sync>;

/// Wrapper to convert functional middleware to trait
pub struct FunctionalMiddleware {
    handler: MiddlewareFn,
}

impl FunctionalMiddleware {
    pub fn new(handler: MiddlewareFn) -> Self {
        Self { handler }
    }

    /// Builds a middleware from an async closure.
    ///
    /// ```
    /// use pickles::middleware::FunctionalMiddleware;
    ///
    /// let tag = FunctionalMiddleware::from_fn(|req, next| async move {
    ///     next.run(req).await.map(|response| response.with_header("X-Served-By", "pickles"))
    /// });
    /// # let _ = tag;
    /// ```
    pub fn from_fn<F, Fut>(f: F) -> Self
    where
        F: Fn(Request, Box<dyn Next>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = MiddlewareResult> + Send + 'static,
    {
        Self::new(Arc::new(
            move |req: Request, next: Box<dyn Next>| -> MiddlewareFuture { Box::pin(f(req, next)) },
        ))
    }
}

#[async_trait]
impl Middleware for FunctionalMiddleware {
    async fn handle(&self, req: Request, next: Box<dyn Next>) -> MiddlewareResult {
        (self.handler)(req, next).await
    }
}
