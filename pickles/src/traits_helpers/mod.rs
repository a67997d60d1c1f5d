pub mod middleware;
pub use self::middleware::{
    FunctionalMiddleware, Middleware, MiddlewareFn, MiddlewareFuture, MiddlewareResult, Next,
};

mod handler;
pub use self::handler::Handler;
