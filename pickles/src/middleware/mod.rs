mod chain;
pub use chain::{ChainLink, FinalHandler, MiddlewareChain};

pub mod builtin;
pub use builtin::{AuthMiddleware, CorsMiddleware, LoggerMiddleware, TimeoutMiddleware};

mod aliases;
pub use aliases::{MiddlewareAliases, MiddlewareEntry};

// Re-export core traits
pub use crate::traits_helpers::middleware::{
    FunctionalMiddleware, Middleware, MiddlewareFn, MiddlewareFuture, MiddlewareResult, Next,
};
