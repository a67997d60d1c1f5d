//! Core of the Pickles web framework: HTTP value types, a pattern-matching
//! router, per-route middleware chains and the kernel that ties them to a
//! transport.
//!
//! ```
//! use pickles::{HttpMethod, Kernel, Request, Router};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mut router = Router::new();
//! router
//!     .get("/hello/{name}", |req: Request| async move {
//!         format!("Hello {}!", req.route_parameter("name").unwrap_or("stranger"))
//!     })
//!     .unwrap();
//!
//! let kernel = Kernel::new(router);
//! let response = kernel.handle(Request::new(HttpMethod::GET, "/hello/world")).await;
//! assert_eq!(response.content(), Some("Hello world!"));
//! # }
//! ```

pub mod adapter;
pub mod error;
pub mod http_helpers;
mod kernel;
pub mod middleware;
pub mod router;
pub mod traits_helpers;

// Re-exports for adapter crates
pub use adapter::{HttpAdapter, RouteAdapter};
pub use error::{BoxError, RouterError};
pub use http_helpers::{
    HandlerResult, HttpHeader, HttpMethod, IntoResponse, QueryParams, QueryValue, Request,
    Response, RouteParameters,
};
pub use kernel::Kernel;
pub use middleware::{Middleware, Next};
pub use router::{Route, RouteRegistration, Router};
pub use traits_helpers::Handler;

// Re-export dependencies needed to implement the traits above
pub use async_trait::async_trait;
pub use rustc_hash::FxHashMap;
