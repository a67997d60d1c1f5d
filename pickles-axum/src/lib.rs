//! # pickles-axum
//!
//! Axum adapter for the Pickles framework.
//!
//! This crate provides an implementation of Pickles' `HttpAdapter` trait for the Axum web framework,
//! plus the environment-driven server configuration and log setup a binary needs.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pickles::{Kernel, Request, Router};
//! use pickles_axum::{init_tracing, AxumAdapter, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     init_tracing(&config.log_level)?;
//!
//!     let mut router = Router::new();
//!     router.get("/", |_req: Request| async { "Hello world" })?;
//!
//!     Kernel::new(router)
//!         .listen::<AxumAdapter>(config.port, &config.host)
//!         .await
//! }
//! ```

mod axum_adapter;
mod axum_route_adapter;
mod config;
mod logging;

pub use axum_adapter::AxumAdapter;
pub use axum_route_adapter::{AxumRouteAdapter, BodyLimit, DEFAULT_BODY_LIMIT};
pub use config::{ConfigError, ServerConfig, HOST_VAR, LOG_VAR, PORT_VAR};
pub use logging::init_tracing;

// Re-export commonly used types from pickles
pub use pickles::{HttpAdapter, RouteAdapter};
