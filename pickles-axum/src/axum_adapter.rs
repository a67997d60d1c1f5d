use anyhow::{Context, Result};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Router,
};
use pickles::{HttpAdapter, Kernel, RouteAdapter};
use tokio::net::TcpListener;

use super::{AxumRouteAdapter, BodyLimit};

/// Serves a [`Kernel`] with axum.
///
/// Pickles does its own routing, so every request goes through a single
/// axum fallback handler into the kernel.
#[derive(Clone)]
pub struct AxumAdapter {
    kernel: Kernel,
    body_limit: BodyLimit,
}

impl AxumAdapter {
    /// Caps request bodies at `bytes`. Larger bodies are rejected as malformed.
    pub fn with_body_limit(mut self, bytes: usize) -> Self {
        self.body_limit = BodyLimit(bytes);
        self
    }

    pub fn into_router(self) -> Router {
        let Self { kernel, body_limit } = self;

        Router::new().fallback(move |mut req: axum::extract::Request| {
            let kernel = kernel.clone();
            req.extensions_mut().insert(body_limit);
            async move {
                match AxumRouteAdapter::handle_request(req, &kernel).await {
                    Ok(response) => response,
                    Err(e) => {
                        tracing::error!(error = %e, "failed to write response");
                        internal_error()
                    }
                }
            }
        })
    }

    /// Serves on an already bound listener.
    pub async fn serve(self, listener: TcpListener) -> Result<()> {
        if let Ok(addr) = listener.local_addr() {
            tracing::info!(%addr, "listening");
        }

        axum::serve(listener, self.into_router())
            .await
            .context("Axum server encountered an error")?;
        Ok(())
    }
}

fn internal_error() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
}

impl HttpAdapter for AxumAdapter {
    fn new(kernel: Kernel) -> Self {
        Self {
            kernel,
            body_limit: BodyLimit::default(),
        }
    }

    async fn listen(self, port: u16, hostname: &str) -> Result<()> {
        let addr = format!("{}:{}", hostname, port);
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;

        self.serve(listener).await
    }
}
