//! Ready-made middlewares.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use serde_json::json;

use crate::{
    http_helpers::{Request, Response},
    traits_helpers::middleware::{Middleware, MiddlewareResult, Next},
};

// LOGGER MIDDLEWARE

/// Logs every request with its outcome and duration.
#[derive(Debug, Default)]
pub struct LoggerMiddleware {
    log_body: bool,
}

impl LoggerMiddleware {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body_logging(mut self) -> Self {
        self.log_body = true;
        self
    }
}

#[async_trait]
impl Middleware for LoggerMiddleware {
    async fn handle(&self, req: Request, next: Box<dyn Next>) -> MiddlewareResult {
        let start = Instant::now();
        let method = req.method();
        let uri = req.uri().to_string();

        tracing::info!(%method, %uri, "request started");
        if self.log_body {
            tracing::debug!(%method, %uri, data = ?req.data(), "request body");
        }

        let result = next.run(req).await;
        let elapsed = start.elapsed();

        match &result {
            Ok(response) => {
                tracing::info!(%method, %uri, status = response.status(), ?elapsed, "request finished")
            }
            Err(e) => tracing::warn!(%method, %uri, ?elapsed, error = %e, "request failed"),
        }

        result
    }
}

// AUTH MIDDLEWARE

/// Rejects requests whose auth header does not carry the expected token.
#[derive(Debug, Clone)]
pub struct AuthMiddleware {
    header_name: String,
    token: String,
}

impl AuthMiddleware {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            header_name: "authorization".to_string(),
            token: token.into(),
        }
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header_name = header.into();
        self
    }

    fn unauthorized() -> Response {
        Response::json(json!({
            "message": "Not Authenticated!",
            "status": 401
        }))
        .with_status(401)
    }
}

#[async_trait]
impl Middleware for AuthMiddleware {
    async fn handle(&self, req: Request, next: Box<dyn Next>) -> MiddlewareResult {
        if req.header(&self.header_name) == Some(self.token.as_str()) {
            return next.run(req).await;
        }

        tracing::debug!(uri = req.uri(), header = %self.header_name, "rejected unauthenticated request");
        Ok(Self::unauthorized())
    }
}

// CORS MIDDLEWARE

/// Adds CORS headers to every response.
#[derive(Debug, Clone)]
pub struct CorsMiddleware {
    allowed_origins: Vec<String>,
    allowed_methods: Vec<String>,
    allowed_headers: Vec<String>,
    allow_credentials: bool,
    max_age: Option<u32>,
}

impl CorsMiddleware {
    pub fn new() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
            allowed_methods: ["GET", "POST", "PUT", "PATCH", "DELETE"]
                .into_iter()
                .map(String::from)
                .collect(),
            allowed_headers: vec!["Content-Type".to_string(), "Authorization".to_string()],
            allow_credentials: false,
            max_age: Some(3600),
        }
    }

    pub fn allow_origin(mut self, origin: impl Into<String>) -> Self {
        self.allowed_origins = vec![origin.into()];
        self
    }

    pub fn allow_origins(mut self, origins: Vec<String>) -> Self {
        self.allowed_origins = origins;
        self
    }

    pub fn allow_methods(mut self, methods: Vec<String>) -> Self {
        self.allowed_methods = methods;
        self
    }

    pub fn allow_credentials(mut self, allow: bool) -> Self {
        self.allow_credentials = allow;
        self
    }

    /// Origin to echo back: the request origin when it is allowed, the
    /// wildcard when configured, otherwise none.
    fn response_origin(&self, request_origin: Option<&str>) -> Option<String> {
        if self.allowed_origins.iter().any(|o| o == "*") {
            return Some("*".to_string());
        }
        request_origin
            .filter(|origin| self.allowed_origins.iter().any(|o| o == origin))
            .map(str::to_string)
    }
}

impl Default for CorsMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Middleware for CorsMiddleware {
    async fn handle(&self, req: Request, next: Box<dyn Next>) -> MiddlewareResult {
        let origin = self.response_origin(req.header("origin"));
        let mut response = next.run(req).await?;

        if let Some(origin) = origin {
            response.set_header("Access-Control-Allow-Origin", origin);
        }
        response
            .set_header("Access-Control-Allow-Methods", self.allowed_methods.join(", "))
            .set_header("Access-Control-Allow-Headers", self.allowed_headers.join(", "));
        if self.allow_credentials {
            response.set_header("Access-Control-Allow-Credentials", "true");
        }
        if let Some(max_age) = self.max_age {
            response.set_header("Access-Control-Max-Age", max_age.to_string());
        }

        Ok(response)
    }
}

// TIMEOUT MIDDLEWARE

/// Answers 408 when the rest of the chain takes longer than the limit.
#[derive(Debug, Clone, Copy)]
pub struct TimeoutMiddleware {
    timeout: Duration,
}

impl TimeoutMiddleware {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn from_millis(timeout_ms: u64) -> Self {
        Self::new(Duration::from_millis(timeout_ms))
    }
}

#[async_trait]
impl Middleware for TimeoutMiddleware {
    async fn handle(&self, req: Request, next: Box<dyn Next>) -> MiddlewareResult {
        match tokio::time::timeout(self.timeout, next.run(req)).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(timeout = ?self.timeout, "request timed out");
                Ok(Response::json(json!({
                    "error": "Request Timeout",
                    "message": format!("Request exceeded timeout of {}ms", self.timeout.as_millis())
                }))
                .with_status(408))
            }
        }
    }
}
