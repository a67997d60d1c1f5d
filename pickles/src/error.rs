use thiserror::Error;

use crate::http_helpers::HttpMethod;

/// Fault type returned by handlers and middlewares.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum RouterError {
    #[error("no route matches {method} {uri}")]
    RouteNotFound { method: HttpMethod, uri: String },

    #[error("invalid middleware: {0}")]
    InvalidMiddleware(String),

    #[error("uri '{uri}' does not match route pattern '{pattern}'")]
    ParameterMismatch { pattern: String, uri: String },

    #[error("malformed request body: {0}")]
    MalformedBody(String),

    #[error("unsupported HTTP method '{0}'")]
    UnsupportedMethod(String),

    #[error("invalid route pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A fault raised by a handler or a middleware, passed through untouched.
    #[error(transparent)]
    Handler(BoxError),
}

impl RouterError {
    /// Short name of the failure, used in error response bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            RouterError::RouteNotFound { .. } => "RouteNotFound",
            RouterError::InvalidMiddleware(_) => "InvalidMiddleware",
            RouterError::ParameterMismatch { .. } => "ParameterMismatch",
            RouterError::MalformedBody(_) => "MalformedBody",
            RouterError::UnsupportedMethod(_) => "UnsupportedMethod",
            RouterError::InvalidPattern { .. } => "InvalidPattern",
            RouterError::Handler(_) => "HandlerError",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RouterError::RouteNotFound { .. })
    }
}
