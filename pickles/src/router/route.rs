use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    error::RouterError,
    http_helpers::RouteParameters,
    traits_helpers::{Handler, middleware::Middleware},
};

/// `{name}` placeholder; names are letters only.
static PARAMETER_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{([a-zA-Z]+)\}").expect("parameter token regex should be valid")
});

/// What a placeholder matches in a uri.
const PARAMETER_VALUE: &str = "([a-zA-Z0-9]+)";

/// One uri pattern bound to a handler, plus the middlewares that wrap it.
///
/// The pattern is compiled once here. A uri matches when it equals the
/// pattern with every `{name}` replaced by one or more ASCII alphanumerics,
/// optionally followed by a single trailing slash.
pub struct Route {
    uri: String,
    matcher: Regex,
    parameter_names: Vec<String>,
    handler: Arc<dyn Handler>,
    middlewares: Vec<Arc<dyn Middleware>>,
}

impl Route {
    pub fn new(uri: impl Into<String>, handler: Arc<dyn Handler>) -> Result<Self, RouterError> {
        let uri = uri.into();
        let (matcher, parameter_names) = Self::compile(&uri)?;

        Ok(Self {
            uri,
            matcher,
            parameter_names,
            handler,
            middlewares: Vec::new(),
        })
    }

    fn compile(pattern: &str) -> Result<(Regex, Vec<String>), RouterError> {
        let mut source = String::from("^");
        let mut parameter_names = Vec::new();
        let mut last = 0;

        for captures in PARAMETER_TOKEN.captures_iter(pattern) {
            let (Some(token), Some(name)) = (captures.get(0), captures.get(1)) else {
                continue;
            };
            source.push_str(&regex::escape(&pattern[last..token.start()]));
            source.push_str(PARAMETER_VALUE);
            parameter_names.push(name.as_str().to_string());
            last = token.end();
        }
        source.push_str(&regex::escape(&pattern[last..]));
        source.push_str("/?$");

        let matcher = Regex::new(&source).map_err(|source| RouterError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok((matcher, parameter_names))
    }

    pub fn matches(&self, uri: &str) -> bool {
        self.matcher.is_match(uri)
    }

    /// Extracts the placeholder values of `uri`, keyed by name in the order
    /// the placeholders appear in the pattern.
    ///
    /// Fails with [`RouterError::ParameterMismatch`] when `uri` does not
    /// match this route.
    pub fn parse_parameters(&self, uri: &str) -> Result<RouteParameters, RouterError> {
        let captures = self
            .matcher
            .captures(uri)
            .ok_or_else(|| RouterError::ParameterMismatch {
                pattern: self.uri.clone(),
                uri: uri.to_string(),
            })?;

        Ok(self
            .parameter_names
            .iter()
            .zip(captures.iter().skip(1))
            .filter_map(|(name, value)| value.map(|v| (name.clone(), v.as_str().to_string())))
            .collect())
    }

    pub fn has_parameters(&self) -> bool {
        !self.parameter_names.is_empty()
    }

    /// The pattern as registered.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn parameter_names(&self) -> &[String] {
        &self.parameter_names
    }

    pub fn handler(&self) -> Arc<dyn Handler> {
        self.handler.clone()
    }

    pub fn middlewares(&self) -> &[Arc<dyn Middleware>] {
        &self.middlewares
    }

    /// Replaces the route's middlewares. The first one is the outermost.
    pub fn set_middlewares(&mut self, middlewares: Vec<Arc<dyn Middleware>>) -> &mut Self {
        self.middlewares = middlewares;
        self
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("uri", &self.uri)
            .field("matcher", &self.matcher.as_str())
            .field("parameter_names", &self.parameter_names)
            .field("middlewares", &self.middlewares.len())
            .finish()
    }
}
