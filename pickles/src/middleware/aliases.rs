use rustc_hash::FxHashMap;
use std::sync::Arc;

use crate::{error::RouterError, traits_helpers::middleware::Middleware};

/// Named middlewares a route can refer to by string.
#[derive(Clone, Default)]
pub struct MiddlewareAliases {
    aliases: FxHashMap<String, Arc<dyn Middleware>>,
}

impl MiddlewareAliases {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `middleware` under `name`, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<String>, middleware: Arc<dyn Middleware>) {
        self.aliases.insert(name.into(), middleware);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Middleware>> {
        self.aliases.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.aliases.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Turns an entry into a concrete middleware.
    pub fn resolve(&self, entry: MiddlewareEntry) -> Result<Arc<dyn Middleware>, RouterError> {
        match entry {
            MiddlewareEntry::Instance(middleware) => Ok(middleware),
            MiddlewareEntry::Alias(name) => self
                .get(&name)
                .ok_or(RouterError::InvalidMiddleware(name)),
        }
    }
}

/// One element of a route's middleware list: a ready instance or the name of
/// an alias registered on the router.
#[derive(Clone)]
pub enum MiddlewareEntry {
    Instance(Arc<dyn Middleware>),
    Alias(String),
}

impl MiddlewareEntry {
    pub fn instance<M: Middleware + 'static>(middleware: M) -> Self {
        MiddlewareEntry::Instance(Arc::new(middleware))
    }
}

impl From<Arc<dyn Middleware>> for MiddlewareEntry {
    fn from(middleware: Arc<dyn Middleware>) -> Self {
        MiddlewareEntry::Instance(middleware)
    }
}

impl From<&str> for MiddlewareEntry {
    fn from(name: &str) -> Self {
        MiddlewareEntry::Alias(name.to_string())
    }
}

impl From<String> for MiddlewareEntry {
    fn from(name: String) -> Self {
        MiddlewareEntry::Alias(name)
    }
}
