use std::sync::Arc;

use rustc_hash::FxHashMap;

use super::Route;
use crate::{
    error::RouterError,
    http_helpers::{HttpMethod, Request, Response},
    middleware::{MiddlewareAliases, MiddlewareChain, MiddlewareEntry},
    traits_helpers::{Handler, middleware::Middleware},
};

/// Per-method route tables plus the middleware aliases routes may refer to.
///
/// Routes are tried in registration order and the first match wins. The
/// router is built before serving and only read afterwards, so it can be
/// shared behind an `Arc` without locking.
pub struct Router {
    routes: FxHashMap<HttpMethod, Vec<Route>>,
    middleware_aliases: MiddlewareAliases,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    pub fn new() -> Self {
        Self {
            routes: HttpMethod::ALL
                .into_iter()
                .map(|method| (method, Vec::new()))
                .collect(),
            middleware_aliases: MiddlewareAliases::new(),
        }
    }

    /// Appends a route for `method`. Registering the same pattern twice is
    /// allowed; the earlier one keeps winning.
    pub fn register<H>(
        &mut self,
        method: HttpMethod,
        uri: impl Into<String>,
        handler: H,
    ) -> Result<RouteRegistration<'_>, RouterError>
    where
        H: Handler + 'static,
    {
        let route = Route::new(uri, Arc::new(handler))?;
        tracing::debug!(%method, uri = route.uri(), "registered route");

        let Self {
            routes,
            middleware_aliases,
        } = self;
        let routes = routes.entry(method).or_default();
        routes.push(route);

        Ok(RouteRegistration {
            index: routes.len() - 1,
            routes,
            aliases: middleware_aliases,
        })
    }

    pub fn get<H: Handler + 'static>(
        &mut self,
        uri: impl Into<String>,
        handler: H,
    ) -> Result<RouteRegistration<'_>, RouterError> {
        self.register(HttpMethod::GET, uri, handler)
    }

    pub fn post<H: Handler + 'static>(
        &mut self,
        uri: impl Into<String>,
        handler: H,
    ) -> Result<RouteRegistration<'_>, RouterError> {
        self.register(HttpMethod::POST, uri, handler)
    }

    pub fn put<H: Handler + 'static>(
        &mut self,
        uri: impl Into<String>,
        handler: H,
    ) -> Result<RouteRegistration<'_>, RouterError> {
        self.register(HttpMethod::PUT, uri, handler)
    }

    pub fn patch<H: Handler + 'static>(
        &mut self,
        uri: impl Into<String>,
        handler: H,
    ) -> Result<RouteRegistration<'_>, RouterError> {
        self.register(HttpMethod::PATCH, uri, handler)
    }

    pub fn delete<H: Handler + 'static>(
        &mut self,
        uri: impl Into<String>,
        handler: H,
    ) -> Result<RouteRegistration<'_>, RouterError> {
        self.register(HttpMethod::DELETE, uri, handler)
    }

    /// Makes `middleware` available to routes under `name`.
    pub fn alias_middleware(
        &mut self,
        name: impl Into<String>,
        middleware: Arc<dyn Middleware>,
    ) -> &mut Self {
        self.middleware_aliases.insert(name, middleware);
        self
    }

    pub fn middleware_aliases(&self) -> &MiddlewareAliases {
        &self.middleware_aliases
    }

    /// Routes registered for `method`, in registration order.
    pub fn routes(&self, method: HttpMethod) -> &[Route] {
        self.routes.get(&method).map(Vec::as_slice).unwrap_or_default()
    }

    /// First route registered for the request's method whose pattern matches
    /// its uri.
    pub fn resolve_route(&self, req: &Request) -> Result<&Route, RouterError> {
        self.routes(req.method())
            .iter()
            .find(|route| route.matches(req.uri()))
            .ok_or_else(|| RouterError::RouteNotFound {
                method: req.method(),
                uri: req.uri().to_string(),
            })
    }

    /// Runs the matching route's middlewares and handler for `req`.
    ///
    /// Faults raised along the chain come back as [`RouterError::Handler`],
    /// unless they already are a `RouterError`, which is returned as is.
    pub async fn resolve(&self, mut req: Request) -> Result<Response, RouterError> {
        let route = self.resolve_route(&req)?;
        tracing::debug!(method = %req.method(), uri = req.uri(), pattern = route.uri(), "route matched");

        let parameters = route.parse_parameters(req.uri())?;
        req.set_route_parameters(parameters);

        let chain = MiddlewareChain::new(route.middlewares().to_vec());
        chain
            .execute(req, route.handler())
            .await
            .map_err(|err| match err.downcast::<RouterError>() {
                Ok(router_err) => *router_err,
                Err(other) => RouterError::Handler(other),
            })
    }
}

/// Handle on a freshly registered route, used to attach middlewares.
pub struct RouteRegistration<'r> {
    routes: &'r mut Vec<Route>,
    index: usize,
    aliases: &'r MiddlewareAliases,
}

impl<'r> RouteRegistration<'r> {
    /// Sets the route's middlewares from instances and alias names, in order.
    ///
    /// An unknown alias fails with [`RouterError::InvalidMiddleware`] and
    /// unregisters the route.
    pub fn set_middlewares<I>(self, middlewares: I) -> Result<Self, RouterError>
    where
        I: IntoIterator,
        I::Item: Into<MiddlewareEntry>,
    {
        let resolved: Result<Vec<_>, _> = middlewares
            .into_iter()
            .map(|entry| self.aliases.resolve(entry.into()))
            .collect();

        match resolved {
            Ok(middlewares) => {
                self.routes[self.index].set_middlewares(middlewares);
                Ok(self)
            }
            Err(err) => {
                let route = self.routes.remove(self.index);
                tracing::warn!(uri = route.uri(), error = %err, "dropped route with invalid middleware");
                Err(err)
            }
        }
    }

    pub fn route(&self) -> &Route {
        &self.routes[self.index]
    }
}
