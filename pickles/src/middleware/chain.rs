use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    http_helpers::Request,
    traits_helpers::{
        Handler,
        middleware::{Middleware, MiddlewareResult, Next},
    },
};

/// Innermost link: calls the route handler.
pub struct FinalHandler {
    handler: Arc<dyn Handler>,
}

impl FinalHandler {
    pub fn new(handler: Arc<dyn Handler>) -> Self {
        Self { handler }
    }
}

#[async_trait]
impl Next for FinalHandler {
    async fn run(self: Box<Self>, req: Request) -> MiddlewareResult {
        self.handler.call(req).await
    }
}

pub struct ChainLink {
    middleware: Arc<dyn Middleware>,
    next: Box<dyn Next>,
}

impl ChainLink {
    pub fn new(middleware: Arc<dyn Middleware>, next: Box<dyn Next>) -> Self {
        Self { middleware, next }
    }
}

#[async_trait]
impl Next for ChainLink {
    async fn run(self: Box<Self>, req: Request) -> MiddlewareResult {
        self.middleware.handle(req, self.next).await
    }
}

/// Ordered middleware list wrapped around a handler.
///
/// The first middleware is the outermost: it sees the request first and the
/// response last. Each `execute` builds a fresh set of links, so one chain
/// serves any number of requests.
#[derive(Clone, Default)]
pub struct MiddlewareChain {
    middleware_stack: Vec<Arc<dyn Middleware>>,
}

impl MiddlewareChain {
    pub fn new(middleware_stack: Vec<Arc<dyn Middleware>>) -> Self {
        Self { middleware_stack }
    }

    pub fn use_middleware(&mut self, middleware: Arc<dyn Middleware>) {
        self.middleware_stack.push(middleware);
    }

    pub async fn execute(&self, req: Request, handler: Arc<dyn Handler>) -> MiddlewareResult {
        let mut next: Box<dyn Next> = Box::new(FinalHandler::new(handler));

        for middleware in self.middleware_stack.iter().rev() {
            next = Box::new(ChainLink::new(middleware.clone(), next));
        }

        next.run(req).await
    }

    pub fn as_slice(&self) -> &[Arc<dyn Middleware>] {
        &self.middleware_stack
    }

    pub fn len(&self) -> usize {
        self.middleware_stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.middleware_stack.is_empty()
    }
}
