use std::sync::Arc;

use anyhow::Result;
use serde_json::json;

use crate::{
    adapter::HttpAdapter,
    error::RouterError,
    http_helpers::{Request, Response},
    router::Router,
};

/// Outer request loop: dispatches through the router and turns every
/// failure into a response.
#[derive(Clone)]
pub struct Kernel {
    router: Arc<Router>,
}

impl Kernel {
    pub fn new(router: Router) -> Self {
        Self {
            router: Arc::new(router),
        }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub async fn handle(&self, req: Request) -> Response {
        let method = req.method();
        let uri = req.uri().to_string();

        match self.router.resolve(req).await {
            Ok(response) => response,
            Err(err) => {
                if err.is_not_found() {
                    tracing::info!(%method, %uri, "no route matched");
                } else {
                    tracing::error!(%method, %uri, kind = err.kind(), error = %err, "request failed");
                }
                Self::error_response(&err)
            }
        }
    }

    /// Response sent to the client for a dispatch failure.
    pub fn error_response(err: &RouterError) -> Response {
        match err {
            RouterError::RouteNotFound { .. } => Response::text("Not Found").with_status(404),
            RouterError::UnsupportedMethod(_) => {
                Response::text("Method Not Allowed").with_status(405)
            }
            RouterError::MalformedBody(_) => Response::json(json!({
                "error": err.kind(),
                "message": err.to_string(),
            }))
            .with_status(400),
            _ => Response::json(json!({
                "error": err.kind(),
                "message": err.to_string(),
            }))
            .with_status(500),
        }
    }

    /// Serves this kernel with the transport `A` until the server stops.
    pub async fn listen<A: HttpAdapter>(self, port: u16, hostname: &str) -> Result<()> {
        A::new(self).listen(port, hostname).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_helpers::HttpMethod;
    use serde_json::Value;

    fn kernel() -> Kernel {
        let mut router = Router::new();
        router.get("/", |_req: Request| async { "Hello world" }).unwrap();
        router
            .get("/redirect", |_req: Request| async { Response::redirect("/test/asdf") })
            .unwrap();
        router
            .get("/boom", |_req: Request| async {
                Err::<Response, _>(std::io::Error::other("boom"))
            })
            .unwrap();
        Kernel::new(router)
    }

    #[tokio::test]
    async fn test_handle_returns_handler_response() {
        let response = kernel().handle(Request::new(HttpMethod::GET, "/")).await;

        assert_eq!(response.status(), 200);
        assert_eq!(response.content(), Some("Hello world"));
    }

    #[tokio::test]
    async fn test_handle_redirect() {
        let response = kernel()
            .handle(Request::new(HttpMethod::GET, "/redirect"))
            .await;

        assert_eq!(response.status(), 302);
        assert_eq!(response.header("location"), Some("/test/asdf"));
    }

    #[tokio::test]
    async fn test_not_found_becomes_404() {
        let response = kernel()
            .handle(Request::new(HttpMethod::DELETE, "/missing"))
            .await;

        assert_eq!(response.status(), 404);
        assert_eq!(response.content(), Some("Not Found"));
        assert_eq!(response.header("content-type"), Some("text/plain"));
    }

    #[tokio::test]
    async fn test_handler_fault_becomes_500() {
        let response = kernel().handle(Request::new(HttpMethod::GET, "/boom")).await;

        assert_eq!(response.status(), 500);
        let body: Value = serde_json::from_str(response.content().unwrap()).unwrap();
        assert_eq!(body["error"], "HandlerError");
        assert_eq!(body["message"], "boom");
    }

    #[test]
    fn test_error_response_statuses() {
        let method = Kernel::error_response(&RouterError::UnsupportedMethod("HEAD".to_string()));
        assert_eq!(method.status(), 405);

        let body = Kernel::error_response(&RouterError::MalformedBody("eof".to_string()));
        assert_eq!(body.status(), 400);
        assert_eq!(body.header("content-type"), Some("application/json"));
    }
}
