//! Small demo app.
//!
//! ```text
//! cargo run -p pickles-axum --example hello
//! curl localhost:8000/test/asdf
//! curl -H 'Authorization: asdf' localhost:8000/private
//! ```

use std::sync::Arc;
use std::time::Duration;

use pickles::{
    middleware::{AuthMiddleware, CorsMiddleware, LoggerMiddleware, TimeoutMiddleware},
    HttpMethod, Kernel, Request, Response, Router,
};
use pickles_axum::{init_tracing, AxumAdapter, ServerConfig};
use serde_json::json;

fn routes() -> Result<Router, pickles::RouterError> {
    let mut router = Router::new();
    router
        .alias_middleware("auth", Arc::new(AuthMiddleware::new("asdf")))
        .alias_middleware("log", Arc::new(LoggerMiddleware::new()));

    router.get("/", |_req: Request| async { "Hello world" })?;

    for method in HttpMethod::ALL {
        router.register(method, "/test", move |_req: Request| async move {
            format!("{} OK", method)
        })?;
    }

    router
        .get("/test/{param}", |req: Request| async move {
            json!({ "result": req.route_parameters() })
        })?
        .set_middlewares(["log"])?;

    router.get("/redirect", |_req: Request| async {
        Response::redirect("/test/asdf")
    })?;

    router
        .get("/private", |_req: Request| async { json!({ "secret": 42 }) })?
        .set_middlewares(["log", "auth"])?;

    router
        .post("/echo", |req: Request| async move {
            json!({ "data": req.data(), "query": req.query_params() })
        })?
        .set_middlewares(vec![
            pickles::middleware::MiddlewareEntry::instance(CorsMiddleware::new()),
            pickles::middleware::MiddlewareEntry::instance(TimeoutMiddleware::new(
                Duration::from_secs(5),
            )),
        ])?;

    Ok(router)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;
    init_tracing(&config.log_level)?;

    Kernel::new(routes()?)
        .listen::<AxumAdapter>(config.port, &config.host)
        .await
}
