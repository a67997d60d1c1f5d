//! End-to-end requests through the axum transport.

use std::sync::Arc;

use pickles::{
    middleware::{AuthMiddleware, CorsMiddleware, MiddlewareEntry},
    HttpAdapter, Kernel, Request, Response, Router,
};
use pickles_axum::{AxumAdapter, ServerConfig};
use serde_json::{json, Value};
use serial_test::serial;
use tokio::net::TcpListener;

fn app() -> Router {
    let mut router = Router::new();
    router.alias_middleware("auth", Arc::new(AuthMiddleware::new("asdf")));

    router
        .get("/test/{param}", |req: Request| async move {
            json!({ "result": req.route_parameters() })
        })
        .unwrap();
    router
        .get("/redirect", |_req: Request| async {
            Response::redirect("/test/asdf")
        })
        .unwrap();
    router
        .get("/private", |_req: Request| async { "secret" })
        .unwrap()
        .set_middlewares(["auth"])
        .unwrap();
    router
        .post("/echo", |req: Request| async move {
            json!({ "data": req.data(), "query": req.query_params() })
        })
        .unwrap()
        .set_middlewares([MiddlewareEntry::instance(CorsMiddleware::new())])
        .unwrap();
    router
        .delete("/empty", |_req: Request| async { 204u16 })
        .unwrap();

    router
}

/// Starts the app on a free port and returns its base url.
async fn spawn_app() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let adapter = AxumAdapter::new(Kernel::new(app()));
    tokio::spawn(adapter.serve(listener));

    format!("http://{}", addr)
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_route_parameters_as_json() {
    let base = spawn_app().await;

    let response = client()
        .get(format!("{}/test/asdf?ignored=1", base))
        .send()
        .await
        .expect("Failed to call /test/asdf");

    assert_eq!(response.status(), 200);
    assert_eq!(response.headers()["content-type"], "application/json");
    assert_eq!(
        response.text().await.unwrap(),
        r#"{"result":{"param":"asdf"}}"#
    );
}

#[tokio::test]
async fn test_redirect() {
    let base = spawn_app().await;

    let response = client()
        .get(format!("{}/redirect", base))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 302);
    assert_eq!(response.headers()["location"], "/test/asdf");
}

#[tokio::test]
async fn test_missing_route_is_404() {
    let base = spawn_app().await;

    let response = client()
        .delete(format!("{}/missing", base))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 404);
    assert_eq!(response.text().await.unwrap(), "Not Found");
}

#[tokio::test]
async fn test_auth_middleware_over_http() {
    let base = spawn_app().await;
    let client = client();

    let rejected = client
        .get(format!("{}/private", base))
        .send()
        .await
        .unwrap();
    assert_eq!(rejected.status(), 401);
    let body: Value = rejected.json().await.unwrap();
    assert_eq!(body, json!({"message": "Not Authenticated!", "status": 401}));

    let accepted = client
        .get(format!("{}/private", base))
        .header("Authorization", "asdf")
        .send()
        .await
        .unwrap();
    assert_eq!(accepted.status(), 200);
    assert_eq!(accepted.text().await.unwrap(), "secret");
}

#[tokio::test]
async fn test_json_and_form_bodies() {
    let base = spawn_app().await;
    let client = client();

    let response = client
        .post(format!("{}/echo?tag=a&tag=b", base))
        .json(&json!({"name": "pickles"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    assert!(response
        .headers()
        .contains_key("access-control-allow-origin"));
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"], json!({"name": "pickles"}));
    assert_eq!(body["query"]["tag"], json!(["a", "b"]));

    let response = client
        .post(format!("{}/echo?zulu=1&alpha=2", base))
        .send()
        .await
        .unwrap();
    let text = response.text().await.unwrap();
    assert!(text.contains(r#""query":{"zulu":"1","alpha":"2"}"#), "{text}");

    let response = client
        .post(format!("{}/echo", base))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body("foo=bar&n=1")
        .send()
        .await
        .unwrap();
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"], json!({"foo": "bar", "n": "1"}));
}

#[tokio::test]
async fn test_malformed_body_is_400() {
    let base = spawn_app().await;

    let response = client()
        .post(format!("{}/echo", base))
        .header("Content-Type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "MalformedBody");
}

#[tokio::test]
async fn test_oversized_body_is_400() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let adapter = AxumAdapter::new(Kernel::new(app())).with_body_limit(8);
    tokio::spawn(adapter.serve(listener));

    let response = client()
        .post(format!("http://{}/echo", addr))
        .json(&json!({"name": "far too long for the limit"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "MalformedBody");
}

#[tokio::test]
async fn test_unsupported_method_is_405() {
    let base = spawn_app().await;

    let response = client()
        .request(reqwest::Method::OPTIONS, format!("{}/test/asdf", base))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 405);
}

#[tokio::test]
async fn test_status_only_response_has_no_body() {
    let base = spawn_app().await;

    let response = client()
        .delete(format!("{}/empty", base))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 204);
    assert!(response.headers().get("content-type").is_none());
    assert!(response.text().await.unwrap().is_empty());
}

#[tokio::test]
#[serial]
async fn test_listen_uses_configured_address() {
    std::env::set_var(pickles_axum::HOST_VAR, "127.0.0.1");
    std::env::set_var(pickles_axum::PORT_VAR, "29180");
    let config = ServerConfig::from_env().unwrap();
    std::env::remove_var(pickles_axum::HOST_VAR);
    std::env::remove_var(pickles_axum::PORT_VAR);

    let kernel = Kernel::new(app());
    let host = config.host.clone();
    tokio::spawn(async move { kernel.listen::<AxumAdapter>(config.port, &host).await });
    tokio::time::sleep(std::time::Duration::from_millis(300)).await;

    let response = client()
        .get("http://127.0.0.1:29180/test/abc")
        .send()
        .await
        .expect("Failed to reach configured server");
    assert_eq!(response.status(), 200);
}
