use serde_json::Value;

use super::Response;
use crate::error::BoxError;

/// Outcome of a handler or a middleware.
pub type HandlerResult = Result<Response, BoxError>;

/// Anything a route handler may return.
pub trait IntoResponse {
    fn into_response(self) -> HandlerResult;
}

impl IntoResponse for Response {
    fn into_response(self) -> HandlerResult {
        Ok(self)
    }
}

impl IntoResponse for String {
    fn into_response(self) -> HandlerResult {
        Ok(Response::text(self))
    }
}

impl IntoResponse for &'static str {
    fn into_response(self) -> HandlerResult {
        Ok(Response::text(self))
    }
}

impl IntoResponse for Value {
    fn into_response(self) -> HandlerResult {
        Ok(Response::json(self))
    }
}

/// A bare status code, no body.
impl IntoResponse for u16 {
    fn into_response(self) -> HandlerResult {
        Ok(Response::new().with_status(self))
    }
}

impl IntoResponse for (u16, String) {
    fn into_response(self) -> HandlerResult {
        let (status, text) = self;
        Ok(Response::text(text).with_status(status))
    }
}

impl<T, E> IntoResponse for Result<T, E>
where
    T: IntoResponse,
    E: Into<BoxError>,
{
    fn into_response(self) -> HandlerResult {
        match self {
            Ok(value) => value.into_response(),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_helpers::HttpHeader;
    use serde_json::json;

    #[test]
    fn test_text_conversions() {
        let owned = String::from("owned").into_response().unwrap();
        let borrowed = "static".into_response().unwrap();

        assert_eq!(owned.content(), Some("owned"));
        assert_eq!(borrowed.content(), Some("static"));
        assert_eq!(borrowed.header(HttpHeader::ContentType), Some("text/plain"));
    }

    #[test]
    fn test_json_conversion() {
        let response = json!({"id": 7}).into_response().unwrap();

        assert_eq!(response.status(), 200);
        assert_eq!(
            response.header(HttpHeader::ContentType),
            Some("application/json")
        );
        assert_eq!(response.content(), Some(r#"{"id":7}"#));
    }

    #[test]
    fn test_status_conversions() {
        let bare = 204u16.into_response().unwrap();
        assert_eq!(bare.status(), 204);
        assert_eq!(bare.content(), None);

        let with_text = (418u16, "teapot".to_string()).into_response().unwrap();
        assert_eq!(with_text.status(), 418);
        assert_eq!(with_text.content(), Some("teapot"));
    }

    #[test]
    fn test_result_propagates_error() {
        let ok: Result<&'static str, std::io::Error> = Ok("fine");
        assert_eq!(ok.into_response().unwrap().content(), Some("fine"));

        let failed: Result<Response, String> = Err("boom".to_string());
        let err = failed.into_response().unwrap_err();
        assert_eq!(err.to_string(), "boom");
    }
}
