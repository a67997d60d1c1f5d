use anyhow::{Context, Result};
use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, StatusCode},
};
use pickles::{
    http_helpers::{parse_body, parse_query_string},
    HttpMethod, Request, Response, RouteAdapter, RouterError,
};

/// Largest request body read when no [`BodyLimit`] is attached to the request.
pub const DEFAULT_BODY_LIMIT: usize = 2 * 1024 * 1024;

/// Request extension capping how many body bytes [`AxumRouteAdapter`] reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyLimit(pub usize);

impl Default for BodyLimit {
    fn default() -> Self {
        Self(DEFAULT_BODY_LIMIT)
    }
}

pub struct AxumRouteAdapter;

impl RouteAdapter for AxumRouteAdapter {
    type Request = axum::extract::Request;
    type Response = axum::response::Response;

    async fn adapt_request(request: Self::Request) -> Result<Request, RouterError> {
        let (parts, body) = request.into_parts();

        let method: HttpMethod = parts.method.as_str().parse()?;
        let query_params = parse_query_string(parts.uri.query().unwrap_or_default())?;

        let BodyLimit(limit) = parts.extensions.get::<BodyLimit>().copied().unwrap_or_default();
        let body_bytes = to_bytes(body, limit)
            .await
            .map_err(|e| RouterError::MalformedBody(e.to_string()))?;
        let content_type = parts
            .headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok());
        let data = parse_body(content_type, &body_bytes)?;

        let headers = parts.headers.iter().filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|value| (name.as_str().to_string(), value.to_string()))
        });

        Ok(Request::new(method, parts.uri.path())
            .with_headers(headers)
            .with_query_params(query_params)
            .with_data(data))
    }

    fn adapt_response(response: Response) -> Result<Self::Response> {
        let status =
            StatusCode::from_u16(response.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut headers = HeaderMap::new();
        for (name, value) in response.headers() {
            match (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                (Ok(name), Ok(value)) => {
                    headers.insert(name, value);
                }
                _ => tracing::warn!(header = %name, "dropped header that is not valid HTTP"),
            }
        }

        let body = match response.content() {
            Some(content) => Body::from(content.to_string()),
            None => Body::empty(),
        };

        let mut res = axum::http::Response::builder()
            .status(status)
            .body(body)
            .context("Failed to build response")?;
        res.headers_mut().extend(headers);

        Ok(res)
    }
}
