use rustc_hash::FxHashMap;
use serde_json::Value;

use super::HttpHeader;

/// One outbound HTTP response.
///
/// Header names are stored lower-cased. A `None` content means "no body";
/// [`Response::prepare`] brings the content headers in line with that
/// before the response goes on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: u16,
    headers: FxHashMap<String, String>,
    content: Option<String>,
}

impl Default for Response {
    fn default() -> Self {
        Self {
            status: 200,
            headers: FxHashMap::default(),
            content: None,
        }
    }
}

impl Response {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn set_status(&mut self, status: u16) -> &mut Self {
        self.status = status;
        self
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    pub fn headers(&self) -> &FxHashMap<String, String> {
        &self.headers
    }

    /// Get a specific header value by name (case-insensitive)
    pub fn header(&self, name: impl AsRef<str>) -> Option<&str> {
        self.headers
            .get(&name.as_ref().to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn set_header(&mut self, name: impl AsRef<str>, value: impl Into<String>) -> &mut Self {
        self.headers
            .insert(name.as_ref().to_ascii_lowercase(), value.into());
        self
    }

    pub fn with_header(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.set_header(name, value);
        self
    }

    pub fn remove_header(&mut self, name: impl AsRef<str>) -> Option<String> {
        self.headers.remove(&name.as_ref().to_ascii_lowercase())
    }

    /// Replaces every header.
    pub fn set_headers<I, K, V>(&mut self, headers: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        self.headers = headers
            .into_iter()
            .map(|(name, value)| (name.as_ref().to_ascii_lowercase(), value.into()))
            .collect();
        self
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn set_content(&mut self, content: Option<String>) -> &mut Self {
        self.content = content;
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn set_content_type(&mut self, mime: impl Into<String>) -> &mut Self {
        self.set_header(HttpHeader::ContentType, mime)
    }

    /// Aligns content headers with the body: without content, `Content-Type`
    /// and `Content-Length` are dropped; with content, `Content-Length` is its
    /// byte length. Safe to call any number of times.
    pub fn prepare(&mut self) {
        match self.content.as_ref().map(String::len) {
            None => {
                self.remove_header(HttpHeader::ContentType);
                self.remove_header(HttpHeader::ContentLength);
            }
            Some(length) => {
                self.set_header(HttpHeader::ContentLength, length.to_string());
            }
        }
    }

    pub fn json(data: Value) -> Self {
        let mut response = Self::new();
        response
            .set_content_type("application/json")
            .set_content(Some(data.to_string()));
        response
    }

    pub fn text(text: impl Into<String>) -> Self {
        let mut response = Self::new();
        response
            .set_content_type("text/plain")
            .set_content(Some(text.into()));
        response
    }

    pub fn redirect(uri: impl Into<String>) -> Self {
        Self::new()
            .with_status(302)
            .with_header(HttpHeader::Location, uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_response_is_constructed_correctly() {
        let response = Response::json(json!({"key": "value"}));

        assert_eq!(response.status(), 200);
        assert_eq!(
            response.header(HttpHeader::ContentType),
            Some("application/json")
        );
        assert_eq!(response.content(), Some(r#"{"key":"value"}"#));
    }

    #[test]
    fn test_text_response_is_constructed_correctly() {
        let response = Response::text("Hello world!");

        assert_eq!(response.status(), 200);
        assert_eq!(response.header("content-type"), Some("text/plain"));
        assert_eq!(response.content(), Some("Hello world!"));
    }

    #[test]
    fn test_redirect_response_is_constructed_correctly() {
        let response = Response::redirect("https://example.com");

        assert_eq!(response.status(), 302);
        assert_eq!(
            response.header(HttpHeader::Location),
            Some("https://example.com")
        );
        assert_eq!(response.content(), None);
    }

    #[test]
    fn test_prepare_removes_content_headers_if_there_is_no_content() {
        let mut response = Response::new();
        response.set_content_type("text/html");
        response.set_header(HttpHeader::ContentLength, "10");
        response.prepare();

        assert_eq!(response.header(HttpHeader::ContentLength), None);
        assert_eq!(response.header(HttpHeader::ContentType), None);
    }

    #[test]
    fn test_prepare_adds_content_length_if_there_is_content() {
        let mut response = Response::text("Hello, world!");
        response.prepare();

        assert_eq!(response.header(HttpHeader::ContentLength), Some("13"));
    }

    #[test]
    fn test_prepare_counts_bytes_not_chars() {
        let mut response = Response::text("隠しきれない");
        response.prepare();

        assert_eq!(response.header(HttpHeader::ContentLength), Some("18"));
    }

    #[test]
    fn test_prepare_is_idempotent() {
        for mut response in [Response::new(), Response::text("body"), Response::redirect("/")] {
            response.prepare();
            let once = response.headers().clone();
            response.prepare();
            assert_eq!(response.headers(), &once);
        }
    }

    #[test]
    fn test_header_names_are_case_insensitive() {
        let mut response = Response::new().with_header("X-Custom-Header", "Working");

        assert_eq!(response.header("x-custom-header"), Some("Working"));
        assert!(response.headers().contains_key("x-custom-header"));
        assert_eq!(response.remove_header("X-CUSTOM-HEADER"), Some("Working".to_string()));
        assert!(response.headers().is_empty());
    }

    #[test]
    fn test_set_headers_replaces_all() {
        let mut response = Response::text("x");
        response.set_headers([("X-One", "1"), ("X-Two", "2")]);

        assert_eq!(response.headers().len(), 2);
        assert_eq!(response.header("content-type"), None);
        assert_eq!(response.header("x-two"), Some("2"));
    }
}
