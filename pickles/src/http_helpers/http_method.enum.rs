use std::fmt;
use std::str::FromStr;

use crate::error::RouterError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HttpMethod {
    #[default]
    GET,
    POST,
    PUT,
    PATCH,
    DELETE,
}

impl HttpMethod {
    /// Every supported verb, in the order the router creates its tables.
    pub const ALL: [HttpMethod; 5] = [
        HttpMethod::GET,
        HttpMethod::POST,
        HttpMethod::PUT,
        HttpMethod::PATCH,
        HttpMethod::DELETE,
    ];

    /// Parse an HTTP method from a string (case-insensitive)
    pub fn from_string(method: &str) -> Option<Self> {
        match method.to_lowercase().as_str() {
            "get" => Some(HttpMethod::GET),
            "post" => Some(HttpMethod::POST),
            "put" => Some(HttpMethod::PUT),
            "patch" => Some(HttpMethod::PATCH),
            "delete" => Some(HttpMethod::DELETE),
            _ => None,
        }
    }

    /// Convert to uppercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PUT => "PUT",
            HttpMethod::PATCH => "PATCH",
            HttpMethod::DELETE => "DELETE",
        }
    }
}

impl FromStr for HttpMethod {
    type Err = RouterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s).ok_or_else(|| RouterError::UnsupportedMethod(s.to_string()))
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for String {
    fn from(method: HttpMethod) -> Self {
        method.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string() {
        assert_eq!(HttpMethod::from_string("get"), Some(HttpMethod::GET));
        assert_eq!(HttpMethod::from_string("GET"), Some(HttpMethod::GET));
        assert_eq!(HttpMethod::from_string("Post"), Some(HttpMethod::POST));
        assert_eq!(HttpMethod::from_string("patch"), Some(HttpMethod::PATCH));
        assert_eq!(HttpMethod::from_string("DELETE"), Some(HttpMethod::DELETE));
        assert_eq!(HttpMethod::from_string("OPTIONS"), None);
        assert_eq!(HttpMethod::from_string("invalid"), None);
    }

    #[test]
    fn test_parse_unsupported_method() {
        let err = "HEAD".parse::<HttpMethod>().unwrap_err();
        assert!(matches!(err, RouterError::UnsupportedMethod(m) if m == "HEAD"));
        assert_eq!("put".parse::<HttpMethod>().unwrap(), HttpMethod::PUT);
    }

    #[test]
    fn test_as_str_and_display() {
        for method in HttpMethod::ALL {
            assert_eq!(method.to_string(), method.as_str());
            assert_eq!(HttpMethod::from_string(method.as_str()), Some(method));
        }
    }

    #[test]
    fn test_to_string() {
        let method: String = HttpMethod::POST.into();
        assert_eq!(method, "POST");
    }
}
