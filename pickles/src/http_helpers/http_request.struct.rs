use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use serde::Serialize;
use serde_json::{Map, Value};

use super::{Extensions, HttpMethod};

/// Values captured from the uri by the matched route, in placeholder order.
pub type RouteParameters = IndexMap<String, String>;

/// Decoded query string, in order of first appearance of each key.
pub type QueryParams = IndexMap<String, QueryValue>;

/// Value of a query-string key: a single string, or every value of a repeated key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QueryValue {
    Single(String),
    Multiple(Vec<String>),
}

impl QueryValue {
    /// The value when the key appeared once.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            QueryValue::Single(value) => Some(value),
            QueryValue::Multiple(_) => None,
        }
    }

    /// All values, in order of appearance.
    pub fn values(&self) -> Vec<&str> {
        match self {
            QueryValue::Single(value) => vec![value.as_str()],
            QueryValue::Multiple(values) => values.iter().map(String::as_str).collect(),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Single(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Single(value)
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(values: Vec<String>) -> Self {
        QueryValue::Multiple(values)
    }
}

/// One inbound HTTP request.
///
/// The `with_*` builders are meant for the transport adapter that constructs
/// the request. Once the request enters the router only middlewares touch it,
/// through [`Request::headers_mut`] and [`Request::extensions_mut`].
#[derive(Debug, Default)]
pub struct Request {
    uri: String,
    method: HttpMethod,
    data: Map<String, Value>,
    query_params: QueryParams,
    headers: FxHashMap<String, String>,
    route_parameters: RouteParameters,
    extensions: Extensions,
}

impl Request {
    pub fn new(method: HttpMethod, uri: impl Into<String>) -> Self {
        Self {
            method,
            uri: uri.into(),
            ..Self::default()
        }
    }

    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = uri.into();
        self
    }

    pub fn with_method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_data(mut self, data: Map<String, Value>) -> Self {
        self.data = data;
        self
    }

    pub fn with_query_params(mut self, query_params: QueryParams) -> Self {
        self.query_params = query_params;
        self
    }

    /// Adds headers, lower-casing every name.
    pub fn with_headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (name, value) in headers {
            self.headers
                .insert(name.as_ref().to_ascii_lowercase(), value.into());
        }
        self
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// Parsed body data.
    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    pub fn data_field(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    pub fn query_params(&self) -> &QueryParams {
        &self.query_params
    }

    pub fn query_param(&self, key: &str) -> Option<&QueryValue> {
        self.query_params.get(key)
    }

    /// Headers keyed by lower-cased name.
    pub fn headers(&self) -> &FxHashMap<String, String> {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut FxHashMap<String, String> {
        &mut self.headers
    }

    /// Get a specific header value by name (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn has_header(&self, name: &str) -> bool {
        self.header(name).is_some()
    }

    /// Parameters extracted from the uri by the matched route. Empty until
    /// the router has resolved the request.
    pub fn route_parameters(&self) -> &RouteParameters {
        &self.route_parameters
    }

    pub fn route_parameter(&self, name: &str) -> Option<&str> {
        self.route_parameters.get(name).map(String::as_str)
    }

    pub(crate) fn set_route_parameters(&mut self, parameters: RouteParameters) {
        self.route_parameters = parameters;
    }

    pub fn extensions(&self) -> &Extensions {
        &self.extensions
    }

    pub fn extensions_mut(&mut self) -> &mut Extensions {
        &mut self.extensions
    }
}
