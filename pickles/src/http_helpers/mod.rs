#[path = "http_method.enum.rs"]
mod http_method;
pub use self::http_method::HttpMethod;

#[path = "http_header.enum.rs"]
mod http_header;
pub use self::http_header::HttpHeader;

#[path = "http_request.struct.rs"]
mod http_request;
pub use self::http_request::{QueryParams, QueryValue, Request, RouteParameters};

#[path = "http_response.struct.rs"]
mod http_response;
pub use self::http_response::Response;

#[path = "into_response.rs"]
mod into_response;
pub use self::into_response::{HandlerResult, IntoResponse};

mod body_parser;
pub use self::body_parser::{parse_body, parse_query_string};

mod extensions;
pub use self::extensions::Extensions;
