use anyhow::Result;

use crate::{
    error::RouterError,
    http_helpers::{Request, Response},
    kernel::Kernel,
};

/// Converts between a transport's native request/response types and ours.
pub trait RouteAdapter {
    type Request: Send;
    type Response;

    /// Builds a [`Request`] with a path-only uri and lower-cased headers.
    fn adapt_request(
        request: Self::Request,
    ) -> impl Future<Output = Result<Request, RouterError>> + Send;

    fn adapt_response(response: Response) -> Result<Self::Response>;

    fn handle_request(
        request: Self::Request,
        kernel: &Kernel,
    ) -> impl Future<Output = Result<Self::Response>> + Send {
        async move {
            let mut response = match Self::adapt_request(request).await {
                Ok(request) => kernel.handle(request).await,
                Err(err) => {
                    tracing::warn!(error = %err, "rejected request before routing");
                    Kernel::error_response(&err)
                }
            };
            response.prepare();
            Self::adapt_response(response)
        }
    }
}
