use anyhow::Result;

use crate::kernel::Kernel;

/// A server that feeds inbound requests to a [`Kernel`].
pub trait HttpAdapter: Send + Sync {
    fn new(kernel: Kernel) -> Self;
    fn listen(self, port: u16, hostname: &str) -> impl Future<Output = Result<()>> + Send;
}
