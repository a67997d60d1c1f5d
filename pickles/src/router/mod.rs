mod route;
pub use self::route::Route;

#[allow(clippy::module_inception)]
mod router;
pub use self::router::{RouteRegistration, Router};
