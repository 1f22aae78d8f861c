use axum::Router;

pub mod banks;
pub mod system;

/// Router for everything under the `/api` resource root.
pub fn router() -> Router {
    Router::new().merge(banks::router())
}
