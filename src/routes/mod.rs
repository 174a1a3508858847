use axum::Router;

pub mod checks;
pub mod health;
pub mod root;

/// The inline status routes. Stateless on purpose.
pub fn router() -> Router {
    Router::new()
        .merge(root::router())
        .merge(health::router())
}
