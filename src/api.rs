use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::db;
use crate::routes::checks;
use crate::state::AppState;

/// Outcome of loading the test API at startup. Picked once, before the
/// listener binds, and never revisited: whichever variant results is the
/// collection mounted under `/api/test`.
pub enum ApiRoutes {
    Loaded(AppState),
    Failed(FailureReport),
}

/// Diagnostic payload served by the fallback stub when the load failed.
#[derive(Clone, Serialize, ToSchema)]
pub struct FailureReport {
    pub error: String,
    pub details: String,
    pub traceback: String,
}

impl FailureReport {
    pub fn from_error(err: &anyhow::Error) -> Self {
        let traceback = err
            .chain()
            .enumerate()
            .map(|(i, cause)| format!("{i}: {cause}"))
            .collect::<Vec<_>>()
            .join("\n");
        Self {
            error: "Failed to load test API".to_string(),
            details: err.to_string(),
            traceback,
        }
    }
}

/// Tries to bring up the test API's backing store. Errors are absorbed into
/// the `Failed` variant so the caller can keep serving.
pub async fn load() -> ApiRoutes {
    match db::init_pool().await {
        Ok(pool) => ApiRoutes::Loaded(AppState { pool }),
        Err(err) => ApiRoutes::Failed(FailureReport::from_error(&err)),
    }
}

/// The route collection to mount under the test prefix.
pub fn router(api: ApiRoutes) -> Router {
    match api {
        ApiRoutes::Loaded(state) => checks::router().with_state(state),
        ApiRoutes::Failed(report) => fallback_router(report),
    }
}

/// Single-route stub standing in for the real collection. Always answers 200
/// so a browser or curl can read the failure without spelunking logs.
fn fallback_router(report: FailureReport) -> Router {
    Router::new()
        .route("/", get(load_failure))
        .with_state(report)
}

async fn load_failure(State(report): State<FailureReport>) -> Json<FailureReport> {
    Json(report)
}
