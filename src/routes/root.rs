use axum::{routing::get, Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct ServiceInfo {
    pub message: String,
    pub status: String,
    pub swagger: String,
    pub api: String,
}

pub fn router() -> Router {
    Router::new().route("/", get(root))
}

#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service banner", body = ServiceInfo))
)]
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Backend API is running".to_string(),
        status: "ok".to_string(),
        swagger: "/docs".to_string(),
        api: "/api/test".to_string(),
    })
}
