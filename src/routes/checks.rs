use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::state::AppState;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct Check {
    pub id: Uuid,
    pub name: String,
    pub kind: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct NewCheck {
    pub name: String,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_checks).post(create_check))
}

#[derive(sqlx::FromRow)]
struct CheckRow {
    id: Uuid,
    name: String,
    created_at: DateTime<Utc>,
}

/// Tags a check from keywords in its name. Anything unrecognized lands in
/// "adhoc".
fn classify(name: &str) -> String {
    let lower = name.to_ascii_lowercase();

    let kind = if lower.contains("smoke") || lower.contains("ping") {
        "smoke"
    } else if lower.contains("load") || lower.contains("stress") {
        "load"
    } else if lower.contains("integration") || lower.contains("e2e") {
        "integration"
    } else {
        "adhoc"
    };

    kind.to_string()
}

#[utoipa::path(
    get,
    path = "/api/test/",
    tag = "checks",
    responses((status = 200, description = "Most recent checks", body = [Check]))
)]
pub async fn list_checks(
    State(state): State<AppState>,
) -> Result<Json<Vec<Check>>, (StatusCode, String)> {
    let rows: Vec<CheckRow> = sqlx::query_as::<_, CheckRow>(
        r#"SELECT id, name, created_at FROM checks ORDER BY created_at DESC LIMIT 100"#,
    )
    .fetch_all(&state.pool)
    .await
    .map_err(|e| {
        error!("list_checks failed: {e}");
        (StatusCode::INTERNAL_SERVER_ERROR, "db_error".to_string())
    })?;

    let checks = rows
        .into_iter()
        .map(|r| {
            let kind = classify(&r.name);
            Check {
                id: r.id,
                name: r.name,
                kind,
                created_at: r.created_at,
            }
        })
        .collect();

    Ok(Json(checks))
}

#[utoipa::path(
    post,
    path = "/api/test/",
    request_body = NewCheck,
    tag = "checks",
    responses((status = 200, description = "Recorded", body = Check))
)]
pub async fn create_check(
    State(state): State<AppState>,
    Json(body): Json<NewCheck>,
) -> Result<Json<Check>, (StatusCode, String)> {
    let id = Uuid::new_v4();
    let created_at = Utc::now();
    let kind = classify(&body.name);

    sqlx::query(r#"INSERT INTO checks (id, name, created_at) VALUES ($1, $2, $3)"#)
        .bind(id)
        .bind(&body.name)
        .bind(created_at)
        .execute(&state.pool)
        .await
        .map_err(|e| {
            error!("create_check insert failed: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, "db_error".to_string())
        })?;

    Ok(Json(Check {
        id,
        name: body.name,
        kind,
        created_at,
    }))
}
