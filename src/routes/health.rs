use axum::{extract::State, http::StatusCode, response::Json};
use sqlx::sqlite::SqlitePool;

use crate::db;
use crate::models::HealthResponse;

// GET /health - Probe the player store
pub async fn health_check(
    State(pool): State<SqlitePool>,
) -> Result<Json<HealthResponse>, StatusCode> {
    let players = db::count_players(&pool).await.map_err(|err| {
        tracing::error!(error = %err, "health check could not reach player store");
        StatusCode::SERVICE_UNAVAILABLE
    })?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        players,
        checked_at: chrono::Utc::now().to_rfc3339(),
    }))
}
