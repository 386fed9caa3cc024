use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use sqlx::sqlite::SqlitePool;
use crate::db;
use crate::error::ApiError;
use crate::models::Player;

// GET /players - List all players
pub async fn list_players(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<Player>>, ApiError> {
    let players = db::list_players(&pool).await?;

    Ok(Json(players))
}

// GET /players/{id} - Get player by ID
pub async fn read_player(
    State(pool): State<SqlitePool>,
    Path(player_id): Path<String>,
) -> Result<Json<Player>, ApiError> {
    let player = db::get_player(&pool, &player_id).await?;

    Ok(Json(player))
}

// POST /players - Create a player; the caller supplies the id
pub async fn create_player(
    State(pool): State<SqlitePool>,
    Json(player): Json<Player>,
) -> Result<StatusCode, ApiError> {
    db::add_player(&pool, &player).await?;

    tracing::info!(player_id = %player.id, "created player");
    Ok(StatusCode::CREATED)
}

// PUT /players/{id} - Replace a player's record; the body id must match the path
pub async fn update_player(
    State(pool): State<SqlitePool>,
    Path(player_id): Path<String>,
    Json(player): Json<Player>,
) -> Result<Json<Player>, ApiError> {
    if player.id != player_id {
        tracing::debug!(path_id = %player_id, body_id = %player.id, "rejected update with mismatched id");
        return Err(ApiError::IdMismatch);
    }

    let updated = db::update_player(&pool, &player).await?;

    Ok(Json(updated))
}

// DELETE /players/{id} - Remove a player; unknown ids succeed too
pub async fn delete_player(
    State(pool): State<SqlitePool>,
    Path(player_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    db::delete_player(&pool, &player_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
