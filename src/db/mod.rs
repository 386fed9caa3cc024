use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use thiserror::Error;

use crate::models::Player;

/// Failure kinds raised by the player store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("player {0} not found")]
    NotFound(String),

    #[error("player {0} already exists")]
    AlreadyExists(String),

    #[error("player id must not be empty")]
    EmptyId,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Open the store and make sure the schema exists.
///
/// The pool holds exactly one connection that is never recycled, so an
/// in-memory database lives as long as the pool and every statement is
/// serialized against every other one.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect_with(options)
        .await?;

    init_schema(&pool).await?;

    Ok(pool)
}

pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS players (
            id TEXT PRIMARY KEY NOT NULL,
            jersey_number INTEGER NOT NULL,
            name TEXT NOT NULL,
            position TEXT NOT NULL,
            date_of_birth TEXT NOT NULL
        )"#
    )
    .execute(pool)
    .await?;

    Ok(())
}

// Player queries
pub async fn list_players(pool: &SqlitePool) -> Result<Vec<Player>, StoreError> {
    let players = sqlx::query_as::<_, Player>(
        r#"SELECT * FROM players ORDER BY id"#
    )
    .fetch_all(pool)
    .await?;

    Ok(players)
}

pub async fn count_players(pool: &SqlitePool) -> Result<i64, StoreError> {
    let count: i64 = sqlx::query_scalar(
        r#"SELECT COUNT(*) FROM players"#
    )
    .fetch_one(pool)
    .await?;

    Ok(count)
}

pub async fn get_player(pool: &SqlitePool, id: &str) -> Result<Player, StoreError> {
    sqlx::query_as::<_, Player>(
        r#"SELECT * FROM players WHERE id = ?"#
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| StoreError::NotFound(id.to_string()))
}

/// Insert a new player. An existing row with the same id is left untouched.
pub async fn add_player(pool: &SqlitePool, player: &Player) -> Result<(), StoreError> {
    if player.id.is_empty() {
        return Err(StoreError::EmptyId);
    }

    let result = sqlx::query(
        r#"INSERT INTO players (id, jersey_number, name, position, date_of_birth)
           VALUES (?, ?, ?, ?, ?)
           ON CONFLICT(id) DO NOTHING"#
    )
    .bind(&player.id)
    .bind(player.jersey_number)
    .bind(&player.name)
    .bind(&player.position)
    .bind(player.date_of_birth)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        tracing::debug!(player_id = %player.id, "rejected duplicate player");
        return Err(StoreError::AlreadyExists(player.id.clone()));
    }

    tracing::debug!(player_id = %player.id, "player added");
    Ok(())
}

/// Replace the stored record whose id matches `player.id`.
pub async fn update_player(pool: &SqlitePool, player: &Player) -> Result<Player, StoreError> {
    let id = player.id.as_str();
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        r#"UPDATE players
           SET jersey_number = ?, name = ?, position = ?, date_of_birth = ?
           WHERE id = ?"#
    )
    .bind(player.jersey_number)
    .bind(&player.name)
    .bind(&player.position)
    .bind(player.date_of_birth)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        tx.rollback().await?;
        return Err(StoreError::NotFound(id.to_string()));
    }

    let updated = sqlx::query_as::<_, Player>(
        r#"SELECT * FROM players WHERE id = ?"#
    )
    .bind(id)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::debug!(player_id = %id, "player updated");
    Ok(updated)
}

/// Remove the player if present. Removing an unknown id is not an error.
pub async fn delete_player(pool: &SqlitePool, id: &str) -> Result<(), StoreError> {
    let result = sqlx::query(
        r#"DELETE FROM players WHERE id = ?"#
    )
    .bind(id)
    .execute(pool)
    .await?;

    tracing::debug!(player_id = %id, removed = result.rows_affected(), "player delete");
    Ok(())
}
