use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::db::StoreError;

/// Error returned by the player handlers.
///
/// Responses carry only a status code; details stay in the logs.
#[derive(Debug)]
pub enum ApiError {
    NotFound,
    AlreadyExists,
    InvalidId,
    IdMismatch,
    DatabaseError(sqlx::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::AlreadyExists | ApiError::InvalidId | ApiError::IdMismatch => StatusCode::BAD_REQUEST,
            ApiError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if let ApiError::DatabaseError(err) = &self {
            tracing::error!(error = %err, "player store failure");
        }

        status.into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::NotFound,
            StoreError::AlreadyExists(_) => ApiError::AlreadyExists,
            StoreError::EmptyId => ApiError::InvalidId,
            StoreError::Database(err) => ApiError::DatabaseError(err),
        }
    }
}
