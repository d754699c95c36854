use crate::repository;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("auth error: {0}")]
    Auth(&'static str),

    #[error("forbidden: {0}")]
    Forbidden(&'static str),

    #[error("validation error: {0}")]
    Validation(&'static str),

    #[error("no target users found")]
    NoTargetUsers,

    #[error("notification not exist")]
    NotificationNotExist,

    #[error("cannot cancel notification that was already sent")]
    CannotCancelSent,

    #[error("database error: {0}")]
    Database(#[from] repository::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::warn!(err = %self);

        let message = self.to_string();
        let status = match self {
            Error::Auth(_) => StatusCode::UNAUTHORIZED,
            Error::Forbidden(_) => StatusCode::FORBIDDEN,
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::NoTargetUsers => StatusCode::BAD_REQUEST,
            Error::NotificationNotExist => StatusCode::NOT_FOUND,
            Error::CannotCancelSent => StatusCode::CONFLICT,
            Error::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (
            status,
            Json(json!({
                "success": false,
                "error": message,
            })),
        )
            .into_response()
    }
}
