pub mod server;
pub mod users;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;

use crate::error::ErrorCode;
use crate::state::AppState;
use crate::store::StoreError;

/// API routes without transport layers / API 路由（不含中间件）
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(server::health_check))
        .route("/api/users", get(users::search_users))
        .route("/api/users/:id", get(users::get_user))
        .with_state(state)
}

/// Errors returned by handlers / 接口错误
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("search term contains special characters")]
    InvalidQueryCharacter,
    #[error("id must be numeric")]
    NumericIdRequired,
    #[error("user not found")]
    UserNotFound,
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidQueryCharacter => StatusCode::BAD_REQUEST,
            ApiError::NumericIdRequired => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::UserNotFound => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ApiError::InvalidQueryCharacter => ErrorCode::InvalidQueryCharacter,
            ApiError::NumericIdRequired => ErrorCode::NumericIdRequired,
            ApiError::UserNotFound => ErrorCode::UserNotFound,
            ApiError::Store(_) => ErrorCode::Internal,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            ApiError::Store(e) => {
                tracing::error!("Directory store failure: {}", e);
                "internal server error".to_string()
            }
            other => other.to_string(),
        };
        (
            self.status(),
            Json(json!({
                "code": self.code(),
                "message": message,
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_mapping() {
        assert_eq!(ApiError::InvalidQueryCharacter.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::InvalidQueryCharacter.code().code(), "G-5");
        assert_eq!(ApiError::NumericIdRequired.code().code(), "G-1");
        assert_eq!(ApiError::UserNotFound.status(), StatusCode::NOT_FOUND);

        let store = ApiError::from(StoreError::Unavailable("down".to_string()));
        assert_eq!(store.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(store.code(), ErrorCode::Internal);
    }
}
