use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::errors::NotebookError;

// Request structs for JSON payloads
#[derive(Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub email: String,
    pub name: String,
    pub password: String,
}

#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, ToSchema)]
pub struct CreateNoteRequest {
    pub title: String,
    pub content: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateNoteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

// Error response struct
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// Newtype wrapper for NotebookError to implement IntoResponse
pub struct ApiError(pub NotebookError);

impl From<NotebookError> for ApiError {
    fn from(err: NotebookError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message) = match self.0 {
            NotebookError::MissingEmail => (StatusCode::BAD_REQUEST, "Email is required".to_string()),
            NotebookError::InvalidEmail(email) => (StatusCode::BAD_REQUEST, format!("Invalid email: {}", email)),
            NotebookError::InvalidInput(field, err) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid input for {}: {}", field, err.description),
            ),
            NotebookError::EmailAlreadyRegistered(_) => {
                (StatusCode::CONFLICT, "User with this email already exists".to_string())
            }
            NotebookError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Invalid email or password".to_string())
            }
            // The rejection reason stays in the server log; callers get one
            // uniform unauthorized response for every token failure.
            NotebookError::InvalidToken(reason) | NotebookError::Unauthorized(reason) => {
                tracing::debug!(%reason, "request rejected as unauthorized");
                (StatusCode::UNAUTHORIZED, "Invalid or missing token".to_string())
            }
            NotebookError::NoteNotFound(_) => (StatusCode::NOT_FOUND, "Note not found".to_string()),
            NotebookError::InternalServerError(detail) | NotebookError::StorageError(detail) => {
                tracing::error!(%detail, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "An unexpected error occurred".to_string())
            }
        };
        (status, Json(ErrorResponse { error: error_message })).into_response()
    }
}
