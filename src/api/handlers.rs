use crate::{
    api::models::*,
    auth::jwt::Claims,
    core::{
        errors::NotebookError,
        models::note::Note,
        services::{AuthResponse, NotebookService},
    },
    infrastructure::storage::in_memory::InMemoryStorage,
};
use axum::{
    Extension, Json, Router,
    extract::{Path, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::IntoResponse,
    routing::{get, post},
};
use http::header;

use std::sync::Arc;

// Middleware to validate the bearer token before any handler logic runs
async fn auth_middleware(
    State(service): State<Arc<NotebookService<InMemoryStorage>>>,
    mut req: Request<axum::body::Body>,
    next: Next,
) -> Result<impl IntoResponse, ApiError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| NotebookError::Unauthorized("Missing Authorization header".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| NotebookError::Unauthorized("Invalid Authorization header".to_string()))?;

    let claims = service.validate_token(token)?;
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

fn current_user_id(claims: &Claims) -> Result<i64, NotebookError> {
    claims
        .sub
        .parse()
        .map_err(|_| NotebookError::Unauthorized("Invalid user ID format".to_string()))
}

// Define API routes
pub fn api_routes(service: Arc<NotebookService<InMemoryStorage>>) -> Router {
    let protected_routes = Router::new()
        .route("/notes", get(list_notes).post(create_note))
        .route("/notes/{id}", get(get_note).put(update_note).delete(delete_note))
        .route_layer(middleware::from_fn_with_state(service.clone(), auth_middleware));

    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .merge(protected_routes)
        .with_state(service)
}

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered successfully", body = AuthResponse),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn register(
    State(service): State<Arc<NotebookService<InMemoryStorage>>>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let response = service.register(&req.email, &req.name, &req.password).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn login(
    State(service): State<Arc<NotebookService<InMemoryStorage>>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let response = service.login(&req.email, &req.password).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/notes",
    responses(
        (status = 200, description = "Notes for the caller, most recently updated first", body = Vec<Note>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn list_notes(
    State(service): State<Arc<NotebookService<InMemoryStorage>>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<Note>>, ApiError> {
    let user_id = current_user_id(&claims)?;
    let notes = service.list_notes(user_id).await?;
    Ok(Json(notes))
}

#[utoipa::path(
    get,
    path = "/api/notes/{id}",
    params(
        ("id" = String, Path, description = "ID of the note to retrieve")
    ),
    responses(
        (status = 200, description = "Note retrieved successfully", body = Note),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Note not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn get_note(
    State(service): State<Arc<NotebookService<InMemoryStorage>>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> Result<Json<Note>, ApiError> {
    let user_id = current_user_id(&claims)?;
    let note = service
        .get_note(user_id, &id)
        .await?
        .ok_or_else(|| NotebookError::NoteNotFound(id))?;
    Ok(Json(note))
}

#[utoipa::path(
    post,
    path = "/api/notes",
    request_body = CreateNoteRequest,
    responses(
        (status = 201, description = "Note created successfully", body = Note),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn create_note(
    State(service): State<Arc<NotebookService<InMemoryStorage>>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<CreateNoteRequest>,
) -> Result<(StatusCode, Json<Note>), ApiError> {
    let user_id = current_user_id(&claims)?;
    let note = service.create_note(user_id, &req.title, req.content).await?;
    Ok((StatusCode::CREATED, Json(note)))
}

#[utoipa::path(
    put,
    path = "/api/notes/{id}",
    request_body = UpdateNoteRequest,
    params(
        ("id" = String, Path, description = "ID of the note to update")
    ),
    responses(
        (status = 200, description = "Note updated successfully", body = Note),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Note not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn update_note(
    State(service): State<Arc<NotebookService<InMemoryStorage>>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
    Json(req): Json<UpdateNoteRequest>,
) -> Result<Json<Note>, ApiError> {
    let user_id = current_user_id(&claims)?;
    let note = service
        .update_note(user_id, &id, req.title, req.content)
        .await?
        .ok_or_else(|| NotebookError::NoteNotFound(id))?;
    Ok(Json(note))
}

#[utoipa::path(
    delete,
    path = "/api/notes/{id}",
    params(
        ("id" = String, Path, description = "ID of the note to delete")
    ),
    responses(
        (status = 204, description = "Note deleted successfully"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Note not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn delete_note(
    State(service): State<Arc<NotebookService<InMemoryStorage>>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let user_id = current_user_id(&claims)?;
    if service.delete_note(user_id, &id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(NotebookError::NoteNotFound(id).into())
    }
}
