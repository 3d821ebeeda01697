//! User handlers.

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{HashMode, UserResponse};
use crate::errors::{AppError, AppResult};

/// User registration request
#[derive(Deserialize, Validate, ToSchema)]
pub struct SignupRequest {
    /// User display name
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Alice")]
    pub name: String,
    /// User email address (not checked for format or uniqueness)
    #[schema(example = "alice@x.com")]
    pub email: String,
    /// Plaintext password, hashed under the current mode
    #[schema(example = "hunter2")]
    pub password: String,
}

/// Hashing mode change request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ModeRequest {
    /// `true` for bcrypt, `false` for unsalted SHA-1
    #[schema(example = true)]
    pub secure_mode: Option<bool>,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/signup", post(signup))
        .route("/mode", post(set_mode))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/users/signup",
    tag = "Users",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "User registered", body = UserResponse),
        (status = 400, description = "Missing or invalid field")
    )
)]
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SignupRequest>,
) -> AppResult<Json<UserResponse>> {
    let user = state
        .user_service
        .register(payload.name, payload.email, payload.password)
        .await?;

    Ok(Json(UserResponse::from(user)))
}

/// List all users in registration order
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "All registered users", body = Vec<UserResponse>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<UserResponse>> {
    let users = state.user_service.list_all().await;
    Json(users.into_iter().map(UserResponse::from).collect())
}

/// Switch the hashing mode for future registrations
#[utoipa::path(
    post,
    path = "/api/users/mode",
    tag = "Users",
    request_body = ModeRequest,
    responses(
        (status = 200, description = "Mode updated, e.g. `Mode set to: secure`", body = String),
        (status = 400, description = "secureMode missing or not a boolean")
    )
)]
pub async fn set_mode(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ModeRequest>,
) -> AppResult<String> {
    let mode = payload
        .secure_mode
        .map(HashMode::from)
        .ok_or_else(|| AppError::bad_request("Invalid mode specified"))?;

    state.user_service.set_mode(mode).await;

    Ok(format!("Mode set to: {}", mode))
}
