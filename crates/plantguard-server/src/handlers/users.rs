//! User signup and lookup

use super::parse_id;
use crate::error::ApiError;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use plantguard_core::{NewUser, User};
use tracing::info;

pub async fn signup(
    State(state): State<AppState>,
    body: Result<Json<NewUser>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let Json(req) = body.map_err(|_| ApiError::bad_request("Invalid signup data"))?;

    let username = req.username.trim().to_string();
    if username.is_empty() {
        return Err(ApiError::bad_request("Username is required"));
    }
    if req.password.is_empty() {
        return Err(ApiError::bad_request("Password is required"));
    }

    info!("Signup attempt for: {}", username);
    let user = state
        .store
        .create_user(NewUser {
            username,
            password: req.password,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let user = match parse_id(&id, "user")? {
        Some(id) => state.store.get_user(id).await?,
        None => None,
    };

    user.map(Json)
        .ok_or_else(|| ApiError::not_found("User not found"))
}
