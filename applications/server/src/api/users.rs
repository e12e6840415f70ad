/// Users API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        Path, State,
    },
    http::{header, HeaderMap, StatusCode},
    Json,
};
use serde_json::Value;
use user_core::{NewUser, User, UserError, UserId};

pub const CONTENT_TYPE_ERROR: &str = "Content-Type must be application/json";
pub const INVALID_JSON_ERROR: &str = "Request body must be valid JSON";

/// POST /users
/// Create a new user
///
/// The content type is checked before the body is parsed; field validation
/// runs before the uniqueness check, so a rejected request never touches the
/// store.
pub async fn create_user(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<User>)> {
    if !is_json_content_type(&headers) {
        return Err(ServerError::BadRequest(CONTENT_TYPE_ERROR.to_string()));
    }

    let body = body.map_err(|rejection| {
        tracing::debug!("Rejected request body: {}", rejection);
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ServerError::PayloadTooLarge
        } else {
            ServerError::BadRequest(INVALID_JSON_ERROR.to_string())
        }
    })?;

    let payload: Value = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!("Rejected malformed JSON body: {}", e);
        UserError::InvalidBody(INVALID_JSON_ERROR.to_string())
    })?;

    let new_user = NewUser::from_json(&payload)?;

    let user = app_state.store.create(new_user).map_err(|e| {
        if e == UserError::EmailExists {
            tracing::warn!("Rejected duplicate email");
        }
        e
    })?;

    tracing::info!(user_id = %user.id, "User created");
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /users/:id
/// Get a single user
///
/// A segment that is not a plain non-negative integer gets the same 404 as an
/// unknown route, including one that does not decode to UTF-8.
pub async fn get_user(
    id: std::result::Result<Path<String>, PathRejection>,
    State(app_state): State<AppState>,
) -> Result<Json<User>> {
    let user_id = id
        .ok()
        .and_then(|Path(id)| UserId::parse_path_segment(&id))
        .ok_or_else(ServerError::endpoint_not_found)?;

    let user = app_state
        .store
        .get(user_id)?
        .ok_or(UserError::UserNotFound(user_id))?;

    Ok(Json(user))
}

/// `application/json` or any `application/*+json`, parameters ignored
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|h| h.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}
