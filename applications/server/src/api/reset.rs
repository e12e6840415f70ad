/// Store reset route (test/dev only)
///
/// Only registered when the configuration enables it; production
/// configurations never do.
use crate::{error::Result, state::AppState};
use axum::{extract::State, Json};
use serde::Serialize;

pub const RESET_MESSAGE: &str = "Database reset successfully";

#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub message: String,
}

/// POST /reset
/// Drop every user and rewind the ID counter
pub async fn reset_store(State(app_state): State<AppState>) -> Result<Json<ResetResponse>> {
    app_state.store.reset()?;
    tracing::info!("{}", RESET_MESSAGE);

    Ok(Json(ResetResponse {
        message: RESET_MESSAGE.to_string(),
    }))
}
