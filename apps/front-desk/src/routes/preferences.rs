use axum::extract::State;
use axum::Json;
use mint_core::preferences::{Preferences, PreferencesUpdate};

use crate::error::ApiResult;
use crate::state::AppState;

pub async fn show(State(state): State<AppState>) -> Json<Preferences> {
    Json(state.preferences.get().await)
}

/// Changes dark mode and/or theme; saved before responding.
pub async fn update(
    State(state): State<AppState>,
    Json(update): Json<PreferencesUpdate>,
) -> ApiResult<Json<Preferences>> {
    Ok(Json(state.preferences.update(update).await?))
}
