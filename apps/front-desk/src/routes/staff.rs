use axum::extract::State;
use axum::Json;
use mint_core::Staff;

use crate::state::AppState;

/// The staff roster, in booking-priority order.
pub async fn list(State(state): State<AppState>) -> Json<Vec<Staff>> {
    Json(state.store.staff().list().await)
}
