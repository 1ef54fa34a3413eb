use axum::extract::{Query, State};
use axum::Json;
use chrono::Local;
use mint_core::schedule::DayGrid;

use super::appointments::DateQuery;
use crate::state::AppState;

/// Hourly grid for `?date=`, today when omitted.
pub async fn day(State(state): State<AppState>, Query(query): Query<DateQuery>) -> Json<DayGrid> {
    let date = query.date.unwrap_or_else(|| Local::now().date_naive());
    let appointments = state.store.appointments().list(Some(date)).await;

    Json(DayGrid::build(date, &appointments))
}
