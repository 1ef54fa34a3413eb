//! # Appointment Routes
//!
//! ## Booking Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  POST /api/appointments                                                │
//! │  { client_id, service_id, staff_id?, date, time: "HH:MM", notes? }     │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  ┌────────────────────────────────────────────────────────────────┐    │
//! │  │  1. Check ids are present and notes are short enough          │    │
//! │  │  2. Store resolves client, service and staff                   │    │
//! │  │     - missing reference → 422 INVALID_REFERENCE               │    │
//! │  │  3. Names and duration are copied onto the booking             │    │
//! │  │  4. Booking starts Scheduled, blue, no reminder                │    │
//! │  └────────────────────────────────────────────────────────────────┘    │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  201 { id, client_name, service_name, status: "scheduled", ... }       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use mint_core::validation::{validate_id, validate_notes};
use mint_core::{Appointment, AppointmentStats, AppointmentStatus, NewAppointment};
use serde::{Deserialize, Serialize};

use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct DateQuery {
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct StatusChange {
    pub status: AppointmentStatus,
}

#[derive(Debug, Serialize)]
pub struct ReminderState {
    pub id: String,
    pub reminder_sent: bool,
}

/// All bookings, or those on `?date=YYYY-MM-DD`, in booking order.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Json<Vec<Appointment>> {
    Json(state.store.appointments().list(query.date).await)
}

/// Books an appointment.
pub async fn create(
    State(state): State<AppState>,
    Json(new): Json<NewAppointment>,
) -> ApiResult<(StatusCode, Json<Appointment>)> {
    validate_id("client_id", &new.client_id)?;
    validate_id("service_id", &new.service_id)?;
    if let Some(staff_id) = &new.staff_id {
        validate_id("staff_id", staff_id)?;
    }
    if let Some(notes) = &new.notes {
        validate_notes(notes)?;
    }

    let appointment = state.store.appointments().add(new).await?;
    Ok((StatusCode::CREATED, Json(appointment)))
}

/// Moves a booking to a new status; its color follows.
pub async fn set_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(change): Json<StatusChange>,
) -> ApiResult<Json<Appointment>> {
    let appointment = state
        .store
        .appointments()
        .set_status(&id, change.status)
        .await?;
    Ok(Json(appointment))
}

/// Flips the reminder-sent flag.
pub async fn toggle_reminder(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ReminderState>> {
    let reminder_sent = state.store.appointments().toggle_reminder(&id).await?;
    Ok(Json(ReminderState { id, reminder_sent }))
}

pub async fn stats(State(state): State<AppState>) -> Json<AppointmentStats> {
    Json(state.store.appointments().stats().await)
}
