//! # Client Routes
//!
//! Roster listing and search, client detail with visit history, and
//! add / edit / delete.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use mint_core::validation::{validate_email, validate_name, validate_notes, validate_search_query};
use mint_core::{Appointment, Client, ClientUpdate, NewClient};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ClientQuery {
    pub search: Option<String>,
}

/// A client with every booking made for them.
#[derive(Debug, Serialize)]
pub struct ClientDetail {
    pub client: Client,
    pub history: Vec<Appointment>,
}

/// Lists clients, newest first, optionally filtered by name or phone.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ClientQuery>,
) -> ApiResult<Json<Vec<Client>>> {
    let clients = match query.search {
        Some(raw) => {
            let term = validate_search_query(&raw)?;
            debug!(term = %term, "Searching clients");
            state.store.clients().search(&term).await
        }
        None => state.store.clients().list().await,
    };
    Ok(Json(clients))
}

/// Adds a client.
///
/// ## Validation
/// - `name` required, at most 120 characters (trimmed before storing)
/// - `email` optional but must look like an address
/// - `notes` at most 2000 characters
pub async fn create(
    State(state): State<AppState>,
    Json(mut new): Json<NewClient>,
) -> ApiResult<(StatusCode, Json<Client>)> {
    validate_name("name", &new.name)?;
    validate_email(&new.email)?;
    validate_notes(&new.notes)?;

    new.name = new.name.trim().to_string();
    new.email = new.email.trim().to_string();
    new.phone = new.phone.trim().to_string();

    let client = state.store.clients().add(new).await;
    Ok((StatusCode::CREATED, Json(client)))
}

/// Client profile plus visit history.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ClientDetail>> {
    let client = state
        .store
        .clients()
        .get(&id)
        .await
        .ok_or_else(|| ApiError::not_found("Client", &id))?;
    let history = state.store.appointments().list_for_client(&id).await;

    Ok(Json(ClientDetail { client, history }))
}

/// Partial update. Omitted fields are left alone.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(mut update): Json<ClientUpdate>,
) -> ApiResult<Json<Client>> {
    if update.is_empty() {
        return Err(ApiError::validation("Nothing to update"));
    }
    if let Some(name) = update.name.as_mut() {
        validate_name("name", name)?;
        *name = name.trim().to_string();
    }
    if let Some(email) = update.email.as_mut() {
        validate_email(email)?;
        *email = email.trim().to_string();
    }
    if let Some(notes) = &update.notes {
        validate_notes(notes)?;
    }

    let client = state.store.clients().update(&id, update).await?;
    Ok(Json(client))
}

/// Removes a client. Their past bookings stay on the calendar.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.store.clients().delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
