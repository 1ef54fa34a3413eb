//! # HTTP Routes
//!
//! JSON endpoints the front-desk UI talks to.
//!
//! ## Route Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  /api                                                                  │
//! │  ├── /health                       GET                                 │
//! │  ├── /clients                      GET ?search=   POST                 │
//! │  │   └── /{id}                     GET  PATCH  DELETE                  │
//! │  ├── /services                     GET ?grouped=  POST                 │
//! │  │   └── /{id}                     DELETE                              │
//! │  ├── /staff                        GET                                 │
//! │  ├── /appointments                 GET ?date=     POST                 │
//! │  │   ├── /stats                    GET                                 │
//! │  │   └── /{id}/status              PUT                                 │
//! │  │   └── /{id}/reminder            POST                                │
//! │  ├── /schedule                     GET ?date=                          │
//! │  ├── /billing                      GET  DELETE                         │
//! │  │   ├── /items                    POST                                │
//! │  │   │   └── /{line_id}            DELETE                              │
//! │  │   ├── /options                  PUT                                 │
//! │  │   └── /export                   POST                                │
//! │  ├── /preferences                  GET  PUT                            │
//! │  └── /config                       GET                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod appointments;
pub mod billing;
pub mod clients;
pub mod config;
pub mod preferences;
pub mod schedule;
pub mod services;
pub mod staff;

use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub version: &'static str,
}

/// Liveness probe.
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Builds the full API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        // Clients
        .route("/api/clients", get(clients::list).post(clients::create))
        .route(
            "/api/clients/{id}",
            get(clients::show).patch(clients::update).delete(clients::remove),
        )
        // Services & staff
        .route("/api/services", get(services::list).post(services::create))
        .route("/api/services/{id}", delete(services::remove))
        .route("/api/staff", get(staff::list))
        // Appointments
        .route(
            "/api/appointments",
            get(appointments::list).post(appointments::create),
        )
        .route("/api/appointments/stats", get(appointments::stats))
        .route("/api/appointments/{id}/status", put(appointments::set_status))
        .route(
            "/api/appointments/{id}/reminder",
            post(appointments::toggle_reminder),
        )
        .route("/api/schedule", get(schedule::day))
        // Billing
        .route("/api/billing", get(billing::show).delete(billing::clear))
        .route("/api/billing/items", post(billing::add_item))
        .route("/api/billing/items/{line_id}", delete(billing::remove_item))
        .route("/api/billing/options", put(billing::set_options))
        .route("/api/billing/export", post(billing::export))
        // Settings
        .route(
            "/api/preferences",
            get(preferences::show).put(preferences::update),
        )
        .route("/api/config", get(config::show))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
