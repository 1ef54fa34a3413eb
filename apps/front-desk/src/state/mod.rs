//! # State Module
//!
//! Shared state handed to every axum handler.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      axum Router                                │   │
//! │  │  .with_state(AppState { .. })                                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │     ┌───────────────┬────────┴───────┬─────────────────┐               │
//! │     ▼               ▼                ▼                 ▼                │
//! │  ┌──────────┐ ┌──────────────┐ ┌─────────────────┐ ┌──────────────┐    │
//! │  │SalonStore│ │ BillingState │ │ PreferenceStore │ │ AppConfig +  │    │
//! │  │          │ │              │ │                 │ │ Exporter     │    │
//! │  │ RwLock<  │ │ Arc<Mutex<   │ │ RwLock<Prefs>   │ │              │    │
//! │  │ SalonData│ │ InvoiceDraft │ │ + TOML file     │ │ read-only    │    │
//! │  │ >        │ │ >>           │ │                 │ │              │    │
//! │  └──────────┘ └──────────────┘ └─────────────────┘ └──────────────┘    │
//! │                                                                         │
//! │  Every field is a cheap handle; cloning AppState shares, not copies.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod billing;
mod preferences;

pub use billing::BillingState;
pub use preferences::{PreferenceError, PreferenceStore};

use std::sync::Arc;

use chrono::NaiveDate;
use mint_store::{seed, SalonStore};
use tracing::info;

use crate::config::AppConfig;
use crate::export::{InvoiceExporter, TextFileExporter};

/// Everything a handler can reach.
#[derive(Clone)]
pub struct AppState {
    pub store: SalonStore,
    pub billing: BillingState,
    pub preferences: PreferenceStore,
    pub config: Arc<AppConfig>,
    pub exporter: Arc<dyn InvoiceExporter>,
}

impl AppState {
    /// Builds state from configuration.
    ///
    /// `today` dates the demo bookings when `data.seed_demo` is on.
    pub async fn from_config(config: AppConfig, today: NaiveDate) -> Self {
        let store = if config.data.seed_demo {
            SalonStore::demo(today)
        } else {
            info!("Starting with an empty salon");
            SalonStore::with_staff(seed::demo_staff())
        };

        let preferences = PreferenceStore::load(config.preferences_file()).await;
        let exporter = Arc::new(TextFileExporter::new(config.exports_dir()));
        info!(
            exports_dir = ?exporter.dir(),
            preferences_file = ?preferences.path(),
            "Front-desk files ready"
        );

        AppState {
            store,
            billing: BillingState::new(),
            preferences,
            config: Arc::new(config),
            exporter,
        }
    }

    /// Replaces the invoice exporter.
    pub fn with_exporter(mut self, exporter: Arc<dyn InvoiceExporter>) -> Self {
        self.exporter = exporter;
        self
    }
}
