//! # Salon Store
//!
//! The shared store handle.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          SalonStore                                     │
//! │                                                                         │
//! │  App startup                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SalonStore::demo(today) / SalonStore::empty()                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │      Arc<RwLock<SalonData>>             │                           │
//! │  │  clients │ services │ staff │ appts     │  one lock, all four       │
//! │  └─────────────────────────────────────────┘                           │
//! │       │                                                                 │
//! │       │ clones share the same lock                                      │
//! │       ▼                                                                 │
//! │  handler 1 ──► store.clients().add(..)        (write)                  │
//! │  handler 2 ──► store.appointments().list(..)  (read)                   │
//! │  handler 3 ──► store.appointments().add(..)   (write, waits)           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Booking reads the client and service collections and writes the
//! appointment collection; holding one lock for all four makes that a single
//! atomic step.

use chrono::NaiveDate;
use mint_core::{Appointment, Client, Service, Staff};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use crate::repository::appointment::AppointmentRepository;
use crate::repository::client::ClientRepository;
use crate::repository::service::ServiceRepository;
use crate::repository::staff::StaffRepository;
use crate::seed;

// =============================================================================
// Data
// =============================================================================

/// The four collections, in display order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SalonData {
    /// Newest first.
    pub clients: Vec<Client>,
    /// Oldest first.
    pub services: Vec<Service>,
    pub staff: Vec<Staff>,
    /// Booking order.
    pub appointments: Vec<Appointment>,
}

// =============================================================================
// Store
// =============================================================================

/// Main store handle providing repository access.
///
/// ## Usage in Handlers
/// ```rust,ignore
/// async fn list_clients(State(state): State<AppState>) -> Json<Vec<Client>> {
///     Json(state.store.clients().list().await)
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct SalonStore {
    data: Arc<RwLock<SalonData>>,
}

impl SalonStore {
    /// A store with no records at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A store with nothing but a staff roster.
    pub fn with_staff(staff: Vec<Staff>) -> Self {
        Self::from_data(SalonData {
            staff,
            ..Default::default()
        })
    }

    /// A store pre-filled with `data`.
    pub fn from_data(data: SalonData) -> Self {
        SalonStore {
            data: Arc::new(RwLock::new(data)),
        }
    }

    /// The demo salon, with today's three bookings on `today`.
    pub fn demo(today: NaiveDate) -> Self {
        let data = seed::demo_data(today);
        info!(
            clients = data.clients.len(),
            services = data.services.len(),
            staff = data.staff.len(),
            appointments = data.appointments.len(),
            "Seeded demo salon"
        );
        Self::from_data(data)
    }

    /// Returns the client repository.
    pub fn clients(&self) -> ClientRepository {
        ClientRepository::new(self.data.clone())
    }

    /// Returns the service repository.
    pub fn services(&self) -> ServiceRepository {
        ServiceRepository::new(self.data.clone())
    }

    /// Returns the staff repository.
    pub fn staff(&self) -> StaffRepository {
        StaffRepository::new(self.data.clone())
    }

    /// Returns the appointment repository.
    pub fn appointments(&self) -> AppointmentRepository {
        AppointmentRepository::new(self.data.clone())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
