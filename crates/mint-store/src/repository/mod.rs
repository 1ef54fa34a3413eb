//! # Repository Module
//!
//! Per-collection operations on the salon store.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  HTTP handler                                                          │
//! │       │                                                                 │
//! │       │  store.appointments().add(new)                                 │
//! │       ▼                                                                 │
//! │  AppointmentRepository                                                 │
//! │  ├── list(&self, date)                                                 │
//! │  ├── add(&self, new)            ← checks client/service/staff exist    │
//! │  ├── set_status(&self, id, s)                                          │
//! │  └── toggle_reminder(&self, id)                                        │
//! │       │                                                                 │
//! │       │  write().await                                                  │
//! │       ▼                                                                 │
//! │  Arc<RwLock<SalonData>> (shared with every other repository)          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Repositories are cheap handles created on demand by
//! [`SalonStore`](crate::SalonStore); they hold no state of their own.
//!
//! ## Available Repositories
//!
//! - [`ClientRepository`](client::ClientRepository) - Client roster
//! - [`ServiceRepository`](service::ServiceRepository) - Service price list
//! - [`StaffRepository`](staff::StaffRepository) - Staff roster (read-only)
//! - [`AppointmentRepository`](appointment::AppointmentRepository) - Bookings

pub mod appointment;
pub mod client;
pub mod service;
pub mod staff;

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::store::SalonData;

/// Shared handle to the store's collections.
pub(crate) type SharedData = Arc<RwLock<SalonData>>;
