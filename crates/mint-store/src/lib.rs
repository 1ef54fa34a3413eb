//! # mint-store: Salon Data Store for Mint Salon
//!
//! This crate owns the salon's data: clients, services, staff and
//! appointments. Everything lives in memory behind a single lock.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Mint Salon Data Flow                             │
//! │                                                                         │
//! │  HTTP handler (POST /api/appointments)                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    mint-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌─────────────────────┐   ┌──────────┐ │   │
//! │  │   │  SalonStore   │    │    Repositories     │   │   Seed   │ │   │
//! │  │   │  (store.rs)   │    │                     │   │ (demo)   │ │   │
//! │  │   │               │    │ ClientRepository    │   │          │ │   │
//! │  │   │ Arc<RwLock<   │◄───│ ServiceRepository   │   │ 4 clients│ │   │
//! │  │   │   SalonData>> │    │ StaffRepository     │   │ 6 svcs   │ │   │
//! │  │   │               │    │ AppointmentRepo     │   │ 3 staff  │ │   │
//! │  │   └───────────────┘    └─────────────────────┘   └──────────┘ │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Owned snapshots (Vec<Client>, Appointment, ...) back to the caller    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The shared store handle
//! - [`seed`] - Demo data for a fresh install
//! - [`error`] - Store error types
//! - [`repository`] - Per-collection operations
//!
//! ## Usage
//!
//! ```rust
//! # tokio_test_block(async {
//! use mint_store::SalonStore;
//!
//! let store = SalonStore::demo(chrono::Local::now().date_naive());
//! let stats = store.appointments().stats().await;
//! assert_eq!(stats.total, 3);
//! # });
//! # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod repository;
pub mod seed;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use store::{SalonData, SalonStore};

// Repository re-exports for convenience
pub use repository::appointment::AppointmentRepository;
pub use repository::client::ClientRepository;
pub use repository::service::ServiceRepository;
pub use repository::staff::StaffRepository;
