//! # mint-core: Pure Business Logic for Mint Salon
//!
//! This crate is the **heart** of Mint Salon. It defines the salon entities
//! and every calculation the front desk relies on, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Mint Salon Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Front-desk UI (browser)                      │   │
//! │  │   Dashboard ─► Calendar ─► Clients ─► Services ─► Billing       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON over HTTP                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/front-desk (axum)                       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ mint-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  invoice  │  │ schedule  │  │   │
//! │  │   │  Client   │  │   Money   │  │  Draft    │  │  DayGrid  │  │   │
//! │  │   │Appointment│  │  TaxRate  │  │  Invoice  │  │  HourRow  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 mint-store (in-memory store)                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Salon entities (Client, Service, Staff, Appointment)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`id`] - Short opaque entity identifiers
//! - [`invoice`] - Billing draft and invoice totals
//! - [`schedule`] - Day-grid bucketing for the appointment calendar
//! - [`preferences`] - UI preference parsing with safe fallbacks
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation for the API layer
//!
//! ## Example Usage
//!
//! ```rust
//! use mint_core::money::Money;
//! use mint_core::types::TaxRate;
//!
//! let haircut = Money::from_cents(6500);
//! let manicure = Money::from_cents(4000);
//! let subtotal = haircut + manicure;
//!
//! let tax = subtotal.calculate_tax(TaxRate::from_bps(800));
//! assert_eq!(tax.cents(), 840);
//! assert_eq!((subtotal + tax).to_string(), "$113.40");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod id;
pub mod invoice;
pub mod money;
pub mod preferences;
pub mod schedule;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Sales tax applied to invoices when the tax toggle is on (8%).
pub const DEFAULT_TAX_RATE_BPS: u32 = 800;

/// Length of generated entity identifiers.
pub const ID_LENGTH: usize = 9;

/// Maximum number of lines on a single invoice.
///
/// ## Business Reason
/// Guards against runaway drafts from a stuck "add service" button.
pub const MAX_INVOICE_LINES: usize = 100;

/// Salon brand used on invoices and export filenames.
pub const SALON_BRAND: &str = "MintSalon";
