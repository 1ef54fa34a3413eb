//! # Error Types
//!
//! Domain-specific error types for mint-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  mint-core errors (this file)                                          │
//! │  ├── CoreError        - Billing / domain rule violations               │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  mint-store errors (separate crate)                                    │
//! │  └── StoreError       - Missing records, dangling references           │
//! │                                                                         │
//! │  front-desk errors (in app)                                            │
//! │  └── ApiError         - What the UI sees (JSON)                        │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → ApiError → UI        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Business rule violations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The invoice draft already holds the maximum number of lines.
    #[error("Invoice cannot have more than {max} lines")]
    InvoiceTooLarge { max: usize },

    /// No line with this id on the invoice draft.
    #[error("Invoice line not found: {0}")]
    LineNotFound(u64),

    /// Exporting an invoice with nothing on it.
    #[error("Invoice has no items")]
    EmptyInvoice,

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by the API layer before a request reaches the store.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g. a malformed date or price).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
