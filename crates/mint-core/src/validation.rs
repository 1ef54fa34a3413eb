//! # Validation Module
//!
//! Input validation for the front-desk API.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: UI forms                                                     │
//! │  └── "Name is required" before the request is sent                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: API handlers (Rust)                                          │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE: field rules                                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Store                                                        │
//! │  ├── Id uniqueness                                                     │
//! │  └── Referenced client/service/staff must exist                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store itself accepts any field contents; these rules only run at the
//! API boundary.

use crate::error::ValidationError;
use crate::MAX_INVOICE_LINES;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest treatment the menu accepts (one working day).
pub const MAX_DURATION_MIN: i64 = 12 * 60;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a person or service name: non-empty, at most 120 characters.
///
/// ```rust
/// use mint_core::validation::validate_name;
///
/// assert!(validate_name("name", "Sarah Jenkins").is_ok());
/// assert!(validate_name("name", "   ").is_err());
/// ```
pub fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.chars().count() > 120 {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: 120,
        });
    }

    Ok(())
}

/// Validates an optional email address.
///
/// Empty is allowed (walk-in clients rarely leave one). Otherwise it needs a
/// single `@` with text on both sides and a dot in the domain.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();
    if email.is_empty() {
        return Ok(());
    }

    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    };

    if !valid {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must look like name@example.com".to_string(),
        });
    }

    Ok(())
}

/// Validates free-text notes (at most 2000 characters).
pub fn validate_notes(notes: &str) -> ValidationResult<()> {
    if notes.chars().count() > 2000 {
        return Err(ValidationError::TooLong {
            field: "notes".to_string(),
            max: 2000,
        });
    }
    Ok(())
}

/// Validates a roster search term and returns it trimmed.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.len() > 100 {
        return Err(ValidationError::TooLong {
            field: "search".to_string(),
            max: 100,
        });
    }

    Ok(query.to_string())
}

/// Validates an entity id supplied in a path or body.
pub fn validate_id(field: &str, id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in cents. Zero is allowed (complimentary services).
///
/// ```rust
/// use mint_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(6500).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-100).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a treatment duration: 1 minute up to [`MAX_DURATION_MIN`].
pub fn validate_duration_min(minutes: i64) -> ValidationResult<()> {
    if minutes <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "duration".to_string(),
        });
    }

    if minutes > MAX_DURATION_MIN {
        return Err(ValidationError::OutOfRange {
            field: "duration".to_string(),
            min: 1,
            max: MAX_DURATION_MIN,
        });
    }

    Ok(())
}

/// Validates a tax rate in basis points (0% to 100%).
pub fn validate_tax_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > 10000 {
        return Err(ValidationError::OutOfRange {
            field: "tax_rate".to_string(),
            min: 0,
            max: 10000,
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates that one more line fits on an invoice.
pub fn validate_invoice_size(current_lines: usize) -> ValidationResult<()> {
    if current_lines >= MAX_INVOICE_LINES {
        return Err(ValidationError::OutOfRange {
            field: "invoice lines".to_string(),
            min: 0,
            max: MAX_INVOICE_LINES as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
