//! # Store Error Types
//!
//! Error types for store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Repository call (update / delete / add appointment)                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← which entity, which id                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in front-desk) ← Serialized for the UI                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  UI shows "Client not found: 42"                                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use mint_core::ValidationError;
use thiserror::Error;

/// Store operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The record being updated, deleted or transitioned does not exist.
    ///
    /// ## When This Occurs
    /// - Updating or deleting a client that was already removed
    /// - Changing the status of an unknown appointment
    /// - Toggling the reminder of an unknown appointment
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// A booking refers to a record that does not exist.
    ///
    /// ## When This Occurs
    /// - Booking for a deleted client or service
    /// - Booking an unknown staff member
    /// - Booking "any staff" with an empty roster
    #[error("Referenced {entity} does not exist: {id}")]
    MissingReference { entity: String, id: String },

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Creates a MissingReference error.
    pub fn missing_reference(entity: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::MissingReference {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            StoreError::not_found("Client", "42").to_string(),
            "Client not found: 42"
        );
        assert_eq!(
            StoreError::missing_reference("Service", "s9").to_string(),
            "Referenced Service does not exist: s9"
        );
    }
}
