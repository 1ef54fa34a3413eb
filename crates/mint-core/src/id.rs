//! # Entity Identifiers
//!
//! Short opaque ids for clients, services and appointments.
//!
//! Ids are 9 lowercase alphanumeric characters drawn from a UUID v4. They are
//! only required to be unique within one collection; the store checks each
//! candidate against its collection and draws again on a clash, so the
//! uniqueness guarantee does not rest on probability alone.

use uuid::Uuid;

use crate::ID_LENGTH;

/// Draws a fresh candidate id.
///
/// ```rust
/// let id = mint_core::id::generate();
/// assert_eq!(id.len(), 9);
/// assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate() -> String {
    Uuid::new_v4().simple().to_string()[..ID_LENGTH].to_string()
}

/// Draws ids until `taken` reports one as free.
pub fn generate_unique(taken: impl Fn(&str) -> bool) -> String {
    loop {
        let candidate = generate();
        if !taken(&candidate) {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::HashSet;

    #[test]
    fn test_generated_ids_are_short_and_alphanumeric() {
        for _ in 0..100 {
            let id = generate();
            assert_eq!(id.len(), ID_LENGTH);
            assert!(id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_generate_unique_retries_on_clash() {
        let calls = Cell::new(0);
        let id = generate_unique(|_| {
            calls.set(calls.get() + 1);
            calls.get() < 3
        });
        assert_eq!(calls.get(), 3);
        assert_eq!(id.len(), ID_LENGTH);
    }

    #[test]
    fn test_generate_unique_never_returns_taken_id() {
        let mut issued = HashSet::new();
        for _ in 0..1000 {
            let id = generate_unique(|candidate| issued.contains(candidate));
            assert!(issued.insert(id));
        }
    }
}
