//! # Billing State
//!
//! Holds the single in-progress invoice draft for the front desk.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Billing Draft Operations                             │
//! │                                                                         │
//! │  UI Action              Route                        Draft Change       │
//! │  ─────────              ─────                        ────────────       │
//! │                                                                         │
//! │  Click Service ───────► POST /api/billing/items ───► lines.push(line)  │
//! │                                                                         │
//! │  Click Remove ────────► DELETE /items/{line_id} ───► lines.remove(i)   │
//! │                                                                         │
//! │  Toggle Tax / Pay ────► PUT /api/billing/options ──► options change    │
//! │                                                                         │
//! │  Print Invoice ───────► POST /api/billing/export ──► take_lines()      │
//! │                                                     restore_lines()    │
//! │                                                     on failure         │
//! │                                                                         │
//! │  NOTE: the lock is never held across an await.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use mint_core::invoice::{InvoiceDraft, InvoiceLine};

/// Shared billing draft.
///
/// A poisoned lock is recovered rather than propagated: every draft mutation
/// leaves the draft consistent before it can panic.
#[derive(Debug, Clone, Default)]
pub struct BillingState {
    draft: Arc<Mutex<InvoiceDraft>>,
}

impl BillingState {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, InvoiceDraft> {
        self.draft.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Executes a function with read access to the draft.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = billing.with_draft(|d| d.totals(rate));
    /// ```
    pub fn with_draft<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&InvoiceDraft) -> R,
    {
        f(&self.lock())
    }

    /// Executes a function with write access to the draft.
    pub fn with_draft_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut InvoiceDraft) -> R,
    {
        f(&mut self.lock())
    }

    /// Copy of the current draft.
    pub fn snapshot(&self) -> InvoiceDraft {
        self.with_draft(InvoiceDraft::clone)
    }

    /// Moves the lines out of the draft, returning a copy that owns them.
    ///
    /// Options stay on the draft. A second caller sees no lines until
    /// they are restored.
    pub fn take_lines(&self) -> InvoiceDraft {
        self.with_draft_mut(|d| {
            let taken = d.clone();
            d.lines.clear();
            taken
        })
    }

    /// Puts taken lines back ahead of any added since.
    pub fn restore_lines(&self, mut lines: Vec<InvoiceLine>) {
        self.with_draft_mut(|d| {
            lines.append(&mut d.lines);
            d.lines = lines;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mint_core::{Service, ServiceCategory, TaxRate};

    fn service(id: &str, price_cents: i64) -> Service {
        Service {
            id: id.to_string(),
            name: format!("Service {}", id),
            duration_min: 30,
            price_cents,
            category: ServiceCategory::Nails,
        }
    }

    #[test]
    fn test_shared_between_clones() {
        let billing = BillingState::new();
        let other = billing.clone();

        other
            .with_draft_mut(|d| d.add_service(&service("s3", 4000)).map(|_| ()))
            .unwrap();

        assert_eq!(billing.with_draft(|d| d.lines.len()), 1);
        assert_eq!(
            billing.with_draft(|d| d.totals(TaxRate::default())).total.cents(),
            4320
        );
    }

    #[test]
    fn test_snapshot_is_detached() {
        let billing = BillingState::new();
        billing
            .with_draft_mut(|d| d.add_service(&service("s1", 6500)).map(|_| ()))
            .unwrap();

        let snapshot = billing.snapshot();
        billing.with_draft_mut(|d| d.clear());

        assert_eq!(snapshot.lines.len(), 1);
        assert!(billing.with_draft(|d| d.is_empty()));
    }

    #[test]
    fn test_take_lines_leaves_nothing_to_take() {
        let billing = BillingState::new();
        billing
            .with_draft_mut(|d| d.add_service(&service("s1", 6500)).map(|_| ()))
            .unwrap();
        billing.with_draft_mut(|d| d.include_tax = false);

        let taken = billing.take_lines();
        assert_eq!(taken.lines.len(), 1);
        assert!(!taken.include_tax);

        assert!(billing.take_lines().is_empty());
        assert!(!billing.with_draft(|d| d.include_tax));
    }

    #[test]
    fn test_restore_lines_keeps_order() {
        let billing = BillingState::new();
        billing
            .with_draft_mut(|d| d.add_service(&service("s1", 6500)).map(|_| ()))
            .unwrap();

        let taken = billing.take_lines();
        billing
            .with_draft_mut(|d| d.add_service(&service("s3", 4000)).map(|_| ()))
            .unwrap();
        billing.restore_lines(taken.lines);

        let ids: Vec<String> =
            billing.with_draft(|d| d.lines.iter().map(|l| l.service_id.clone()).collect());
        assert_eq!(ids, vec!["s1", "s3"]);
    }
}
