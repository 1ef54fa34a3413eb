//! # Staff Repository
//!
//! Read-only access to the staff roster. The roster is fixed when the store
//! is built.

use mint_core::Staff;

use super::SharedData;

/// Repository for staff lookups.
#[derive(Debug, Clone)]
pub struct StaffRepository {
    data: SharedData,
}

impl StaffRepository {
    pub(crate) fn new(data: SharedData) -> Self {
        StaffRepository { data }
    }

    /// The whole roster in its configured order.
    pub async fn list(&self) -> Vec<Staff> {
        self.data.read().await.staff.clone()
    }

    pub async fn get(&self, id: &str) -> Option<Staff> {
        let data = self.data.read().await;
        data.staff.iter().find(|s| s.id == id).cloned()
    }
}
