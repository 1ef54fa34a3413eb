//! # Service Repository
//!
//! Operations on the service price list. Services are added and removed,
//! never edited; appointments and invoice lines keep their own copies of the
//! name, price and duration.

use mint_core::{id, NewService, Service, ServiceCategory};
use tracing::debug;

use super::SharedData;
use crate::error::{StoreError, StoreResult};

/// Repository for service operations.
#[derive(Debug, Clone)]
pub struct ServiceRepository {
    data: SharedData,
}

impl ServiceRepository {
    pub(crate) fn new(data: SharedData) -> Self {
        ServiceRepository { data }
    }

    /// All services in the order they were added.
    pub async fn list(&self) -> Vec<Service> {
        self.data.read().await.services.clone()
    }

    /// Gets a service by id.
    pub async fn get(&self, id: &str) -> Option<Service> {
        let data = self.data.read().await;
        data.services.iter().find(|s| s.id == id).cloned()
    }

    /// Services grouped by category.
    ///
    /// Groups appear in the order their category is first seen on the list;
    /// empty categories are left out.
    pub async fn by_category(&self) -> Vec<(ServiceCategory, Vec<Service>)> {
        let data = self.data.read().await;
        let mut groups: Vec<(ServiceCategory, Vec<Service>)> = Vec::new();

        for service in &data.services {
            match groups.iter_mut().find(|(cat, _)| *cat == service.category) {
                Some((_, members)) => members.push(service.clone()),
                None => groups.push((service.category, vec![service.clone()])),
            }
        }

        groups
    }

    /// Appends a service with a fresh id.
    ///
    /// Price and duration are stored as given; checking them is the caller's job.
    pub async fn add(&self, new: NewService) -> Service {
        let mut data = self.data.write().await;

        let id = id::generate_unique(|candidate| data.services.iter().any(|s| s.id == candidate));
        let service = Service {
            id,
            name: new.name,
            duration_min: new.duration_min,
            price_cents: new.price_cents,
            category: new.category,
        };

        data.services.push(service.clone());

        debug!(id = %service.id, name = %service.name, "Added service");
        service
    }

    /// Removes the service with `id`. Bookings of it are kept.
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        let mut data = self.data.write().await;

        let index = data
            .services
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| StoreError::not_found("Service", id))?;

        data.services.remove(index);

        debug!(id = %id, "Deleted service");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
