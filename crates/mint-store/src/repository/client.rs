//! # Client Repository
//!
//! Operations on the client roster.
//!
//! New clients go to the top of the roster, so `list()` reads newest first.
//! Deleting a client leaves their appointments alone: those keep the name
//! that was booked.

use chrono::Utc;
use mint_core::{id, Client, ClientUpdate, NewClient};
use tracing::debug;

use super::SharedData;
use crate::error::{StoreError, StoreResult};

/// Repository for client operations.
#[derive(Debug, Clone)]
pub struct ClientRepository {
    data: SharedData,
}

impl ClientRepository {
    pub(crate) fn new(data: SharedData) -> Self {
        ClientRepository { data }
    }

    /// All clients, most recently added first.
    pub async fn list(&self) -> Vec<Client> {
        self.data.read().await.clients.clone()
    }

    /// Gets a client by id.
    pub async fn get(&self, id: &str) -> Option<Client> {
        let data = self.data.read().await;
        data.clients.iter().find(|c| c.id == id).cloned()
    }

    /// Clients whose name contains `term` (case-insensitive) or whose phone
    /// contains it. An empty term returns everyone.
    pub async fn search(&self, term: &str) -> Vec<Client> {
        let data = self.data.read().await;
        let results: Vec<Client> = data
            .clients
            .iter()
            .filter(|c| c.matches(term))
            .cloned()
            .collect();

        debug!(term = %term, count = results.len(), "Searched clients");
        results
    }

    /// Adds a client with a fresh id and the current time as join date.
    ///
    /// Content is stored as given; checking it is the caller's job.
    pub async fn add(&self, new: NewClient) -> Client {
        let mut data = self.data.write().await;

        let id = id::generate_unique(|candidate| data.clients.iter().any(|c| c.id == candidate));
        let client = Client {
            id,
            name: new.name,
            phone: new.phone,
            email: new.email,
            notes: new.notes,
            joined_at: Utc::now(),
            last_visit: None,
        };

        data.clients.insert(0, client.clone());

        debug!(id = %client.id, name = %client.name, "Added client");
        client
    }

    /// Merges `update` into the client with `id`.
    pub async fn update(&self, id: &str, update: ClientUpdate) -> StoreResult<Client> {
        let mut data = self.data.write().await;

        let client = data
            .clients
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| StoreError::not_found("Client", id))?;

        client.apply(update);

        debug!(id = %id, "Updated client");
        Ok(client.clone())
    }

    /// Removes the client with `id`. Their appointments are kept.
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        let mut data = self.data.write().await;

        let index = data
            .clients
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| StoreError::not_found("Client", id))?;

        data.clients.remove(index);

        debug!(id = %id, "Deleted client");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
