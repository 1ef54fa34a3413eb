//! # Appointment Repository
//!
//! Bookings: creation, status changes, reminders and dashboard counters.
//!
//! ## Booking Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       add(NewAppointment)                               │
//! │                                                                         │
//! │  1. LOOK UP          client_id ──► Client   (MissingReference if gone) │
//! │                      service_id ─► Service  (MissingReference if gone) │
//! │                      staff_id ──► Staff     (None = first on roster)   │
//! │                                                                         │
//! │  2. SNAPSHOT         client.name, service.name, service.duration_min   │
//! │                                                                         │
//! │  3. FORCE DEFAULTS   status Scheduled, color scheduled,                │
//! │                      reminder not sent                                  │
//! │                                                                         │
//! │  4. APPEND           all under one write lock                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use mint_core::{id, Appointment, AppointmentStats, AppointmentStatus, NewAppointment};
use tracing::{debug, warn};

use super::SharedData;
use crate::error::{StoreError, StoreResult};

/// Repository for appointment operations.
#[derive(Debug, Clone)]
pub struct AppointmentRepository {
    data: SharedData,
}

impl AppointmentRepository {
    pub(crate) fn new(data: SharedData) -> Self {
        AppointmentRepository { data }
    }

    /// Appointments on `date`, or all of them when `date` is `None`.
    ///
    /// Booking order is preserved either way.
    pub async fn list(&self, date: Option<NaiveDate>) -> Vec<Appointment> {
        let data = self.data.read().await;
        match date {
            Some(date) => data
                .appointments
                .iter()
                .filter(|a| a.date == date)
                .cloned()
                .collect(),
            None => data.appointments.clone(),
        }
    }

    /// Gets an appointment by id.
    pub async fn get(&self, id: &str) -> Option<Appointment> {
        let data = self.data.read().await;
        data.appointments.iter().find(|a| a.id == id).cloned()
    }

    /// A client's visit history in booking order.
    ///
    /// Works for deleted clients too, since bookings outlive them.
    pub async fn list_for_client(&self, client_id: &str) -> Vec<Appointment> {
        let data = self.data.read().await;
        data.appointments
            .iter()
            .filter(|a| a.client_id == client_id)
            .cloned()
            .collect()
    }

    /// Books an appointment.
    ///
    /// ## Errors
    /// - `MissingReference` when the client, the service or an explicitly
    ///   chosen staff member does not exist, or when no staff id is given and
    ///   the roster is empty.
    pub async fn add(&self, new: NewAppointment) -> StoreResult<Appointment> {
        let mut data = self.data.write().await;

        let client = data
            .clients
            .iter()
            .find(|c| c.id == new.client_id)
            .ok_or_else(|| StoreError::missing_reference("Client", &new.client_id))?;

        let service = data
            .services
            .iter()
            .find(|s| s.id == new.service_id)
            .ok_or_else(|| StoreError::missing_reference("Service", &new.service_id))?;

        let staff = match &new.staff_id {
            Some(staff_id) => data
                .staff
                .iter()
                .find(|s| &s.id == staff_id)
                .ok_or_else(|| StoreError::missing_reference("Staff", staff_id))?,
            None => data
                .staff
                .first()
                .ok_or_else(|| StoreError::missing_reference("Staff", "any"))?,
        };

        let status = AppointmentStatus::Scheduled;
        let appointment = Appointment {
            id: id::generate_unique(|candidate| data.appointments.iter().any(|a| a.id == candidate)),
            client_id: client.id.clone(),
            client_name: client.name.clone(),
            service_id: service.id.clone(),
            service_name: service.name.clone(),
            staff_id: staff.id.clone(),
            date: new.date,
            time: new.time,
            duration_min: service.duration_min,
            status,
            notes: new.notes,
            color: status.color(),
            reminder_sent: false,
        };

        data.appointments.push(appointment.clone());

        debug!(
            id = %appointment.id,
            client = %appointment.client_name,
            service = %appointment.service_name,
            date = %appointment.date,
            time = %appointment.time.format("%H:%M"),
            "Booked appointment"
        );
        Ok(appointment)
    }

    /// Moves an appointment to `status`, recomputing its color.
    pub async fn set_status(&self, id: &str, status: AppointmentStatus) -> StoreResult<Appointment> {
        let mut data = self.data.write().await;

        let appointment = data
            .appointments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| {
                warn!(id = %id, "Status change for unknown appointment");
                StoreError::not_found("Appointment", id)
            })?;

        let from = appointment.status;
        appointment.transition(status);

        debug!(id = %id, from = %from, to = %status, "Changed appointment status");
        Ok(appointment.clone())
    }

    /// Flips the reminder flag and returns its new value.
    pub async fn toggle_reminder(&self, id: &str) -> StoreResult<bool> {
        let mut data = self.data.write().await;

        let appointment = data
            .appointments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| StoreError::not_found("Appointment", id))?;

        appointment.reminder_sent = !appointment.reminder_sent;

        debug!(id = %id, reminder_sent = appointment.reminder_sent, "Toggled reminder");
        Ok(appointment.reminder_sent)
    }

    /// Dashboard counters over every appointment.
    pub async fn stats(&self) -> AppointmentStats {
        let data = self.data.read().await;
        AppointmentStats::tally(&data.appointments)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::{SalonData, SalonStore, StoreError};
    use chrono::{NaiveDate, NaiveTime};
    use mint_core::{AppointmentStatus, ColorTag, NewAppointment, Staff};
    use std::collections::HashSet;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn booking(client_id: &str, service_id: &str, date: NaiveDate, hh: u32, mm: u32) -> NewAppointment {
        NewAppointment {
            client_id: client_id.to_string(),
            service_id: service_id.to_string(),
            staff_id: None,
            date,
            time: NaiveTime::from_hms_opt(hh, mm, 0).unwrap(),
            notes: None,
        }
    }

    /// Demo clients, services and staff, but no bookings yet.
    fn fresh_salon() -> SalonStore {
        let demo = crate::seed::demo_data(today());
        SalonStore::from_data(SalonData {
            appointments: Vec::new(),
            ..demo
        })
    }

    #[tokio::test]
    async fn test_book_haircut_for_sarah() {
        let store = fresh_salon();

        let apt = store
            .appointments()
            .add(NewAppointment {
                staff_id: Some("st1".to_string()),
                ..booking("1", "s1", today(), 10, 0)
            })
            .await
            .unwrap();

        assert_eq!(apt.client_name, "Sarah Jenkins");
        assert_eq!(apt.service_name, "Women's Haircut");
        assert_eq!(apt.duration_min, 60);
        assert_eq!(apt.status, AppointmentStatus::Scheduled);
        assert_eq!(apt.color, ColorTag::Scheduled);
        assert!(!apt.reminder_sent);

        let listed = store.appointments().list(Some(today())).await;
        assert_eq!(listed, vec![apt]);
    }

    #[tokio::test]
    async fn test_any_staff_books_first_on_roster() {
        let store = fresh_salon();
        let apt = store.appointments().add(booking("2", "s3", today(), 15, 0)).await.unwrap();
        assert_eq!(apt.staff_id, "st1");
    }

    #[tokio::test]
    async fn test_missing_references_are_rejected() {
        let store = fresh_salon();

        let no_client = store.appointments().add(booking("nope", "s1", today(), 9, 0)).await;
        assert!(matches!(no_client, Err(StoreError::MissingReference { ref entity, .. }) if entity == "Client"));

        let no_service = store.appointments().add(booking("1", "nope", today(), 9, 0)).await;
        assert!(matches!(no_service, Err(StoreError::MissingReference { ref entity, .. }) if entity == "Service"));

        let no_staff = store
            .appointments()
            .add(NewAppointment {
                staff_id: Some("st9".to_string()),
                ..booking("1", "s1", today(), 9, 0)
            })
            .await;
        assert!(matches!(no_staff, Err(StoreError::MissingReference { ref entity, .. }) if entity == "Staff"));

        assert!(store.appointments().list(None).await.is_empty());
    }

    #[tokio::test]
    async fn test_empty_roster_rejects_any_staff() {
        let store = SalonStore::from_data(SalonData {
            staff: Vec::new(),
            appointments: Vec::new(),
            ..crate::seed::demo_data(today())
        });

        let result = store.appointments().add(booking("1", "s1", today(), 9, 0)).await;
        assert!(matches!(result, Err(StoreError::MissingReference { .. })));
    }

    #[tokio::test]
    async fn test_snapshot_survives_rename() {
        let store = fresh_salon();
        let apt = store.appointments().add(booking("1", "s1", today(), 10, 0)).await.unwrap();

        store
            .clients()
            .update(
                "1",
                mint_core::ClientUpdate {
                    name: Some("Sarah Jenkins-Lee".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let stored = store.appointments().get(&apt.id).await.unwrap();
        assert_eq!(stored.client_name, "Sarah Jenkins");
    }

    #[tokio::test]
    async fn test_status_sets_color() {
        let store = SalonStore::demo(today());
        let cases = [
            (AppointmentStatus::Completed, ColorTag::Completed),
            (AppointmentStatus::Cancelled, ColorTag::Cancelled),
            (AppointmentStatus::NoShow, ColorTag::NoShow),
            (AppointmentStatus::Scheduled, ColorTag::Scheduled),
        ];

        for (status, color) in cases {
            let apt = store.appointments().set_status("a2", status).await.unwrap();
            assert_eq!(apt.status, status);
            assert_eq!(apt.color, color);
        }

        let result = store.appointments().set_status("zz", AppointmentStatus::Completed).await;
        assert!(matches!(result, Err(StoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_toggle_reminder_twice_restores() {
        let store = SalonStore::demo(today());

        assert!(store.appointments().toggle_reminder("a2").await.unwrap());
        assert!(!store.appointments().toggle_reminder("a2").await.unwrap());
        assert!(!store.appointments().get("a2").await.unwrap().reminder_sent);

        assert!(matches!(
            store.appointments().toggle_reminder("zz").await,
            Err(StoreError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_date_filter_is_ordered_subset() {
        let store = fresh_salon();
        let tomorrow = today().succ_opt().unwrap();

        store.appointments().add(booking("1", "s1", today(), 16, 0)).await.unwrap();
        store.appointments().add(booking("2", "s2", tomorrow, 9, 0)).await.unwrap();
        store.appointments().add(booking("3", "s3", today(), 9, 30)).await.unwrap();

        let all = store.appointments().list(None).await;
        let on_day = store.appointments().list(Some(today())).await;

        let expected: Vec<_> = all.iter().filter(|a| a.date == today()).cloned().collect();
        assert_eq!(on_day, expected);
        assert_eq!(on_day.len(), 2);
        assert_eq!(on_day[0].client_id, "1");
        assert_eq!(on_day[1].client_id, "3");

        let other_day = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        assert!(store.appointments().list(Some(other_day)).await.is_empty());
    }

    #[tokio::test]
    async fn test_stats() {
        let store = SalonStore::demo(today());

        let stats = store.appointments().stats().await;
        assert_eq!(stats.total, 3);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.upcoming, 2);

        store.appointments().set_status("a3", AppointmentStatus::NoShow).await.unwrap();
        let stats = store.appointments().stats().await;
        assert_eq!(stats.upcoming, 1);
        assert_eq!(stats.no_show, 1);
        assert!(stats.completed + stats.upcoming <= stats.total);
        assert_eq!(
            stats.total,
            stats.completed + stats.upcoming + stats.cancelled + stats.no_show
        );
    }

    #[tokio::test]
    async fn test_ids_unique_within_collection() {
        let store = SalonStore::with_staff(vec![Staff::new("st1", "Jessica A.", "Senior Stylist")]);
        let client = store
            .clients()
            .add(mint_core::NewClient {
                name: "Ana".to_string(),
                ..Default::default()
            })
            .await;
        let service = store
            .services()
            .add(mint_core::NewService {
                name: "Trim".to_string(),
                price_cents: 2000,
                duration_min: 20,
                category: mint_core::ServiceCategory::Hair,
            })
            .await;

        let mut ids = HashSet::new();
        for _ in 0..100 {
            let apt = store
                .appointments()
                .add(booking(&client.id, &service.id, today(), 12, 0))
                .await
                .unwrap();
            assert!(ids.insert(apt.id));
        }
    }

    #[tokio::test]
    async fn test_concurrent_bookings() {
        let store = fresh_salon();

        let handles: Vec<_> = (0..20)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .appointments()
                        .add(booking("1", "s1", today(), 9 + (i % 10), 0))
                        .await
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(store.appointments().stats().await.total, 20);
    }
}
