//! Demo data for a fresh install.
//!
//! The three bookings always land on the day passed in, so the dashboard and
//! calendar have something to show on first launch.

use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use mint_core::{Appointment, AppointmentStatus, Client, Service, ServiceCategory, Staff};

use crate::store::SalonData;

/// Builds the demo salon.
pub fn demo_data(today: NaiveDate) -> SalonData {
    SalonData {
        clients: demo_clients(),
        services: demo_services(),
        staff: demo_staff(),
        appointments: demo_appointments(today),
    }
}

/// The default staff roster.
pub fn demo_staff() -> Vec<Staff> {
    vec![
        Staff::new("st1", "Jessica A.", "Senior Stylist"),
        Staff::new("st2", "David B.", "Colorist"),
        Staff::new("st3", "Maria G.", "Nail Technician"),
    ]
}

fn client(
    id: &str,
    name: &str,
    phone: &str,
    email: &str,
    notes: &str,
    joined: (i32, u32, u32),
    last_visit: (i32, u32, u32),
) -> Client {
    Client {
        id: id.to_string(),
        name: name.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
        notes: notes.to_string(),
        joined_at: Utc
            .with_ymd_and_hms(joined.0, joined.1, joined.2, 0, 0, 0)
            .single()
            .unwrap_or_default(),
        last_visit: NaiveDate::from_ymd_opt(last_visit.0, last_visit.1, last_visit.2),
    }
}

fn demo_clients() -> Vec<Client> {
    vec![
        client(
            "1",
            "Sarah Jenkins",
            "(555) 123-4567",
            "sarah.j@example.com",
            "Prefers ammonia-free hair dye.",
            (2023, 1, 15),
            (2023, 10, 5),
        ),
        client(
            "2",
            "Michael Chen",
            "(555) 987-6543",
            "m.chen@example.com",
            "Sensitive skin, use hypoallergenic products.",
            (2023, 3, 22),
            (2023, 9, 28),
        ),
        client(
            "3",
            "Emma Watson",
            "(555) 456-7890",
            "emma.w@example.com",
            "Likes tea with sugar.",
            (2022, 11, 10),
            (2023, 10, 12),
        ),
        client(
            "4",
            "Olivia Rodrigo",
            "(555) 222-3333",
            "olivia@example.com",
            "VVIP. Loves purple.",
            (2023, 6, 15),
            (2023, 11, 1),
        ),
    ]
}

fn service(id: &str, name: &str, duration_min: i64, dollars: i64, category: ServiceCategory) -> Service {
    Service {
        id: id.to_string(),
        name: name.to_string(),
        duration_min,
        price_cents: dollars * 100,
        category,
    }
}

fn demo_services() -> Vec<Service> {
    vec![
        service("s1", "Women's Haircut", 60, 65, ServiceCategory::Hair),
        service("s2", "Men's Haircut", 30, 35, ServiceCategory::Hair),
        service("s3", "Gel Manicure", 45, 40, ServiceCategory::Nails),
        service("s4", "Basic Facial", 60, 85, ServiceCategory::Skin),
        service("s5", "Full Body Massage", 90, 120, ServiceCategory::Massage),
        service("s6", "Balayage Color", 180, 200, ServiceCategory::Hair),
    ]
}

#[allow(clippy::too_many_arguments)]
fn booking(
    id: &str,
    client: (&str, &str),
    staff_id: &str,
    service: (&str, &str, i64),
    date: NaiveDate,
    time: (u32, u32),
    status: AppointmentStatus,
    reminder_sent: bool,
) -> Appointment {
    Appointment {
        id: id.to_string(),
        client_id: client.0.to_string(),
        client_name: client.1.to_string(),
        service_id: service.0.to_string(),
        service_name: service.1.to_string(),
        staff_id: staff_id.to_string(),
        date,
        time: NaiveTime::from_hms_opt(time.0, time.1, 0).unwrap_or(NaiveTime::MIN),
        duration_min: service.2,
        status,
        notes: None,
        color: status.color(),
        reminder_sent,
    }
}

fn demo_appointments(today: NaiveDate) -> Vec<Appointment> {
    vec![
        booking(
            "a1",
            ("1", "Sarah Jenkins"),
            "st1",
            ("s1", "Women's Haircut", 60),
            today,
            (10, 0),
            AppointmentStatus::Completed,
            true,
        ),
        booking(
            "a2",
            ("2", "Michael Chen"),
            "st2",
            ("s2", "Men's Haircut", 30),
            today,
            (11, 30),
            AppointmentStatus::Scheduled,
            false,
        ),
        booking(
            "a3",
            ("3", "Emma Watson"),
            "st3",
            ("s3", "Gel Manicure", 45),
            today,
            (14, 0),
            AppointmentStatus::Scheduled,
            false,
        ),
    ]
}
