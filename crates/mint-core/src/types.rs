//! # Domain Types
//!
//! Salon entities shared by the store and the front-desk API.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Client      │   │   Appointment   │   │    Service      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │◄──│  client_id      │   │  id             │       │
//! │  │  name           │   │  client_name ✱  │   │  name           │       │
//! │  │  joined_at      │   │  service_id     │──►│  price_cents    │       │
//! │  │  last_visit     │   │  service_name ✱ │   │  duration_min   │       │
//! │  └─────────────────┘   │  status / color │   │  category       │       │
//! │                        └────────┬────────┘   └─────────────────┘       │
//! │  ┌─────────────────┐            │                                      │
//! │  │     Staff       │◄───────────┘ staff_id                             │
//! │  └─────────────────┘                                                   │
//! │                                                                         │
//! │  ✱ snapshot: copied at booking time, never follows later renames       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! An appointment records *what was booked*: the client name, service name
//! and duration are frozen when the booking is made. Renaming or deleting the
//! client later does not rewrite history.

use chrono::{DateTime, NaiveDate, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 800 bps = 8%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::from_bps(crate::DEFAULT_TAX_RATE_BPS)
    }
}

// =============================================================================
// Client
// =============================================================================

/// A salon customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Client {
    /// Unique identifier, assigned by the store.
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    /// Free-text notes ("prefers ammonia-free dye").
    pub notes: String,
    /// When the client joined. Assigned at creation, never changed.
    #[ts(as = "String")]
    pub joined_at: DateTime<Utc>,
    #[ts(as = "Option<String>")]
    pub last_visit: Option<NaiveDate>,
}

impl Client {
    /// Applies a partial update. Only fields that are `Some` change.
    pub fn apply(&mut self, update: ClientUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(notes) = update.notes {
            self.notes = notes;
        }
        if let Some(last_visit) = update.last_visit {
            self.last_visit = Some(last_visit);
        }
    }

    /// Roster search: case-insensitive name match or phone substring.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim();
        if term.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&term.to_lowercase()) || self.phone.contains(term)
    }
}

/// Fields supplied when adding a client.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewClient {
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub notes: String,
}

/// Partial client update. `id` and `joined_at` are not updatable.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClientUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub notes: Option<String>,
    #[ts(as = "Option<String>")]
    pub last_visit: Option<NaiveDate>,
}

impl ClientUpdate {
    /// True when the update would change nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.phone.is_none()
            && self.email.is_none()
            && self.notes.is_none()
            && self.last_visit.is_none()
    }
}

// =============================================================================
// Service
// =============================================================================

/// Treatment categories on the service menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ServiceCategory {
    Hair,
    Nails,
    Skin,
    Massage,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 4] = [
        ServiceCategory::Hair,
        ServiceCategory::Nails,
        ServiceCategory::Skin,
        ServiceCategory::Massage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceCategory::Hair => "Hair",
            ServiceCategory::Nails => "Nails",
            ServiceCategory::Skin => "Skin",
            ServiceCategory::Massage => "Massage",
        }
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "category".to_string(),
                allowed: ServiceCategory::ALL
                    .iter()
                    .map(|c| c.as_str().to_string())
                    .collect(),
            })
    }
}

/// A sellable treatment on the price list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Service {
    pub id: String,
    pub name: String,
    /// Length of the treatment in minutes.
    pub duration_min: i64,
    /// Price in cents.
    pub price_cents: i64,
    pub category: ServiceCategory,
}

impl Service {
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

/// Fields supplied when adding a service.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewService {
    pub name: String,
    pub price_cents: i64,
    pub duration_min: i64,
    pub category: ServiceCategory,
}

// =============================================================================
// Staff
// =============================================================================

/// An employee who can be booked for appointments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Staff {
    pub id: String,
    pub name: String,
    pub role: String,
    pub avatar: Option<String>,
}

impl Staff {
    /// Builds a roster entry without an avatar.
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: impl Into<String>) -> Self {
        Staff {
            id: id.into(),
            name: name.into(),
            role: role.into(),
            avatar: None,
        }
    }
}

// =============================================================================
// Appointment Status & Color
// =============================================================================

/// Lifecycle of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    /// Booked and not yet happened. Every new appointment starts here.
    #[default]
    Scheduled,
    Completed,
    Cancelled,
    /// Client never showed up.
    NoShow,
}

impl AppointmentStatus {
    /// The calendar color for this status.
    pub fn color(&self) -> ColorTag {
        match self {
            AppointmentStatus::Scheduled => ColorTag::Scheduled,
            AppointmentStatus::Completed => ColorTag::Completed,
            AppointmentStatus::Cancelled => ColorTag::Cancelled,
            AppointmentStatus::NoShow => ColorTag::NoShow,
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Scheduled => write!(f, "Scheduled"),
            AppointmentStatus::Completed => write!(f, "Completed"),
            AppointmentStatus::Cancelled => write!(f, "Cancelled"),
            AppointmentStatus::NoShow => write!(f, "No Show"),
        }
    }
}

/// Presentation label used to color calendar cards.
///
/// Purely visual grouping; the UI maps each tag to its palette classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ColorTag {
    /// Blue.
    Scheduled,
    /// Emerald.
    Completed,
    /// Red.
    Cancelled,
    /// Gray.
    NoShow,
}

impl ColorTag {
    /// Utility classes for the card background, border and text.
    pub fn css_classes(&self) -> &'static str {
        match self {
            ColorTag::Scheduled => "bg-blue-100 border-blue-200 text-blue-700",
            ColorTag::Completed => "bg-emerald-100 border-emerald-200 text-emerald-700",
            ColorTag::Cancelled => "bg-red-100 border-red-200 text-red-700",
            ColorTag::NoShow => "bg-gray-100 border-gray-200 text-gray-700",
        }
    }
}

// =============================================================================
// Appointment
// =============================================================================

/// A booking linking one client, one service and one staff member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Appointment {
    pub id: String,
    pub client_id: String,
    /// Client name at booking time (frozen).
    pub client_name: String,
    pub service_id: String,
    /// Service name at booking time (frozen).
    pub service_name: String,
    pub staff_id: String,
    /// Plain calendar date, no time zone.
    #[ts(as = "String")]
    pub date: NaiveDate,
    /// Start time of day, serialized as "HH:MM".
    #[serde(with = "hh_mm")]
    #[ts(as = "String")]
    pub time: NaiveTime,
    /// Duration copied from the service at booking time (frozen).
    pub duration_min: i64,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub color: ColorTag,
    pub reminder_sent: bool,
}

impl Appointment {
    /// Moves the booking to `status`, recomputing its color.
    pub fn transition(&mut self, status: AppointmentStatus) {
        self.status = status;
        self.color = status.color();
    }

    /// Wall-clock end of the booking. Wraps past midnight.
    pub fn end_time(&self) -> NaiveTime {
        self.time + chrono::Duration::minutes(self.duration_min)
    }

    /// Hour of day the booking starts in (0-23).
    pub fn start_hour(&self) -> u32 {
        self.time.hour()
    }
}

/// Fields supplied when booking.
///
/// Status, color and reminder flag are deliberately absent: a new booking is
/// always Scheduled, blue, and without a reminder. Names and duration are
/// snapshotted from the referenced client and service by the store.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewAppointment {
    pub client_id: String,
    pub service_id: String,
    /// `None` books the first staff member on the roster ("any staff").
    #[serde(default)]
    pub staff_id: Option<String>,
    #[ts(as = "String")]
    pub date: NaiveDate,
    #[serde(with = "hh_mm")]
    #[ts(as = "String")]
    pub time: NaiveTime,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Dashboard counters.
///
/// `completed` counts Completed bookings and `upcoming` counts Scheduled ones.
/// Cancelled and no-show bookings only count toward `total`, and are broken
/// out separately so the four buckets always sum to `total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AppointmentStats {
    pub total: usize,
    pub completed: usize,
    pub upcoming: usize,
    pub cancelled: usize,
    pub no_show: usize,
}

impl AppointmentStats {
    /// Tallies a set of appointments.
    pub fn tally<'a>(appointments: impl IntoIterator<Item = &'a Appointment>) -> Self {
        appointments
            .into_iter()
            .fold(AppointmentStats::default(), |mut stats, apt| {
                stats.total += 1;
                match apt.status {
                    AppointmentStatus::Scheduled => stats.upcoming += 1,
                    AppointmentStatus::Completed => stats.completed += 1,
                    AppointmentStatus::Cancelled => stats.cancelled += 1,
                    AppointmentStatus::NoShow => stats.no_show += 1,
                }
                stats
            })
    }
}

// =============================================================================
// Time-of-day Serialization
// =============================================================================

/// Serde adapter for "HH:MM" times of day.
///
/// Accepts "HH:MM" and "HH:MM:SS" on input, always writes "HH:MM".
pub mod hh_mm {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(de::Error::custom)
    }

    /// Parses "HH:MM" (or "HH:MM:SS").
    pub fn parse(raw: &str) -> Result<NaiveTime, chrono::ParseError> {
        let raw = raw.trim();
        NaiveTime::parse_from_str(raw, FORMAT).or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
