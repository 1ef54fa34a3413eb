//! # Day Grid
//!
//! Buckets one day's appointments into the hourly rows of the calendar view.
//!
//! ```text
//!   9 AM  │ Emma Watson 9:45-10:30         rows are half-open:
//!  10 AM  │ Sarah Jenkins 10:00-11:00      [10:00, 11:00)
//!  11 AM  │
//!   ...   │
//!   7 PM  │ last row covers [19:00, 20:00)
//!
//!  unplaced: anything starting before 09:00 or from 20:00 on
//! ```
//!
//! Nothing is dropped: an appointment outside the grid still shows up in
//! [`DayGrid::unplaced`] so the calendar can list it under the grid. A row is
//! chosen by start time alone; a booking running past the hour stays in the
//! row it starts in.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{hh_mm, Appointment};

/// First hour row on the grid (9 AM).
pub const FIRST_HOUR: u32 = 9;

/// Last hour row on the grid (7 PM).
pub const LAST_HOUR: u32 = 19;

/// Label for an hour of day, e.g. `9 AM`, `12 PM`, `1 PM`.
///
/// ```rust
/// use mint_core::schedule::hour_label;
///
/// assert_eq!(hour_label(9), "9 AM");
/// assert_eq!(hour_label(12), "12 PM");
/// assert_eq!(hour_label(13), "1 PM");
/// assert_eq!(hour_label(0), "12 AM");
/// ```
pub fn hour_label(hour: u32) -> String {
    let suffix = if hour % 24 < 12 { "AM" } else { "PM" };
    let display = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{} {}", display, suffix)
}

/// An appointment as the calendar draws it, with its end time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GridEntry {
    #[serde(flatten)]
    #[ts(flatten)]
    pub appointment: Appointment,
    /// "HH:MM"; earlier than the start when the booking crosses midnight.
    #[serde(with = "hh_mm")]
    #[ts(as = "String")]
    pub end_time: NaiveTime,
}

impl From<&Appointment> for GridEntry {
    fn from(apt: &Appointment) -> Self {
        GridEntry {
            end_time: apt.end_time(),
            appointment: apt.clone(),
        }
    }
}

/// One calendar row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HourRow {
    pub hour: u32,
    pub label: String,
    /// Appointments starting in `[hour:00, hour+1:00)`, in booking order.
    pub appointments: Vec<GridEntry>,
}

/// A single day of the calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DayGrid {
    #[ts(as = "String")]
    pub date: NaiveDate,
    pub rows: Vec<HourRow>,
    /// Appointments for the day that fall outside every row.
    pub unplaced: Vec<GridEntry>,
}

impl DayGrid {
    /// Builds the grid for `date` from `appointments`.
    ///
    /// Appointments on other dates are ignored, so the full collection can be
    /// passed in directly.
    pub fn build<'a>(date: NaiveDate, appointments: impl IntoIterator<Item = &'a Appointment>) -> Self {
        let mut rows: Vec<HourRow> = (FIRST_HOUR..=LAST_HOUR)
            .map(|hour| HourRow {
                hour,
                label: hour_label(hour),
                appointments: Vec::new(),
            })
            .collect();
        let mut unplaced: Vec<GridEntry> = Vec::new();

        for apt in appointments.into_iter().filter(|a| a.date == date) {
            let hour = apt.start_hour();
            if (FIRST_HOUR..=LAST_HOUR).contains(&hour) {
                rows[(hour - FIRST_HOUR) as usize].appointments.push(apt.into());
            } else {
                unplaced.push(apt.into());
            }
        }

        DayGrid { date, rows, unplaced }
    }

    /// Total number of appointments on the day, placed or not.
    pub fn len(&self) -> usize {
        self.rows.iter().map(|r| r.appointments.len()).sum::<usize>() + self.unplaced.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
