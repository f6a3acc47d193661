//! Turns a lab schedule CSV export into a per-supervisor iCalendar feed.
//!
//! The pipeline runs in one direction: raw text is split into a
//! [`ScheduleTable`] by [`parse_csv`], which is then either reduced to the
//! set of supervisors with [`find_people`] or filtered for one supervisor
//! with [`project`] and wrapped into a [`CalendarDocument`] by [`assemble`].

mod error;
mod parser;
mod people;
mod project;
mod structs;

#[cfg(feature = "ics")]
mod ics;

pub use error::{Result, ScheduleError};
pub use parser::parse_csv;
pub use people::find_people;
pub use project::{project, project_at, to_utc, EVENT_SUMMARY};
pub use structs::{CalendarDocument, CalendarEvent, ScheduleRow, ScheduleTable};

#[cfg(feature = "ics")]
pub use crate::ics::{assemble, capitalize_words, serialize, timezone, TIMEZONE};
