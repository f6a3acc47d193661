use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{Result, ScheduleError};

/// The split lines of a schedule export, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleTable {
    lines: Vec<Vec<String>>,
}

/// One schedule line with named access to its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleRow<'a> {
    /// Zero-based position in the table.
    pub index: usize,
    pub course_code: &'a str,
    pub date: &'a str,
    pub start_time: &'a str,
    pub end_time: &'a str,
    pub room: &'a str,
    pub supervisor_a: &'a str,
    pub supervisor_b: &'a str,
    pub supervisor_c: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CalendarEvent {
    pub uid: String,
    pub created: DateTime<Utc>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub summary: String,
    pub description: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CalendarDocument {
    pub name: String,
    pub(crate) timezone: &'static str,
    pub events: Vec<CalendarEvent>,
}

impl ScheduleTable {
    #[must_use]
    pub fn new(lines: Vec<Vec<String>>) -> Self {
        Self { lines }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Rows in table order. A short line only fails once it is reached.
    pub fn rows(&self) -> impl Iterator<Item = Result<ScheduleRow<'_>>> {
        self.lines
            .iter()
            .enumerate()
            .map(|(index, fields)| ScheduleRow::from_fields(index, fields))
    }
}

impl CalendarDocument {
    /// Identifier of the zone whose definition leads the document.
    #[must_use]
    pub fn timezone_id(&self) -> &'static str {
        self.timezone
    }
}

impl<'a> ScheduleRow<'a> {
    pub fn from_fields<S: AsRef<str>>(index: usize, fields: &'a [S]) -> Result<Self> {
        let [course_code, date, start_time, end_time, room, supervisor_a, supervisor_b, supervisor_c, ..] =
            fields
        else {
            return Err(ScheduleError::MalformedRow {
                row: index,
                found: fields.len(),
            });
        };

        Ok(Self {
            index,
            course_code: course_code.as_ref(),
            date: date.as_ref(),
            start_time: start_time.as_ref(),
            end_time: end_time.as_ref(),
            room: room.as_ref(),
            supervisor_a: supervisor_a.as_ref(),
            supervisor_b: supervisor_b.as_ref(),
            supervisor_c: supervisor_c.as_ref(),
        })
    }

    /// Trimmed, non-empty supervisor names in column order.
    #[must_use]
    pub fn supervisors(&self) -> Vec<&'a str> {
        [self.supervisor_a, self.supervisor_b, self.supervisor_c]
            .into_iter()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .collect()
    }
}
