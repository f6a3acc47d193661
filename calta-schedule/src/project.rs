use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

use crate::{CalendarEvent, Result, ScheduleError, ScheduleRow, ScheduleTable};

pub const EVENT_SUMMARY: &str = "Lab Advanced Python";

/// Europe/Stockholm standard time offset. Daylight saving time is not applied.
const STANDARD_OFFSET_HOURS: i64 = 1;

/// Projects every row supervised by `person` into a calendar event,
/// stamped with the current time.
pub fn project(table: &ScheduleTable, person: &str) -> Result<Vec<CalendarEvent>> {
    project_at(table, person, Utc::now())
}

/// Like [`project`], with an explicit creation timestamp.
///
/// Rows match when any of their supervisors equals `person` ignoring case.
/// Events keep table order and are identified by their row index, so the
/// same table always yields the same identities.
pub fn project_at(
    table: &ScheduleTable,
    person: &str,
    now: DateTime<Utc>,
) -> Result<Vec<CalendarEvent>> {
    let person = person.to_lowercase();
    let mut events = Vec::new();

    for row in table.rows() {
        let row = row?;

        if !row
            .supervisors()
            .iter()
            .any(|name| name.to_lowercase() == person)
        {
            continue;
        }

        let uid = format!("session{}", row.index);
        events.push(CalendarEvent::from_row(&row, uid, now)?);
    }

    log::debug!(
        "Projected {} of {} rows for {person:?}",
        events.len(),
        table.len()
    );

    Ok(events)
}

/// Converts a schedule wall-clock time to UTC using the fixed standard offset.
#[must_use]
pub fn to_utc(date: NaiveDate, time: NaiveTime) -> DateTime<Utc> {
    (date.and_time(time) - Duration::hours(STANDARD_OFFSET_HOURS)).and_utc()
}

impl CalendarEvent {
    pub fn from_row(
        row: &ScheduleRow<'_>,
        uid: impl Into<String>,
        created: DateTime<Utc>,
    ) -> Result<Self> {
        let date = parse_field(row, row.date, |value| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
        })?;
        let start = parse_field(row, row.start_time, |value| {
            NaiveTime::parse_from_str(value, "%H:%M")
        })?;
        let end = parse_field(row, row.end_time, |value| {
            NaiveTime::parse_from_str(value, "%H:%M")
        })?;

        Ok(Self {
            uid: uid.into(),
            created,
            start: to_utc(date, start),
            end: to_utc(date, end),
            summary: EVENT_SUMMARY.to_string(),
            description: format!(
                "Handledare: {}\nKurskoder: {}",
                row.supervisors().join(", "),
                row.course_code
            ),
            location: row.room.to_string(),
        })
    }
}

fn parse_field<T, E>(
    row: &ScheduleRow<'_>,
    value: &str,
    parse: impl FnOnce(&str) -> std::result::Result<T, E>,
) -> Result<T> {
    parse(value.trim()).map_err(|_| ScheduleError::InvalidTimestamp {
        row: row.index,
        value: value.to_string(),
    })
}
