use std::fmt;

use chrono::{DateTime, Utc};
use ics::{
    components::Property,
    escape_text,
    properties::{Created, Description, DtEnd, DtStart, Location, RRule, Summary, TzName},
    Daylight, ICalendar, Standard, TimeZone,
};

use crate::{CalendarDocument, CalendarEvent};

/// Zone the schedule's wall-clock times are written in.
pub const TIMEZONE: &str = "Europe/Stockholm";

const PRODID: &str = "-//Olillin/calta-schedule//SV";

/// Zones following the central European CET/CEST rules.
const CENTRAL_EUROPEAN_ZONES: &[&str] = &[
    "Europe/Stockholm",
    "Europe/Berlin",
    "Europe/Copenhagen",
    "Europe/Oslo",
];

/// Static VTIMEZONE definitions by zone identifier.
#[must_use]
pub fn timezone(tzid: &str) -> Option<TimeZone<'static>> {
    let tzid = *CENTRAL_EUROPEAN_ZONES.iter().find(|zone| **zone == tzid)?;

    let mut cet_standard = Standard::new("19701025T030000", "+0200", "+0100");
    cet_standard.push(TzName::new("CET"));
    cet_standard.push(RRule::new("FREQ=YEARLY;BYMONTH=10;BYDAY=-1SU"));

    let mut cest_daylight = Daylight::new("19700329T020000", "+0100", "+0200");
    cest_daylight.push(TzName::new("CEST"));
    cest_daylight.push(RRule::new("FREQ=YEARLY;BYMONTH=3;BYDAY=-1SU"));

    let mut timezone = TimeZone::daylight(tzid, cest_daylight);
    timezone.add_standard(cet_standard);

    Some(timezone)
}

/// Wraps projected events into the calendar for `person`.
#[must_use]
pub fn assemble(events: Vec<CalendarEvent>, person: &str) -> CalendarDocument {
    CalendarDocument {
        name: format!(
            "Advanced Python TA Lab Schedule ({})",
            capitalize_words(person)
        ),
        timezone: TIMEZONE,
        events,
    }
}

/// Renders the document as iCalendar text.
#[must_use]
pub fn serialize(document: &CalendarDocument) -> String {
    document.to_ics().to_string()
}

/// Upper-cases the first letter of every space separated word and
/// lower-cases the rest.
#[must_use]
pub fn capitalize_words(text: &str) -> String {
    text.split(' ').map(capitalize).collect::<Vec<_>>().join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn format_utc(instant: &DateTime<Utc>) -> String {
    instant.format("%Y%m%dT%H%M%SZ").to_string()
}

impl CalendarDocument {
    #[must_use]
    pub fn to_ics(&self) -> ICalendar<'_> {
        let mut icalendar = ICalendar::new("2.0", PRODID);
        icalendar.push(Property::new("NAME", escape_text(self.name.as_str())));
        icalendar.push(Property::new(
            "X-WR-CALNAME",
            escape_text(self.name.as_str()),
        ));
        icalendar.push(Property::new("X-WR-TIMEZONE", self.timezone));

        // Documents are only built with zones known to the lookup.
        if let Some(timezone) = timezone(self.timezone) {
            icalendar.add_timezone(timezone);
        }

        for event in &self.events {
            icalendar.add_event(event.to_ics());
        }

        icalendar
    }
}

impl fmt::Display for CalendarDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_ics())
    }
}

impl CalendarEvent {
    #[must_use]
    pub fn to_ics(&self) -> ics::Event<'_> {
        let created = format_utc(&self.created);

        let mut ics_event = ics::Event::new(self.uid.as_str(), created.clone());

        ics_event.push(Created::new(created));
        ics_event.push(DtStart::new(format_utc(&self.start)));
        ics_event.push(DtEnd::new(format_utc(&self.end)));
        ics_event.push(Summary::new(escape_text(self.summary.as_str())));
        ics_event.push(Description::new(escape_text(self.description.as_str())));
        ics_event.push(Location::new(escape_text(self.location.as_str())));

        ics_event
    }
}
