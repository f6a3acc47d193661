use std::collections::BTreeSet;

use chrono::{TimeZone, Utc};

use calta_schedule::{
    assemble, find_people, parse_csv, project, project_at, serialize, ScheduleTable,
};

const SCHEDULE: &str = "Kurskoder, Datum, Starttid, Sluttid, Rum, Handledare A, Handledare B, Handledare C
PY101, 2024-03-04, 10:00, 12:00, A101, Alice, Bob,
PY101, 2024-03-05, 10:00, 12:00, A102, Bob, , Carol
PY102, 2024-03-06, 13:15, 15:00, B201, , alice ,
PY101, 2024-03-04, 10:00, 12:00, A101, Alice, Bob,
";

fn table() -> ScheduleTable {
    parse_csv(SCHEDULE, true)
}

#[test]
fn header_stripping() {
    assert_eq!(parse_csv(SCHEDULE, true).len(), 4);
    assert_eq!(parse_csv(SCHEDULE, false).len(), 5);
}

#[test]
fn example_scenario() {
    let table = parse_csv(
        "header\nPY101, 2024-03-04, 10:00, 12:00, A101, Alice, Bob, ",
        true,
    );
    let events = project(&table, "alice").unwrap();

    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.location, "A101");
    assert!(event.description.contains("Handledare: Alice, Bob"));
    assert!(event.description.contains("Kurskoder: PY101"));
    assert_eq!(event.start, Utc.with_ymd_and_hms(2024, 3, 4, 9, 0, 0).unwrap());
    assert_eq!(event.end, Utc.with_ymd_and_hms(2024, 3, 4, 11, 0, 0).unwrap());
}

#[test]
fn no_match_scenario() {
    let table = parse_csv(
        "header\nPY101, 2024-03-04, 10:00, 12:00, A101, Alice, Bob, ",
        true,
    );
    let events = project(&table, "carol").unwrap();
    assert!(events.is_empty());

    let text = serialize(&assemble(events, "carol"));
    assert_eq!(text.matches("BEGIN:VTIMEZONE").count(), 1);
    assert_eq!(text.matches("BEGIN:").count(), 4); // VCALENDAR, VTIMEZONE, DAYLIGHT, STANDARD
    assert!(text.contains("Advanced Python TA Lab Schedule (Carol)"));
}

#[test]
fn people_listing_scenario() {
    let table = parse_csv(
        "header\n\
         PY101, 2024-03-04, 10:00, 12:00, A101, Alice, Bob, \n\
         PY101, 2024-03-05, 10:00, 12:00, A101, Bob, , Carol",
        true,
    );

    let expected: BTreeSet<String> = ["Alice", "Bob", "Carol"].map(String::from).into();
    assert_eq!(find_people(&table).unwrap(), expected);
}

#[test]
fn people_set_is_complete() {
    let people = find_people(&table()).unwrap();

    let expected: BTreeSet<String> = ["Alice", "Bob", "Carol", "alice"].map(String::from).into();
    assert_eq!(people, expected);
}

#[test]
fn projection_is_idempotent() {
    let table = table();
    let first = project_at(&table, "bob", Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()).unwrap();
    let second = project(&table, "bob").unwrap();

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.uid, b.uid);
        assert_eq!(a.start, b.start);
        assert_eq!(a.end, b.end);
        assert_eq!(a.description, b.description);
        assert_eq!(a.location, b.location);
    }
}

#[test]
fn order_is_preserved_without_dedup() {
    let events = project(&table(), "Alice").unwrap();

    let uids = events.iter().map(|e| e.uid.as_str()).collect::<Vec<_>>();
    assert_eq!(uids, vec!["session0", "session2", "session3"]);
    assert_eq!(events[0].description, events[2].description);
}

#[test]
fn filter_matches_any_trimmed_supervisor() {
    let table = table();

    for person in ["carol", "CAROL", "Carol"] {
        let events = project(&table, person).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].uid, "session1");
    }

    assert!(project(&table, " carol").unwrap().is_empty());
}

#[test]
fn serialized_events_follow_projection_order() {
    let events = project(&table(), "alice").unwrap();
    let text = assemble(events, "alice").to_string();

    let positions = ["UID:session0", "UID:session2", "UID:session3"]
        .map(|uid| text.find(uid).unwrap());
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(text.contains("DTSTART:20240306T121500Z"));
}
