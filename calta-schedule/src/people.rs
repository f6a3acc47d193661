use std::collections::BTreeSet;

use crate::{Result, ScheduleTable};

/// Collects every distinct supervisor name appearing in the table.
///
/// Names are trimmed and compared exactly, so casing from the source is kept.
pub fn find_people(table: &ScheduleTable) -> Result<BTreeSet<String>> {
    let mut people = BTreeSet::new();

    for row in table.rows() {
        people.extend(row?.supervisors().into_iter().map(str::to_string));
    }

    Ok(people)
}
