use crate::ScheduleTable;

/// Splits a schedule export into lines and fields.
///
/// Fields are separated by a comma and at most one following space. Quoting
/// is not supported. With `remove_header` the first line is dropped.
#[must_use]
pub fn parse_csv<S: AsRef<str>>(text: S, remove_header: bool) -> ScheduleTable {
    let lines = text
        .as_ref()
        .lines()
        .skip(usize::from(remove_header))
        .map(split_fields)
        .collect();

    ScheduleTable::new(lines)
}

fn split_fields(line: &str) -> Vec<String> {
    let mut fields = line.split(',');
    let first = fields.next().unwrap_or_default();

    std::iter::once(first)
        .chain(fields.map(|field| field.strip_prefix(' ').unwrap_or(field)))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "Kurskod, Datum, Start, Slut, Sal, A, B, C\n\
                       PY101, 2024-03-04, 10:00, 12:00, A101, Alice, Bob, \n\
                       PY102,2024-03-05,13:00,15:00,B202,Bob,,Carol";

    fn row_fields(table: &ScheduleTable) -> Vec<Vec<String>> {
        table
            .rows()
            .map(|row| {
                let row = row.unwrap();
                vec![row.course_code.to_string(), row.room.to_string(), row.supervisor_c.to_string()]
            })
            .collect()
    }

    #[test]
    fn header_is_removed() {
        assert_eq!(parse_csv(CSV, true).len(), 2);
        assert_eq!(parse_csv(CSV, false).len(), 3);
    }

    #[test]
    fn splits_with_and_without_space() {
        let table = parse_csv(CSV, true);
        assert_eq!(
            row_fields(&table),
            vec![
                vec!["PY101".to_string(), "A101".to_string(), String::new()],
                vec!["PY102".to_string(), "B202".to_string(), "Carol".to_string()],
            ]
        );
    }

    #[test]
    fn only_one_space_is_consumed() {
        assert_eq!(split_fields("a,  b"), vec!["a", " b"]);
    }

    #[test]
    fn crlf_line_endings() {
        let table = parse_csv("header\r\nPY101, 2024-03-04, 10:00, 12:00, A101, Alice, Bob, Carol\r\n", true);
        let row = table.rows().next().unwrap().unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(row.supervisor_c, "Carol");
    }

    #[test]
    fn empty_input() {
        assert!(parse_csv("", true).is_empty());
        assert!(parse_csv("header only", true).is_empty());
    }
}
