use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Row {row} is malformed: expected 8 fields, found {found}")]
    MalformedRow { row: usize, found: usize },

    #[error("Row {row} has an invalid date or time: {value:?}")]
    InvalidTimestamp { row: usize, value: String },
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
