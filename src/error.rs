use chrono::NaiveDate;
use thiserror::Error;

/// Failures the prayer engine recovers from locally. None of these ever
/// reach the UI as a fatal error; the worst case is an empty panel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("date {date} is outside the supported range ({min_year}-{max_year})")]
    UnsupportedDate {
        date: NaiveDate,
        min_year: i32,
        max_year: i32,
    },

    #[error("prayer schedule for {date} is invalid: {reason}")]
    ScheduleComputation { date: NaiveDate, reason: String },

    #[error("no prayer schedule available")]
    NoScheduleAvailable,
}
