use thiserror::Error;

/// Crate specific Errors implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CronError {
    /// Expression doesn't split into exactly five fields.
    #[error("invalid cron expression: {0}")]
    InvalidCronExpression(String),
    /// Field has a malformed structure, like `*` inside a list.
    #[error("invalid field pattern: {0}")]
    InvalidFieldPattern(String),
    /// Invalid minute value specified.
    #[error("invalid minute value: {0}")]
    InvalidMinuteValue(String),
    /// Invalid hour value specified.
    #[error("invalid hour value: {0}")]
    InvalidHourValue(String),
    /// Invalid day of month value specified.
    #[error("invalid day of month value: {0}")]
    InvalidDayOfMonthValue(String),
    /// Invalid month value specified.
    #[error("invalid month value: {0}")]
    InvalidMonthValue(String),
    /// Invalid day of week value specified.
    #[error("invalid day of week value: {0}")]
    InvalidDayOfWeekValue(String),
    /// Invalid range value specified.
    #[error("invalid range value: {0}")]
    InvalidRangeValue(String),
    /// Invalid repeating pattern specified.
    #[error("invalid repeating pattern: {0}")]
    InvalidRepeatingPattern(String),
}
