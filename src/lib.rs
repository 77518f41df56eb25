//! Cron expression toolkit behind an interactive schedule editor.
#![deny(unsafe_code, warnings, missing_docs)]

//! This crate is intended to:
//! - split and rebuild classic five-field cron expressions;
//! - check whether a point in time satisfies an expression;
//! - preview upcoming executions of an expression;
//! - render a short human readable (Japanese) description;
//! - keep the state of a visual/manual expression editor.
//!
//! _This is not a cron jobs scheduler or runner._ Nothing here sleeps or waits for an event.
//!
//! ## Cron expression format
//!
//! Expression is exactly five whitespace separated fields: minutes, hours, days of month, months and days of week.
//!
//! | Field        | Allowed values | Allowed special characters |
//! |--------------|----------------|----------------------------|
//! | Minutes      | 0-59           | * , - /                    |
//! | Hours        | 0-23           | * , - /                    |
//! | Day of Month | 1-31           | * , - / ?                  |
//! | Month        | 1-12           | * , - /                    |
//! | Day of Week  | 0-6 (Sunday=0) | * , - / ?                  |
//!
//! Patterns meanings:
//! - `*` or `?` - each possible value;
//! - `,` - list of values or patterns, i.e. `1,7,12`;
//! - `-` - inclusive range of values, i.e. `0-15`;
//! - `/` - repeating values: `*/15` counts from zero (`0,15,30,45` for minutes), `10/20` starts from `10`,
//!   `30-59/2` repeats within the range.
//!
//! Matching is lenient: malformed field content isn't an error, it just never matches.
//! Day of month and day of week are both required to match (unlike POSIX cron which accepts either one).
//! Names (`MON`, `JAN`), `L`, `W`, `#` and `@daily`-like aliases aren't supported.
//!
//! ## How to use
//!
//! ```rust
//! use chrono::DateTime;
//! use cron_preview::{describe, next_executions, CronFieldSet, Result};
//!
//! fn preview() -> Result<()> {
//!     let fields = CronFieldSet::parse("0 9 * * 1-5")?;
//!     // Monday
//!     let origin = DateTime::parse_from_rfc3339("2024-01-01T08:00:00+09:00").unwrap();
//!
//!     assert!(fields.validate().is_ok());
//!     assert_eq!(describe(&fields.to_expression()), "0分、9時、毎日");
//!
//!     let executions = next_executions(&fields.to_expression(), &origin, 3);
//!     assert_eq!(executions[0].to_rfc3339(), "2024-01-01T09:00:00+09:00");
//!     // Tuesday 09:00 is further than the default probe cap
//!     assert_eq!(executions.len(), 1);
//!
//!     Ok(())
//! }
//! # preview().unwrap();
//! ```
//!
//! Next executions are found by scanning minute after minute, at most [`DEFAULT_PROBE_CAP`] minutes per
//! execution unless [`SearchOptions`] say otherwise, so far-away events may be missing from the result.
//!
//! # Feature flags
//! * `clock` (default): adds helpers which start from the current local time.
//! * `serde`: adds [`Serialize`](https://docs.rs/serde/latest/serde/trait.Serialize.html) and
//!   [`Deserialize`](https://docs.rs/serde/latest/serde/trait.Deserialize.html) trait implementations
//!   for [`CronFieldSet`], [`SearchOptions`], [`FieldKind`] and [`EditorMode`].

mod describe;
/// Headless state of the expression editor.
pub mod editor;
/// Crate specific Error implementation.
pub mod error;
mod fields;
mod matcher;
mod pattern;
mod search;

// Re-export of public entities.
pub use describe::{describe, INVALID_DESCRIPTION};
pub use editor::{CronEditor, CronTemplate, EditorMode, Preview, TEMPLATES};
pub use error::CronError;
pub use fields::{build_expression, parse_expression, CronFieldSet, DEFAULT_EXPRESSION};
pub use matcher::{date_matches, field_matches};
pub use pattern::FieldKind;
#[cfg(feature = "clock")]
pub use search::next_executions_from_now;
pub use search::{
    next_executions, next_executions_with, Executions, SearchOptions, DEFAULT_EXECUTION_COUNT, DEFAULT_PROBE_CAP,
};

/// Convenient alias for `Result`.
pub type Result<T, E = CronError> = std::result::Result<T, E>;
