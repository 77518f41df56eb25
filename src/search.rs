use crate::CronFieldSet;
use chrono::{DateTime, TimeDelta, TimeZone, Timelike};
use std::iter::FusedIterator;
use tracing::{debug, trace};

/// Number of executions returned by default.
pub const DEFAULT_EXECUTION_COUNT: usize = 5;
/// Maximum number of probed minutes per execution by default.
pub const DEFAULT_PROBE_CAP: usize = 1000;

/// Tunables of the next-execution search.
///
/// The search is a minute-by-minute scan, so its worst case cost is `count * probe_cap`
/// matcher calls. The cap keeps self-contradictory expressions (like `0 0 31 2 *`) from hanging
/// the caller at the price of missing events which are further away than `probe_cap` minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct SearchOptions {
    /// How many executions to look for.
    pub count: usize,
    /// How many consecutive minutes may be probed while looking for a single execution.
    pub probe_cap: usize,
}

impl SearchOptions {
    /// Default options: five executions, 1000 probes per execution.
    pub const fn new() -> Self {
        Self {
            count: DEFAULT_EXECUTION_COUNT,
            probe_cap: DEFAULT_PROBE_CAP,
        }
    }

    /// Sets the number of executions to look for.
    pub const fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Sets the per-execution probe cap.
    pub const fn with_probe_cap(mut self, probe_cap: usize) -> Self {
        self.probe_cap = probe_cap;
        self
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl CronFieldSet {
    /// Returns time of the first execution strictly after the minute of `origin`,
    /// probing at most `probe_cap` minutes.
    #[inline]
    pub fn upcoming<Tz: TimeZone>(&self, origin: &DateTime<Tz>, probe_cap: usize) -> Option<DateTime<Tz>> {
        self.iter(origin, probe_cap).next()
    }

    /// Returns iterator of executions strictly after the minute of `origin`.
    ///
    /// Seconds and fractions of `origin` are dropped and the scan starts with the next whole minute,
    /// so the current minute is never reported.
    /// The iterator stops for good as soon as `probe_cap` consecutive minutes don't match.
    pub fn iter<Tz: TimeZone>(&self, origin: &DateTime<Tz>, probe_cap: usize) -> Executions<Tz> {
        Executions {
            fields: self.clone(),
            cursor: first_probe(origin),
            probe_cap,
        }
    }
}

/// Iterator of the field set executions, see [`CronFieldSet::iter()`].
#[derive(Debug, Clone)]
pub struct Executions<Tz: TimeZone> {
    fields: CronFieldSet,
    cursor: Option<DateTime<Tz>>,
    probe_cap: usize,
}

impl<Tz: TimeZone> Iterator for Executions<Tz> {
    type Item = DateTime<Tz>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut cursor = self.cursor.take()?;

        for _ in 0..self.probe_cap {
            let following = cursor.clone().checked_add_signed(TimeDelta::minutes(1));
            if self.fields.matches(&cursor) {
                self.cursor = following;
                return Some(cursor);
            }
            cursor = following?;
        }

        debug!(
            expression = %self.fields,
            probe_cap = self.probe_cap,
            "no execution found within probe cap"
        );
        None
    }
}

impl<Tz: TimeZone> FusedIterator for Executions<Tz> {}

/// Start of the scan: `origin` truncated to the whole minute, plus one minute.
///
/// Truncation goes along the absolute timeline, local time may be ambiguous inside a DST fold.
fn first_probe<Tz: TimeZone>(origin: &DateTime<Tz>) -> Option<DateTime<Tz>> {
    let truncation = TimeDelta::seconds(origin.second().into()) + TimeDelta::nanoseconds(origin.nanosecond().into());
    origin
        .clone()
        .checked_sub_signed(truncation)?
        .checked_add_signed(TimeDelta::minutes(1))
}

/// Returns up to `count` upcoming executions of `expression` after `origin`,
/// with the default probe cap.
///
/// The result is strictly increasing and may be shorter than requested, or empty for an unparsable
/// or never matching expression.
#[inline]
pub fn next_executions<Tz: TimeZone>(expression: &str, origin: &DateTime<Tz>, count: usize) -> Vec<DateTime<Tz>> {
    next_executions_with(expression, origin, &SearchOptions::new().with_count(count))
}

/// Returns upcoming executions of `expression` after `origin` according to `options`.
pub fn next_executions_with<Tz: TimeZone>(
    expression: &str,
    origin: &DateTime<Tz>,
    options: &SearchOptions,
) -> Vec<DateTime<Tz>> {
    match CronFieldSet::parse(expression) {
        Ok(fields) => fields.iter(origin, options.probe_cap).take(options.count).collect(),
        Err(error) => {
            trace!(%error, "skipping executions search");
            Vec::new()
        }
    }
}

/// Returns up to `count` upcoming executions of `expression` after the current local time.
#[cfg(feature = "clock")]
pub fn next_executions_from_now(expression: &str, count: usize) -> Vec<DateTime<chrono::Local>> {
    next_executions(expression, &chrono::Local::now(), count)
}
