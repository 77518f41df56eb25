use crate::{pattern, CronFieldSet, FieldKind};
use chrono::{DateTime, TimeZone};
use tracing::trace;

/// Checks whether `value` satisfies a single field `expression`.
///
/// Supported forms are `*`, `?`, literals, `a-b` ranges, `*/k` steps (counted from zero, not from `min`),
/// `n/k` and `a-b/k` repeating patterns, and comma separated lists of all of the above.
///
/// Matching is best-effort: malformed content never matches and never panics.
/// The `min`/`max` bounds aren't enforced against `value`, `max` only limits the open-ended `n/k` form.
pub fn field_matches(value: u32, expression: &str, min: u32, max: u32) -> bool {
    if min > max {
        trace!(min, max, expression, "inverted field bounds");
    }
    pattern::matches_expression(expression, value, max)
}

/// Checks whether the local time of `instant` satisfies every field of `fields`.
///
/// This is a plain conjunction: day of month and day of week are both required to match,
/// unlike the POSIX rule which ORs them when both are restricted.
pub fn date_matches<Tz: TimeZone>(instant: &DateTime<Tz>, fields: &CronFieldSet) -> bool {
    FieldKind::ALL.iter().all(|kind| {
        let (min, max) = kind.min_max();
        field_matches(kind.value_of(instant), fields.field(*kind), min, max)
    })
}

impl CronFieldSet {
    /// Checks whether `instant` satisfies the field set, see [`date_matches()`].
    #[inline]
    pub fn matches<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> bool {
        date_matches(instant, self)
    }
}
