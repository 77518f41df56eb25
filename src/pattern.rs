use crate::{CronError, Result};
use chrono::{DateTime, Datelike, TimeZone, Timelike};
use std::fmt::Display;

pub(crate) type FieldValue = u32;

/// Positional field of the five-field cron expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum FieldKind {
    /// Minute of the hour, `0-59`.
    Minute,
    /// Hour of the day, `0-23`.
    Hour,
    /// Day of the month, `1-31`.
    DayOfMonth,
    /// Month of the year, `1-12`.
    Month,
    /// Day of the week, `0-6` where `0` is Sunday.
    DayOfWeek,
}

impl FieldKind {
    /// All fields in the order they appear in an expression.
    pub const ALL: [FieldKind; 5] = [
        FieldKind::Minute,
        FieldKind::Hour,
        FieldKind::DayOfMonth,
        FieldKind::Month,
        FieldKind::DayOfWeek,
    ];

    /// Inclusive semantic bounds of the field values.
    pub const fn min_max(&self) -> (u32, u32) {
        match self {
            Self::Minute => (0, 59),
            Self::Hour => (0, 23),
            Self::DayOfMonth => (1, 31),
            Self::Month => (1, 12),
            Self::DayOfWeek => (0, 6),
        }
    }

    /// Extracts the field's component from the local time of `instant`.
    pub(crate) fn value_of<Tz: TimeZone>(&self, instant: &DateTime<Tz>) -> FieldValue {
        match self {
            Self::Minute => instant.minute(),
            Self::Hour => instant.hour(),
            Self::DayOfMonth => instant.day(),
            Self::Month => instant.month(),
            Self::DayOfWeek => instant.weekday().num_days_from_sunday(),
        }
    }

    fn accepts_any(&self) -> bool {
        matches!(self, Self::DayOfMonth | Self::DayOfWeek)
    }

    fn value_error(&self, input: &str) -> CronError {
        let input = input.to_owned();
        match self {
            Self::Minute => CronError::InvalidMinuteValue(input),
            Self::Hour => CronError::InvalidHourValue(input),
            Self::DayOfMonth => CronError::InvalidDayOfMonthValue(input),
            Self::Month => CronError::InvalidMonthValue(input),
            Self::DayOfWeek => CronError::InvalidDayOfWeekValue(input),
        }
    }

    fn malformed_item_error(&self, item: &str) -> CronError {
        if item.contains('/') {
            CronError::InvalidRepeatingPattern(item.to_owned())
        } else if item.contains('-') {
            CronError::InvalidRangeValue(item.to_owned())
        } else {
            self.value_error(item)
        }
    }
}

impl Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::DayOfMonth => "day of month",
            Self::Month => "month",
            Self::DayOfWeek => "day of week",
        };
        write!(f, "{name}")
    }
}

/// Single comma-free item of a field expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum PatternItem {
    All,
    Any,
    Particular(FieldValue),
    // start-finish
    Range(FieldValue, FieldValue),
    // */step, counted from zero
    Step(FieldValue),
    // start/step
    RepeatingValue(FieldValue, FieldValue),
    // start-finish/step
    RepeatingRange(FieldValue, FieldValue, FieldValue),
}

impl PatternItem {
    /// Lenient parser: no bounds checks, `None` for anything malformed.
    pub(crate) fn parse(input: &str) -> Option<Self> {
        let input = input.trim();

        if input == "*" {
            Some(Self::All)
        } else if input == "?" {
            Some(Self::Any)
        } else if input.contains('/') {
            let (base, step) = input.split_once('/')?;
            let step = parse_value(step)?;
            if base == "*" {
                Some(Self::Step(step))
            } else if let Some((start, end)) = base.split_once('-') {
                Some(Self::RepeatingRange(parse_value(start)?, parse_value(end)?, step))
            } else {
                Some(Self::RepeatingValue(parse_value(base)?, step))
            }
        } else if input.contains('-') {
            let (start, end) = input.split_once('-')?;
            Some(Self::Range(parse_value(start)?, parse_value(end)?))
        } else {
            parse_value(input).map(Self::Particular)
        }
    }

    /// `max` caps the open-ended `start/step` form only.
    pub(crate) fn contains(&self, value: FieldValue, max: FieldValue) -> bool {
        match *self {
            Self::All | Self::Any => true,
            Self::Particular(expected) => value == expected,
            Self::Range(start, end) => (start..=end).contains(&value),
            Self::Step(step) => step > 0 && value % step == 0,
            Self::RepeatingValue(start, step) => {
                step > 0 && (start..=max).contains(&value) && (value - start) % step == 0
            }
            Self::RepeatingRange(start, end, step) => {
                step > 0 && (start..=end).contains(&value) && (value - start) % step == 0
            }
        }
    }
}

/// Converts string into unsigned number, ignoring surrounding whitespace.
fn parse_value(input: &str) -> Option<FieldValue> {
    input.trim().parse::<FieldValue>().ok()
}

/// Best-effort match of `value` against a whole field expression: list items are ORed,
/// malformed items never match.
pub(crate) fn matches_expression(expression: &str, value: FieldValue, max: FieldValue) -> bool {
    expression
        .split(',')
        .any(|item| PatternItem::parse(item).is_some_and(|item| item.contains(value, max)))
}

/// Strict check of a field expression against the field bounds.
pub(crate) fn validate(kind: FieldKind, expression: &str) -> Result<()> {
    let items: Vec<&str> = expression.split(',').map(str::trim).collect();
    let (min, max) = kind.min_max();

    let check_value = |value: FieldValue, item: &str| -> Result<()> {
        if (min..=max).contains(&value) {
            Ok(())
        } else {
            Err(kind.value_error(item))
        }
    };
    let check_range = |start: FieldValue, end: FieldValue, item: &str| -> Result<()> {
        check_value(start, item)?;
        check_value(end, item)?;
        if start > end {
            return Err(CronError::InvalidRangeValue(item.to_owned()));
        }
        Ok(())
    };
    let check_step = |step: FieldValue, item: &str| -> Result<()> {
        if step == 0 || step > max {
            Err(CronError::InvalidRepeatingPattern(item.to_owned()))
        } else {
            Ok(())
        }
    };

    for item in &items {
        let Some(pattern) = PatternItem::parse(item) else {
            return Err(kind.malformed_item_error(item));
        };

        match pattern {
            PatternItem::All if items.len() > 1 => {
                return Err(CronError::InvalidFieldPattern(expression.to_owned()));
            }
            PatternItem::Any if items.len() > 1 || !kind.accepts_any() => {
                return Err(CronError::InvalidFieldPattern(expression.to_owned()));
            }
            PatternItem::All | PatternItem::Any => {}
            PatternItem::Particular(value) => check_value(value, item)?,
            PatternItem::Range(start, end) => check_range(start, end, item)?,
            PatternItem::Step(step) => check_step(step, item)?,
            PatternItem::RepeatingValue(start, step) => {
                check_value(start, item)?;
                check_step(step, item)?;
            }
            PatternItem::RepeatingRange(start, end, step) => {
                check_range(start, end, item)?;
                check_step(step, item)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("*", PatternItem::All)]
    #[case("?", PatternItem::Any)]
    #[case("5", PatternItem::Particular(5))]
    #[case("05", PatternItem::Particular(5))]
    #[case(" 7 ", PatternItem::Particular(7))]
    #[case("2-5", PatternItem::Range(2, 5))]
    #[case("5-2", PatternItem::Range(5, 2))]
    #[case("*/10", PatternItem::Step(10))]
    #[case("*/0", PatternItem::Step(0))]
    #[case("15/30", PatternItem::RepeatingValue(15, 30))]
    #[case("10-40/5", PatternItem::RepeatingRange(10, 40, 5))]
    fn test_pattern_item_parse_valid(#[case] input: &str, #[case] expected: PatternItem) {
        assert_eq!(PatternItem::parse(input), Some(expected), "input = '{input}'");
    }

    #[rstest]
    #[case("")]
    #[case(" ")]
    #[case("abc")]
    #[case("-")]
    #[case("1-")]
    #[case("-1")]
    #[case("1-2-3")]
    #[case("/")]
    #[case("*/")]
    #[case("5/")]
    #[case("*/a")]
    #[case("?/2")]
    #[case("a-b/2")]
    #[case("1/2/3")]
    #[case("L")]
    #[case("15W")]
    #[case("1#2")]
    #[case("MON")]
    #[case("1.5")]
    fn test_pattern_item_parse_invalid(#[case] input: &str) {
        assert_eq!(PatternItem::parse(input), None, "input = '{input}'");
    }

    #[rstest]
    #[case(PatternItem::All, 0, true)]
    #[case(PatternItem::Any, 59, true)]
    #[case(PatternItem::Particular(5), 5, true)]
    #[case(PatternItem::Particular(5), 6, false)]
    #[case(PatternItem::Range(2, 5), 2, true)]
    #[case(PatternItem::Range(2, 5), 5, true)]
    #[case(PatternItem::Range(2, 5), 6, false)]
    #[case(PatternItem::Range(5, 2), 3, false)]
    #[case(PatternItem::Step(15), 0, true)]
    #[case(PatternItem::Step(15), 45, true)]
    #[case(PatternItem::Step(15), 16, false)]
    #[case(PatternItem::Step(0), 0, false)]
    #[case(PatternItem::RepeatingValue(5, 15), 5, true)]
    #[case(PatternItem::RepeatingValue(5, 15), 50, true)]
    #[case(PatternItem::RepeatingValue(5, 15), 0, false)]
    #[case(PatternItem::RepeatingValue(5, 15), 65, false)]
    #[case(PatternItem::RepeatingValue(5, 0), 5, false)]
    #[case(PatternItem::RepeatingRange(10, 40, 5), 10, true)]
    #[case(PatternItem::RepeatingRange(10, 40, 5), 40, true)]
    #[case(PatternItem::RepeatingRange(10, 40, 5), 12, false)]
    #[case(PatternItem::RepeatingRange(10, 40, 5), 45, false)]
    #[case(PatternItem::RepeatingRange(10, 40, 5), 5, false)]
    fn test_pattern_item_contains(#[case] item: PatternItem, #[case] value: FieldValue, #[case] expected: bool) {
        assert_eq!(item.contains(value, 59), expected, "item = {item:?}, value = {value}");
    }

    #[rstest]
    #[case("1,3,5", 3, true)]
    #[case("1, 3 ,5", 3, true)]
    #[case("1,3,5", 4, false)]
    #[case("abc,4", 4, true)]
    #[case("abc,", 4, false)]
    #[case("0-5,*/20", 40, true)]
    #[case("0-5,*/20", 30, false)]
    fn test_matches_expression(#[case] expression: &str, #[case] value: FieldValue, #[case] expected: bool) {
        assert_eq!(matches_expression(expression, value, 59), expected);
    }

    #[rstest]
    #[case(FieldKind::Minute, "*")]
    #[case(FieldKind::Minute, "0")]
    #[case(FieldKind::Minute, "59")]
    #[case(FieldKind::Minute, "*/15")]
    #[case(FieldKind::Minute, "5/15")]
    #[case(FieldKind::Minute, "10-40/5")]
    #[case(FieldKind::Minute, "1,2,3-7,*/20")]
    #[case(FieldKind::Hour, "9-17")]
    #[case(FieldKind::Hour, "23")]
    #[case(FieldKind::DayOfMonth, "?")]
    #[case(FieldKind::DayOfMonth, "1-31")]
    #[case(FieldKind::Month, "1,6,12")]
    #[case(FieldKind::DayOfWeek, "?")]
    #[case(FieldKind::DayOfWeek, "1-5")]
    #[case(FieldKind::DayOfWeek, "0,6")]
    fn test_validate_valid(#[case] kind: FieldKind, #[case] expression: &str) {
        let result = validate(kind, expression);
        assert!(result.is_ok(), "kind = {kind}, expression = {expression}, error = {result:?}");
    }

    #[rstest]
    #[case(FieldKind::Minute, "60", CronError::InvalidMinuteValue("60".into()))]
    #[case(FieldKind::Minute, "abc", CronError::InvalidMinuteValue("abc".into()))]
    #[case(FieldKind::Minute, "", CronError::InvalidMinuteValue("".into()))]
    #[case(FieldKind::Minute, "1,", CronError::InvalidMinuteValue("".into()))]
    #[case(FieldKind::Minute, "*,1", CronError::InvalidFieldPattern("*,1".into()))]
    #[case(FieldKind::Minute, "?", CronError::InvalidFieldPattern("?".into()))]
    #[case(FieldKind::Minute, "*/0", CronError::InvalidRepeatingPattern("*/0".into()))]
    #[case(FieldKind::Minute, "*/60", CronError::InvalidRepeatingPattern("*/60".into()))]
    #[case(FieldKind::Minute, "*/x", CronError::InvalidRepeatingPattern("*/x".into()))]
    #[case(FieldKind::Minute, "50-10", CronError::InvalidRangeValue("50-10".into()))]
    #[case(FieldKind::Minute, "40-10/5", CronError::InvalidRangeValue("40-10/5".into()))]
    #[case(FieldKind::Minute, "1-", CronError::InvalidRangeValue("1-".into()))]
    #[case(FieldKind::Hour, "24", CronError::InvalidHourValue("24".into()))]
    #[case(FieldKind::Hour, "20-24", CronError::InvalidHourValue("20-24".into()))]
    #[case(FieldKind::DayOfMonth, "0", CronError::InvalidDayOfMonthValue("0".into()))]
    #[case(FieldKind::DayOfMonth, "32", CronError::InvalidDayOfMonthValue("32".into()))]
    #[case(FieldKind::DayOfMonth, "?,1", CronError::InvalidFieldPattern("?,1".into()))]
    #[case(FieldKind::Month, "13", CronError::InvalidMonthValue("13".into()))]
    #[case(FieldKind::Month, "0/2", CronError::InvalidMonthValue("0/2".into()))]
    #[case(FieldKind::DayOfWeek, "7", CronError::InvalidDayOfWeekValue("7".into()))]
    #[case(FieldKind::DayOfWeek, "5-1", CronError::InvalidRangeValue("5-1".into()))]
    #[case(FieldKind::DayOfWeek, "*/7", CronError::InvalidRepeatingPattern("*/7".into()))]
    fn test_validate_invalid(#[case] kind: FieldKind, #[case] expression: &str, #[case] expected: CronError) {
        assert_eq!(validate(kind, expression), Err(expected), "kind = {kind}");
    }

    #[rstest]
    #[case("2024-01-01T09:37:00Z", [37, 9, 1, 1, 1])]
    #[case("2024-02-29T23:59:00Z", [59, 23, 29, 2, 4])]
    #[case("2023-01-01T00:00:00Z", [0, 0, 1, 1, 0])]
    #[case("2024-01-06T12:00:00+09:00", [0, 12, 6, 1, 6])]
    fn test_field_kind_value_of(#[case] instant: &str, #[case] expected: [FieldValue; 5]) {
        let instant = DateTime::parse_from_rfc3339(instant).unwrap();
        let values = FieldKind::ALL.map(|kind| kind.value_of(&instant));
        assert_eq!(values, expected);
    }

    #[test]
    fn test_field_kind_bounds_and_display() {
        let bounds = FieldKind::ALL.map(|kind| kind.min_max());
        assert_eq!(bounds, [(0, 59), (0, 23), (1, 31), (1, 12), (0, 6)]);
        assert_eq!(FieldKind::DayOfMonth.to_string(), "day of month");
        assert_eq!(FieldKind::Minute.to_string(), "minute");
    }
}
