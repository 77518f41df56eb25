use crate::CronFieldSet;

/// Description returned for expressions which can't be parsed.
pub const INVALID_DESCRIPTION: &str = "無効なcron式です";

const DAY_NAMES: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];
const SEPARATOR: &str = "、";

/// Returns a short Japanese description of `expression`, or [`INVALID_DESCRIPTION`].
///
/// This is a display aid only, the output isn't meant to be parsed back.
pub fn describe(expression: &str) -> String {
    match CronFieldSet::parse(expression) {
        Ok(fields) => fields.describe(),
        Err(_) => INVALID_DESCRIPTION.to_owned(),
    }
}

impl CronFieldSet {
    /// Returns a short Japanese description of the field set.
    ///
    /// Fragments go in minute, hour, day, month order. A restricted day of month wins over day of week,
    /// and day of week is named only when it's a single value.
    pub fn describe(&self) -> String {
        let mut parts = vec![
            describe_repeating(&self.minute, "毎分", "分ごと", "分"),
            describe_repeating(&self.hour, "毎時", "時間ごと", "時"),
            self.describe_day(),
        ];

        if !is_unrestricted(&self.month) {
            parts.push(format!("{}月", self.month));
        }

        parts.join(SEPARATOR)
    }

    fn describe_day(&self) -> String {
        if !is_unrestricted(&self.day_of_month) {
            format!("{}日", self.day_of_month)
        } else if let Some(name) = day_name(&self.day_of_week) {
            format!("毎週{name}曜日")
        } else {
            "毎日".to_owned()
        }
    }
}

fn is_unrestricted(field: &str) -> bool {
    field == "*" || field == "?"
}

fn describe_repeating(field: &str, every: &str, step_suffix: &str, value_suffix: &str) -> String {
    if is_unrestricted(field) {
        every.to_owned()
    } else if let Some(step) = field.strip_prefix("*/") {
        format!("{step}{step_suffix}")
    } else {
        format!("{field}{value_suffix}")
    }
}

fn day_name(field: &str) -> Option<&'static str> {
    field
        .parse::<usize>()
        .ok()
        .and_then(|index| DAY_NAMES.get(index).copied())
}
