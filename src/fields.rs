use crate::{pattern, CronError, FieldKind, Result};
use std::{fmt::Display, str::FromStr};

/// Expression restored by editor reset: every day at midnight.
pub const DEFAULT_EXPRESSION: &str = "0 0 * * *";

/// Five-field cron expression as a plain record of field strings.
///
/// Field contents aren't validated on construction or parsing: a malformed field simply never matches.
/// Use [`validate()`](CronFieldSet::validate) for a strict check against field bounds.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CronFieldSet {
    /// Minute constraint, `0-59`.
    pub minute: String,
    /// Hour constraint, `0-23`.
    pub hour: String,
    /// Day of month constraint, `1-31`.
    pub day_of_month: String,
    /// Month constraint, `1-12`.
    pub month: String,
    /// Day of week constraint, `0-6` (Sunday is `0`).
    pub day_of_week: String,
}

impl CronFieldSet {
    /// Constructs a field set from five field strings in positional order.
    pub fn new(
        minute: impl Into<String>,
        hour: impl Into<String>,
        day_of_month: impl Into<String>,
        month: impl Into<String>,
        day_of_week: impl Into<String>,
    ) -> Self {
        Self {
            minute: minute.into(),
            hour: hour.into(),
            day_of_month: day_of_month.into(),
            month: month.into(),
            day_of_week: day_of_week.into(),
        }
    }

    /// Splits `input` on whitespace runs into five fields.
    ///
    /// Returns [`CronError::InvalidCronExpression`] if the number of fields isn't exactly five.
    pub fn parse(input: &str) -> Result<Self> {
        let elements: Vec<&str> = input.split_whitespace().collect();
        let [minute, hour, day_of_month, month, day_of_week] = elements[..] else {
            return Err(CronError::InvalidCronExpression(input.to_owned()));
        };

        Ok(Self::new(minute, hour, day_of_month, month, day_of_week))
    }

    /// Joins the fields into the canonical single-space separated expression.
    #[inline]
    pub fn to_expression(&self) -> String {
        self.to_string()
    }

    /// Returns the field's expression string.
    pub fn field(&self, kind: FieldKind) -> &str {
        match kind {
            FieldKind::Minute => &self.minute,
            FieldKind::Hour => &self.hour,
            FieldKind::DayOfMonth => &self.day_of_month,
            FieldKind::Month => &self.month,
            FieldKind::DayOfWeek => &self.day_of_week,
        }
    }

    /// Returns a copy with a single field replaced.
    pub fn with_field(&self, kind: FieldKind, value: impl Into<String>) -> Self {
        let mut fields = self.clone();
        let value = value.into();
        match kind {
            FieldKind::Minute => fields.minute = value,
            FieldKind::Hour => fields.hour = value,
            FieldKind::DayOfMonth => fields.day_of_month = value,
            FieldKind::Month => fields.month = value,
            FieldKind::DayOfWeek => fields.day_of_week = value,
        }
        fields
    }

    /// Strictly validates every field against its bounds and syntax.
    ///
    /// Matching and searching never require this: they treat malformed fields as "never matches".
    pub fn validate(&self) -> Result<()> {
        FieldKind::ALL
            .iter()
            .try_for_each(|kind| pattern::validate(*kind, self.field(*kind)))
    }
}

impl Default for CronFieldSet {
    fn default() -> Self {
        Self::new("0", "0", "*", "*", "*")
    }
}

/// Builds canonical cron expression from the field set.
#[inline]
pub fn build_expression(fields: &CronFieldSet) -> String {
    fields.to_expression()
}

/// Parses expression into the field set, see [`CronFieldSet::parse()`].
#[inline]
pub fn parse_expression(input: &str) -> Result<CronFieldSet> {
    CronFieldSet::parse(input)
}

impl From<CronFieldSet> for String {
    fn from(value: CronFieldSet) -> Self {
        value.to_string()
    }
}

impl From<&CronFieldSet> for String {
    fn from(value: &CronFieldSet) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for CronFieldSet {
    type Error = CronError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl TryFrom<&String> for CronFieldSet {
    type Error = CronError;

    fn try_from(value: &String) -> Result<Self> {
        Self::parse(value)
    }
}

impl TryFrom<&str> for CronFieldSet {
    type Error = CronError;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl FromStr for CronFieldSet {
    type Err = CronError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Display for CronFieldSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.minute, self.hour, self.day_of_month, self.month, self.day_of_week
        )
    }
}
