use crate::{describe, CronFieldSet, FieldKind, Result, SearchOptions};
use chrono::{DateTime, TimeZone};
use tracing::trace;

/// Well-known schedule offered to the user as a starting point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CronTemplate {
    /// Human readable label.
    pub label: &'static str,
    /// Canonical cron expression.
    pub expression: &'static str,
}

/// Built-in templates.
pub const TEMPLATES: &[CronTemplate] = &[
    CronTemplate { label: "毎分", expression: "* * * * *" },
    CronTemplate { label: "5分ごと", expression: "*/5 * * * *" },
    CronTemplate { label: "15分ごと", expression: "*/15 * * * *" },
    CronTemplate { label: "30分ごと", expression: "*/30 * * * *" },
    CronTemplate { label: "毎時0分", expression: "0 * * * *" },
    CronTemplate { label: "毎日0時", expression: "0 0 * * *" },
    CronTemplate { label: "毎日9時", expression: "0 9 * * *" },
    CronTemplate { label: "平日9時", expression: "0 9 * * 1-5" },
    CronTemplate { label: "毎週月曜日0時", expression: "0 0 * * 1" },
    CronTemplate { label: "毎月1日0時", expression: "0 0 1 * *" },
    CronTemplate { label: "毎年1月1日0時", expression: "0 0 1 1 *" },
];

/// Which representation the user is editing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum EditorMode {
    /// Field-by-field editing.
    #[default]
    Visual,
    /// Raw expression text editing.
    Manual,
}

/// Everything a front end shows below the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview<Tz: TimeZone> {
    /// Expression the preview was computed for.
    pub expression: String,
    /// Human readable description, see [`describe()`].
    pub description: String,
    /// Upcoming executions, possibly fewer than requested.
    pub executions: Vec<DateTime<Tz>>,
    /// Whether the expression has five fields and passes strict validation.
    pub valid: bool,
}

/// State of the cron expression editor, independent of any UI toolkit.
///
/// Visual edits and raw text edits are kept in sync: the field set follows the raw text as long as
/// it parses, and the raw text is rebuilt from the fields on every visual edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CronEditor {
    mode: EditorMode,
    fields: CronFieldSet,
    manual_input: String,
    options: SearchOptions,
}

impl CronEditor {
    /// Editor with the default expression and default search options.
    pub fn new() -> Self {
        Self::with_options(SearchOptions::default())
    }

    /// Editor with the default expression and custom search options.
    pub fn with_options(options: SearchOptions) -> Self {
        let fields = CronFieldSet::default();
        Self {
            mode: EditorMode::Visual,
            manual_input: fields.to_expression(),
            fields,
            options,
        }
    }

    /// Current editing mode.
    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// Current field set.
    pub fn fields(&self) -> &CronFieldSet {
        &self.fields
    }

    /// Current raw expression text.
    pub fn manual_input(&self) -> &str {
        &self.manual_input
    }

    /// Search options used by previews.
    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Switches editing mode; entering manual mode starts from the current fields.
    pub fn set_mode(&mut self, mode: EditorMode) {
        if mode == EditorMode::Manual && self.mode != EditorMode::Manual {
            self.manual_input = self.fields.to_expression();
        }
        trace!(?mode, "editor mode changed");
        self.mode = mode;
    }

    /// Replaces a single field.
    pub fn set_field(&mut self, kind: FieldKind, value: impl Into<String>) {
        self.fields = self.fields.with_field(kind, value);
        self.manual_input = self.fields.to_expression();
    }

    /// Replaces the raw text; fields are updated only if the text parses.
    pub fn set_manual_input(&mut self, input: impl Into<String>) {
        self.manual_input = input.into();
        match CronFieldSet::parse(&self.manual_input) {
            Ok(fields) => self.fields = fields,
            Err(error) => trace!(%error, "keeping previous fields"),
        }
    }

    /// Loads a template and switches to visual mode.
    pub fn load_template(&mut self, template: &CronTemplate) -> Result<()> {
        self.load_expression(template.expression)
    }

    /// Loads an expression and switches to visual mode.
    ///
    /// Leaves the editor untouched if `expression` doesn't parse.
    pub fn load_expression(&mut self, expression: &str) -> Result<()> {
        let fields = CronFieldSet::parse(expression)?;
        self.manual_input = fields.to_expression();
        self.fields = fields;
        self.mode = EditorMode::Visual;
        Ok(())
    }

    /// Restores the default expression and visual mode.
    pub fn reset(&mut self) {
        self.fields = CronFieldSet::default();
        self.manual_input = self.fields.to_expression();
        self.mode = EditorMode::Visual;
    }

    /// Expression to copy or preview: raw text in manual mode, built fields otherwise.
    pub fn expression(&self) -> String {
        match self.mode {
            EditorMode::Visual => self.fields.to_expression(),
            EditorMode::Manual => self.manual_input.clone(),
        }
    }

    /// Computes description and upcoming executions after `origin`.
    pub fn preview<Tz: TimeZone>(&self, origin: &DateTime<Tz>) -> Preview<Tz> {
        let expression = self.expression();
        let valid = CronFieldSet::parse(&expression).and_then(|fields| fields.validate()).is_ok();

        Preview {
            description: describe(&expression),
            executions: crate::next_executions_with(&expression, origin, &self.options),
            expression,
            valid,
        }
    }

    /// Same as [`preview()`](Self::preview), starting from the current local time.
    #[cfg(feature = "clock")]
    pub fn preview_now(&self) -> Preview<chrono::Local> {
        self.preview(&chrono::Local::now())
    }
}

impl Default for CronEditor {
    fn default() -> Self {
        Self::new()
    }
}
