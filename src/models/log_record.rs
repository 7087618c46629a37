use chrono::NaiveDate;
use std::fmt;

use crate::utils::formatting::hours_text;

/// One study session.
///
/// Plain value: no identity beyond its fields and no validation. Records are
/// checked at the input boundary (`core::input`) before reaching the store.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub date: NaiveDate,     // ⇔ "Date" column (YYYY-MM-DD)
    pub subject: String,     // ⇔ "Subject" column, free text, not unique
    pub duration: f64,       // ⇔ "Duration" column, hours
    pub description: String, // ⇔ "Description" column, may be empty
}

impl LogRecord {
    pub fn new(
        date: NaiveDate,
        subject: impl Into<String>,
        duration: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            subject: subject.into(),
            duration,
            description: description.into(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn duration_str(&self) -> String {
        hours_text(self.duration)
    }
}

/// Debug rendering: `date|subject|duration|description`.
impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|{}|{}|{}",
            self.date_str(),
            self.subject,
            self.duration_str(),
            self.description
        )
    }
}
