//! Validation at the input boundary.
//!
//! The store trusts its callers, so anything typed by a user goes through
//! `LogInput::validate` first.

use crate::errors::{AppError, AppResult};
use crate::models::LogRecord;
use crate::utils::date::parse_date;

/// Raw, unvalidated fields as typed by a user.
#[derive(Debug, Clone, Default)]
pub struct LogInput {
    pub date: String,
    pub subject: String,
    pub duration: String,
    pub description: String,
}

impl LogInput {
    /// Prefill from an existing record, for edits.
    pub fn from_record(log: &LogRecord) -> Self {
        Self {
            date: log.date_str(),
            subject: log.subject.clone(),
            duration: log.duration_str(),
            description: log.description.clone(),
        }
    }

    /// Turn the raw fields into a record that satisfies the store invariants:
    /// a `YYYY-MM-DD` date, a subject that is not blank and a finite
    /// duration greater than zero. The subject is kept exactly as typed.
    pub fn validate(&self) -> AppResult<LogRecord> {
        let date = parse_date(&self.date).ok_or_else(|| AppError::InvalidDate(self.date.clone()))?;

        let duration: f64 = self
            .duration
            .trim()
            .parse()
            .map_err(|_| AppError::InvalidDuration(self.duration.clone()))?;

        if self.subject.trim().is_empty() {
            return Err(AppError::EmptySubject);
        }

        if !duration.is_finite() || duration <= 0.0 {
            return Err(AppError::InvalidDuration(self.duration.clone()));
        }

        Ok(LogRecord::new(
            date,
            self.subject.clone(),
            duration,
            self.description.clone(),
        ))
    }
}
