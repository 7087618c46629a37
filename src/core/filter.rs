//! Search over the logs as they are displayed.

use crate::errors::AppResult;
use crate::models::LogRecord;
use regex::{Regex, RegexBuilder};

/// Case-insensitive pattern matched against the date, subject, duration and
/// description of each log. A blank pattern matches everything.
#[derive(Debug, Clone)]
pub struct LogFilter {
    re: Option<Regex>,
}

impl LogFilter {
    pub fn new(pattern: &str) -> AppResult<Self> {
        if pattern.trim().is_empty() {
            return Ok(Self { re: None });
        }

        let re = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Self { re: Some(re) })
    }

    pub fn matches(&self, log: &LogRecord) -> bool {
        let Some(re) = &self.re else {
            return true;
        };

        re.is_match(&log.date_str())
            || re.is_match(&log.subject)
            || re.is_match(&log.duration_str())
            || re.is_match(&log.description)
    }

    /// Matching logs paired with their position in `logs`.
    pub fn apply<'a>(&self, logs: &'a [LogRecord]) -> Vec<(usize, &'a LogRecord)> {
        logs.iter()
            .enumerate()
            .filter(|(_, log)| self.matches(log))
            .collect()
    }
}
