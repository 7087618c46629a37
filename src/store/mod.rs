//! The log store: ordered study sessions mirrored to a storage file.
//!
//! Every mutation rewrites the whole file immediately. There is no locking;
//! a host that shares a store between threads must guard it with its own
//! mutex.

pub mod csv_file;

use crate::core::filter::LogFilter;
use crate::core::summary::summarize_by_subject;
use crate::errors::AppResult;
use crate::models::{LogRecord, Summary};
use crate::ui::messages::{error, warning};
use std::path::{Path, PathBuf};

/// What an index-addressed mutation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Applied,
    /// Index was not a valid position; nothing changed and nothing was written.
    OutOfRange,
}

impl Mutation {
    pub fn applied(self) -> bool {
        self == Mutation::Applied
    }
}

#[derive(Debug)]
pub struct LogStore {
    path: PathBuf,
    logs: Vec<LogRecord>,
}

impl LogStore {
    /// Open the store backed by `path`, loading whatever it already holds.
    ///
    /// A missing file gives an empty store. Unusable lines are reported as
    /// warnings and skipped; the remaining lines still load.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        let logs = match csv_file::read_records(&path) {
            Ok(loaded) => {
                for skipped in &loaded.skipped {
                    match skipped.line {
                        Some(line) => warning(format!(
                            "{}:{}: skipped line ({})",
                            path.display(),
                            line,
                            skipped.reason
                        )),
                        None => warning(format!(
                            "{}: skipped line ({})",
                            path.display(),
                            skipped.reason
                        )),
                    }
                }
                if let Some(reason) = &loaded.read_error {
                    warning(format!("Cannot read {}: {}", path.display(), reason));
                }
                loaded.records
            }
            Err(e) => {
                warning(format!("Cannot read {}: {}", path.display(), e));
                Vec::new()
            }
        };

        Self { path, logs }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All logs in display order. Read-only: changes go through the
    /// mutating methods so the file stays in sync.
    pub fn list(&self) -> &[LogRecord] {
        &self.logs
    }

    pub fn get(&self, index: usize) -> Option<&LogRecord> {
        self.logs.get(index)
    }

    pub fn len(&self) -> usize {
        self.logs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.logs.is_empty()
    }

    /// Append a log. The record is not re-validated here.
    ///
    /// If the file cannot be written the log stays in memory and the error is
    /// returned.
    pub fn add(&mut self, log: LogRecord) -> AppResult<()> {
        self.logs.push(log);
        self.save()
    }

    /// Replace the log at `index`. Out-of-range indices change nothing.
    pub fn update(&mut self, index: usize, log: LogRecord) -> AppResult<Mutation> {
        let Some(slot) = self.logs.get_mut(index) else {
            return Ok(Mutation::OutOfRange);
        };
        *slot = log;
        self.save()?;
        Ok(Mutation::Applied)
    }

    /// Remove the log at `index`; later logs move down by one.
    /// Out-of-range indices change nothing.
    pub fn delete(&mut self, index: usize) -> AppResult<Mutation> {
        if index >= self.logs.len() {
            return Ok(Mutation::OutOfRange);
        }
        self.logs.remove(index);
        self.save()?;
        Ok(Mutation::Applied)
    }

    pub fn summarize_by_subject(&self) -> Summary {
        summarize_by_subject(&self.logs)
    }

    /// Logs matching `pattern` (case-insensitive regex), with their indices.
    pub fn filter(&self, pattern: &str) -> AppResult<Vec<(usize, &LogRecord)>> {
        let filter = LogFilter::new(pattern)?;
        Ok(filter.apply(&self.logs))
    }

    fn save(&self) -> AppResult<()> {
        if let Err(e) = csv_file::write_records(&self.path, &self.logs) {
            error(format!("Failed to save {}: {}", self.path.display(), e));
            return Err(e);
        }
        Ok(())
    }
}
