//! Storage file codec.
//!
//! Layout: a fixed unquoted header line, then one record per row with all four
//! fields quoted and embedded quotes doubled:
//!
//! ```text
//! Date,Subject,Duration,Description
//! "2025-03-01","Intro to ""AI""","1.5","Chapters 1, 2, 3"
//! ```

use crate::errors::AppResult;
use crate::models::LogRecord;
use crate::utils::date::parse_date;
use crate::utils::formatting::hours_text;
use csv::{QuoteStyle, ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use std::fs::File;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;

pub const HEADER: &str = "Date,Subject,Duration,Description";
const FIELD_COUNT: usize = 4;

/// A storage row that could not be turned into a record.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedLine {
    /// 1-based line number in the file, when known.
    pub line: Option<u64>,
    pub reason: String,
}

/// Everything recovered from a storage file.
#[derive(Debug, Default)]
pub struct Loaded {
    pub records: Vec<LogRecord>,
    pub skipped: Vec<SkippedLine>,
    /// Set when reading stopped early on an I/O failure.
    pub read_error: Option<String>,
}

/// Read all records from `path`.
///
/// A missing file yields an empty result. Rows with the wrong number of
/// fields, a bad date or a bad duration are skipped and listed in
/// `Loaded::skipped`; the rest of the file is still read. A read failure in
/// the middle of the file stops the load, keeping what was parsed so far,
/// and is recorded in `Loaded::read_error`.
/// Failing to open an existing file returns an error.
pub fn read_records(path: &Path) -> AppResult<Loaded> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Loaded::default()),
        Err(e) => return Err(e.into()),
    };

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let mut loaded = Loaded::default();

    for result in rdr.records() {
        match result {
            Ok(row) => match parse_row(&row) {
                Ok(record) => loaded.records.push(record),
                Err(reason) => loaded.skipped.push(SkippedLine {
                    line: row.position().map(|p| p.line()),
                    reason,
                }),
            },
            // The reader cannot make progress past a read failure.
            Err(e) if matches!(e.kind(), csv::ErrorKind::Io(_)) => {
                loaded.read_error = Some(e.to_string());
                break;
            }
            Err(e) => loaded.skipped.push(SkippedLine {
                line: e.position().map(|p| p.line()),
                reason: e.to_string(),
            }),
        }
    }

    Ok(loaded)
}

fn parse_row(row: &StringRecord) -> Result<LogRecord, String> {
    if row.len() != FIELD_COUNT {
        return Err(format!(
            "expected {} fields, found {}",
            FIELD_COUNT,
            row.len()
        ));
    }

    let date = parse_date(&row[0]).ok_or_else(|| format!("invalid date '{}'", &row[0]))?;
    let duration: f64 = row[2]
        .trim()
        .parse()
        .map_err(|_| format!("invalid duration '{}'", &row[2]))?;

    Ok(LogRecord::new(date, &row[1], duration, &row[3]))
}

/// Rewrite `path` with the header and every record, in order.
pub fn write_records(path: &Path, records: &[LogRecord]) -> AppResult<()> {
    let mut out = BufWriter::new(File::create(path)?);
    out.write_all(HEADER.as_bytes())?;
    out.write_all(b"\n")?;

    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(out);

    for log in records {
        wtr.write_record([
            log.date_str(),
            log.subject.clone(),
            hours_text(log.duration),
            log.description.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Create `path` holding only the header line, unless it already exists.
pub fn ensure_exists(path: &Path) -> AppResult<()> {
    if !path.exists() {
        write_records(path, &[])?;
    }
    Ok(())
}
