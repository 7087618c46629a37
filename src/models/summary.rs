use crate::utils::formatting::two_decimals;
use std::fmt;

/// Total hours recorded for one subject.
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectTotal {
    pub subject: String,
    pub hours: f64,
}

impl SubjectTotal {
    /// Total rounded to two decimals, as shown in reports.
    pub fn hours_str(&self) -> String {
        two_decimals(self.hours)
    }
}

/// Result of summarizing a store.
///
/// `Empty` is distinct from a report with no rows: it is only produced when
/// there are no logs at all.
#[derive(Debug, Clone, PartialEq)]
pub enum Summary {
    Empty,
    Report(Vec<SubjectTotal>),
}

impl Summary {
    /// Subject rows in lexicographic order; empty for `Summary::Empty`.
    pub fn totals(&self) -> &[SubjectTotal] {
        match self {
            Summary::Empty => &[],
            Summary::Report(rows) => rows,
        }
    }

    /// Render the report with a fixed subject column width.
    pub fn render(&self, subject_width: usize) -> String {
        match self {
            Summary::Empty => "No logs to summarize.".to_string(),
            Summary::Report(rows) => {
                let mut out = String::from("--- Study Summary by Subject ---\n\n");
                for row in rows {
                    out.push_str(&format!(
                        "Subject: {:<width$} Total Study: {} hours\n",
                        row.subject,
                        row.hours_str(),
                        width = subject_width
                    ));
                }
                out
            }
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(15))
    }
}
