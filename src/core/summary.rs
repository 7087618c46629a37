use crate::models::{LogRecord, SubjectTotal, Summary};
use std::collections::BTreeMap;

/// Total hours per subject.
///
/// Subjects are grouped by exact text (case-sensitive, no trimming) and come
/// out in lexicographic order. No logs at all gives `Summary::Empty`.
pub fn summarize_by_subject(logs: &[LogRecord]) -> Summary {
    if logs.is_empty() {
        return Summary::Empty;
    }

    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for log in logs {
        *totals.entry(log.subject.as_str()).or_insert(0.0) += log.duration;
    }

    Summary::Report(
        totals
            .into_iter()
            .map(|(subject, hours)| SubjectTotal {
                subject: subject.to_string(),
                hours,
            })
            .collect(),
    )
}
