pub mod log_record;
pub mod summary;

pub use log_record::LogRecord;
pub use summary::{SubjectTotal, Summary};
