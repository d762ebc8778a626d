use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading an administration log. Line numbers are
/// 1-based positions in the input file.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("{}:{line}: expected patient_id, date, and drug_name, found {found} field(s)", .path.display())]
    ShortRecord {
        path: PathBuf,
        line: u64,
        found: usize,
    },
    #[error("{}:{line}: empty {field} field", .path.display())]
    EmptyField {
        path: PathBuf,
        line: u64,
        field: &'static str,
    },
    #[error("{}:{line}: invalid administration date {value:?}: {source}", .path.display())]
    InvalidDate {
        path: PathBuf,
        line: u64,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}
