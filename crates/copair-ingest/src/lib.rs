//! Administration log ingestion.
//!
//! Reads a headerless delimited file of `patient_id,date,drug_name` lines
//! into typed records, failing fast on the first malformed line.

mod error;
mod reader;

pub use error::IngestError;
pub use reader::read_administrations;
