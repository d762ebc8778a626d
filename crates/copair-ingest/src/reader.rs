use std::path::Path;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use copair_model::{AdministrationInstance, SingleDrugAdministration};

use crate::error::IngestError;

const PATIENT_ID_INDEX: usize = 0;
const ADMIN_DATE_INDEX: usize = 1;
const DRUG_NAME_INDEX: usize = 2;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Read a headerless administration log into typed records.
///
/// Each line carries `patient_id,date,drug_name` with the date in
/// `%Y-%m-%d` form. Fields are trimmed of surrounding whitespace; fields
/// past the third are ignored. Duplicate lines are preserved, the grouping
/// stage collapses them. The first short record, empty field, or
/// unparsable date aborts the read with the offending line number.
pub fn read_administrations(path: &Path) -> Result<Vec<SingleDrugAdministration>, IngestError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let mut records = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result.map_err(|source| IngestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let line = record
            .position()
            .map(csv::Position::line)
            .unwrap_or(index as u64 + 1);
        records.push(parse_record(&record, path, line)?);
    }
    debug!(
        path = %path.display(),
        record_count = records.len(),
        "read administration log"
    );
    Ok(records)
}

fn parse_record(
    record: &StringRecord,
    path: &Path,
    line: u64,
) -> Result<SingleDrugAdministration, IngestError> {
    if record.len() <= DRUG_NAME_INDEX {
        return Err(IngestError::ShortRecord {
            path: path.to_path_buf(),
            line,
            found: record.len(),
        });
    }
    let patient_id = required_field(record, PATIENT_ID_INDEX, "patient_id", path, line)?;
    let date_value = required_field(record, ADMIN_DATE_INDEX, "date", path, line)?;
    let drug = required_field(record, DRUG_NAME_INDEX, "drug_name", path, line)?;

    let date =
        NaiveDate::parse_from_str(date_value, DATE_FORMAT).map_err(|source| {
            IngestError::InvalidDate {
                path: path.to_path_buf(),
                line,
                value: date_value.to_string(),
                source,
            }
        })?;

    Ok(SingleDrugAdministration::new(
        AdministrationInstance::new(patient_id, date),
        drug,
    ))
}

fn required_field<'a>(
    record: &'a StringRecord,
    index: usize,
    field: &'static str,
    path: &Path,
    line: u64,
) -> Result<&'a str, IngestError> {
    let value = record[index].trim();
    if value.is_empty() {
        return Err(IngestError::EmptyField {
            path: path.to_path_buf(),
            line,
            field,
        });
    }
    Ok(value)
}
