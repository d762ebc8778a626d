use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One episode of drug administration: a unique (patient, calendar date)
/// combination. Equality, ordering, and hashing are structural over both
/// fields; instances are only ever used as grouping keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AdministrationInstance {
    pub patient_id: String,
    pub date: NaiveDate,
}

impl AdministrationInstance {
    pub fn new(patient_id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            patient_id: patient_id.into(),
            date,
        }
    }
}

/// One observed fact from the input log: a single drug given during one
/// administration instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleDrugAdministration {
    pub instance: AdministrationInstance,
    pub drug: String,
}

impl SingleDrugAdministration {
    pub fn new(instance: AdministrationInstance, drug: impl Into<String>) -> Self {
        Self {
            instance,
            drug: drug.into(),
        }
    }
}
