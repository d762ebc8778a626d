use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use copair_model::{AdministrationInstance, SingleDrugAdministration};

/// Group administration records by their (patient, date) instance.
///
/// Every record lands in exactly one entry; repeated (instance, drug)
/// observations collapse to a single set member. Record order is
/// irrelevant and an empty input yields an empty map.
pub fn group_by_instance(
    records: impl IntoIterator<Item = SingleDrugAdministration>,
) -> BTreeMap<AdministrationInstance, BTreeSet<String>> {
    let mut instances: BTreeMap<AdministrationInstance, BTreeSet<String>> = BTreeMap::new();
    let mut record_count = 0usize;
    for record in records {
        record_count += 1;
        instances
            .entry(record.instance)
            .or_default()
            .insert(record.drug);
    }
    debug!(
        record_count,
        instance_count = instances.len(),
        "grouped administrations by instance"
    );
    instances
}
