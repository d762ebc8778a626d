use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use copair_model::{AdministrationInstance, DrugPair};

/// Enumerate all unordered pairs of distinct drugs in one instance's set.
///
/// Walks the set in its sorted order and combines every index pair (i, j)
/// with i < j. The strict inequality is what rules out both self-pairs and
/// reversed duplicates in a single pass. Sets of size zero or one yield
/// the empty set; a set of size n yields n * (n - 1) / 2 pairs.
pub fn enumerate_pairs(drugs: &BTreeSet<String>) -> BTreeSet<DrugPair> {
    let mut pairs = BTreeSet::new();
    if drugs.len() <= 1 {
        return pairs;
    }
    let ordered: Vec<&String> = drugs.iter().collect();
    for (i, first) in ordered.iter().enumerate() {
        for second in &ordered[i + 1..] {
            pairs.insert(DrugPair::new(first.as_str(), second.as_str()));
        }
    }
    pairs
}

/// Count, across all instances, how many instances witness each drug pair.
///
/// Each instance contributes at most one increment per pair: its drug set
/// is already deduplicated and the enumerator yields a pair once per call.
/// A pair's final count is therefore the number of instances in which both
/// of its drugs appear together.
pub fn tally_pairs(
    instances: &BTreeMap<AdministrationInstance, BTreeSet<String>>,
) -> BTreeMap<DrugPair, u64> {
    let mut tally: BTreeMap<DrugPair, u64> = BTreeMap::new();
    for drugs in instances.values() {
        for pair in enumerate_pairs(drugs) {
            *tally.entry(pair).or_insert(0) += 1;
        }
    }
    debug!(
        instance_count = instances.len(),
        pair_count = tally.len(),
        "tallied drug pair occurrences"
    );
    tally
}

/// Keep the pairs whose occurrence count is at least `min_occurrence`.
///
/// A minimum of zero or one returns every observed pair.
pub fn filter_by_minimum(
    tally: &BTreeMap<DrugPair, u64>,
    min_occurrence: u64,
) -> BTreeSet<DrugPair> {
    let qualifying: BTreeSet<DrugPair> = tally
        .iter()
        .filter(|&(_, &count)| count >= min_occurrence)
        .map(|(pair, _)| pair.clone())
        .collect();
    debug!(
        pair_count = tally.len(),
        qualifying_count = qualifying.len(),
        min_occurrence,
        "filtered pairs by minimum occurrence"
    );
    qualifying
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drug_set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|name| (*name).to_string()).collect()
    }

    #[test]
    fn enumeration_never_produces_a_degenerate_pair() {
        let pairs = enumerate_pairs(&drug_set(&["A", "B", "C", "D"]));
        assert!(pairs.iter().all(|pair| !pair.is_degenerate()));
    }

    #[test]
    fn enumeration_is_independent_of_insertion_order() {
        let forward = enumerate_pairs(&drug_set(&["A", "B", "C"]));
        let backward = enumerate_pairs(&drug_set(&["C", "B", "A"]));
        assert_eq!(forward, backward);
    }
}
