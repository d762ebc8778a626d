use std::collections::BTreeSet;
use std::fs;

use tempfile::TempDir;

use copair_model::DrugPair;
use copair_output::write_pairs;

#[test]
fn writes_one_pair_per_line_in_set_order() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("out.pairs");
    let pairs: BTreeSet<DrugPair> = [
        DrugPair::new("WARFARIN", "ASPIRIN"),
        DrugPair::new("ASPIRIN", "IBUPROFEN"),
    ]
    .into_iter()
    .collect();

    write_pairs(&pairs, &path).expect("write pairs");

    let contents = fs::read_to_string(&path).expect("read output");
    assert_eq!(contents, "ASPIRIN,IBUPROFEN\nASPIRIN,WARFARIN\n");
}

#[test]
fn empty_set_writes_an_empty_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("empty.pairs");

    write_pairs(&BTreeSet::new(), &path).expect("write pairs");

    let contents = fs::read_to_string(&path).expect("read output");
    assert!(contents.is_empty());
}

#[test]
fn unwritable_path_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("missing").join("out.pairs");

    let error = write_pairs(&BTreeSet::new(), &path).expect_err("missing parent dir");
    assert!(error.to_string().contains("out.pairs"));
}
