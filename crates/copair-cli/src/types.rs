use std::path::PathBuf;

/// Counters and paths from one completed pair-finder run.
#[derive(Debug)]
pub struct PairsResult {
    pub input: PathBuf,
    pub output: PathBuf,
    pub min_occurrence: u64,
    pub record_count: usize,
    pub instance_count: usize,
    pub pair_count: usize,
    pub qualifying_count: usize,
}
