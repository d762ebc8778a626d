//! Pair-finder run orchestration with explicit stages.
//!
//! 1. **Ingest**: read the administration log into typed records
//! 2. **Aggregate**: group by instance, tally pairs, filter by minimum
//! 3. **Write**: serialize the qualifying pairs

use std::time::Instant;

use anyhow::Result;
use tracing::{info, info_span};

use copair_core::{filter_by_minimum, group_by_instance, tally_pairs};
use copair_ingest::read_administrations;
use copair_output::{default_output_path, write_pairs};

use crate::cli::Cli;
use crate::types::PairsResult;

pub fn run_pairs(cli: &Cli) -> Result<PairsResult> {
    let min_occurrence = cli.min_occurrence;
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&cli.input, min_occurrence));

    let ingest_span = info_span!("ingest", input = %cli.input.display());
    let ingest_start = Instant::now();
    let records = ingest_span.in_scope(|| read_administrations(&cli.input))?;
    let record_count = records.len();
    info!(
        record_count,
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    let aggregate_span = info_span!("aggregate", min_occurrence);
    let aggregate_start = Instant::now();
    let (instance_count, pair_count, qualifying) = aggregate_span.in_scope(|| {
        let instances = group_by_instance(records);
        let instance_count = instances.len();
        let tally = tally_pairs(&instances);
        let pair_count = tally.len();
        let qualifying = filter_by_minimum(&tally, min_occurrence);
        (instance_count, pair_count, qualifying)
    });
    info!(
        instance_count,
        pair_count,
        qualifying_count = qualifying.len(),
        duration_ms = aggregate_start.elapsed().as_millis(),
        "aggregation complete"
    );

    let write_span = info_span!("write", output = %output.display());
    let write_start = Instant::now();
    write_span.in_scope(|| write_pairs(&qualifying, &output))?;
    info!(
        qualifying_count = qualifying.len(),
        duration_ms = write_start.elapsed().as_millis(),
        "write complete"
    );

    Ok(PairsResult {
        input: cli.input.clone(),
        output,
        min_occurrence,
        record_count,
        instance_count,
        pair_count,
        qualifying_count: qualifying.len(),
    })
}
