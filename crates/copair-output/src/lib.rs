//! Qualifying pair output.
//!
//! Serializes the filtered pair set as one `drugA,drugB` line per pair and
//! derives the default output path from the input path and threshold.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use copair_model::DrugPair;

/// Derive the default output path for an input file and minimum
/// occurrence: `<input>.min<N>.pairs`.
pub fn default_output_path(input: &Path, min_occurrence: u64) -> PathBuf {
    let mut name = input.as_os_str().to_os_string();
    name.push(format!(".min{min_occurrence}.pairs"));
    PathBuf::from(name)
}

/// Write each pair as its two member drug names joined by a comma, one
/// pair per line. Set iteration order makes the file deterministic.
pub fn write_pairs(pairs: &BTreeSet<DrugPair>, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("write pairs: {}", path.display()))?;
    for pair in pairs {
        let (first, second) = pair.drugs();
        writer
            .write_record([first, second])
            .with_context(|| format!("write pairs: {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("write pairs: {}", path.display()))?;
    debug!(
        path = %path.display(),
        pair_count = pairs.len(),
        "wrote qualifying pairs"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_appends_minimum_and_extension() {
        let path = default_output_path(Path::new("data/admins.csv"), 25);
        assert_eq!(path, PathBuf::from("data/admins.csv.min25.pairs"));
    }

    #[test]
    fn default_path_tracks_the_configured_minimum() {
        let path = default_output_path(Path::new("admins.csv"), 3);
        assert_eq!(path, PathBuf::from("admins.csv.min3.pairs"));
    }
}
