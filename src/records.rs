use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

// one timing measurement from a benchmark log.
// the column names are exactly the ones the timing harness writes
#[derive(Debug, Clone, Deserialize)]
pub struct BenchmarkRecord {
    #[serde(rename = "Operation")]
    pub operation: String,
    #[serde(rename = "PolyModulusDegree")]
    pub poly_modulus_degree: u64,
    #[serde(rename = "Time(ms)")]
    pub time_ms: f64,
}

pub fn read_records(path: &Path) -> Result<Vec<BenchmarkRecord>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open benchmark log {}", path.display()))?;

    reader
        .deserialize()
        .map(|row| row.with_context(|| format!("malformed row in benchmark log {}", path.display())))
        .collect()
}
