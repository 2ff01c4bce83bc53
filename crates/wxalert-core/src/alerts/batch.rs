use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::alerts::model::NormalizedAlert;

/// Where a batch came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceInfo {
    /// File path, or `-` for stdin.
    pub path: Option<String>,
    pub size_bytes: u64,
    pub hash: PayloadHash,
}

/// Fingerprint of the payload bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayloadHash {
    pub algorithm: String,
    pub value: String,
}

/// Alerts loaded and normalized together from one payload.
///
/// A batch replaces any previous one wholesale; it is never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertBatch {
    pub source: SourceInfo,
    pub alerts: Vec<NormalizedAlert>,
    /// Sorted, deterministic notes about payload irregularities.
    pub warnings: Vec<String>,
}

impl AlertBatch {
    pub fn new(source: SourceInfo, alerts: Vec<NormalizedAlert>) -> Self {
        let warnings = duplicate_id_warnings(&alerts);
        Self {
            source,
            alerts,
            warnings,
        }
    }
}

/// One warning per id that appears more than once. The records themselves
/// are kept; ids are only expected to be unique.
fn duplicate_id_warnings(alerts: &[NormalizedAlert]) -> Vec<String> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for alert in alerts {
        *counts.entry(alert.id.as_str()).or_default() += 1;
    }

    counts
        .into_iter()
        .filter(|(_, n)| *n > 1)
        .map(|(id, n)| {
            tracing::warn!(id, occurrences = n, "duplicate alert id in batch");
            format!("alert id {id:?} appears {n} times")
        })
        .collect()
}
