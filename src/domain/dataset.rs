// Immutable in-memory launch dataset
use super::launch::LaunchRecord;
use std::collections::BTreeSet;

/// All launch records, loaded once at startup and never mutated.
/// Payload bounds are fixed at construction; both are 0 when empty.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    records: Vec<LaunchRecord>,
    min_payload_kg: f64,
    max_payload_kg: f64,
}

impl LaunchDataset {
    pub fn new(records: Vec<LaunchRecord>) -> Self {
        let (min_payload_kg, max_payload_kg) = if records.is_empty() {
            (0.0, 0.0)
        } else {
            records.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), r| {
                (lo.min(r.payload_mass_kg), hi.max(r.payload_mass_kg))
            })
        };

        Self {
            records,
            min_payload_kg,
            max_payload_kg,
        }
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn min_payload_kg(&self) -> f64 {
        self.min_payload_kg
    }

    pub fn max_payload_kg(&self) -> f64 {
        self.max_payload_kg
    }

    /// Distinct site identifiers in ascending lexical order
    pub fn distinct_sites(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.site.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}
