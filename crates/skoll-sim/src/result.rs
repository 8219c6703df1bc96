//! Execution results and measurement histograms.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Histogram of measurement outcomes.
///
/// Keys are bitstrings over the classical register with bit 0 rightmost, so
/// outcome 1 on a two-bit register is recorded as `"01"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Counts {
    counts: FxHashMap<String, u64>,
}

impl Counts {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a histogram from `(bitstring, count)` pairs.
    pub fn from_pairs<S: Into<String>>(pairs: impl IntoIterator<Item = (S, u64)>) -> Self {
        let mut counts = Self::new();
        for (bitstring, count) in pairs {
            counts.insert(bitstring, count);
        }
        counts
    }

    /// Record `count` additional observations of `bitstring`.
    pub fn insert(&mut self, bitstring: impl Into<String>, count: u64) {
        *self.counts.entry(bitstring.into()).or_insert(0) += count;
    }

    /// Observations of `bitstring`, 0 if never seen.
    pub fn get(&self, bitstring: &str) -> u64 {
        self.counts.get(bitstring).copied().unwrap_or(0)
    }

    /// The most observed outcome. Ties resolve to the lexicographically
    /// smallest bitstring so repeated runs report the same winner.
    pub fn most_frequent(&self) -> Option<(&str, u64)> {
        self.counts
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(bits, &count)| (bits.as_str(), count))
    }

    /// Total observations across all outcomes.
    pub fn total_shots(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct outcomes observed.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no outcome has been recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(bitstring, count)` entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &u64)> {
        self.counts.iter()
    }

    /// Entries sorted by descending count, then bitstring.
    pub fn sorted(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self
            .counts
            .iter()
            .map(|(bits, &count)| (bits.as_str(), count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

/// Result of executing a circuit on a backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Measurement counts.
    pub counts: Counts,
    /// Number of shots executed.
    pub shots: u32,
    /// Wall-clock execution time in milliseconds, if recorded.
    pub execution_time_ms: Option<u64>,
}

impl ExecutionResult {
    /// Create a result without timing information.
    pub fn new(counts: Counts, shots: u32) -> Self {
        Self {
            counts,
            shots,
            execution_time_ms: None,
        }
    }

    /// Attach the wall-clock execution time.
    #[must_use]
    pub fn with_execution_time(mut self, millis: u64) -> Self {
        self.execution_time_ms = Some(millis);
        self
    }

    /// Fraction of shots that produced `bitstring`.
    pub fn frequency(&self, bitstring: &str) -> f64 {
        if self.shots == 0 {
            return 0.0;
        }
        self.counts.get(bitstring) as f64 / f64::from(self.shots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_accumulates() {
        let mut counts = Counts::new();
        counts.insert("01", 3);
        counts.insert("01", 2);
        counts.insert("10", 1);
        assert_eq!(counts.get("01"), 5);
        assert_eq!(counts.get("10"), 1);
        assert_eq!(counts.get("11"), 0);
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_from_pairs() {
        let counts = Counts::from_pairs([("00", 500), ("11", 500)]);
        assert_eq!(counts.total_shots(), 1000);
        assert_eq!(counts.get("00"), 500);
    }

    #[test]
    fn test_most_frequent() {
        assert_eq!(Counts::new().most_frequent(), None);

        let counts = Counts::from_pairs([("00", 100), ("01", 880), ("10", 20)]);
        assert_eq!(counts.most_frequent(), Some(("01", 880)));
    }

    #[test]
    fn test_most_frequent_tie_is_deterministic() {
        let counts = Counts::from_pairs([("11", 50), ("00", 50)]);
        assert_eq!(counts.most_frequent(), Some(("00", 50)));
    }

    #[test]
    fn test_sorted_order() {
        let counts = Counts::from_pairs([("00", 10), ("11", 90), ("01", 10)]);
        let sorted = counts.sorted();
        assert_eq!(sorted, vec![("11", 90), ("00", 10), ("01", 10)]);
    }

    #[test]
    fn test_frequency() {
        let result = ExecutionResult::new(Counts::from_pairs([("1", 250)]), 1000);
        assert!((result.frequency("1") - 0.25).abs() < 1e-12);
        assert_eq!(result.frequency("0"), 0.0);
    }

    #[test]
    fn test_result_serde_roundtrip() {
        let result = ExecutionResult::new(Counts::from_pairs([("01", 1000)]), 1000)
            .with_execution_time(4);
        let json = serde_json::to_string(&result).unwrap();
        let back: ExecutionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
