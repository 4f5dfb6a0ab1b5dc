//! Evolution results.
//!
//! Outcomes are bitstrings with qubit 0 as the leftmost character, so the
//! basis state with only qubit 0 excited on three qubits is `"100"`.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{HalError, HalResult};

/// Tolerance for "probabilities sum to one".
pub const NORMALIZATION_TOLERANCE: f64 = 1e-6;

/// Bitstring for basis-state `index` on `n_qubits`, qubit 0 leftmost.
///
/// ```rust
/// use qlat_hal::result::bitstring;
///
/// assert_eq!(bitstring(0b001, 3), "100");
/// assert_eq!(bitstring(0b110, 3), "011");
/// ```
pub fn bitstring(index: usize, n_qubits: u32) -> String {
    (0..n_qubits)
        .map(|q| if index >> q & 1 == 1 { '1' } else { '0' })
        .collect()
}

/// Ordered mapping from outcome bitstring to probability.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Distribution {
    probabilities: BTreeMap<String, f64>,
}

impl Distribution {
    /// An empty distribution.
    pub fn new() -> Self {
        Self::default()
    }

    /// One entry per basis state; `probs[i]` is the probability of basis
    /// state `i`. Zero-probability outcomes are kept.
    pub fn from_probabilities(probs: &[f64], n_qubits: u32) -> Self {
        probs
            .iter()
            .enumerate()
            .map(|(i, &p)| (bitstring(i, n_qubits), p))
            .collect()
    }

    /// Empirical frequencies from per-basis-state counts.
    pub fn from_counts(counts: &[u64], n_qubits: u32) -> Self {
        let shots: u64 = counts.iter().sum();
        if shots == 0 {
            return Self::new();
        }
        counts
            .iter()
            .enumerate()
            .map(|(i, &c)| (bitstring(i, n_qubits), c as f64 / shots as f64))
            .collect()
    }

    /// Set the probability of an outcome.
    pub fn insert(&mut self, outcome: impl Into<String>, probability: f64) {
        self.probabilities.insert(outcome.into(), probability);
    }

    /// Probability of an outcome, if present.
    pub fn get(&self, outcome: &str) -> Option<f64> {
        self.probabilities.get(outcome).copied()
    }

    /// Iterate over (outcome, probability) in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.probabilities.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of outcomes.
    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    /// True if there are no outcomes.
    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }

    /// Sum of all probabilities.
    pub fn total(&self) -> f64 {
        self.probabilities.values().sum()
    }

    /// The most likely outcome; ties go to the lexicographically first.
    pub fn most_probable(&self) -> Option<(&str, f64)> {
        self.iter()
            .fold(None, |best: Option<(&str, f64)>, (k, p)| match best {
                Some((_, bp)) if bp >= p => best,
                _ => Some((k, p)),
            })
    }
}

impl FromIterator<(String, f64)> for Distribution {
    fn from_iter<T: IntoIterator<Item = (String, f64)>>(iter: T) -> Self {
        Self {
            probabilities: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (k, p)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "'{k}': {p}")?;
        }
        write!(f, "}}")
    }
}

/// Result of one evolution run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionResult {
    /// Outcome probabilities.
    pub distribution: Distribution,
    /// Width of every outcome bitstring.
    pub n_qubits: u32,
    /// Number of samples, if the distribution is empirical.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shots: Option<u32>,
    /// Wall-clock time spent in the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_time_ms: Option<u64>,
    /// Name of the backend that produced the result.
    pub backend: String,
}

impl EvolutionResult {
    /// Create a result.
    pub fn new(distribution: Distribution, n_qubits: u32, backend: impl Into<String>) -> Self {
        Self {
            distribution,
            n_qubits,
            shots: None,
            execution_time_ms: None,
            backend: backend.into(),
        }
    }

    /// Record that the distribution came from `shots` samples.
    #[must_use]
    pub fn with_shots(mut self, shots: u32) -> Self {
        self.shots = Some(shots);
        self
    }

    /// Set execution time.
    #[must_use]
    pub fn with_execution_time(mut self, ms: u64) -> Self {
        self.execution_time_ms = Some(ms);
        self
    }

    /// Probability of `outcome`, failing if it is absent.
    pub fn probability(&self, outcome: &str) -> HalResult<f64> {
        self.distribution
            .get(outcome)
            .ok_or_else(|| HalError::MissingOutcome {
                key: outcome.to_string(),
                n_qubits: self.n_qubits,
            })
    }

    /// The all-zero bitstring, reported as the ground state.
    pub fn ground_state_key(&self) -> String {
        "0".repeat(self.n_qubits as usize)
    }

    /// Probability of the all-zero outcome.
    pub fn ground_state_probability(&self) -> HalResult<f64> {
        self.probability(&self.ground_state_key())
    }

    /// Sum of all outcome probabilities.
    pub fn total_probability(&self) -> f64 {
        self.distribution.total()
    }

    /// True if the probabilities sum to one within [`NORMALIZATION_TOLERANCE`].
    pub fn is_normalized(&self) -> bool {
        (self.total_probability() - 1.0).abs() <= NORMALIZATION_TOLERANCE
    }

    /// The most likely outcome.
    pub fn most_probable(&self) -> Option<(&str, f64)> {
        self.distribution.most_probable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_probabilities_keeps_zeros() {
        let d = Distribution::from_probabilities(&[0.5, 0.0, 0.0, 0.5], 2);
        assert_eq!(d.len(), 4);
        assert_eq!(d.get("00"), Some(0.5));
        assert_eq!(d.get("11"), Some(0.5));
        assert_eq!(d.get("10"), Some(0.0));
    }

    #[test]
    fn test_qubit_zero_is_leftmost() {
        // Basis index 1 has qubit 0 set.
        let d = Distribution::from_probabilities(&[0.0, 1.0, 0.0, 0.0], 2);
        assert_eq!(d.get("10"), Some(1.0));
        assert_eq!(d.get("01"), Some(0.0));
    }

    #[test]
    fn test_from_counts() {
        let d = Distribution::from_counts(&[3, 1], 1);
        assert_eq!(d.get("0"), Some(0.75));
        assert_eq!(d.get("1"), Some(0.25));
        assert!(Distribution::from_counts(&[0, 0], 1).is_empty());
    }

    #[test]
    fn test_ground_state_lookup() {
        let d = Distribution::from_probabilities(&[0.25, 0.75], 1);
        let result = EvolutionResult::new(d, 1, "test");
        assert_eq!(result.ground_state_key(), "0");
        assert_eq!(result.ground_state_probability().unwrap(), 0.25);
        assert!(result.is_normalized());
    }

    #[test]
    fn test_missing_ground_state_is_an_error() {
        let mut d = Distribution::new();
        d.insert("11", 1.0);
        let result = EvolutionResult::new(d, 2, "test");
        assert!(matches!(
            result.ground_state_probability(),
            Err(HalError::MissingOutcome { ref key, n_qubits: 2 }) if key == "00"
        ));
    }

    #[test]
    fn test_most_probable_and_display() {
        let d = Distribution::from_probabilities(&[0.1, 0.6, 0.3, 0.0], 2);
        assert_eq!(d.most_probable(), Some(("10", 0.6)));
        assert_eq!(d.to_string(), "{'00': 0.1, '01': 0.3, '10': 0.6, '11': 0}");
    }

    #[test]
    fn test_result_serializes_distribution_as_map() {
        let d = Distribution::from_probabilities(&[1.0, 0.0], 1);
        let result = EvolutionResult::new(d, 1, "sim").with_execution_time(3);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["distribution"]["0"], 1.0);
        assert_eq!(json["execution_time_ms"], 3);
        assert!(json.get("shots").is_none());
    }
}
