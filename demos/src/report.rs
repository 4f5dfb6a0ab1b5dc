//! Presenting an evolution result.

use anyhow::Result;
use console::style;
use serde::Serialize;

use qlat_hal::EvolutionResult;

use crate::scenarios::ScenarioSummary;
use crate::{print_result, print_section};

/// Probability of the all-zero outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroundState {
    pub key: String,
    pub probability: f64,
}

/// Everything a demo prints, in one serializable value.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub scenario: ScenarioSummary,
    pub method: String,
    pub result: EvolutionResult,
    pub ground_state: GroundState,
}

impl Report {
    /// Fails if the result has no all-zero outcome.
    pub fn new(scenario: ScenarioSummary, method: impl Into<String>, result: EvolutionResult) -> Result<Self> {
        let ground_state = GroundState {
            key: result.ground_state_key(),
            probability: result.ground_state_probability()?,
        };
        Ok(Self {
            scenario,
            method: method.into(),
            result,
            ground_state,
        })
    }

    /// The closing line of every demo.
    pub fn ground_state_line(&self) -> String {
        format!(
            "Probability of obtaining the ground state {}: {}",
            self.ground_state.key, self.ground_state.probability
        )
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Styled report on stdout.
    pub fn print_text(&self) {
        let s = &self.scenario;
        print_section("Model");
        print_result("Hamiltonian", &s.formula);
        print_result("Lattice", format!("{} sites, {} edges", s.sites, s.edges));
        print_result("Qubits", s.n_qubits);
        print_result("Evolution time", s.total_time);
        if s.time_dependent {
            print_result("Segments", s.segments);
        }
        print_result("Method", &self.method);

        let r = &self.result;
        match r.shots {
            Some(shots) => print_section(&format!("Results ({shots} shots)")),
            None => print_section("Results"),
        }
        for (bitstring, p) in r.distribution.iter() {
            let bar = "█".repeat((p * 50.0).round() as usize);
            println!(
                "  {}: {:.6} {}",
                style(bitstring).cyan(),
                p,
                style(bar).green()
            );
        }
        if let Some((key, p)) = r.most_probable() {
            println!();
            print_result("Most probable", format!("{key} ({p:.4})"));
        }
        if let Some(ms) = r.execution_time_ms {
            print_result("Execution time", format!("{} ms", style(ms).yellow()));
        }

        println!();
        println!("{}", self.ground_state_line());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qlat_hal::{Distribution, HalError};

    fn summary() -> ScenarioSummary {
        ScenarioSummary {
            name: "test".into(),
            formula: "H = X".into(),
            sites: 1,
            edges: 0,
            n_qubits: 1,
            total_time: 1.0,
            time_dependent: false,
            segments: 1,
        }
    }

    #[test]
    fn test_ground_state_line() {
        let result = EvolutionResult::new(Distribution::from_probabilities(&[0.25, 0.75], 1), 1, "sim");
        let report = Report::new(summary(), "exact", result).unwrap();
        assert_eq!(
            report.ground_state_line(),
            "Probability of obtaining the ground state 0: 0.25"
        );
    }

    #[test]
    fn test_missing_ground_state_fails() {
        let result = EvolutionResult::new(Distribution::new(), 1, "sim");
        let err = Report::new(summary(), "exact", result).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<HalError>(),
            Some(HalError::MissingOutcome { .. })
        ));
    }

    #[test]
    fn test_json_has_ground_state() {
        let result = EvolutionResult::new(Distribution::from_probabilities(&[1.0, 0.0], 1), 1, "sim");
        let json = Report::new(summary(), "exact", result).unwrap().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["ground_state"]["key"], "0");
        assert_eq!(value["result"]["distribution"]["1"], 0.0);
    }
}
