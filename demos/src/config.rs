//! Scenario parameters.
//!
//! Every field has a default equal to the constant the demo script was
//! written with; a YAML file only needs to name what it overrides:
//!
//! ```yaml
//! # hubbard.yaml
//! sites: 3
//! time_points: 60
//! sample_rule: midpoint
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use qlat_sim::{OnSitePlacement, SampleRule};

/// Transverse-field Ising model on a grid:
/// `H = Σ_⟨ij⟩ −J ZᵢZⱼ + Σᵢ −h Xᵢ`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IsingConfig {
    /// Grid extent along each axis.
    pub dims: Vec<u32>,
    /// Coupling strength `J`.
    pub coupling: f64,
    /// Transverse field `h`.
    pub field: f64,
    /// Evolution time `T`.
    pub total_time: f64,
}

impl Default for IsingConfig {
    fn default() -> Self {
        Self {
            dims: vec![2, 2, 2],
            coupling: 1.0,
            field: 1.0,
            total_time: 1.0,
        }
    }
}

/// Hubbard chain with a linearly ramped on-site interaction:
/// `H(t) = −z_t·H_hop + U(t)·H_int`, `U` going from `interaction_start` to
/// `interaction_end` over `[0, T]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HubbardChainConfig {
    /// Number of atoms `N`; the register has `2N` qubits.
    pub sites: u32,
    /// Hopping strength `z_t`.
    pub hopping: f64,
    pub interaction_start: f64,
    pub interaction_end: f64,
    /// Evolution time `T`.
    pub total_time: f64,
    /// Number of time grid points `M` over `[0, T]`, both ends included.
    ///
    /// The evolution is split into `M - 1` constant-Hamiltonian steps, so the
    /// default of 30 points gives 29 steps.
    pub time_points: usize,
    pub sample_rule: SampleRule,
    pub on_site: OnSitePlacement,
}

impl Default for HubbardChainConfig {
    fn default() -> Self {
        Self {
            sites: 2,
            hopping: 1.0,
            interaction_start: -5.0,
            interaction_end: 5.0,
            total_time: 4.0,
            time_points: 30,
            sample_rule: SampleRule::Left,
            on_site: OnSitePlacement::EverySite,
        }
    }
}

/// Two coupled spins: `H = −J(X₁ + X₂) + U·Z₁Z₂`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TwoSiteConfig {
    /// Transverse strength `J`.
    pub coupling: f64,
    /// ZZ interaction `U`.
    pub interaction: f64,
    /// Evolution time `T`.
    pub total_time: f64,
}

impl Default for TwoSiteConfig {
    fn default() -> Self {
        Self {
            coupling: 4.0,
            interaction: 3.0,
            total_time: 10.0,
        }
    }
}

/// Read a scenario from YAML, or use the defaults when `path` is `None`.
pub fn load_config<T>(path: Option<&Path>) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let Some(path) = path else {
        return Ok(T::default());
    };
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    let config = parse_config(&source)
        .with_context(|| format!("Invalid config: {}", path.display()))?;
    debug!(path = %path.display(), "loaded scenario config");
    Ok(config)
}

/// Parse a scenario from YAML text. Empty text yields the defaults.
pub fn parse_config<T>(source: &str) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    if source.trim().is_empty() {
        return Ok(T::default());
    }
    Ok(serde_yaml_ng::from_str(source)?)
}

/// Render a scenario as YAML.
pub fn to_yaml<T: Serialize>(config: &T) -> Result<String> {
    Ok(serde_yaml_ng::to_string(config)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_scripts() {
        let ising = IsingConfig::default();
        assert_eq!(ising.dims, [2, 2, 2]);
        assert_eq!((ising.coupling, ising.field, ising.total_time), (1.0, 1.0, 1.0));

        let hubbard = HubbardChainConfig::default();
        assert_eq!(hubbard.sites, 2);
        assert_eq!(hubbard.time_points, 30);
        assert_eq!(
            qlat_sim::TimeGrid::uniform(hubbard.total_time, hubbard.time_points)
                .unwrap()
                .n_intervals(),
            29
        );
        assert_eq!((hubbard.interaction_start, hubbard.interaction_end), (-5.0, 5.0));

        let two = TwoSiteConfig::default();
        assert_eq!((two.coupling, two.interaction, two.total_time), (4.0, 3.0, 10.0));
    }

    #[test]
    fn test_partial_override() {
        let config: HubbardChainConfig =
            parse_config("sites: 3\nsample_rule: midpoint\non_site: edge_source\n").unwrap();
        assert_eq!(config.sites, 3);
        assert_eq!(config.sample_rule, SampleRule::Midpoint);
        assert_eq!(config.on_site, OnSitePlacement::EdgeSource);
        assert_eq!(config.total_time, 4.0);
    }

    #[test]
    fn test_empty_source_is_default() {
        let config: TwoSiteConfig = parse_config("  \n").unwrap();
        assert_eq!(config, TwoSiteConfig::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(parse_config::<IsingConfig>("couplnig: 2.0").is_err());
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = IsingConfig {
            dims: vec![3, 3],
            ..IsingConfig::default()
        };
        let yaml = to_yaml(&config).unwrap();
        assert_eq!(parse_config::<IsingConfig>(&yaml).unwrap(), config);
    }
}
