//! Simulator backend implementation.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Instant;
use tracing::{debug, info, instrument};

use qlat_hal::result::NORMALIZATION_TOLERANCE;
use qlat_hal::{
    Backend, BackendConfig, BackendFactory, Capabilities, Distribution, EvolutionResult, HalError,
    HalResult,
};
use qlat_sim::{EvolutionRequest, SynthesisMethod, TrotterOrder, compile_request};

use crate::propagator::{SparseHamiltonian, evolve_exact};
use crate::statevector::{MAX_SUPPORTED_QUBITS, Statevector};

/// Default register limit; 2^20 amplitudes is 16 MiB.
pub const DEFAULT_MAX_QUBITS: u32 = 20;
/// Trotter slices per segment when the config names only the method.
pub const DEFAULT_TROTTER_STEPS: usize = 100;
/// QDrift draws per segment when the config names only the method.
pub const DEFAULT_QDRIFT_SAMPLES: usize = 1000;

/// How the simulator realises `exp(-i H t)`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Method {
    /// Taylor-series propagation of every segment.
    #[default]
    Exact,
    /// Compile to a Trotter circuit and run its gates.
    Trotter { order: TrotterOrder, steps: usize },
    /// Compile to a QDrift circuit and run its gates.
    QDrift { samples: usize },
}

impl Method {
    /// Short name used in logs and reports.
    pub fn name(&self) -> &'static str {
        match self {
            Method::Exact => "exact",
            Method::Trotter { .. } => "trotter",
            Method::QDrift { .. } => "qdrift",
        }
    }
}

/// Local statevector backend.
///
/// Every run starts from |0…0⟩, evolves through the request's segments and
/// reports either the exact outcome probabilities or, with
/// [`with_shots`](Self::with_shots), sampled frequencies.
pub struct SimulatorBackend {
    /// Backend configuration.
    config: BackendConfig,
    capabilities: Capabilities,
    method: Method,
    shots: Option<u32>,
    seed: Option<u64>,
}

impl SimulatorBackend {
    /// Create a new simulator backend with default settings.
    pub fn new() -> Self {
        Self::build(BackendConfig::new("simulator"), DEFAULT_MAX_QUBITS)
    }

    /// Create a simulator with custom max qubits.
    ///
    /// Limits above [`MAX_SUPPORTED_QUBITS`] are a configuration error.
    pub fn with_max_qubits(max_qubits: u32) -> HalResult<Self> {
        check_max_qubits(max_qubits)?;
        Ok(Self::build(BackendConfig::new("simulator"), max_qubits))
    }

    fn build(config: BackendConfig, max_qubits: u32) -> Self {
        Self {
            capabilities: Capabilities::simulator(max_qubits).with_name(&config.name),
            config,
            method: Method::Exact,
            shots: None,
            seed: None,
        }
    }

    #[must_use]
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Report frequencies from `shots` measurements instead of exact
    /// probabilities.
    #[must_use]
    pub fn with_shots(mut self, shots: u32) -> Self {
        self.shots = Some(shots);
        self
    }

    /// Fix the seed used for QDrift draws and measurement sampling.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn shots(&self) -> Option<u32> {
        self.shots
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn check_request(&self, request: &EvolutionRequest) -> HalResult<u32> {
        request.validate()?;
        let n_qubits = request.n_qubits();
        if n_qubits > self.capabilities.max_qubits {
            return Err(HalError::RequestTooLarge {
                n_qubits,
                max_qubits: self.capabilities.max_qubits,
            });
        }
        if let Some(shots) = self.shots {
            if shots == 0 || shots > self.capabilities.max_shots {
                return Err(HalError::InvalidShots(format!(
                    "{shots} shots requested, expected 1..={}",
                    self.capabilities.max_shots
                )));
            }
        }
        Ok(n_qubits)
    }

    /// Evolve |0…0⟩ under `request`.
    fn evolve(&self, request: &EvolutionRequest, n_qubits: u32) -> HalResult<Statevector> {
        let mut sv = Statevector::new(n_qubits as usize)?;
        let synthesis = match self.method {
            Method::Exact => {
                propagate(request, &mut sv)?;
                return Ok(sv);
            }
            Method::Trotter { order, steps } => SynthesisMethod::Trotter { order, steps },
            Method::QDrift { samples } => SynthesisMethod::QDrift {
                samples,
                seed: self.seed,
            },
        };

        let circuit = compile_request(request, &synthesis)?;
        debug!(
            ops = circuit.num_ops(),
            depth = circuit.depth(),
            "running compiled circuit"
        );
        sv.apply_circuit(&circuit);
        Ok(sv)
    }
}

/// Exact evolution through every segment of `request`.
fn propagate(request: &EvolutionRequest, sv: &mut Statevector) -> HalResult<()> {
    let segments = request.segments()?;
    let mut substeps = 0;
    for segment in &segments {
        let h = SparseHamiltonian::new(&segment.hamiltonian.simplified(), sv.num_qubits())?;
        substeps += evolve_exact(sv, &h, segment.duration);
    }
    debug!(segments = segments.len(), substeps, "exact propagation done");
    Ok(())
}

impl Default for SimulatorBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for SimulatorBackend {
    fn name(&self) -> &str {
        &self.config.name
    }

    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    #[instrument(skip(self, request), fields(method = self.method.name()))]
    fn run(&self, request: &EvolutionRequest) -> HalResult<EvolutionResult> {
        let start = Instant::now();
        let n_qubits = self.check_request(request)?;
        debug!(n_qubits, total_time = request.total_time(), "starting evolution");

        let sv = self.evolve(request, n_qubits)?;
        let norm = sv.norm_sqr();
        if (norm - 1.0).abs() > NORMALIZATION_TOLERANCE {
            return Err(HalError::Backend(format!(
                "state norm drifted to {norm} during evolution"
            )));
        }

        let mut result = match self.shots {
            None => {
                let distribution = Distribution::from_probabilities(&sv.probabilities(), n_qubits);
                EvolutionResult::new(distribution, n_qubits, self.name())
            }
            Some(shots) => {
                let mut rng = match self.seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_entropy(),
                };
                let counts = sv.sample_counts(shots, &mut rng);
                let distribution = Distribution::from_counts(&counts, n_qubits);
                EvolutionResult::new(distribution, n_qubits, self.name()).with_shots(shots)
            }
        };

        let elapsed = start.elapsed();
        info!(?elapsed, "simulation completed");
        result = result.with_execution_time(elapsed.as_millis() as u64);
        Ok(result)
    }
}

impl BackendFactory for SimulatorBackend {
    /// Recognised `extra` keys: `method` (`exact` | `trotter` | `qdrift`),
    /// `order` (1 | 2), `steps`, `samples`, `shots`, `seed`, `max_qubits`.
    fn from_config(config: BackendConfig) -> HalResult<Self> {
        let max_qubits = match config.get_u64("max_qubits")? {
            Some(v) => to_u32(v, "max_qubits")?,
            None => DEFAULT_MAX_QUBITS,
        };
        check_max_qubits(max_qubits)?;

        let method = match config.get_str("method")?.unwrap_or("exact") {
            "exact" => Method::Exact,
            "trotter" => {
                let order = match config.get_u64("order")? {
                    Some(v) => TrotterOrder::try_from(u8::try_from(v).unwrap_or(u8::MAX))
                        .map_err(|e| HalError::Configuration(e.to_string()))?,
                    None => TrotterOrder::default(),
                };
                let steps = config
                    .get_u64("steps")?
                    .map_or(DEFAULT_TROTTER_STEPS, |v| v as usize);
                Method::Trotter { order, steps }
            }
            "qdrift" => Method::QDrift {
                samples: config
                    .get_u64("samples")?
                    .map_or(DEFAULT_QDRIFT_SAMPLES, |v| v as usize),
            },
            other => {
                return Err(HalError::Configuration(format!(
                    "unknown method '{other}', expected exact, trotter or qdrift"
                )));
            }
        };

        let shots = config
            .get_u64("shots")?
            .map(|v| to_u32(v, "shots"))
            .transpose()?;
        let seed = config.get_u64("seed")?;

        Ok(Self {
            method,
            shots,
            seed,
            ..Self::build(config, max_qubits)
        })
    }
}

fn check_max_qubits(max_qubits: u32) -> HalResult<()> {
    if max_qubits > MAX_SUPPORTED_QUBITS {
        return Err(HalError::Configuration(format!(
            "max_qubits = {max_qubits} exceeds the statevector limit of {MAX_SUPPORTED_QUBITS}"
        )));
    }
    Ok(())
}

fn to_u32(value: u64, key: &str) -> HalResult<u32> {
    u32::try_from(value)
        .map_err(|_| HalError::Configuration(format!("'{key}' = {value} does not fit in u32")))
}
