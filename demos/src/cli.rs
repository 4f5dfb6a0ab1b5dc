//! Command-line surface shared by the demo binaries.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::info;
use tracing_subscriber::EnvFilter;

use qlat_adapter_sim::SimulatorBackend;
use qlat_hal::{Backend, BackendConfig, BackendFactory, ValidationResult};
use qlat_lattice::Lattice;

use crate::config::{load_config, to_yaml};
use crate::report::Report;
use crate::scenarios::Scenario;
use crate::{print_header, print_info};

/// How the backend realises the evolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MethodArg {
    Exact,
    Trotter,
    Qdrift,
}

impl MethodArg {
    fn as_str(self) -> &'static str {
        match self {
            MethodArg::Exact => "exact",
            MethodArg::Trotter => "trotter",
            MethodArg::Qdrift => "qdrift",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Options every demo accepts.
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// YAML file overriding the scenario defaults
    #[arg(short, long, env = "QLAT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print the effective scenario as YAML and exit
    #[arg(long)]
    pub print_config: bool,

    /// Evolution method
    #[arg(short, long, value_enum, default_value = "exact")]
    pub method: MethodArg,

    /// Trotter order (1 or 2)
    #[arg(long, default_value = "2")]
    pub order: u8,

    /// Trotter steps per segment
    #[arg(long, default_value = "100")]
    pub steps: usize,

    /// QDrift samples per segment
    #[arg(long, default_value = "1000")]
    pub samples: usize,

    /// Report sampled frequencies from this many shots
    #[arg(short, long)]
    pub shots: Option<u32>,

    /// Seed for QDrift draws and sampling
    #[arg(long)]
    pub seed: Option<u64>,

    /// Largest register the simulator accepts (at most 30)
    #[arg(long, default_value = "20")]
    pub max_qubits: u32,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Write the lattice to a .dot or .json file
    #[arg(long)]
    pub export_lattice: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl RunArgs {
    /// Backend options as the simulator's factory reads them.
    pub fn backend_config(&self) -> BackendConfig {
        let mut config = BackendConfig::new("simulator")
            .with_extra("method", self.method.as_str().into())
            .with_extra("max_qubits", self.max_qubits.into());
        match self.method {
            MethodArg::Exact => {}
            MethodArg::Trotter => {
                config = config
                    .with_extra("order", self.order.into())
                    .with_extra("steps", self.steps.into());
            }
            MethodArg::Qdrift => config = config.with_extra("samples", self.samples.into()),
        }
        if let Some(shots) = self.shots {
            config = config.with_extra("shots", shots.into());
        }
        if let Some(seed) = self.seed {
            config = config.with_extra("seed", seed.into());
        }
        config
    }

    fn method_label(&self) -> String {
        match self.method {
            MethodArg::Exact => "exact".into(),
            MethodArg::Trotter => format!("trotter (order {}, {} steps)", self.order, self.steps),
            MethodArg::Qdrift => format!("qdrift ({} samples)", self.samples),
        }
    }
}

/// Install the stderr log subscriber for the given `-v` count.
pub fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Write `lattice` as Graphviz (`.dot`) or JSON (`.json`).
pub fn export_lattice(lattice: &Lattice, path: &Path) -> Result<()> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let contents = match ext.to_lowercase().as_str() {
        "dot" | "gv" => lattice.to_dot(),
        "json" => serde_json::to_string_pretty(&lattice.layout())?,
        _ => anyhow::bail!(
            "Unknown lattice export format for {}: expected .dot or .json",
            path.display()
        ),
    };
    fs::write(path, contents)
        .with_context(|| format!("Failed to write lattice: {}", path.display()))?;
    Ok(())
}

/// Run `scenario` on the simulator and build its report.
pub fn run_scenario(scenario: &Scenario, args: &RunArgs) -> Result<Report> {
    let backend = SimulatorBackend::from_config(args.backend_config())?;
    if let ValidationResult::Invalid { reasons } = backend.validate(&scenario.request)? {
        anyhow::bail!("Request rejected by {}: {}", backend.name(), reasons.join("; "));
    }
    let summary = scenario.summary()?;

    let spinner = if args.format == OutputFormat::Table {
        spinner(&format!("Evolving {} for T = {}", scenario.name, summary.total_time))
    } else {
        ProgressBar::hidden()
    };
    let result = backend.run(&scenario.request);
    spinner.finish_and_clear();
    let result = result.with_context(|| format!("Evolution of {} failed", scenario.name))?;

    info!(
        scenario = scenario.name,
        backend = %result.backend,
        outcomes = result.distribution.len(),
        "evolution finished"
    );
    Report::new(summary, args.method_label(), result)
}

/// Full demo flow: optional export, run, print.
pub fn execute(scenario: &Scenario, args: &RunArgs) -> Result<()> {
    if let Some(path) = &args.export_lattice {
        export_lattice(&scenario.lattice, path)?;
        if args.format == OutputFormat::Table {
            print_info(&format!("Lattice written to {}", path.display()));
        }
    }

    let report = run_scenario(scenario, args)?;
    match args.format {
        OutputFormat::Table => report.print_text(),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }
    Ok(())
}

/// Load the scenario config, then either dump it or run the demo.
pub fn run_demo<T, F>(args: &RunArgs, title: &str, build: F) -> Result<()>
where
    T: DeserializeOwned + Serialize + Default,
    F: FnOnce(&T) -> Result<Scenario>,
{
    let config: T = load_config(args.config.as_deref())?;
    if args.print_config {
        print!("{}", to_yaml(&config)?);
        return Ok(());
    }
    let scenario = build(&config)?;
    if args.format == OutputFormat::Table {
        print_header(title);
    }
    execute(&scenario, args)
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        run: RunArgs,
    }

    fn parse(args: &[&str]) -> RunArgs {
        TestCli::parse_from(std::iter::once("demo").chain(args.iter().copied())).run
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        assert_eq!(args.method, MethodArg::Exact);
        assert_eq!(args.format, OutputFormat::Table);
        assert!(args.shots.is_none());
        let config = args.backend_config();
        assert_eq!(config.get_str("method").unwrap(), Some("exact"));
        assert_eq!(config.get_u64("max_qubits").unwrap(), Some(20));
        assert_eq!(config.get_u64("steps").unwrap(), None);
    }

    #[test]
    fn test_trotter_flags_reach_backend_config() {
        let args = parse(&["-m", "trotter", "--order", "1", "--steps", "7", "-s", "64", "--seed", "9"]);
        let config = args.backend_config();
        assert_eq!(config.get_str("method").unwrap(), Some("trotter"));
        assert_eq!(config.get_u64("order").unwrap(), Some(1));
        assert_eq!(config.get_u64("steps").unwrap(), Some(7));
        assert_eq!(config.get_u64("shots").unwrap(), Some(64));
        assert_eq!(config.get_u64("seed").unwrap(), Some(9));
    }

    #[test]
    fn test_unknown_export_extension() {
        let path = std::env::temp_dir().join("qlat-lattice.txt");
        assert!(export_lattice(&Lattice::chain(2), &path).is_err());
    }
}
