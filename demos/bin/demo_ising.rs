//! Ising Grid Demo
//!
//! Evolves |00000000⟩ under H = Σ −J ZᵢZⱼ + Σ −h Xᵢ on a 2×2×2 grid for T = 1.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::Parser;

use qlat_demos::cli::{RunArgs, init_tracing, run_demo};
use qlat_demos::config::IsingConfig;
use qlat_demos::{exit_with_error, scenarios};

#[derive(Parser, Debug)]
#[command(name = "demo-ising")]
#[command(version, about = "Evolve the transverse-field Ising model on a 2x2x2 grid")]
struct Cli {
    #[command(flatten)]
    run: RunArgs,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.run.verbose);

    if let Err(e) = run_demo::<IsingConfig, _>(
        &cli.run,
        "Transverse-Field Ising Model",
        scenarios::ising,
    ) {
        exit_with_error(&e);
    }
}
