//! Hubbard Chain Demo
//!
//! Two atoms, four spin-orbital qubits. The on-site interaction ramps from
//! −5 to 5 over T = 4 and is held constant on each of the 29 grid intervals.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::Parser;

use qlat_demos::cli::{RunArgs, init_tracing, run_demo};
use qlat_demos::config::HubbardChainConfig;
use qlat_demos::{exit_with_error, scenarios};

#[derive(Parser, Debug)]
#[command(name = "demo-hubbard-chain")]
#[command(version, about = "Evolve a Hubbard chain while ramping the on-site interaction")]
struct Cli {
    #[command(flatten)]
    run: RunArgs,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.run.verbose);

    if let Err(e) = run_demo::<HubbardChainConfig, _>(
        &cli.run,
        "Hubbard Chain with Ramped Interaction",
        scenarios::hubbard_chain,
    ) {
        exit_with_error(&e);
    }
}
