//! Two-Site Model Demo
//!
//! H = −J(X₁ + X₂) + U·Z₁Z₂ with J = 4, U = 3, evolved for T = 10.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::Parser;

use qlat_demos::cli::{RunArgs, init_tracing, run_demo};
use qlat_demos::config::TwoSiteConfig;
use qlat_demos::{exit_with_error, scenarios};

#[derive(Parser, Debug)]
#[command(name = "demo-two-site")]
#[command(version, about = "Evolve two coupled spins under H = -J(X1 + X2) + U Z1 Z2")]
struct Cli {
    #[command(flatten)]
    run: RunArgs,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.run.verbose);

    if let Err(e) = run_demo::<TwoSiteConfig, _>(
        &cli.run,
        "Two-Site Model",
        scenarios::two_site,
    ) {
        exit_with_error(&e);
    }
}
