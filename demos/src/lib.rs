//! qlat Demo Suite
//!
//! Three lattice systems evolved from |0…0⟩ on the local simulator:
//!
//! - **Ising grid**: transverse-field Ising model on a 2×2×2 grid
//! - **Hubbard chain**: two-atom Hubbard chain with a ramped interaction
//! - **Two-site model**: two coupled spins
//!
//! Each binary prints the full outcome distribution followed by the
//! probability of the all-zero ground state. Parameters come from
//! [`config`] defaults, optionally overridden by a YAML file.
//!
//! ```rust
//! use qlat_demos::config::TwoSiteConfig;
//! use qlat_demos::scenarios::two_site;
//!
//! let scenario = two_site(&TwoSiteConfig::default()).unwrap();
//! assert_eq!(scenario.request.n_qubits(), 2);
//! ```

pub mod cli;
pub mod config;
pub mod report;
pub mod scenarios;

use console::style;

/// Print a demo header.
pub fn print_header(title: &str) {
    println!();
    println!("{}", style("═".repeat(60)).cyan());
    println!("{}", style(format!("  {title}")).cyan().bold());
    println!("{}", style("═".repeat(60)).cyan());
}

/// Print a demo section.
pub fn print_section(title: &str) {
    println!();
    println!("{}", style(format!("▶ {title}")).green().bold());
    println!("{}", style("─".repeat(40)).dim());
}

/// Print a result line.
pub fn print_result(label: &str, value: impl std::fmt::Display) {
    println!("  {} {}", style(format!("{label}:")).dim(), value);
}

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("ℹ").blue(), message);
}

/// Print an error and exit with status 1.
pub fn exit_with_error(error: &anyhow::Error) -> ! {
    eprintln!("{} {:#}", style("Error:").red().bold(), error);
    std::process::exit(1);
}
