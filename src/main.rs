//! # mccabe
//!
//! Command-line McCabe-Thiele stage calculator.
//!
//! ## Usage
//!
//! ```bash
//! # Interactive: prompts for every parameter
//! mccabe
//!
//! # Non-interactive, save the diagram and the staircase
//! mccabe -a 2.5 -r 2 -q 1 -f 0.5 -b 0.05 -d 0.95 --save --csv stages.csv
//!
//! # JSON logs, debug level
//! MCCABE_LOG_FORMAT=json RUST_LOG=mccabe_rs=debug mccabe
//! ```
//!
//! Exit status: 0 on convergence, 2 when the step-off hit the iteration cap,
//! 1 on any other error.

mod cli;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    // MCCABE_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("MCCABE_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "mccabe=info,mccabe_rs=info".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn main() {
    init_tracing();

    let cli = cli::Cli::parse();

    match cli::execute(cli) {
        Ok(cli::Outcome::Converged) => {}
        Ok(cli::Outcome::NonConvergent) => std::process::exit(2),
        Err(e) => {
            tracing::error!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
