//! # McCabe CLI Module
//!
//! Command-line front end: gathers parameters (flags or interactive prompts),
//! runs the construction, reports the stage count, and optionally renders
//! the diagram and exports the staircase.

mod prompt;

use std::error::Error;
use std::io;
use std::path::PathBuf;

use clap::Parser;
use mccabe_rs::output::{export_staircase_csv, plot_mccabe_thiele, CsvConfig, CsvMetadata, DEFAULT_DIAGRAM_PATH};
use mccabe_rs::physics::ColumnParameters;
use mccabe_rs::solver::{McCabeThiele, StepperConfiguration, MAX_ITERATIONS};
use mccabe_rs::EngineError;

use prompt::{ask_save, read_parameters, PresetParameters};

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// McCabe-Thiele stage calculator
///
/// Counts the theoretical stages of a binary distillation column.
/// Parameters not given as flags are asked for interactively.
#[derive(Parser, Debug)]
#[command(name = "mccabe")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Relative volatility (alpha > 1)
    #[arg(short, long)]
    pub alpha: Option<f64>,

    /// Molar reflux ratio (R >= 0)
    #[arg(short, long)]
    pub reflux_ratio: Option<f64>,

    /// Feed thermal condition q, in [0, 2] (1 = saturated liquid)
    #[arg(short = 'q', long)]
    pub feed_quality: Option<f64>,

    /// Feed composition zf
    #[arg(short = 'f', long)]
    pub feed_composition: Option<f64>,

    /// Bottoms composition xb
    #[arg(short = 'b', long)]
    pub bottoms_composition: Option<f64>,

    /// Distillate composition xd
    #[arg(short = 'd', long)]
    pub distillate_composition: Option<f64>,

    /// Diagram path (PNG, or SVG by extension)
    #[arg(short, long, default_value = DEFAULT_DIAGRAM_PATH)]
    pub output: PathBuf,

    /// Save the diagram without asking
    #[arg(long, conflicts_with = "no_save")]
    pub save: bool,

    /// Never save the diagram
    #[arg(long)]
    pub no_save: bool,

    /// Also export the staircase as CSV
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Iteration cap of the step-off
    #[arg(long, default_value_t = MAX_ITERATIONS)]
    pub max_iterations: usize,

    /// Interactive attempts before giving up
    #[arg(long, default_value_t = 5)]
    pub max_attempts: usize,

    /// Suppress the input echo
    #[arg(short = 'Q', long)]
    pub quiet: bool,
}

impl Cli {
    fn preset(&self) -> PresetParameters {
        PresetParameters([
            self.alpha,
            self.reflux_ratio,
            self.feed_quality,
            self.feed_composition,
            self.bottoms_composition,
            self.distillate_composition,
        ])
    }
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Bottoms composition reached
    Converged,

    /// Iteration cap exhausted
    NonConvergent,
}

// =============================================================================
// EXECUTION
// =============================================================================

fn gather_parameters(cli: &Cli) -> Result<ColumnParameters, Box<dyn Error>> {
    let preset = cli.preset();

    // Fully specified on the command line: no one to re-prompt
    if let Some(params) = preset.complete() {
        params.validate()?;
        return Ok(params);
    }

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut writer = io::stdout();
    Ok(read_parameters(&mut reader, &mut writer, &preset, cli.max_attempts)?)
}

fn path_str(path: &std::path::Path) -> Result<&str, Box<dyn Error>> {
    path.to_str()
        .ok_or_else(|| format!("Path is not valid UTF-8: {}", path.display()).into())
}

/// Run one calculation
pub fn execute(cli: Cli) -> Result<Outcome, Box<dyn Error>> {
    let params = gather_parameters(&cli)?;

    if !cli.quiet {
        println!("\n Inputs received successfully:");
        println!("{}", params);
    }

    let config = StepperConfiguration::default().max_iterations(cli.max_iterations);
    let construction = McCabeThiele::build(&params)?;

    let (result, outcome) = match construction.step_off(&config) {
        Ok(result) => (result, Outcome::Converged),
        Err(EngineError::NonConvergent { partial }) => (*partial, Outcome::NonConvergent),
        Err(e) => return Err(e.into()),
    };

    tracing::info!(
        stages = result.stage_count,
        feed_stage = ?result.feed_stage,
        converged = result.reboiler_reached,
        "construction complete"
    );

    let save = if cli.save {
        true
    } else if cli.no_save {
        false
    } else {
        let stdin = io::stdin();
        ask_save(&mut stdin.lock(), &mut io::stdout())?
    };

    if save {
        plot_mccabe_thiele(&construction, &result, path_str(&cli.output)?, None)?;
        println!("Diagram saved to {}", cli.output.display());
    }

    if let Some(csv_path) = &cli.csv {
        let csv_config = CsvConfig::default().with_metadata(CsvMetadata::from_parameters(&params));
        export_staircase_csv(&result, path_str(csv_path)?, Some(&csv_config))?;
        println!("Staircase exported to {}", csv_path.display());
    }

    match outcome {
        Outcome::Converged => {
            println!("Number of stages required: {}", result.stage_count);
            if let Some(feed_stage) = result.feed_stage {
                println!("Optimal feed stage: {}", feed_stage);
            }
        }
        Outcome::NonConvergent => {
            println!(
                "Bottoms composition not reached after {} stages (pinch point?). No stage count reported.",
                result.stage_count
            );
        }
    }

    Ok(outcome)
}
