mod config;
mod scenario;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::config::QuickConfig;
use crate::scenario::{Scenario, ScenarioKind};

#[derive(Parser)]
#[command(name = "quickmove-cli", about = "CLI tool for quickmove character movement")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Yaml,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Print the default configuration
    Config {
        #[arg(short, long, value_enum, default_value = "yaml")]
        format: Format,
    },
    /// Run a scripted movement scenario
    Simulate {
        /// Scenario name: walk, wall-climb, double-jump or ledge
        #[arg(short, long, default_value = "walk")]
        scenario: ScenarioKind,
        /// YAML or JSON config file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Simulated duration in seconds
        #[arg(long, default_value = "4")]
        seconds: f32,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("quickmove-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", quickmove_common::crate_info());
            println!("kernel: {}", quickmove_kernel::crate_info());
            println!("input: {}", quickmove_input::crate_info());
            println!("present: {}", quickmove_present::crate_info());
            let names: Vec<_> = ScenarioKind::ALL.iter().map(|k| k.name()).collect();
            println!("scenarios: {}", names.join(", "));
        }
        Commands::Config { format } => {
            let config = QuickConfig::default();
            let text = match format {
                Format::Yaml => serde_yaml::to_string(&config)?,
                Format::Json => serde_json::to_string_pretty(&config)?,
            };
            println!("{text}");
        }
        Commands::Simulate {
            scenario,
            config,
            seconds,
        } => {
            let config = match config {
                Some(path) => QuickConfig::load(&path)
                    .with_context(|| format!("loading config from {}", path.display()))?,
                None => QuickConfig::default(),
            };
            let built = Scenario::build(scenario, seconds, config.simulation.frame_dt)?;
            println!(
                "Scenario: {} ({seconds}s, fixed_dt={}s)",
                scenario.name(),
                config.simulation.fixed_dt
            );

            let report = scenario::run(&config, built);

            for (tick, old, new) in &report.medium_changes {
                println!("  tick {tick:>4}: {old} -> {new}");
            }
            let p = report.final_position;
            println!(
                "Result: frames={}, ticks={}, medium={}, position=({:.2}, {:.2}, {:.2})",
                report.frames, report.ticks, report.final_medium, p.x, p.y, p.z
            );
            let visited: Vec<_> = report.visited.iter().copied().collect();
            println!("Visited: {}", visited.join(", "));
            println!(
                "Jumps: {} performed, {} refused",
                report.jumps, report.rejected_jumps
            );
            println!("Animator:");
            print!("{}", report.animator.summary());
        }
    }

    Ok(())
}
