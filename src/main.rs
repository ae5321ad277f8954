use anyhow::{Context, Result};
use clap::Parser;
use krokets::simulation::driver::Driver;
use krokets::simulation::environment::Environment;
use krokets::simulation::params::Params;
use log::{info, warn};

/// Headless run of the rocket evolution.
#[derive(Debug, Parser)]
#[command(name = "krokets", version, about)]
struct Args {
    /// JSON parameter file; defaults are used when omitted.
    #[arg(long)]
    params: Option<String>,

    /// Number of generations to run.
    #[arg(long, default_value_t = 20)]
    generations: u32,

    /// RNG seed, overrides the parameter file.
    #[arg(long)]
    seed: Option<u64>,

    /// Arena width.
    #[arg(long, default_value_t = 800.0)]
    width: f32,

    /// Arena height.
    #[arg(long, default_value_t = 600.0)]
    height: f32,

    /// Write the fitness history to this JSON file when done.
    #[arg(long)]
    report: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let mut params = match &args.params {
        Some(path) => Params::load_from_file(path)
            .with_context(|| format!("failed to load parameters from {path}"))?,
        None => Params::default(),
    };
    if args.seed.is_some() {
        params.seed = args.seed;
    }

    let environment = Environment::for_arena(args.width, args.height);
    let mut driver = Driver::new(params)?;

    info!(
        "Starting rocket evolution: {} rockets, {} genes, {} generations",
        driver.params().pool_size,
        driver.params().genome_length,
        args.generations
    );

    while driver.generation() < args.generations {
        if let Some(report) = driver.tick(&environment)? {
            if report.degenerate {
                warn!("generation {} had zero total fitness", report.generation);
            }
        }
    }

    let history = driver.history();
    info!(
        "Finished: best raw fitness {:.2}, {:.2} rockets reached the target per generation",
        history.best_raw().unwrap_or(0.0),
        history.average_completed()
    );

    if let Some(path) = &args.report {
        let json = serde_json::to_string_pretty(history)?;
        std::fs::write(path, json).with_context(|| format!("failed to write report to {path}"))?;
        info!("Wrote fitness history to {path}");
    }

    Ok(())
}
