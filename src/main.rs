use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use flock_engine::{shape, FlockConfig, FlockSimulation};
use log::{debug, info, trace, warn};
use std::path::PathBuf;
use std::time::Instant;

/// Headless driver: runs the flock for the configured duration and logs its state.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the config.toml file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Number of steps to run (defaults to total_time_s / dt_s from the config)
    #[arg(long)]
    steps: Option<u32>,

    /// Frame time in seconds, overriding timing.dt_s
    #[arg(long)]
    dt: Option<f32>,

    /// Seed for initial placement, overriding initial_conditions.seed
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    // Initialize the logger, `RUST_LOG` takes precedence
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    run_with_args(args)
}

fn run_with_args(args: Args) -> Result<()> {
    info!("Starting Flock Engine...");

    // --- Load Configuration ---
    let mut config = if args.config.exists() {
        info!("Loading configuration from {}", args.config.display());
        FlockConfig::load(&args.config)?
    } else {
        warn!("Config file '{}' not found, using built-in defaults.", args.config.display());
        FlockConfig::default()
    };
    if let Some(dt) = args.dt {
        config.timing.dt_s = dt;
    }
    if let Some(seed) = args.seed {
        config.initial_conditions.seed = seed;
    }
    config.validate()?;

    // --- Initialize Simulation ---
    let mut sim = FlockSimulation::from_config(&config)?;
    info!("Flock initialized with {} agents.", sim.len());
    debug!("Behavior parameters: {:#?}", sim.params());

    let dt = config.timing.dt_s;
    let total_steps = args.steps.unwrap_or_else(|| config.total_steps());
    let record_interval_steps = config.record_interval_steps();
    let record = config.output.record_snapshots;
    let with_agents = config.output.agents_in_snapshot;
    info!(
        "Running {} steps of {:.4} s, snapshot every {} steps.",
        total_steps, dt, record_interval_steps
    );

    if record {
        sim.record_snapshot(with_agents);
    }

    // --- Simulation Loop ---
    let start_time = Instant::now();
    for step in 0..total_steps {
        let step_start_time = Instant::now();
        sim.step(dt);
        let step_duration = step_start_time.elapsed();

        let is_record_step = (step + 1) % record_interval_steps == 0;
        let is_last_step = step + 1 == total_steps;
        if record && (is_record_step || is_last_step) {
            let snapshot = sim.record_snapshot(with_agents);
            info!(
                "Step [{}/{}] ({:.2} s) | Mean speed: {:.3} | Polarization: {:.3} | Step Time: {:6.3} ms",
                step + 1,
                total_steps,
                snapshot.time,
                snapshot.mean_speed,
                snapshot.polarization,
                step_duration.as_secs_f64() * 1000.0
            );
        } else {
            trace!(
                "Step [{}/{}] completed in {:.3} ms",
                step + 1,
                total_steps,
                step_duration.as_secs_f64() * 1000.0
            );
        }
    }

    let total_duration = start_time.elapsed();
    info!(
        "Simulation finished in {:.3} seconds ({} steps, {:.2} simulated seconds).",
        total_duration.as_secs_f64(),
        sim.current_time_step(),
        sim.elapsed_time()
    );

    // What a renderer would place this frame
    if let Some(agent) = sim.agents().first() {
        let outline = shape::outline(agent);
        debug!(
            "Agent {} at ({:.2}, {:.2}) heading {:.3} rad, nose at ({:.2}, {:.2}).",
            agent.id(),
            agent.position().x,
            agent.position().y,
            agent.heading(),
            outline[0].x,
            outline[0].y
        );
    }

    let out_of_bounds = sim.agents().iter().filter(|a| !sim.bounds().contains(a.position())).count();
    if out_of_bounds > 0 {
        warn!("{} agents left the world in a single step faster than one wrap can correct.", out_of_bounds);
    }

    info!("Recorded {} snapshots.", sim.recorded_snapshots().len());
    info!("Simulation Complete.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_with_defaults_when_config_missing() {
        let args = Args {
            config: PathBuf::from("no-such-config.toml"),
            steps: Some(5),
            dt: Some(0.05),
            seed: Some(3),
        };
        let result = run_with_args(args);
        assert!(result.is_ok(), "Headless run failed: {:?}", result);
    }

    #[test]
    fn test_rejects_non_positive_dt_override() {
        let args = Args {
            config: PathBuf::from("no-such-config.toml"),
            steps: Some(1),
            dt: Some(0.0),
            seed: None,
        };
        assert!(run_with_args(args).is_err());
    }

    #[test]
    fn test_cli_parses_overrides() {
        let args = Args::try_parse_from(["flock-engine", "--config", "x.toml", "--steps", "10", "--seed", "9"]).unwrap();
        assert_eq!(args.config, PathBuf::from("x.toml"));
        assert_eq!(args.steps, Some(10));
        assert_eq!(args.seed, Some(9));
        assert!(args.dt.is_none());
    }
}
