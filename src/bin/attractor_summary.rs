//! Attractor Summary: Simulate One Catalog Entry from the Command Line
//!
//! Runs the full pipeline (resolve → integrate → density → frames) for a
//! single attractor and prints what a viewer would receive: the resolved
//! parameters, the trajectory's extent, solver work, the density range
//! and the animation framing.
//!
//! ```text
//! attractor_summary --attractor Rossler --set c=9.0 --seed 7
//! attractor_summary --list
//! ```

use anyhow::{bail, Context};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use strange_attractors::{
    definitions,
    estimate_density_with_rng,
    get_definition,
    integrate_with_stats,
    make_frames,
    resolve,
    SolverConfig,
    DEFAULT_DENSITY_SAMPLE_SIZE,
    DEFAULT_MAX_FRAMES,
};

#[derive(Parser, Debug)]
#[command(name = "attractor_summary")]
#[command(about = "Simulate a strange attractor and summarize the trajectory", long_about = None)]
struct Args {
    /// Catalog key of the attractor
    #[arg(long, default_value = "Lorenz")]
    attractor: String,

    /// Parameter override as name=value (repeatable)
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_override)]
    overrides: Vec<(String, f64)>,

    /// Upper bound on animation frames
    #[arg(long, default_value_t = DEFAULT_MAX_FRAMES)]
    frames: usize,

    /// Number of points used to fit the density model
    #[arg(long, default_value_t = DEFAULT_DENSITY_SAMPLE_SIZE)]
    density_sample: usize,

    /// Seed for density subsampling (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Relative and absolute solver tolerance
    #[arg(long)]
    tol: Option<f64>,

    /// List the catalog and exit
    #[arg(long, default_value_t = false)]
    list: bool,
}

fn parse_override(s: &str) -> Result<(String, f64), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got {:?}", s))?;
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|e| format!("invalid value for {}: {}", name, e))?;
    Ok((name.trim().to_string(), value))
}

fn print_catalog() {
    println!("Available attractors:");
    for def in definitions() {
        let params: Vec<String> = def
            .params
            .iter()
            .map(|p| format!("{}={} [{}, {}]", p.name, p.default, p.min, p.max))
            .collect();
        println!("  {:8} {}", def.name, def.title);
        println!("           {}", params.join(", "));
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.list {
        print_catalog();
        return Ok(());
    }

    let definition = get_definition(&args.attractor)?;
    let overrides = args.overrides.iter().map(|(name, value)| (name.as_str(), *value));
    let resolved = resolve(definition, overrides)?;

    let mut config = SolverConfig::default();
    if let Some(tol) = args.tol {
        if !(tol > 0.0) {
            bail!("--tol must be positive, got {}", tol);
        }
        config = config.with_tolerances(tol, tol);
    }

    println!("═══════════════════════════════════════════════════════════════");
    println!("  {}", definition.title);
    println!("═══════════════════════════════════════════════════════════════\n");

    println!("Parameters:");
    for (name, value) in resolved.iter() {
        println!("  {:6} = {}", name, value);
    }

    let domain = definition.time_domain;
    println!("\nTime Domain:");
    print!("  t ∈ [{}, {}], {} samples", domain.t_min, domain.t_max, domain.sample_count);
    match domain.spacing() {
        Some(dt) => println!(" (Δt = {:.5})", dt),
        None => println!(),
    }
    println!("  Initial state = {:?}", definition.initial_state);

    let (trajectory, stats) = integrate_with_stats(definition, &resolved, &config)
        .with_context(|| format!("simulating {}", definition.name))?;

    println!("\nSolver:");
    println!("  Accepted steps  = {}", stats.accepted_steps);
    println!("  Rejected steps  = {}", stats.rejected_steps);
    println!("  Evaluations     = {}", stats.evaluations);

    println!("\nTrajectory:");
    if let Some(bounds) = trajectory.bounds() {
        for (axis, (lo, hi)) in ["x", "y", "z"].iter().zip(bounds) {
            println!("  {} ∈ [{:9.4}, {:9.4}]", axis, lo, hi);
        }
    }
    if let Some(last) = trajectory.last() {
        println!("  Final state = [{:.4}, {:.4}, {:.4}]", last[0], last[1], last[2]);
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    match estimate_density_with_rng(&trajectory, args.density_sample, &mut rng) {
        Ok(density) => {
            let values = density.values();
            let min = values.iter().copied().fold(f64::INFINITY, f64::min);
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let mean = values.mean().unwrap_or(0.0);
            println!("\nDensity ({} fit points):", args.density_sample.min(trajectory.len()));
            println!("  min = {:.3e}, mean = {:.3e}, max = {:.3e}", min, mean, max);
        }
        Err(e) => println!("\nDensity unavailable: {}", e),
    }

    let frames = make_frames(&trajectory, args.frames);
    println!("\nAnimation:");
    println!("  {} frames, {} samples per frame", frames.len(), frames.step());

    Ok(())
}
