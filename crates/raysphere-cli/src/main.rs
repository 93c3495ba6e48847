//! raysphere CLI - probe the ray-sphere intersection kernel
//!
//! Intersects one sphere with rays given on the command line or in a probe
//! file and prints the results as JSON.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use raysphere_intersect::{BehindOrigin, IntersectConfig, Method, Ray, Sphere};
use raysphere_math::Vector;
use std::path::PathBuf;

mod logger;
mod probe;

use logger::{init_logger, LogLevel};
use probe::{configs_for, probe_ray, ProbeFile, RayReport};

#[derive(Parser)]
#[command(name = "raysphere")]
#[command(about = "Ray-sphere intersection probe", long_about = None)]
struct Cli {
    /// Logging level (RUST_LOG overrides)
    #[arg(long, global = true, value_enum, default_value = "warn")]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Intersect a single ray with a sphere
    Trace {
        /// Sphere center as x,y,z
        #[arg(long, value_parser = parse_vector, allow_hyphen_values = true)]
        center: Vector,
        /// Sphere radius (must be > 0)
        #[arg(long, allow_negative_numbers = true)]
        radius: f64,
        /// Ray origin as x,y,z
        #[arg(long, value_parser = parse_vector, allow_hyphen_values = true)]
        origin: Vector,
        /// Ray direction as x,y,z (normalized automatically)
        #[arg(long, value_parser = parse_vector, allow_hyphen_values = true)]
        direction: Vector,
        #[command(flatten)]
        solver: SolverArgs,
    },
    /// Intersect every ray in a probe file (.toml or .json) with its sphere
    Probe {
        /// Path to the probe file
        file: PathBuf,
        #[command(flatten)]
        solver: SolverArgs,
    },
}

#[derive(clap::Args)]
struct SolverArgs {
    /// Intersection method (default: from the probe file, else geometric)
    #[arg(long, value_enum)]
    method: Option<MethodArg>,
    /// Report or reject hits behind the ray origin
    #[arg(long, value_enum)]
    behind_origin: Option<BehindOriginArg>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MethodArg {
    Algebraic,
    Geometric,
    /// Run both and report whether they agree
    Both,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum BehindOriginArg {
    Report,
    Reject,
}

impl From<BehindOriginArg> for BehindOrigin {
    fn from(arg: BehindOriginArg) -> Self {
        match arg {
            BehindOriginArg::Report => BehindOrigin::Report,
            BehindOriginArg::Reject => BehindOrigin::Reject,
        }
    }
}

impl SolverArgs {
    /// Apply command-line overrides on top of `base`.
    fn configs(&self, base: IntersectConfig) -> Vec<IntersectConfig> {
        let base = IntersectConfig {
            behind_origin: self.behind_origin.map_or(base.behind_origin, Into::into),
            ..base
        };
        match self.method {
            Some(MethodArg::Algebraic) => configs_for(base, &[Method::Algebraic]),
            Some(MethodArg::Geometric) => configs_for(base, &[Method::Geometric]),
            Some(MethodArg::Both) => configs_for(base, &Method::ALL),
            None => vec![base],
        }
    }
}

/// Parse `x,y,z` into a vector.
fn parse_vector(s: &str) -> std::result::Result<Vector, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("expected x,y,z but got {:?}", s));
    }
    let mut xyz = [0.0; 3];
    for (slot, part) in xyz.iter_mut().zip(&parts) {
        *slot = part
            .parse::<f64>()
            .map_err(|e| format!("invalid component {:?}: {}", part, e))?;
    }
    Ok(xyz.into())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_level);

    let reports = match cli.command {
        Commands::Trace {
            center,
            radius,
            origin,
            direction,
            solver,
        } => vec![run_trace(center, radius, origin, direction, &solver)?],
        Commands::Probe { file, solver } => run_probe(&ProbeFile::load(&file)?, &solver),
    };

    info!("{} ray(s) probed", reports.len());
    let json = if reports.len() == 1 {
        serde_json::to_string_pretty(&reports[0])?
    } else {
        serde_json::to_string_pretty(&reports)?
    };
    println!("{}", json);
    Ok(())
}

fn run_trace(
    center: Vector,
    radius: f64,
    origin: Vector,
    direction: Vector,
    solver: &SolverArgs,
) -> Result<RayReport> {
    let sphere = Sphere::new(center, radius).context("invalid sphere")?;
    let ray = Ray::new(origin, direction).context("invalid ray")?;
    Ok(probe_ray(&sphere, &ray, &solver.configs(IntersectConfig::default())))
}

fn run_probe(probe: &ProbeFile, solver: &SolverArgs) -> Vec<RayReport> {
    let configs = solver.configs(probe.intersect);
    probe
        .rays
        .iter()
        .map(|ray| probe_ray(&probe.sphere, ray, &configs))
        .collect()
}
