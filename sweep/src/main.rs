//! # vector-transforms-sweep
//!
//! Host-side check of the Clarke/Park transforms: sweeps one electrical
//! revolution, reports worst-case round-trip errors and times each transform.
//!
//! ```bash
//! vector-transforms-sweep --steps 720 --amplitude 24 -v
//! ```

mod benchmark;
mod sweep;

use anyhow::{bail, ensure, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

const DEFAULT_STEPS: u32 = 360;
const DEFAULT_AMPLITUDE: f32 = 1.0;
const DEFAULT_TOLERANCE: f32 = 1e-5;
const DEFAULT_ITERATIONS: u32 = 1_000_000;

/// Sweep the Clarke/Park transforms over one electrical revolution
#[derive(Parser, Debug)]
#[command(name = "vector-transforms-sweep")]
#[command(version)]
#[command(about = "Round-trip error sweep and timing for Clarke/Park transforms")]
struct Args {
    /// Number of evenly spaced electrical angles
    #[arg(short, long, default_value_t = DEFAULT_STEPS)]
    steps: u32,

    /// Peak phase amplitude used to build the test vectors
    #[arg(short, long, default_value_t = DEFAULT_AMPLITUDE, allow_negative_numbers = true)]
    amplitude: f32,

    /// Largest acceptable error, relative to the amplitude
    #[arg(short, long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: f32,

    /// Calls per transform for the timing run (0 skips timing)
    #[arg(short, long, default_value_t = DEFAULT_ITERATIONS)]
    iterations: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_tracing(&args);
    validate(&args)?;

    info!("vector-transforms-sweep v{}", env!("CARGO_PKG_VERSION"));

    let report = sweep::run_sweep(args.steps, args.amplitude);
    info!(
        "Sweep results ({} steps, amplitude {}):",
        report.steps, args.amplitude
    );
    info!("  park round trip:           {:e}", report.park_round_trip);
    info!("  park magnitude drift:      {:e}", report.park_magnitude_drift);
    info!("  reduced clarke round trip: {:e}", report.clarke_reduced_round_trip);
    info!("  full clarke round trip:    {:e}", report.clarke_full_round_trip);
    info!("  full vs reduced clarke:    {:e}", report.clarke_agreement);

    if args.iterations > 0 {
        let bench = benchmark::run_benchmark(args.iterations);
        info!("Benchmark results ({} iterations):", bench.iterations);
        for entry in &bench.entries {
            info!("  {:<24} {:.2} ns/call", entry.name, entry.ns_per_call);
        }
    }

    let worst = report.worst();
    if worst > args.tolerance {
        bail!(
            "worst relative error {:e} exceeds tolerance {:e}",
            worst,
            args.tolerance
        );
    }

    info!("All transforms within tolerance ({:e})", args.tolerance);
    Ok(())
}

fn setup_tracing(args: &Args) {
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn validate(args: &Args) -> Result<()> {
    ensure!(args.steps > 0, "--steps must be at least 1");
    ensure!(
        args.amplitude.is_finite() && args.amplitude != 0.0,
        "--amplitude must be finite and non-zero, got {}",
        args.amplitude
    );
    ensure!(
        args.tolerance.is_finite() && args.tolerance > 0.0,
        "--tolerance must be positive, got {}",
        args.tolerance
    );
    Ok(())
}
