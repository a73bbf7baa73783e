//! Load an emitter list and report the sources it deposits on a grid.
//!
//! Usage:
//!
//! ```text
//! hydro-source-probe 12 <tau> <strings-file> <partons-file> [dump-mode]
//! hydro-source-probe 30 <tau> <ampt-file>
//! ```
//!
//! Set `RUST_LOG=debug` to see dropped parton rows.

use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use hydro_source::{
    HydroSource, InitialProfile, SourceConfig, SourceGrid, SpacetimePoint, StringDumpMode,
    sample_grid,
};

const USAGE: &str = "usage: hydro-source-probe <profile: 12|30> <tau> <file> [partons-file] [dump-mode]";

fn parse_config(args: &[String]) -> Result<(SourceConfig, f64)> {
    if args.len() < 3 {
        bail!("{USAGE}");
    }
    let code: i32 = args[0].parse().context("profile code must be an integer")?;
    let profile = InitialProfile::try_from(code)?;
    let tau: f64 = args[1].parse().context("tau must be a number")?;

    let config = match profile {
        InitialProfile::StringModel => {
            let partons = args.get(3).context("string model needs a partons file")?;
            let dump_mode = match args.get(4) {
                Some(mode) => StringDumpMode::from(
                    mode.parse::<i32>().context("dump mode must be an integer")?,
                ),
                None => StringDumpMode::default(),
            };
            SourceConfig::new(profile)
                .with_string_files(&args[2], partons)
                .with_string_dump_mode(dump_mode)
        }
        InitialProfile::Ampt => SourceConfig::new(profile).with_ampt_file(&args[2]),
    };
    Ok((config, tau))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (config, tau) = match parse_config(&args) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("{e:#}");
            return ExitCode::from(2);
        }
    };

    // Without emitters there is nothing meaningful to deposit.
    let source = match HydroSource::from_config(&config) {
        Ok(source) => source,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let grid = SourceGrid::from_config(&config, 101, 101, 61);
    let sample = sample_grid(&source, &grid, tau);
    let centre = SpacetimePoint::new(tau, 0.0, 0.0, 0.0);

    info!(
        tau,
        energy = sample.total_energy(),
        baryon = sample.total_baryon(),
        max_current = sample.max_abs_current(),
        "grid totals"
    );
    println!("tau = {tau:.3} fm");
    println!("dE/dtau (grid)      = {:.6e}", sample.total_energy());
    println!("dB/dtau (grid)      = {:.6e}", sample.total_baryon());
    println!(
        "J^tau before (0,0,0) = {:.6e}",
        source.energy_momentum_before(&centre).time()
    );
    println!(
        "rho_B before (0,0,0) = {:.6e}",
        source.baryon_density_before(&centre)
    );
    ExitCode::SUCCESS
}
