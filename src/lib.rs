//! # hydro-source
//!
//! Energy-momentum and baryon source terms for relativistic hydrodynamics,
//! built from discrete emitters of an initial-state model.
//!
//! This crate provides:
//! - Emitter ingestion (QCD strings with baryon partons, or AMPT partons)
//! - Gaussian smearing in (τ, x, y, η_s) with cutoff pruning
//! - Instantaneous sources J^μ and ρ_B at any grid point
//! - Causal pre-integration of sources emitted before hydrodynamics starts
//! - Sequential and parallel (feature `parallel`) grid sampling

pub mod config;
pub mod io;
pub mod source;
pub mod types;

pub use config::{ConfigError, InitialProfile, SmearingWidths, SourceConfig, StringDumpMode};
pub use io::{EmitterFileError, EmitterList};
#[cfg(feature = "parallel")]
pub use source::sample_grid_parallel;
pub use source::{
    Emitters, GridSample, HydroSource, HydroSourceTerm, Parton, QcdString, SourceError,
    SourceGrid, baryon_density_before, energy_momentum_before, sample_grid,
};
pub use types::{FourVector, SpacetimePoint};
