//! Source terms for relativistic hydrodynamics.
//!
//! Energy-momentum and baryon number deposited by discrete emitters enter
//! the equations of motion as
//!
//! ∂_μ T^{μν} = J^ν,   ∂_μ N^μ = ρ_B
//!
//! # Submodules
//!
//! - [`traits`]: The [`HydroSourceTerm`] interface consumed by the solver
//! - [`emitters`]: QCD strings and partons
//! - [`kernel`]: Gaussian smearing with cutoffs
//! - [`hydro_source`]: Source built from emitter files
//! - [`pre_integrate`]: Sources accumulated before the start of hydrodynamics
//! - [`grid`]: Evaluation on a uniform grid

pub mod emitters;
pub mod grid;
pub mod hydro_source;
pub mod kernel;
pub mod pre_integrate;
pub mod traits;

pub use emitters::{Emitters, Parton, QcdString};
#[cfg(feature = "parallel")]
pub use grid::sample_grid_parallel;
pub use grid::{GridSample, SourceGrid, sample_grid};
pub use hydro_source::{HydroSource, SourceError};
pub use kernel::{BoxOffsets, GaussianKernel};
pub use pre_integrate::{baryon_density_before, energy_momentum_before};
pub use traits::HydroSourceTerm;
