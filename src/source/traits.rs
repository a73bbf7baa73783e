//! Interface between source terms and the hydrodynamic solver.

use crate::types::{FourVector, SpacetimePoint};

/// Energy-momentum and baryon sources of the hydrodynamic equations:
///
/// ∂_μ T^{μν} = J^ν,   ∂_μ N^μ = ρ_B
///
/// Evaluated once per grid cell per time step, so implementations must be
/// thread-safe (`Send + Sync`) for parallel evaluation.
pub trait HydroSourceTerm: Send + Sync {
    /// Energy-momentum source J^μ (fm⁻⁵) at `point`, given the local flow.
    fn energy_momentum(&self, point: &SpacetimePoint, flow: &FourVector) -> FourVector;

    /// Net baryon source ρ_B (fm⁻⁴) at `point`.
    fn baryon_density(&self, point: &SpacetimePoint) -> f64;

    /// Name of this source term for logging.
    fn name(&self) -> &'static str;
}
