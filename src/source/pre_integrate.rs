//! Causal pre-integration of sources deposited before hydrodynamics starts.
//!
//! When the fluid is initialized at τ₀ > 0, everything emitted in
//! 0 < τ' < τ₀ has to be folded into the initial condition:
//!
//! J̄(τ₀) = (1/τ₀) ∫₀^τ₀ τ' J(τ') dτ'
//!
//! The τ' factor is the Milne volume element. The integral uses the midpoint
//! rule on `floor(τ₀/Δτ)` steps of width Δτ.

use super::traits::HydroSourceTerm;
use crate::types::{FourVector, SpacetimePoint};

/// Midpoints τ_i = (i + ½)Δτ of the steps fitting in [0, τ).
fn midpoints(tau: f64, delta_tau: f64) -> impl Iterator<Item = f64> {
    let n_steps = if tau > 0.0 && delta_tau > 0.0 {
        (tau / delta_tau) as usize
    } else {
        0
    };
    (0..n_steps).map(move |i| (i as f64 + 0.5) * delta_tau)
}

/// Time-averaged energy-momentum source deposited before `point.tau`.
///
/// Each sample is evaluated with the fluid at rest. Returns zero for
/// τ ≤ 0.
pub fn energy_momentum_before<S: HydroSourceTerm + ?Sized>(
    source: &S,
    point: &SpacetimePoint,
    delta_tau: f64,
) -> FourVector {
    if point.tau <= 0.0 {
        return FourVector::zero();
    }
    let flow = FourVector::rest_frame();

    let mut j = FourVector::zero();
    for tau_local in midpoints(point.tau, delta_tau) {
        let j_step = source.energy_momentum(&point.at_tau(tau_local), &flow);
        j += j_step * (tau_local * delta_tau);
    }
    j * (1.0 / point.tau)
}

/// Time-averaged baryon source deposited before `point.tau`.
///
/// Returns zero for τ ≤ 0.
pub fn baryon_density_before<S: HydroSourceTerm + ?Sized>(
    source: &S,
    point: &SpacetimePoint,
    delta_tau: f64,
) -> f64 {
    if point.tau <= 0.0 {
        return 0.0;
    }

    let mut res = 0.0;
    for tau_local in midpoints(point.tau, delta_tau) {
        res += tau_local * source.baryon_density(&point.at_tau(tau_local)) * delta_tau;
    }
    res / point.tau
}
