//! Source evaluation on a uniform (x, y, η_s) grid at fixed τ.
//!
//! Cells are independent, so the parallel sampler (feature `parallel`)
//! distributes them over rayon workers with no synchronization beyond the
//! shared read-only source.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::traits::HydroSourceTerm;
use crate::config::SourceConfig;
use crate::types::{FourVector, SpacetimePoint};

/// Uniform grid centred on x = y = η_s = 0.
///
/// Cell (i, j, k) has centre
/// x_i = (i − (nx − 1)/2)·Δx, and likewise for y and η_s.
/// Storage order is η fastest, then y, then x.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SourceGrid {
    /// Cells in x
    pub nx: usize,
    /// Cells in y
    pub ny: usize,
    /// Cells in η_s
    pub neta: usize,
    /// Spacing in x (fm)
    pub dx: f64,
    /// Spacing in y (fm)
    pub dy: f64,
    /// Spacing in η_s
    pub deta: f64,
}

impl SourceGrid {
    /// Create a grid.
    pub fn new(nx: usize, ny: usize, neta: usize, dx: f64, dy: f64, deta: f64) -> Self {
        Self {
            nx,
            ny,
            neta,
            dx,
            dy,
            deta,
        }
    }

    /// Grid with the configured cell sizes.
    pub fn from_config(config: &SourceConfig, nx: usize, ny: usize, neta: usize) -> Self {
        Self::new(nx, ny, neta, config.delta_x, config.delta_y, config.delta_eta)
    }

    /// Total number of cells.
    pub fn n_cells(&self) -> usize {
        self.nx * self.ny * self.neta
    }

    /// Coordinate volume Δx·Δy·Δη of one cell.
    pub fn cell_volume(&self) -> f64 {
        self.dx * self.dy * self.deta
    }

    /// Flat index of cell (i, j, k).
    #[inline]
    pub fn index(&self, i: usize, j: usize, k: usize) -> usize {
        (i * self.ny + j) * self.neta + k
    }

    /// Centre (x, y, η_s) of the cell with flat index `idx`.
    #[inline]
    pub fn cell_center(&self, idx: usize) -> (f64, f64, f64) {
        let k = idx % self.neta;
        let j = (idx / self.neta) % self.ny;
        let i = idx / (self.neta * self.ny);
        (
            centred(i, self.nx) * self.dx,
            centred(j, self.ny) * self.dy,
            centred(k, self.neta) * self.deta,
        )
    }

    /// Spacetime point of cell `idx` at proper time `tau`.
    #[inline]
    pub fn point(&self, idx: usize, tau: f64) -> SpacetimePoint {
        let (x, y, eta_s) = self.cell_center(idx);
        SpacetimePoint::new(tau, x, y, eta_s)
    }
}

#[inline]
fn centred(i: usize, n: usize) -> f64 {
    i as f64 - (n as f64 - 1.0) / 2.0
}

/// Source values on every cell of a grid at one τ.
#[derive(Clone, Debug)]
pub struct GridSample {
    /// Proper time of the sample (fm)
    pub tau: f64,
    /// Grid layout
    pub grid: SourceGrid,
    /// J^μ per cell
    pub j_mu: Vec<FourVector>,
    /// ρ_B per cell
    pub rho_b: Vec<f64>,
}

impl GridSample {
    /// Energy deposition rate Σ J^τ · τ ΔV over the grid.
    pub fn total_energy(&self) -> f64 {
        let weight = self.tau * self.grid.cell_volume();
        self.j_mu.iter().map(|j| j.time()).sum::<f64>() * weight
    }

    /// Baryon deposition rate Σ ρ_B · τ ΔV over the grid.
    pub fn total_baryon(&self) -> f64 {
        let weight = self.tau * self.grid.cell_volume();
        self.rho_b.iter().sum::<f64>() * weight
    }

    /// Largest |J^μ| component over the grid.
    pub fn max_abs_current(&self) -> f64 {
        self.j_mu.iter().map(FourVector::max_abs).fold(0.0, f64::max)
    }
}

/// Evaluate both sources on every cell, fluid at rest.
pub fn sample_grid<S: HydroSourceTerm + ?Sized>(
    source: &S,
    grid: &SourceGrid,
    tau: f64,
) -> GridSample {
    let flow = FourVector::rest_frame();
    let (j_mu, rho_b) = (0..grid.n_cells())
        .map(|idx| {
            let p = grid.point(idx, tau);
            (source.energy_momentum(&p, &flow), source.baryon_density(&p))
        })
        .unzip();

    GridSample {
        tau,
        grid: *grid,
        j_mu,
        rho_b,
    }
}

/// Parallel version of [`sample_grid`] using rayon.
///
/// Produces the same values as the sequential sampler.
#[cfg(feature = "parallel")]
pub fn sample_grid_parallel<S: HydroSourceTerm + ?Sized>(
    source: &S,
    grid: &SourceGrid,
    tau: f64,
) -> GridSample {
    let flow = FourVector::rest_frame();
    let (j_mu, rho_b) = (0..grid.n_cells())
        .into_par_iter()
        .map(|idx| {
            let p = grid.point(idx, tau);
            (source.energy_momentum(&p, &flow), source.baryon_density(&p))
        })
        .unzip();

    GridSample {
        tau,
        grid: *grid,
        j_mu,
        rho_b,
    }
}
