//! Gaussian smearing kernel in (τ, x, y, η_s).
//!
//! Each emitter is spread over the grid with
//!
//! w = (1/τ_e) exp(−Δτ²/σ_τ²) · exp(−(Δx² + Δy²)/σ_x²) · W_η
//!
//! where W_η is a pure Gaussian for partons and a plateau with Gaussian
//! tails for strings. Emitters further than `N_SIGMA_SKIP` widths away in
//! any coordinate contribute nothing and are pruned before any exponential
//! is evaluated. Normalization prefactors are applied by the caller, once
//! per sum.

use crate::config::{N_SIGMA_SKIP, SmearingWidths};
use crate::types::SpacetimePoint;

/// Offsets of a grid point from an emitter that passed the τ, x, y cutoffs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxOffsets {
    /// τ − τ_e
    pub d_tau: f64,
    /// x − x_e
    pub dx: f64,
    /// y − y_e
    pub dy: f64,
}

/// Gaussian kernel with precomputed cutoffs and inverse variances.
#[derive(Clone, Copy, Debug)]
pub struct GaussianKernel {
    widths: SmearingWidths,
    cut_tau: f64,
    cut_x: f64,
    cut_eta: f64,
    inv_tau_sq: f64,
    inv_x_sq: f64,
    inv_eta_sq: f64,
}

impl GaussianKernel {
    /// Build a kernel. Widths must already be validated as positive.
    pub fn new(widths: SmearingWidths) -> Self {
        Self {
            widths,
            cut_tau: N_SIGMA_SKIP * widths.sigma_tau,
            cut_x: N_SIGMA_SKIP * widths.sigma_x,
            cut_eta: N_SIGMA_SKIP * widths.sigma_eta,
            inv_tau_sq: 1.0 / (widths.sigma_tau * widths.sigma_tau),
            inv_x_sq: 1.0 / (widths.sigma_x * widths.sigma_x),
            inv_eta_sq: 1.0 / (widths.sigma_eta * widths.sigma_eta),
        }
    }

    /// Smearing widths.
    pub fn widths(&self) -> &SmearingWidths {
        &self.widths
    }

    /// True once every emitter formed before `tau_max` is more than
    /// `N_SIGMA_SKIP` σ_τ in the past of `tau`.
    #[inline]
    pub fn past_horizon(&self, tau: f64, tau_max: f64) -> bool {
        tau - tau_max >= self.cut_tau
    }

    /// Apply the τ, x and y cutoffs, in that order.
    #[inline]
    pub fn box_offsets(
        &self,
        point: &SpacetimePoint,
        tau_e: f64,
        x_e: f64,
        y_e: f64,
    ) -> Option<BoxOffsets> {
        let d_tau = point.tau - tau_e;
        if d_tau.abs() > self.cut_tau {
            return None;
        }
        let dx = point.x - x_e;
        if dx.abs() > self.cut_x {
            return None;
        }
        let dy = point.y - y_e;
        if dy.abs() > self.cut_x {
            return None;
        }
        Some(BoxOffsets { d_tau, dx, dy })
    }

    /// η cutoff for a point-like emitter.
    #[inline]
    pub fn within_eta(&self, d_eta: f64) -> bool {
        d_eta.abs() <= self.cut_eta
    }

    /// η cutoff for an emitter spanning `[left, right]`.
    #[inline]
    pub fn within_interval(&self, eta_s: f64, left: f64, right: f64) -> bool {
        eta_s >= left - self.cut_eta && eta_s <= right + self.cut_eta
    }

    /// (1/τ_e) exp(−Δτ²/σ_τ²) · exp(−(Δx² + Δy²)/σ_x²)
    #[inline]
    pub fn tau_perp_weight(&self, tau_e: f64, off: &BoxOffsets) -> f64 {
        let exp_tau = (-off.d_tau * off.d_tau * self.inv_tau_sq).exp() / tau_e;
        let exp_perp = (-(off.dx * off.dx + off.dy * off.dy) * self.inv_x_sq).exp();
        exp_tau * exp_perp
    }

    /// exp(−Δη²/σ_η²)
    #[inline]
    pub fn gaussian_eta(&self, d_eta: f64) -> f64 {
        (-d_eta * d_eta * self.inv_eta_sq).exp()
    }

    /// 1 inside `[left, right]`, Gaussian tail from the nearest edge outside.
    #[inline]
    pub fn plateau_eta(&self, eta_s: f64, left: f64, right: f64) -> f64 {
        if eta_s < left {
            self.gaussian_eta(eta_s - left)
        } else if eta_s > right {
            self.gaussian_eta(eta_s - right)
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kernel() -> GaussianKernel {
        GaussianKernel::new(SmearingWidths::default())
    }

    #[test]
    fn test_box_cutoffs() {
        let k = kernel();
        let p = SpacetimePoint::new(1.0, 0.0, 0.0, 0.0);

        assert!(k.box_offsets(&p, 1.0, 0.0, 0.0).is_some());
        // 5 sigma_tau = 0.5
        assert!(k.box_offsets(&p, 0.49, 0.0, 0.0).is_none());
        assert!(k.box_offsets(&p, 0.51, 0.0, 0.0).is_some());
        // 5 sigma_x = 2.5
        assert!(k.box_offsets(&p, 1.0, 2.6, 0.0).is_none());
        assert!(k.box_offsets(&p, 1.0, 0.0, -2.6).is_none());
        let off = k.box_offsets(&p, 1.0, 2.4, -2.4).unwrap();
        assert!((off.dx + 2.4).abs() < 1e-14);
        assert!((off.dy - 2.4).abs() < 1e-14);
    }

    #[test]
    fn test_eta_cutoffs() {
        let k = kernel();
        assert!(k.within_eta(2.5));
        assert!(!k.within_eta(-2.51));
        assert!(k.within_interval(-3.0, -1.0, 1.0));
        assert!(!k.within_interval(-3.6, -1.0, 1.0));
        assert!(!k.within_interval(3.6, -1.0, 1.0));
    }

    #[test]
    fn test_past_horizon() {
        let k = kernel();
        assert!(!k.past_horizon(1.49, 1.0));
        assert!(k.past_horizon(1.5, 1.0));
        assert!(k.past_horizon(3.0, 1.0));
    }

    #[test]
    fn test_weights() {
        let k = kernel();
        let off = BoxOffsets {
            d_tau: 0.1,
            dx: 0.5,
            dy: 0.0,
        };
        // exp(-1)/2 * exp(-1)
        let expected = (-2.0_f64).exp() / 2.0;
        assert!((k.tau_perp_weight(2.0, &off) - expected).abs() < 1e-14);
        assert!((k.gaussian_eta(0.5) - (-1.0_f64).exp()).abs() < 1e-14);
    }

    #[test]
    fn test_plateau() {
        let k = kernel();
        assert_eq!(k.plateau_eta(0.3, -1.0, 1.0), 1.0);
        assert_eq!(k.plateau_eta(1.0, -1.0, 1.0), 1.0);
        assert!((k.plateau_eta(1.5, -1.0, 1.0) - (-1.0_f64).exp()).abs() < 1e-14);
        assert!((k.plateau_eta(-1.5, -1.0, 1.0) - (-1.0_f64).exp()).abs() < 1e-14);
    }
}
