//! Milne-coordinate points and four-vectors.
//!
//! Hydrodynamics in heavy-ion collisions runs in (τ, x, y, η_s) coordinates:
//! - τ = sqrt(t² − z²): longitudinal proper time
//! - x, y: transverse position
//! - η_s = ½ ln((t + z)/(t − z)): spacetime rapidity

use std::ops::{Add, AddAssign, Index, Mul, Sub};

/// A point in Milne coordinates (τ, x, y, η_s).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpacetimePoint {
    /// Proper time τ (fm)
    pub tau: f64,
    /// Transverse x (fm)
    pub x: f64,
    /// Transverse y (fm)
    pub y: f64,
    /// Spacetime rapidity η_s
    pub eta_s: f64,
}

impl SpacetimePoint {
    /// Create a new point.
    #[inline(always)]
    pub fn new(tau: f64, x: f64, y: f64, eta_s: f64) -> Self {
        Self { tau, x, y, eta_s }
    }

    /// The same spatial location at another proper time.
    #[inline(always)]
    pub fn at_tau(&self, tau: f64) -> Self {
        Self { tau, ..*self }
    }
}

/// Four-component vector in Milne coordinates, (τ, x, y, η) ordering.
///
/// Used both for the energy-momentum source j^μ and the flow u^μ.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FourVector(pub [f64; 4]);

impl FourVector {
    /// Create a new four-vector.
    #[inline(always)]
    pub fn new(j0: f64, j1: f64, j2: f64, j3: f64) -> Self {
        Self([j0, j1, j2, j3])
    }

    /// Zero vector.
    #[inline(always)]
    pub fn zero() -> Self {
        Self([0.0; 4])
    }

    /// Fluid at rest in the Milne frame: u^μ = (1, 0, 0, 0).
    #[inline(always)]
    pub fn rest_frame() -> Self {
        Self([1.0, 0.0, 0.0, 0.0])
    }

    /// Time-like component.
    #[inline(always)]
    pub fn time(&self) -> f64 {
        self.0[0]
    }

    /// Spatial components (x, y, η).
    #[inline(always)]
    pub fn spatial(&self) -> [f64; 3] {
        [self.0[1], self.0[2], self.0[3]]
    }

    /// Largest absolute component.
    pub fn max_abs(&self) -> f64 {
        self.0.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()))
    }

    /// Whether every component is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&v| v == 0.0)
    }
}

impl Index<usize> for FourVector {
    type Output = f64;

    #[inline(always)]
    fn index(&self, mu: usize) -> &f64 {
        &self.0[mu]
    }
}

impl Add for FourVector {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self([
            self.0[0] + rhs.0[0],
            self.0[1] + rhs.0[1],
            self.0[2] + rhs.0[2],
            self.0[3] + rhs.0[3],
        ])
    }
}

impl AddAssign for FourVector {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        for mu in 0..4 {
            self.0[mu] += rhs.0[mu];
        }
    }
}

impl Sub for FourVector {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self([
            self.0[0] - rhs.0[0],
            self.0[1] - rhs.0[1],
            self.0[2] - rhs.0[2],
            self.0[3] - rhs.0[3],
        ])
    }
}

impl Mul<f64> for FourVector {
    type Output = Self;

    #[inline(always)]
    fn mul(self, s: f64) -> Self {
        Self([self.0[0] * s, self.0[1] * s, self.0[2] * s, self.0[3] * s])
    }
}

impl Mul<FourVector> for f64 {
    type Output = FourVector;

    #[inline(always)]
    fn mul(self, v: FourVector) -> FourVector {
        v * self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_vector_arithmetic() {
        let a = FourVector::new(1.0, 2.0, 3.0, 4.0);
        let b = FourVector::new(0.5, 0.5, 0.5, 0.5);

        let sum = a + b;
        assert_eq!(sum, FourVector::new(1.5, 2.5, 3.5, 4.5));

        let diff = a - b;
        assert_eq!(diff, FourVector::new(0.5, 1.5, 2.5, 3.5));

        let scaled = 2.0 * a;
        assert_eq!(scaled, FourVector::new(2.0, 4.0, 6.0, 8.0));

        let mut acc = FourVector::zero();
        acc += a;
        acc += b;
        assert_eq!(acc, sum);
    }

    #[test]
    fn test_four_vector_accessors() {
        let v = FourVector::new(-3.0, 1.0, 2.0, -0.5);
        assert_eq!(v.time(), -3.0);
        assert_eq!(v.spatial(), [1.0, 2.0, -0.5]);
        assert_eq!(v[3], -0.5);
        assert!((v.max_abs() - 3.0).abs() < 1e-14);
        assert!(!v.is_zero());
        assert!(FourVector::zero().is_zero());
    }

    #[test]
    fn test_point_at_tau() {
        let p = SpacetimePoint::new(0.6, 1.0, -2.0, 0.3);
        let q = p.at_tau(1.2);
        assert_eq!(q.tau, 1.2);
        assert_eq!((q.x, q.y, q.eta_s), (1.0, -2.0, 0.3));
    }
}
