//! Discrete emitters deposited into the hydrodynamic fluid.
//!
//! Two mutually exclusive models:
//! - QCD strings: longitudinal segments spanning a rapidity interval,
//!   accompanied by baryon-carrying partons
//! - AMPT partons: point-like massive partons carrying energy-momentum
//!   and baryon number

/// A QCD string segment.
///
/// Right endpoints are never smaller than left endpoints and the formation
/// time is positive; ingestion enforces both.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct QcdString {
    /// Normalization
    pub norm: f64,
    /// Energy lost by the string (GeV)
    pub delta_e: f64,
    /// Formation proper time (fm)
    pub tau_form: f64,
    /// Transverse x (fm)
    pub x_perp: f64,
    /// Transverse y (fm)
    pub y_perp: f64,
    /// Left spacetime-rapidity endpoint
    pub eta_s_left: f64,
    /// Right spacetime-rapidity endpoint
    pub eta_s_right: f64,
    /// Left longitudinal rapidity
    pub y_l: f64,
    /// Right longitudinal rapidity
    pub y_r: f64,
}

impl QcdString {
    /// Whether the record satisfies the string invariants.
    pub fn is_valid(&self) -> bool {
        self.tau_form > 0.0 && self.eta_s_right >= self.eta_s_left && self.y_r >= self.y_l
    }

    /// Rapidity interval (left, right) used for the flat deposition region.
    #[inline]
    pub fn interval(&self, momentum_rapidity: bool) -> (f64, f64) {
        if momentum_rapidity {
            (self.y_l, self.y_r)
        } else {
            (self.eta_s_left, self.eta_s_right)
        }
    }

    /// Longitudinal rapidity at `eta_s`, interpolated linearly across
    /// the interval `(left, right)`.
    ///
    /// A zero-width interval returns `y_l`.
    #[inline]
    pub fn interpolated_rapidity(&self, eta_s: f64, left: f64, right: f64) -> f64 {
        let width = right - left;
        if width > 0.0 {
            self.y_l + (self.y_r - self.y_l) / width * (eta_s - left)
        } else {
            self.y_l
        }
    }
}

/// A point-like parton.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Parton {
    /// Proper time of appearance (fm)
    pub tau: f64,
    /// Transverse x (fm)
    pub x: f64,
    /// Transverse y (fm)
    pub y: f64,
    /// Spacetime rapidity
    pub eta_s: f64,
    /// Momentum rapidity
    pub rapidity: f64,
    /// Mass (GeV)
    pub mass: f64,
    /// Transverse momentum x (GeV)
    pub px: f64,
    /// Transverse momentum y (GeV)
    pub py: f64,
    /// Lab-frame energy (GeV)
    pub energy: f64,
    /// Baryon number
    pub baryon_number: f64,
}

impl Parton {
    /// Regularizer added to t − z in the spacetime-rapidity logarithm.
    pub const ETA_REGULATOR: f64 = 1e-15;

    /// Build a parton from lab-frame light-cone coordinates.
    ///
    /// Returns `None` outside the forward light cone (t ≤ z) or for a
    /// non-positive mass².
    #[allow(clippy::too_many_arguments)]
    pub fn from_light_cone(
        t: f64,
        x: f64,
        y: f64,
        z: f64,
        energy: f64,
        px: f64,
        py: f64,
        pz: f64,
    ) -> Option<Self> {
        if t <= z {
            return None;
        }
        let mass_sq = energy * energy - px * px - py * py - pz * pz;
        if mass_sq <= 0.0 {
            return None;
        }

        let parton = Self {
            tau: (t * t - z * z).sqrt(),
            x,
            y,
            eta_s: 0.5 * ((t + z) / (t - z + Self::ETA_REGULATOR)).ln(),
            rapidity: 0.5 * ((energy + pz) / (energy - pz)).ln(),
            mass: mass_sq.sqrt(),
            px,
            py,
            energy,
            baryon_number: 1.0,
        };
        // t > |z| is not implied by t > z; a past light-cone point gives NaN.
        parton.is_finite().then_some(parton)
    }

    /// Baryon-carrying parton from a string-model dump (no momentum data).
    pub fn baryon(tau: f64, x: f64, y: f64, eta_s: f64, rapidity: f64) -> Self {
        Self {
            tau,
            x,
            y,
            eta_s,
            rapidity,
            baryon_number: 1.0,
            ..Default::default()
        }
    }

    /// Transverse mass m_T = sqrt(m² + px² + py²).
    #[inline]
    pub fn transverse_mass(&self) -> f64 {
        (self.mass * self.mass + self.px * self.px + self.py * self.py).sqrt()
    }

    fn is_finite(&self) -> bool {
        self.tau.is_finite() && self.eta_s.is_finite() && self.rapidity.is_finite()
    }
}

/// The active emitter collection.
#[derive(Clone, Debug, PartialEq)]
pub enum Emitters {
    /// QCD strings deposit energy-momentum, partons deposit baryon number.
    Strings {
        strings: Vec<QcdString>,
        partons: Vec<Parton>,
    },
    /// Partons deposit both.
    Partons { partons: Vec<Parton> },
}

impl Emitters {
    /// Baryon-carrying partons of either model.
    pub fn partons(&self) -> &[Parton] {
        match self {
            Self::Strings { partons, .. } | Self::Partons { partons } => partons,
        }
    }

    /// QCD strings (empty for the parton model).
    pub fn strings(&self) -> &[QcdString] {
        match self {
            Self::Strings { strings, .. } => strings,
            Self::Partons { .. } => &[],
        }
    }

    /// Total number of emitters.
    pub fn len(&self) -> usize {
        self.strings().len() + self.partons().len()
    }

    /// Whether no emitter was loaded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_cone_parton() {
        // t = 1.25, z = 0.75 -> tau = 1, eta_s = 0.5 ln(4)
        let p = Parton::from_light_cone(1.25, 0.1, -0.2, 0.75, 5.0, 0.3, 0.4, 3.0).unwrap();
        assert!((p.tau - 1.0).abs() < 1e-12);
        assert!((p.eta_s - 0.5 * 4.0_f64.ln()).abs() < 1e-12);
        assert!((p.rapidity - 0.5 * (8.0_f64 / 2.0).ln()).abs() < 1e-12);
        // m² = 25 - 0.09 - 0.16 - 9
        assert!((p.mass - 15.75_f64.sqrt()).abs() < 1e-12);
        assert_eq!(p.baryon_number, 1.0);
        assert_eq!((p.x, p.y), (0.1, -0.2));
    }

    #[test]
    fn test_light_cone_rejects_spacelike() {
        assert!(Parton::from_light_cone(1.0, 0.0, 0.0, 1.0, 5.0, 0.0, 0.0, 1.0).is_none());
        assert!(Parton::from_light_cone(0.5, 0.0, 0.0, 1.0, 5.0, 0.0, 0.0, 1.0).is_none());
        // t > z but inside the past light cone
        assert!(Parton::from_light_cone(-1.0, 0.0, 0.0, -2.0, 5.0, 0.0, 0.0, 1.0).is_none());
    }

    #[test]
    fn test_light_cone_rejects_tachyonic() {
        assert!(Parton::from_light_cone(2.0, 0.0, 0.0, 0.0, 1.0, 0.6, 0.0, 0.8).is_none());
        assert!(Parton::from_light_cone(2.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 0.0).is_none());
    }

    #[test]
    fn test_interpolated_rapidity() {
        let s = QcdString {
            tau_form: 0.5,
            eta_s_left: -1.0,
            eta_s_right: 1.0,
            y_l: -2.0,
            y_r: 2.0,
            ..Default::default()
        };
        let (l, r) = s.interval(false);
        assert!((s.interpolated_rapidity(0.0, l, r)).abs() < 1e-14);
        assert!((s.interpolated_rapidity(0.5, l, r) - 1.0).abs() < 1e-14);
        assert!((s.interpolated_rapidity(-1.0, l, r) + 2.0).abs() < 1e-14);

        // In the momentum-rapidity convention y_interp tracks eta_s.
        let (l, r) = s.interval(true);
        assert!((s.interpolated_rapidity(0.7, l, r) - 0.7).abs() < 1e-14);
    }

    #[test]
    fn test_degenerate_interval() {
        let s = QcdString {
            tau_form: 0.5,
            y_l: 0.3,
            y_r: 0.3,
            ..Default::default()
        };
        assert_eq!(s.interpolated_rapidity(0.0, 0.0, 0.0), 0.3);
        assert!(s.is_valid());
    }

    #[test]
    fn test_string_validity() {
        let good = QcdString {
            tau_form: 0.4,
            eta_s_left: -0.5,
            eta_s_right: 0.5,
            y_l: -0.5,
            y_r: 0.5,
            ..Default::default()
        };
        assert!(good.is_valid());
        assert!(!QcdString { tau_form: 0.0, ..good }.is_valid());
        assert!(!QcdString { eta_s_left: 1.0, ..good }.is_valid());
        assert!(!QcdString { y_r: -1.0, ..good }.is_valid());
    }

    #[test]
    fn test_emitters_accessors() {
        let emitters = Emitters::Strings {
            strings: vec![QcdString::default(); 2],
            partons: vec![Parton::baryon(1.1, 0.0, 0.0, 0.0, 0.0)],
        };
        assert_eq!(emitters.len(), 3);
        assert_eq!(emitters.strings().len(), 2);
        assert_eq!(emitters.partons()[0].tau, 1.1);

        let empty = Emitters::Partons { partons: vec![] };
        assert!(empty.is_empty());
        assert!(empty.strings().is_empty());
    }
}
