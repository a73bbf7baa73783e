//! Energy-momentum and baryon sources from smeared strings or partons.
//!
//! # String model
//!
//! A string deposits energy flat in η_s across its interval with Gaussian
//! tails outside. The local longitudinal rapidity is interpolated linearly
//! between y_l and y_r, so
//!
//! J^μ = e · (cosh(y − η_s), 0, 0, sinh(y − η_s))
//!
//! Baryon number comes from a separate parton list.
//!
//! # AMPT partons
//!
//! J^μ = f · (m_T cosh(y − η_s), p_x, p_y, m_T sinh(y − η_s))
//!
//! with f the fully Gaussian kernel. Partons carry baryon number too.

use thiserror::Error;
use tracing::info;

use super::emitters::{Emitters, Parton, QcdString};
use super::kernel::GaussianKernel;
use super::pre_integrate::{baryon_density_before, energy_momentum_before};
use super::traits::HydroSourceTerm;
use crate::config::{ConfigError, InitialProfile, SourceConfig, StringDumpMode};
use crate::io::{EmitterFileError, read_ampt_file, read_baryon_parton_file, read_string_file};
use crate::types::{FourVector, SpacetimePoint};

/// Error type for building a [`HydroSource`].
#[derive(Debug, Error)]
pub enum SourceError {
    /// Invalid configuration
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Emitter file could not be read
    #[error(transparent)]
    File(#[from] EmitterFileError),
}

impl SourceError {
    /// Whether a required input file was missing.
    pub fn is_missing_file(&self) -> bool {
        matches!(self, Self::File(EmitterFileError::MissingFile { .. }))
    }
}

/// Hydrodynamic source built from a fixed set of emitters.
///
/// Immutable after construction; evaluation only reads the emitters and
/// can run concurrently from any number of threads.
///
/// # Example
///
/// ```
/// use hydro_source::config::{InitialProfile, SourceConfig};
/// use hydro_source::source::{Emitters, HydroSource, HydroSourceTerm, Parton};
/// use hydro_source::types::{FourVector, SpacetimePoint};
///
/// let parton = Parton::from_light_cone(1.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0).unwrap();
/// let config = SourceConfig::new(InitialProfile::Ampt).with_ampt_file("unused");
/// let source = HydroSource::from_emitters(Emitters::Partons { partons: vec![parton] }, &config)
///     .unwrap();
///
/// let j = source.energy_momentum(&SpacetimePoint::new(1.0, 0.0, 0.0, 0.0), &FourVector::rest_frame());
/// assert!(j.time() > 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct HydroSource {
    emitters: Emitters,
    max_formation_time: f64,
    kernel: GaussianKernel,
    energy_scale: f64,
    delta_tau: f64,
    string_dump_mode: StringDumpMode,
}

impl HydroSource {
    /// Validate the configuration and read the emitter files of its profile.
    ///
    /// # Errors
    /// - `Config` if the configuration is invalid (checked before any I/O)
    /// - `File` if a required file is missing or a string row is malformed
    pub fn from_config(config: &SourceConfig) -> Result<Self, SourceError> {
        config.validate()?;

        let (emitters, max_formation_time) = match config.profile {
            InitialProfile::StringModel => {
                info!(
                    strings = %config.strings_file.display(),
                    partons = %config.partons_file.display(),
                    "reading string-model sources"
                );
                let strings = read_string_file(&config.strings_file)?;
                let partons = read_baryon_parton_file(&config.partons_file)?;
                let tau_max = strings.max_formation_time.max(partons.max_formation_time);
                (
                    Emitters::Strings {
                        strings: strings.records,
                        partons: partons.records,
                    },
                    tau_max,
                )
            }
            InitialProfile::Ampt => {
                info!(partons = %config.ampt_file.display(), "reading AMPT sources");
                let partons = read_ampt_file(&config.ampt_file)?;
                (
                    Emitters::Partons {
                        partons: partons.records,
                    },
                    partons.max_formation_time,
                )
            }
        };

        info!(
            emitters = emitters.len(),
            tau_max = max_formation_time,
            "hydro source ready"
        );
        Ok(Self::assemble(emitters, max_formation_time, config))
    }

    /// Build from emitters already in memory.
    ///
    /// File paths in `config` are not used.
    ///
    /// # Errors
    /// - `NonPositive` for a non-positive width, step, cell size or ħc
    pub fn from_emitters(emitters: Emitters, config: &SourceConfig) -> Result<Self, ConfigError> {
        config.validate_parameters()?;

        let strings = emitters.strings().iter().map(|s| s.tau_form);
        let partons = emitters.partons().iter().map(|p| p.tau);
        let max_formation_time = strings.chain(partons).fold(0.0, f64::max);
        Ok(Self::assemble(emitters, max_formation_time, config))
    }

    fn assemble(emitters: Emitters, max_formation_time: f64, config: &SourceConfig) -> Self {
        Self {
            emitters,
            max_formation_time,
            kernel: GaussianKernel::new(config.widths),
            energy_scale: config.energy_scale(),
            delta_tau: config.delta_tau,
            string_dump_mode: config.string_dump_mode,
        }
    }

    /// Emitters backing this source.
    pub fn emitters(&self) -> &Emitters {
        &self.emitters
    }

    /// Latest formation/appearance time among all emitters (fm).
    pub fn max_formation_time(&self) -> f64 {
        self.max_formation_time
    }

    /// Smearing kernel.
    pub fn kernel(&self) -> &GaussianKernel {
        &self.kernel
    }

    /// Energy-momentum deposited before `point.tau`, per unit τ.
    ///
    /// See [`energy_momentum_before`].
    pub fn energy_momentum_before(&self, point: &SpacetimePoint) -> FourVector {
        energy_momentum_before(self, point, self.delta_tau)
    }

    /// Baryon number deposited before `point.tau`, per unit τ.
    ///
    /// See [`baryon_density_before`].
    pub fn baryon_density_before(&self, point: &SpacetimePoint) -> f64 {
        baryon_density_before(self, point, self.delta_tau)
    }

    fn string_current(&self, strings: &[QcdString], point: &SpacetimePoint) -> FourVector {
        let k = &self.kernel;
        let momentum_rapidity = self.string_dump_mode == StringDumpMode::MomentumRapidity;
        let eta_s = point.eta_s;

        let mut j = FourVector::zero();
        for s in strings {
            let Some(off) = k.box_offsets(point, s.tau_form, s.x_perp, s.y_perp) else {
                continue;
            };
            let (left, right) = s.interval(momentum_rapidity);
            if !k.within_interval(eta_s, left, right) {
                continue;
            }

            let e_local = k.tau_perp_weight(s.tau_form, &off) * k.plateau_eta(eta_s, left, right);
            let dy = s.interpolated_rapidity(eta_s, left, right) - eta_s;
            j.0[0] += dy.cosh() * e_local;
            j.0[3] += dy.sinh() * e_local;
        }

        let w = k.widths();
        j * (self.energy_scale * w.prefactor_tau() * w.prefactor_perp())
    }

    fn parton_current(&self, partons: &[Parton], point: &SpacetimePoint) -> FourVector {
        let k = &self.kernel;

        let mut j = FourVector::zero();
        for p in partons {
            let Some(off) = k.box_offsets(point, p.tau, p.x, p.y) else {
                continue;
            };
            let d_eta = point.eta_s - p.eta_s;
            if !k.within_eta(d_eta) {
                continue;
            }

            let f_smear = k.tau_perp_weight(p.tau, &off) * k.gaussian_eta(d_eta);
            let m_perp = p.transverse_mass();
            let dy = p.rapidity - point.eta_s;
            j += FourVector::new(
                m_perp * dy.cosh() * f_smear,
                p.px * f_smear,
                p.py * f_smear,
                m_perp * dy.sinh() * f_smear,
            );
        }

        let w = k.widths();
        j * (self.energy_scale * w.prefactor_tau() * w.prefactor_perp() * w.prefactor_eta())
    }

    /// The string-model dump in momentum-rapidity mode centres the baryon
    /// kernel on the parton's momentum rapidity.
    fn baryon_center(&self, p: &Parton) -> f64 {
        match (&self.emitters, self.string_dump_mode) {
            (Emitters::Strings { .. }, StringDumpMode::MomentumRapidity) => p.rapidity,
            _ => p.eta_s,
        }
    }
}

impl HydroSourceTerm for HydroSource {
    /// The deposition direction comes from the emitters; `flow` is not used.
    fn energy_momentum(&self, point: &SpacetimePoint, _flow: &FourVector) -> FourVector {
        if self.kernel.past_horizon(point.tau, self.max_formation_time) {
            return FourVector::zero();
        }
        match &self.emitters {
            Emitters::Strings { strings, .. } => self.string_current(strings, point),
            Emitters::Partons { partons } => self.parton_current(partons, point),
        }
    }

    fn baryon_density(&self, point: &SpacetimePoint) -> f64 {
        if self.kernel.past_horizon(point.tau, self.max_formation_time) {
            return 0.0;
        }
        let k = &self.kernel;

        let mut res = 0.0;
        for p in self.emitters.partons() {
            let Some(off) = k.box_offsets(point, p.tau, p.x, p.y) else {
                continue;
            };
            let d_eta = point.eta_s - self.baryon_center(p);
            if !k.within_eta(d_eta) {
                continue;
            }
            res += p.baryon_number * k.tau_perp_weight(p.tau, &off) * k.gaussian_eta(d_eta);
        }

        let w = k.widths();
        res * w.prefactor_tau() * w.prefactor_perp() * w.prefactor_eta()
    }

    fn name(&self) -> &'static str {
        match self.emitters {
            Emitters::Strings { .. } => "qcd_strings",
            Emitters::Partons { .. } => "ampt_partons",
        }
    }
}
