//! Construction-time configuration for hydrodynamic source terms.
//!
//! The external simulation configuration supplies integer codes and file
//! paths; this module turns them into typed settings and validates them
//! before any input file is touched.
//!
//! # Example
//!
//! ```
//! use hydro_source::config::{InitialProfile, SourceConfig, StringDumpMode};
//!
//! let config = SourceConfig::new(InitialProfile::StringModel)
//!     .with_string_files("strings.dat", "partons.dat")
//!     .with_string_dump_mode(StringDumpMode::MomentumRapidity)
//!     .with_s_factor(1.2);
//! assert!(config.validate().is_ok());
//! ```

use std::f64::consts::PI;
use std::path::PathBuf;

use thiserror::Error;

/// ħc in GeV·fm.
pub const HBARC: f64 = 0.19733;

/// Number of Gaussian widths beyond which an emitter is ignored.
pub const N_SIGMA_SKIP: f64 = 5.0;

/// Error type for invalid configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Profile code that selects no emitter model
    #[error("Unknown initial profile code: {0}")]
    UnknownProfile(i32),

    /// A width, step or scale that must be strictly positive
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    /// A required input path was left empty
    #[error("No input file configured for {0}")]
    MissingPath(&'static str),
}

/// Which upstream model produced the emitters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitialProfile {
    /// QCD strings plus baryon-carrying partons (profile code 12).
    StringModel,
    /// AMPT partons in lab-frame light-cone coordinates (profile code 30).
    Ampt,
}

impl InitialProfile {
    /// Profile code used by the external configuration.
    pub fn code(self) -> i32 {
        match self {
            Self::StringModel => 12,
            Self::Ampt => 30,
        }
    }
}

impl TryFrom<i32> for InitialProfile {
    type Error = ConfigError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            12 => Ok(Self::StringModel),
            30 => Ok(Self::Ampt),
            other => Err(ConfigError::UnknownProfile(other)),
        }
    }
}

/// Rapidity convention of the string dump.
///
/// With [`StringDumpMode::MomentumRapidity`] the string interval is taken
/// from the longitudinal rapidity endpoints (y_l, y_r) and the baryon
/// kernel of the string model is centred on parton momentum rapidity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StringDumpMode {
    /// Interval in spacetime rapidity (η_s,l, η_s,r).
    #[default]
    SpacetimeRapidity,
    /// Interval in momentum rapidity (y_l, y_r), dump code 2.
    MomentumRapidity,
}

impl From<i32> for StringDumpMode {
    fn from(code: i32) -> Self {
        if code == 2 {
            Self::MomentumRapidity
        } else {
            Self::SpacetimeRapidity
        }
    }
}

/// Gaussian smearing widths in τ, transverse plane and η_s.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmearingWidths {
    /// Proper-time width σ_τ (fm)
    pub sigma_tau: f64,
    /// Transverse width σ_x (fm), shared by x and y
    pub sigma_x: f64,
    /// Spacetime-rapidity width σ_η
    pub sigma_eta: f64,
}

impl Default for SmearingWidths {
    fn default() -> Self {
        Self {
            sigma_tau: 0.1,
            sigma_x: 0.5,
            sigma_eta: 0.5,
        }
    }
}

impl SmearingWidths {
    /// Create widths from explicit values.
    pub fn new(sigma_tau: f64, sigma_x: f64, sigma_eta: f64) -> Self {
        Self {
            sigma_tau,
            sigma_x,
            sigma_eta,
        }
    }

    /// 1/(π σ_x²)
    #[inline]
    pub fn prefactor_perp(&self) -> f64 {
        1.0 / (PI * self.sigma_x * self.sigma_x)
    }

    /// 1/(√π σ_τ)
    #[inline]
    pub fn prefactor_tau(&self) -> f64 {
        1.0 / (PI.sqrt() * self.sigma_tau)
    }

    /// 1/(√π σ_η)
    #[inline]
    pub fn prefactor_eta(&self) -> f64 {
        1.0 / (PI.sqrt() * self.sigma_eta)
    }

    /// Check that every width is strictly positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("sigma_tau", self.sigma_tau)?;
        positive("sigma_x", self.sigma_x)?;
        positive("sigma_eta", self.sigma_eta)
    }
}

/// Configuration consumed when building a [`crate::source::HydroSource`].
#[derive(Clone, Debug)]
pub struct SourceConfig {
    /// Emitter model
    pub profile: InitialProfile,
    /// QCD string list (string model)
    pub strings_file: PathBuf,
    /// Baryon-carrying parton list (string model)
    pub partons_file: PathBuf,
    /// Parton list (AMPT)
    pub ampt_file: PathBuf,
    /// Grid spacing in x (fm)
    pub delta_x: f64,
    /// Grid spacing in y (fm)
    pub delta_y: f64,
    /// Grid spacing in η_s
    pub delta_eta: f64,
    /// Global energy scale factor
    pub s_factor: f64,
    /// ħc used to convert GeV to fm⁻¹
    pub hbarc: f64,
    /// Proper-time step of the pre-integrator (fm)
    pub delta_tau: f64,
    /// Rapidity convention of the string dump
    pub string_dump_mode: StringDumpMode,
    /// Gaussian smearing widths
    pub widths: SmearingWidths,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            profile: InitialProfile::StringModel,
            strings_file: PathBuf::new(),
            partons_file: PathBuf::new(),
            ampt_file: PathBuf::new(),
            delta_x: 0.1,
            delta_y: 0.1,
            delta_eta: 0.1,
            s_factor: 1.0,
            hbarc: HBARC,
            delta_tau: 0.02,
            string_dump_mode: StringDumpMode::default(),
            widths: SmearingWidths::default(),
        }
    }
}

impl SourceConfig {
    /// Create a default configuration for the given profile.
    pub fn new(profile: InitialProfile) -> Self {
        Self {
            profile,
            ..Default::default()
        }
    }

    /// Set the string-model input files.
    pub fn with_string_files(
        mut self,
        strings_file: impl Into<PathBuf>,
        partons_file: impl Into<PathBuf>,
    ) -> Self {
        self.strings_file = strings_file.into();
        self.partons_file = partons_file.into();
        self
    }

    /// Set the AMPT parton file.
    pub fn with_ampt_file(mut self, ampt_file: impl Into<PathBuf>) -> Self {
        self.ampt_file = ampt_file.into();
        self
    }

    /// Set the grid spacings (Δx, Δy, Δη).
    pub fn with_cell(mut self, delta_x: f64, delta_y: f64, delta_eta: f64) -> Self {
        self.delta_x = delta_x;
        self.delta_y = delta_y;
        self.delta_eta = delta_eta;
        self
    }

    /// Set the global energy scale factor.
    pub fn with_s_factor(mut self, s_factor: f64) -> Self {
        self.s_factor = s_factor;
        self
    }

    /// Set ħc.
    pub fn with_hbarc(mut self, hbarc: f64) -> Self {
        self.hbarc = hbarc;
        self
    }

    /// Set the pre-integrator step.
    pub fn with_delta_tau(mut self, delta_tau: f64) -> Self {
        self.delta_tau = delta_tau;
        self
    }

    /// Set the string dump mode.
    pub fn with_string_dump_mode(mut self, mode: StringDumpMode) -> Self {
        self.string_dump_mode = mode;
        self
    }

    /// Set the smearing widths.
    pub fn with_widths(mut self, widths: SmearingWidths) -> Self {
        self.widths = widths;
        self
    }

    /// Volume of one grid cell, Δx·Δy·Δη.
    pub fn cell_volume(&self) -> f64 {
        self.delta_x * self.delta_y * self.delta_eta
    }

    /// Energy normalization s_factor/ħc (GeV → fm⁻¹).
    pub fn energy_scale(&self) -> f64 {
        self.s_factor / self.hbarc
    }

    /// Validate the numerical parameters, ignoring input paths.
    ///
    /// # Errors
    /// - `NonPositive` for a non-positive width, step, cell size or ħc
    pub fn validate_parameters(&self) -> Result<(), ConfigError> {
        self.widths.validate()?;
        positive("delta_tau", self.delta_tau)?;
        positive("hbarc", self.hbarc)?;
        positive("delta_x", self.delta_x)?;
        positive("delta_y", self.delta_y)?;
        positive("delta_eta", self.delta_eta)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    /// - `NonPositive` for a non-positive width, step, cell size or ħc
    /// - `MissingPath` if the active profile has an empty input path
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_parameters()?;

        match self.profile {
            InitialProfile::StringModel => {
                if self.strings_file.as_os_str().is_empty() {
                    return Err(ConfigError::MissingPath("strings_file"));
                }
                if self.partons_file.as_os_str().is_empty() {
                    return Err(ConfigError::MissingPath("partons_file"));
                }
            }
            InitialProfile::Ampt => {
                if self.ampt_file.as_os_str().is_empty() {
                    return Err(ConfigError::MissingPath("ampt_file"));
                }
            }
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    // Also rejects NaN.
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}
