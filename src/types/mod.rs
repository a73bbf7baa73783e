//! Strongly-typed coordinate and current types.
//!
//! Source evaluation takes a [`SpacetimePoint`] instead of four loose floats
//! and returns a [`FourVector`] by value instead of filling a caller-owned
//! array.
//!
//! # Example
//!
//! ```
//! use hydro_source::types::{FourVector, SpacetimePoint};
//!
//! let p = SpacetimePoint::new(0.6, 0.0, 0.0, 0.0);
//! let u = FourVector::rest_frame();
//! assert_eq!(u.time(), 1.0);
//! assert_eq!(p.at_tau(1.0).tau, 1.0);
//! ```

mod spacetime;

pub use spacetime::{FourVector, SpacetimePoint};
