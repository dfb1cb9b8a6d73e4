//! Bohr Model of Hydrogen-like Ions
//!
//! Closed-form Bohr formulas for a single electron around a nucleus of
//! charge Z:
//!
//! - **Energy levels**: Eₙ in joules and electronvolts
//! - **Orbital radii**: rₙ in meters and ångström
//! - **Transitions**: signed ΔE, photon wavelength and frequency
//! - **Spectral series**: Lyman, Balmer, Paschen, Brackett and Pfund lines
//! - **Chart data**: energy-level ladders, orbit outlines, emission spectra
//!
//! Physical constants are the CODATA 2018 values from [`common::constants`].

pub mod diagram;
pub mod equations;
pub mod error;
pub mod model;
pub mod spectrum;
pub mod transition;

#[cfg(test)]
mod model_test;

pub use diagram::{EnergyLevelDiagram, LevelPoint, Orbit, OrbitDiagram};
pub use equations::{BOHR_EQUATIONS, BOHR_VARIABLES};
pub use error::{BohrError, Result};
pub use model::BohrModel;
pub use spectrum::{EmissionSpectrum, SpectralLine, SpectralRegion, SpectralSeries, VisibleColor};
pub use transition::{Transition, TransitionLine};
