//! Electronic transitions between two Bohr levels

use std::fmt;

use common::units::joules_to_ev;

use crate::error::{BohrError, Result};
use crate::spectrum::SpectralRegion;

/// A pair of principal quantum numbers, `n_initial → n_final`.
///
/// Equal levels are allowed here; they only fail once a wavelength or
/// frequency is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transition {
    pub n_initial: u32,
    pub n_final: u32,
}

impl Transition {
    pub fn new(n_initial: u32, n_final: u32) -> Result<Self> {
        if n_initial < 1 {
            return Err(BohrError::below_one("n_initial", n_initial));
        }
        if n_final < 1 {
            return Err(BohrError::below_one("n_final", n_final));
        }
        Ok(Self { n_initial, n_final })
    }

    /// Electron falls to a lower level and a photon leaves the atom.
    pub fn is_emission(&self) -> bool {
        self.n_initial > self.n_final
    }

    /// Electron climbs to a higher level by absorbing a photon.
    pub fn is_absorption(&self) -> bool {
        self.n_initial < self.n_final
    }

    pub fn reversed(&self) -> Self {
        Self {
            n_initial: self.n_final,
            n_final: self.n_initial,
        }
    }

    /// Short label such as `3→2`
    pub fn label(&self) -> String {
        format!("{}→{}", self.n_initial, self.n_final)
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={} → n={}", self.n_initial, self.n_final)
    }
}

/// A resolved transition: its signed energy and photon properties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionLine {
    pub transition: Transition,
    /// Signed ΔE in joules (negative for emission)
    pub energy: f64,
    pub wavelength_nm: f64,
    /// Frequency in Hz
    pub frequency: f64,
}

impl TransitionLine {
    /// Photon energy |ΔE| in joules
    pub fn photon_energy(&self) -> f64 {
        self.energy.abs()
    }

    /// Photon energy |ΔE| in electronvolts
    pub fn photon_energy_ev(&self) -> f64 {
        joules_to_ev(self.photon_energy())
    }

    pub fn region(&self) -> SpectralRegion {
        SpectralRegion::classify(self.wavelength_nm)
    }

    pub fn label(&self) -> String {
        self.transition.label()
    }
}
