//! Bohr model of a hydrogen-like ion
//!
//! A single electron bound to a nucleus of charge Z, restricted to the
//! non-relativistic Bohr formulas:
//! - Eₙ = -Z²·R_H / n²
//! - rₙ = n²·a₀ / Z
//! - λ = h·c / |ΔE|,  ν = |ΔE| / h

use std::fmt;

use common::constants::{BOHR_RADIUS, HC, PLANCK, RYDBERG_ENERGY};
use common::units::{ev_to_kj_per_mol, joules_to_ev, meters_to_angstrom, meters_to_nm};

use crate::error::{BohrError, Result};
use crate::transition::{Transition, TransitionLine};

/// Reject a quantum number below 1, returning it as `f64` otherwise.
fn level(name: &'static str, n: u32) -> Result<f64> {
    if n < 1 {
        return Err(BohrError::below_one(name, n));
    }
    Ok(n as f64)
}

/// A hydrogen-like ion with atomic number Z.
///
/// Immutable after construction; every query is a pure function of Z and the
/// quantum numbers passed in, so a model can be shared freely across threads.
///
/// ```rust
/// use bohr_atom::BohrModel;
///
/// let hydrogen = BohrModel::new(1).unwrap();
/// let ground = hydrogen.energy_level_ev(1).unwrap();
/// assert!((ground + 13.6057).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BohrModel {
    z: u32,
}

impl BohrModel {
    /// Fails with `InvalidParameter` when `z` is 0.
    pub fn new(z: u32) -> Result<Self> {
        if z < 1 {
            return Err(BohrError::below_one("Z", z));
        }
        log::debug!("Bohr model created for Z={z}");
        Ok(Self { z })
    }

    /// Neutral hydrogen (Z = 1)
    pub fn hydrogen() -> Self {
        Self { z: 1 }
    }

    /// Atomic number
    pub fn z(&self) -> u32 {
        self.z
    }

    fn z_squared(&self) -> f64 {
        let z = self.z as f64;
        z * z
    }

    /// Energy of level `n` in joules. Always negative (bound state).
    pub fn energy_level(&self, n: u32) -> Result<f64> {
        let n = level("n", n)?;
        Ok(-self.z_squared() * RYDBERG_ENERGY / (n * n))
    }

    /// Energy of level `n` in electronvolts.
    pub fn energy_level_ev(&self, n: u32) -> Result<f64> {
        Ok(joules_to_ev(self.energy_level(n)?))
    }

    /// Radius of orbit `n` in meters.
    pub fn orbital_radius(&self, n: u32) -> Result<f64> {
        let n = level("n", n)?;
        Ok(n * n * BOHR_RADIUS / self.z as f64)
    }

    /// Radius of orbit `n` in ångström.
    pub fn orbital_radius_angstrom(&self, n: u32) -> Result<f64> {
        Ok(meters_to_angstrom(self.orbital_radius(n)?))
    }

    /// Energy needed to free the electron from level `n`, in joules (positive).
    pub fn ionization_energy(&self, n: u32) -> Result<f64> {
        Ok(-self.energy_level(n)?)
    }

    pub fn ionization_energy_ev(&self, n: u32) -> Result<f64> {
        Ok(joules_to_ev(self.ionization_energy(n)?))
    }

    /// Molar ionization energy from level `n` in kJ/mol.
    pub fn ionization_energy_kj_per_mol(&self, n: u32) -> Result<f64> {
        Ok(ev_to_kj_per_mol(self.ionization_energy_ev(n)?))
    }

    /// ΔE = E(n_final) - E(n_initial) in joules.
    ///
    /// Negative for emission (the electron drops to a lower level), positive
    /// for absorption, zero when both levels are equal.
    pub fn transition_energy(&self, n_initial: u32, n_final: u32) -> Result<f64> {
        level("n_initial", n_initial)?;
        level("n_final", n_final)?;
        Ok(self.energy_level(n_final)? - self.energy_level(n_initial)?)
    }

    /// |ΔE| for a transition between two distinct levels.
    fn photon_energy(&self, n_initial: u32, n_final: u32) -> Result<f64> {
        let delta = self.transition_energy(n_initial, n_final)?;
        if n_initial == n_final || delta == 0.0 {
            return Err(BohrError::DivisionUndefined { n_initial, n_final });
        }
        Ok(delta.abs())
    }

    /// Photon wavelength in nanometers, λ = h·c / |ΔE|.
    pub fn transition_wavelength_nm(&self, n_initial: u32, n_final: u32) -> Result<f64> {
        let energy = self.photon_energy(n_initial, n_final)?;
        Ok(meters_to_nm(HC / energy))
    }

    /// Photon frequency in Hz, ν = |ΔE| / h.
    pub fn transition_frequency(&self, n_initial: u32, n_final: u32) -> Result<f64> {
        let energy = self.photon_energy(n_initial, n_final)?;
        Ok(energy / PLANCK)
    }

    /// Energy, wavelength and frequency of one transition together.
    pub fn transition(&self, n_initial: u32, n_final: u32) -> Result<TransitionLine> {
        let transition = Transition::new(n_initial, n_final)?;
        Ok(TransitionLine {
            transition,
            energy: self.transition_energy(n_initial, n_final)?,
            wavelength_nm: self.transition_wavelength_nm(n_initial, n_final)?,
            frequency: self.transition_frequency(n_initial, n_final)?,
        })
    }
}

impl Default for BohrModel {
    fn default() -> Self {
        Self::hydrogen()
    }
}

impl fmt::Display for BohrModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BohrModel(Z={})", self.z)
    }
}
