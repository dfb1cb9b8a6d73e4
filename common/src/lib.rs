//! Common utilities for the Bohr atom workspace
//!
//! This crate provides the physical constants, logging setup and console
//! presentation helpers shared by the library and its demo binaries.

pub mod console;
pub mod logging;

pub use console::*;

#[cfg(test)]
mod console_test;
#[cfg(test)]
mod constants_test;

/// Physical constants (CODATA 2018 recommended values, SI units)
pub mod constants {
    /// Planck constant in J·s (exact)
    pub const PLANCK: f64 = 6.626_070_15e-34;

    /// Speed of light in m/s (exact)
    pub const C: f64 = 299_792_458.0;

    /// Elementary charge in C (exact)
    pub const ELEMENTARY_CHARGE: f64 = 1.602_176_634e-19;

    /// Rydberg energy hcR∞ in J
    pub const RYDBERG_ENERGY: f64 = 2.179_872_361_103_5e-18;

    /// Bohr radius in m
    pub const BOHR_RADIUS: f64 = 5.291_772_109_03e-11;

    /// Product h·c in J·m
    pub const HC: f64 = PLANCK * C;

    /// Joules per electronvolt. Every eV conversion divides by this.
    pub const J_PER_EV: f64 = ELEMENTARY_CHARGE;

    /// Rydberg energy in eV (≈ 13.6057)
    pub const RYDBERG_ENERGY_EV: f64 = RYDBERG_ENERGY / J_PER_EV;

    /// Ångström per meter (1 Å = 10⁻¹⁰ m)
    pub const ANGSTROM_PER_M: f64 = 1e10;

    /// Nanometers per meter
    pub const NM_PER_M: f64 = 1e9;

    /// Speed of light in nm/s
    pub const C_NM_PER_S: f64 = C * NM_PER_M;

    /// Molar energy per electronvolt (kJ/mol per eV)
    pub const KJ_PER_MOL_PER_EV: f64 = 96.485;
}

/// Unit conversions built on [`constants`]
pub mod units {
    use crate::constants::{ANGSTROM_PER_M, J_PER_EV, KJ_PER_MOL_PER_EV, NM_PER_M};

    pub fn joules_to_ev(joules: f64) -> f64 {
        joules / J_PER_EV
    }

    pub fn ev_to_joules(ev: f64) -> f64 {
        ev * J_PER_EV
    }

    pub fn ev_to_kj_per_mol(ev: f64) -> f64 {
        ev * KJ_PER_MOL_PER_EV
    }

    pub fn meters_to_angstrom(meters: f64) -> f64 {
        meters * ANGSTROM_PER_M
    }

    pub fn meters_to_nm(meters: f64) -> f64 {
        meters * NM_PER_M
    }
}
