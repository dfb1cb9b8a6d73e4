//! Equation catalogue shown alongside the demo output

use common::Equation;

pub const BOHR_EQUATIONS: &[Equation] = &[
    Equation {
        name: "Energy Level",
        formula: "Eₙ = -Z²·R_H / n²",
        description: "Bound-state energy of level n",
    },
    Equation {
        name: "Orbital Radius",
        formula: "rₙ = n²·a₀ / Z",
        description: "Radius of the n-th circular orbit",
    },
    Equation {
        name: "Transition Energy",
        formula: "ΔE = E(n_f) - E(n_i)",
        description: "Negative for emission, positive for absorption",
    },
    Equation {
        name: "Photon Wavelength",
        formula: "λ = h·c / |ΔE|",
        description: "Wavelength of the emitted or absorbed photon",
    },
    Equation {
        name: "Photon Frequency",
        formula: "ν = |ΔE| / h",
        description: "Satisfies λ·ν = c",
    },
    Equation {
        name: "Rydberg Formula",
        formula: "1/λ = Z²·R∞·(1/n_f² - 1/n_i²)",
        description: "Line positions of the spectral series",
    },
];

pub const BOHR_VARIABLES: &[(&str, &str)] = &[
    ("Z", "Atomic number (nuclear charge)"),
    ("n", "Principal quantum number (1, 2, 3, ...)"),
    ("R_H", "Rydberg energy (13.6057 eV)"),
    ("a₀", "Bohr radius (0.529177 Å)"),
    ("h", "Planck constant (6.62607×10⁻³⁴ J·s)"),
    ("c", "Speed of light (2.99792×10⁸ m/s)"),
    ("λ", "Wavelength"),
    ("ν", "Frequency"),
];
