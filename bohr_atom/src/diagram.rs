//! Chart data for energy-level and orbit diagrams
//!
//! Only numbers live here. Turning them into pictures is left to whatever
//! charting front end consumes them.

use glam::DVec2;
use std::f64::consts::TAU;

use crate::error::{BohrError, Result};
use crate::model::BohrModel;
use crate::transition::TransitionLine;

/// Energy of one level for the level ladder
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelPoint {
    pub n: u32,
    pub energy_ev: f64,
}

/// Levels 1..=n_max plus the transitions drawn as arrows between them
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyLevelDiagram {
    pub z: u32,
    pub levels: Vec<LevelPoint>,
    pub transitions: Vec<TransitionLine>,
}

impl EnergyLevelDiagram {
    /// Every transition must connect two distinct levels within `1..=n_max`.
    pub fn new(model: &BohrModel, n_max: u32, transitions: &[(u32, u32)]) -> Result<Self> {
        if n_max < 1 {
            return Err(BohrError::below_one("n_max", n_max));
        }

        let levels = (1..=n_max)
            .map(|n| {
                Ok(LevelPoint {
                    n,
                    energy_ev: model.energy_level_ev(n)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut lines = Vec::with_capacity(transitions.len());
        for &(n_initial, n_final) in transitions {
            for (name, n) in [("n_initial", n_initial), ("n_final", n_final)] {
                if n > n_max {
                    return Err(BohrError::InvalidParameter {
                        name,
                        value: n,
                        reason: "level lies above the diagram's n_max",
                    });
                }
            }
            lines.push(model.transition(n_initial, n_final)?);
        }

        log::trace!(
            "energy level diagram for Z={}: {} levels, {} transitions",
            model.z(),
            levels.len(),
            lines.len()
        );

        Ok(Self {
            z: model.z(),
            levels,
            transitions: lines,
        })
    }

    /// Axis extent in eV: ground state up to the ionization limit at 0.
    pub fn energy_range_ev(&self) -> (f64, f64) {
        let lowest = self.levels.first().map_or(0.0, |l| l.energy_ev);
        (lowest, 0.0)
    }

    pub fn level(&self, n: u32) -> Option<&LevelPoint> {
        self.levels.iter().find(|l| l.n == n)
    }
}

/// One circular orbit
#[derive(Debug, Clone, PartialEq)]
pub struct Orbit {
    pub n: u32,
    pub radius_angstrom: f64,
    /// Closed polyline in Å; the last point repeats the first.
    pub path: Vec<DVec2>,
}

impl Orbit {
    /// Position on the orbit at `angle` radians from the +x axis
    pub fn point_at(&self, angle: f64) -> DVec2 {
        DVec2::new(angle.cos(), angle.sin()) * self.radius_angstrom
    }
}

/// Concentric orbits 1..=n_max, centred on the nucleus at the origin
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitDiagram {
    pub z: u32,
    pub orbits: Vec<Orbit>,
}

impl OrbitDiagram {
    /// `segments` is the number of straight pieces per circle, at least 3.
    pub fn new(model: &BohrModel, n_max: u32, segments: u32) -> Result<Self> {
        if n_max < 1 {
            return Err(BohrError::below_one("n_max", n_max));
        }
        if segments < 3 {
            return Err(BohrError::InvalidParameter {
                name: "segments",
                value: segments,
                reason: "a closed orbit needs at least 3 segments",
            });
        }

        let orbits = (1..=n_max)
            .map(|n| {
                let radius_angstrom = model.orbital_radius_angstrom(n)?;
                Ok(Orbit {
                    n,
                    radius_angstrom,
                    path: circle(radius_angstrom, segments),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            z: model.z(),
            orbits,
        })
    }

    /// Radius of the outermost orbit in Å
    pub fn max_radius_angstrom(&self) -> f64 {
        self.orbits.last().map_or(0.0, |o| o.radius_angstrom)
    }
}

fn circle(radius: f64, segments: u32) -> Vec<DVec2> {
    let mut path: Vec<DVec2> = (0..segments)
        .map(|i| {
            let angle = TAU * i as f64 / segments as f64;
            DVec2::new(angle.cos(), angle.sin()) * radius
        })
        .collect();
    let first = path[0];
    path.push(first);
    path
}
