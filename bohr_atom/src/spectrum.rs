//! Spectral series and emission spectra
//!
//! Groups emission lines by the level they end on and classifies wavelengths
//! into ultraviolet, visible (with a colour band) and infrared.

use common::constants::{HC, RYDBERG_ENERGY};
use common::units::meters_to_nm;

use crate::error::{BohrError, Result};
use crate::model::BohrModel;
use crate::transition::TransitionLine;

/// Lower edge of the visible band in nm
pub const VISIBLE_MIN_NM: f64 = 380.0;
/// Upper edge of the visible band in nm
pub const VISIBLE_MAX_NM: f64 = 750.0;

/// Named families of emission lines sharing a final level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpectralSeries {
    Lyman,
    Balmer,
    Paschen,
    Brackett,
    Pfund,
}

impl SpectralSeries {
    pub const ALL: [SpectralSeries; 5] = [
        SpectralSeries::Lyman,
        SpectralSeries::Balmer,
        SpectralSeries::Paschen,
        SpectralSeries::Brackett,
        SpectralSeries::Pfund,
    ];

    /// The level every line of the series ends on
    pub fn final_level(&self) -> u32 {
        match self {
            SpectralSeries::Lyman => 1,
            SpectralSeries::Balmer => 2,
            SpectralSeries::Paschen => 3,
            SpectralSeries::Brackett => 4,
            SpectralSeries::Pfund => 5,
        }
    }

    pub fn from_final_level(n_final: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.final_level() == n_final)
    }

    pub fn name(&self) -> &'static str {
        match self {
            SpectralSeries::Lyman => "Lyman",
            SpectralSeries::Balmer => "Balmer",
            SpectralSeries::Paschen => "Paschen",
            SpectralSeries::Brackett => "Brackett",
            SpectralSeries::Pfund => "Pfund",
        }
    }

    /// Prefix used in line designations (Ly-α, H-α, Pa-α, ...)
    pub fn symbol(&self) -> &'static str {
        match self {
            SpectralSeries::Lyman => "Ly",
            SpectralSeries::Balmer => "H",
            SpectralSeries::Paschen => "Pa",
            SpectralSeries::Brackett => "Br",
            SpectralSeries::Pfund => "Pf",
        }
    }

    /// Greek-letter designation of the line starting at `n_initial`.
    ///
    /// `None` when `n_initial` does not feed this series or lies beyond ε.
    pub fn line_name(&self, n_initial: u32) -> Option<String> {
        const GREEK: [char; 5] = ['α', 'β', 'γ', 'δ', 'ε'];
        let step = n_initial.checked_sub(self.final_level())?;
        let letter = GREEK.get(step.checked_sub(1)? as usize)?;
        Some(format!("{}-{}", self.symbol(), letter))
    }
}

/// Colour band of a visible wavelength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisibleColor {
    Violet,
    Blue,
    Green,
    Yellow,
    Orange,
    Red,
}

impl VisibleColor {
    /// Band thresholds in nm; anything at or above 620 is red.
    pub fn classify(wavelength_nm: f64) -> Self {
        if wavelength_nm < 450.0 {
            VisibleColor::Violet
        } else if wavelength_nm < 495.0 {
            VisibleColor::Blue
        } else if wavelength_nm < 570.0 {
            VisibleColor::Green
        } else if wavelength_nm < 590.0 {
            VisibleColor::Yellow
        } else if wavelength_nm < 620.0 {
            VisibleColor::Orange
        } else {
            VisibleColor::Red
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            VisibleColor::Violet => "violet",
            VisibleColor::Blue => "blue",
            VisibleColor::Green => "green",
            VisibleColor::Yellow => "yellow",
            VisibleColor::Orange => "orange",
            VisibleColor::Red => "red",
        }
    }
}

/// Part of the electromagnetic spectrum a wavelength falls in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpectralRegion {
    Ultraviolet,
    Visible(VisibleColor),
    Infrared,
}

impl SpectralRegion {
    pub fn classify(wavelength_nm: f64) -> Self {
        if wavelength_nm < VISIBLE_MIN_NM {
            SpectralRegion::Ultraviolet
        } else if wavelength_nm < VISIBLE_MAX_NM {
            SpectralRegion::Visible(VisibleColor::classify(wavelength_nm))
        } else {
            SpectralRegion::Infrared
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, SpectralRegion::Visible(_))
    }

    pub fn name(&self) -> &'static str {
        match self {
            SpectralRegion::Ultraviolet => "UV",
            SpectralRegion::Visible(color) => color.name(),
            SpectralRegion::Infrared => "IR",
        }
    }
}

impl BohrModel {
    /// The first `count` emission lines of a series, lowest upper level first.
    pub fn series_lines(&self, series: SpectralSeries, count: u32) -> Result<Vec<TransitionLine>> {
        if count < 1 {
            return Err(BohrError::below_one("count", count));
        }
        let n_final = series.final_level();
        let last = n_final.checked_add(count).ok_or(BohrError::InvalidParameter {
            name: "count",
            value: count,
            reason: "upper level overflows",
        })?;

        log::trace!("{} series for Z={}: {} lines", series.name(), self.z(), count);
        ((n_final + 1)..=last)
            .map(|n_initial| self.transition(n_initial, n_final))
            .collect()
    }

    /// Short-wavelength limit of a series (n_initial → ∞) in nm.
    pub fn series_limit_nm(&self, series: SpectralSeries) -> f64 {
        let z = self.z() as f64;
        let n = series.final_level() as f64;
        let energy = z * z * RYDBERG_ENERGY / (n * n);
        meters_to_nm(HC / energy)
    }
}

/// One emission line tagged with its series
#[derive(Debug, Clone, PartialEq)]
pub struct SpectralLine {
    pub series: SpectralSeries,
    pub line: TransitionLine,
}

impl SpectralLine {
    pub fn wavelength_nm(&self) -> f64 {
        self.line.wavelength_nm
    }

    /// `Ly-α` style name when one exists, otherwise the `3→2` label
    pub fn label(&self) -> String {
        self.series
            .line_name(self.line.transition.n_initial)
            .unwrap_or_else(|| self.line.label())
    }
}

/// Emission lines of one ion, ready to be drawn against a wavelength axis
#[derive(Debug, Clone, PartialEq)]
pub struct EmissionSpectrum {
    pub z: u32,
    pub lines: Vec<SpectralLine>,
}

impl EmissionSpectrum {
    /// Collect `count` lines from each requested series.
    pub fn from_series(model: &BohrModel, requests: &[(SpectralSeries, u32)]) -> Result<Self> {
        let mut lines = Vec::new();
        for &(series, count) in requests {
            for line in model.series_lines(series, count)? {
                lines.push(SpectralLine { series, line });
            }
        }
        log::debug!("emission spectrum for Z={} with {} lines", model.z(), lines.len());
        Ok(Self { z: model.z(), lines })
    }

    /// Lines whose wavelength lies in `[min_nm, max_nm]`
    pub fn within(&self, min_nm: f64, max_nm: f64) -> impl Iterator<Item = &SpectralLine> + '_ {
        self.lines
            .iter()
            .filter(move |l| l.wavelength_nm() >= min_nm && l.wavelength_nm() <= max_nm)
    }

    pub fn of_series(&self, series: SpectralSeries) -> impl Iterator<Item = &SpectralLine> + '_ {
        self.lines.iter().filter(move |l| l.series == series)
    }

    /// Shortest and longest wavelength, `None` when empty
    pub fn range_nm(&self) -> Option<(f64, f64)> {
        wavelength_range(self.lines.iter())
    }

    pub fn series_range_nm(&self, series: SpectralSeries) -> Option<(f64, f64)> {
        wavelength_range(self.of_series(series))
    }
}

fn wavelength_range<'a>(lines: impl Iterator<Item = &'a SpectralLine>) -> Option<(f64, f64)> {
    lines.map(SpectralLine::wavelength_nm).fold(None, |acc, wl| match acc {
        None => Some((wl, wl)),
        Some((lo, hi)) => Some((lo.min(wl), hi.max(wl))),
    })
}
