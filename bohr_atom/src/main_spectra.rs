//! Spectral Series of a Hydrogen-like Ion
//!
//! Tabulates the Lyman (UV), Balmer (visible) and Paschen (IR) series and
//! prints text stand-ins for the usual charts:
//! - Energy-level ladder with the strongest transitions
//! - Emission spectrum strip on a wavelength axis
//! - Orbit radii
//!
//! Usage:
//!   bohr_spectra [--z 1] [--n-max 8] [--lines 5] [--max-nm 2000] [--equations] [-v]

use bohr_atom::{
    BohrError, BohrModel, EmissionSpectrum, EnergyLevelDiagram, OrbitDiagram, SpectralSeries, BOHR_EQUATIONS,
    BOHR_VARIABLES,
};
use clap::Parser;
use common::{banner, equations_panel, logging, rule, section, Align, Table};

const LADDER_WIDTH: usize = 40;
const STRIP_WIDTH: usize = 70;
const ORBIT_SEGMENTS: u32 = 72;

/// Series shown by this demo
const SERIES: [SpectralSeries; 3] = [SpectralSeries::Lyman, SpectralSeries::Balmer, SpectralSeries::Paschen];

/// Transitions highlighted on the level ladder: the first lines of each series
const LADDER_TRANSITIONS: [(u32, u32); 8] = [(2, 1), (3, 1), (4, 1), (3, 2), (4, 2), (5, 2), (4, 3), (5, 3)];

/// Upper bound on tabulated levels and lines per series
const MAX_LEVEL: i64 = 1000;

#[derive(Parser, Debug)]
#[command(version, about = "Lyman, Balmer and Paschen series of a hydrogen-like ion")]
struct Args {
    /// Atomic number of the ion (1 = hydrogen, 2 = He⁺, ...)
    #[arg(short, long, default_value_t = 1)]
    z: u32,

    /// Highest level drawn on the energy ladder and orbit table
    #[arg(short, long, default_value_t = 8, value_parser = clap::value_parser!(u32).range(1..=MAX_LEVEL))]
    n_max: u32,

    /// Lines computed per series
    #[arg(short, long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..=MAX_LEVEL))]
    lines: u32,

    /// Right edge of the spectrum strip in nm
    #[arg(long, default_value_t = 2000.0)]
    max_nm: f64,

    /// Print the equation panel before the tables
    #[arg(long)]
    equations: bool,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all log output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> Result<(), BohrError> {
    let args = Args::parse();
    logging::init(args.verbose, args.quiet);

    let atom = BohrModel::new(args.z)?;
    log::info!("analysing spectral series of {atom}");

    println!("{}", banner(&format!("SPECTRAL SERIES OF Z={}", atom.z())));

    if args.equations {
        println!("\n{}", equations_panel("Bohr Model", BOHR_EQUATIONS, BOHR_VARIABLES));
    }

    let requests: Vec<(SpectralSeries, u32)> = SERIES.iter().map(|&s| (s, args.lines)).collect();
    let spectrum = EmissionSpectrum::from_series(&atom, &requests)?;

    for series in SERIES {
        print_series(&spectrum, series);
    }

    println!("\n{}", banner("CHART DATA"));
    print_level_ladder(&atom, args.n_max)?;
    print_spectrum_strip(&spectrum, args.max_nm);
    print_orbits(&atom, args.n_max)?;

    print_summary(&atom, &spectrum);
    Ok(())
}

fn print_series(spectrum: &EmissionSpectrum, series: SpectralSeries) {
    println!(
        "{}",
        section(&format!("{} SERIES (transitions down to n={})", series.name().to_uppercase(), series.final_level()))
    );

    let mut table = Table::new(["transition", "line", "λ (nm)", "ν (Hz)", "ΔE (eV)", "region"])
        .align(0, Align::Left)
        .align(1, Align::Left)
        .align(5, Align::Left);
    for line in spectrum.of_series(series) {
        table.push_row([
            line.line.transition.to_string(),
            line.label(),
            format!("{:.2}", line.wavelength_nm()),
            format!("{:.4e}", line.line.frequency),
            format!("{:.3}", line.line.photon_energy_ev()),
            line.line.region().name().to_string(),
        ]);
    }
    print!("{}", table.render());
}

fn print_level_ladder(atom: &BohrModel, n_max: u32) -> Result<(), BohrError> {
    println!("{}", section("ENERGY LEVELS (bar length = binding energy)"));

    let transitions: Vec<(u32, u32)> = LADDER_TRANSITIONS
        .iter()
        .copied()
        .filter(|&(ni, nf)| ni <= n_max && nf <= n_max)
        .collect();
    let diagram = EnergyLevelDiagram::new(atom, n_max, &transitions)?;
    let (ground, _) = diagram.energy_range_ev();

    for level in diagram.levels.iter().rev() {
        let depth = (level.energy_ev / ground * LADDER_WIDTH as f64).round().max(1.0) as usize;
        println!("n={:<3} {:>9.3} eV  {}", level.n, level.energy_ev, "█".repeat(depth));
    }

    if !diagram.transitions.is_empty() {
        println!("\nHighlighted transitions:");
        for line in &diagram.transitions {
            println!("  {:<6} {:>9.2} nm  {:>7.3} eV", line.label(), line.wavelength_nm, line.photon_energy_ev());
        }
    }
    Ok(())
}

fn print_spectrum_strip(spectrum: &EmissionSpectrum, max_nm: f64) {
    println!("{}", section(&format!("EMISSION SPECTRUM (0 - {max_nm:.0} nm)")));

    if max_nm <= 0.0 {
        log::warn!("spectrum strip skipped: --max-nm must be positive, got {max_nm}");
        return;
    }

    let mut strip = vec![' '; STRIP_WIDTH];
    for line in spectrum.within(0.0, max_nm) {
        let column = (line.wavelength_nm() / max_nm * (STRIP_WIDTH - 1) as f64).round() as usize;
        if let Some(cell) = strip.get_mut(column) {
            *cell = line.series.symbol().chars().next().unwrap_or('|');
        }
    }

    println!("{}", strip.iter().collect::<String>());
    println!("{}", rule('-', STRIP_WIDTH));
    let right = format!("{max_nm:.0} nm");
    println!("0 nm{:>width$}", right, width = STRIP_WIDTH - 4);

    let hidden = spectrum.lines.len() - spectrum.within(0.0, max_nm).count();
    if hidden > 0 {
        println!("({hidden} lines beyond the strip)");
    }
    let legend: Vec<String> = SERIES
        .iter()
        .map(|s| format!("{} = {}", s.symbol().chars().next().unwrap_or('|'), s.name()))
        .collect();
    println!("{}", legend.join(", "));
}

fn print_orbits(atom: &BohrModel, n_max: u32) -> Result<(), BohrError> {
    println!("{}", section("ORBITS"));

    let diagram = OrbitDiagram::new(atom, n_max, ORBIT_SEGMENTS)?;
    let innermost = diagram.orbits.first().map_or(1.0, |o| o.radius_angstrom);

    let mut table = Table::new(["n", "r (Å)", "r / r₁", "outline points"]).align(0, Align::Left);
    for orbit in &diagram.orbits {
        table.push_row([
            orbit.n.to_string(),
            format!("{:.3}", orbit.radius_angstrom),
            format!("{:.0}", orbit.radius_angstrom / innermost),
            orbit.path.len().to_string(),
        ]);
    }
    print!("{}", table.render());
    println!("Plot extent: ±{:.2} Å", diagram.max_radius_angstrom());
    Ok(())
}

fn print_summary(atom: &BohrModel, spectrum: &EmissionSpectrum) {
    println!("\n{}", banner("WAVELENGTH SUMMARY"));

    for series in SERIES {
        if let Some((lo, hi)) = spectrum.series_range_nm(series) {
            println!(
                "\n{} series: {lo:.1} - {hi:.1} nm (limit {:.1} nm)",
                series.name(),
                atom.series_limit_nm(series)
            );
        }
    }

    println!("\nNamed Balmer lines:");
    for line in spectrum.of_series(SpectralSeries::Balmer).take(4) {
        println!(
            "  {:<5} ({}): {:.1} nm ({})",
            line.label(),
            line.line.label(),
            line.wavelength_nm(),
            line.line.region().name()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_flags_are_bounded() {
        let args = Args::try_parse_from(["bohr_spectra", "--n-max", "1000", "--lines", "1000"]).unwrap();
        assert_eq!((args.n_max, args.lines), (1000, 1000));

        assert!(Args::try_parse_from(["bohr_spectra", "--n-max", "100000000"]).is_err());
        assert!(Args::try_parse_from(["bohr_spectra", "--lines", "1001"]).is_err());
        assert!(Args::try_parse_from(["bohr_spectra", "--lines", "0"]).is_err());
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["bohr_spectra"]).unwrap();
        assert_eq!((args.z, args.n_max, args.lines), (1, 8, 5));
        assert_eq!(args.max_nm, 2000.0);
    }
}
