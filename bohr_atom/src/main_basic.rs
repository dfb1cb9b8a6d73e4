//! Basic Bohr Model Walkthrough
//!
//! Prints the core quantities of a hydrogen-like ion:
//! - Energy levels in joules and electronvolts
//! - Orbital radii in meters and ångström
//! - Balmer transitions with their colour
//! - Comparison against a second ion
//! - Ionization energy
//!
//! Usage:
//!   bohr_basic [--z 1] [--n-max 5] [--compare 2] [--equations] [-v]

use bohr_atom::{BohrError, BohrModel, EnergyLevelDiagram, SpectralSeries, BOHR_EQUATIONS, BOHR_VARIABLES};
use clap::Parser;
use common::{banner, equations_panel, logging, section, Align, Table};

/// Upper bound on tabulated levels and lines per series
const MAX_LEVEL: i64 = 1000;

#[derive(Parser, Debug)]
#[command(version, about = "Energy levels, orbit radii and Balmer lines of a hydrogen-like ion")]
struct Args {
    /// Atomic number of the ion (1 = hydrogen, 2 = He⁺, ...)
    #[arg(short, long, default_value_t = 1)]
    z: u32,

    /// Highest principal quantum number to tabulate
    #[arg(short, long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..=MAX_LEVEL))]
    n_max: u32,

    /// Atomic number of the ion to compare against
    #[arg(short, long, default_value_t = 2)]
    compare: u32,

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
    log::info!("running basic walkthrough for {atom} up to n={}", args.n_max);

    println!("{}", banner(&format!("BASIC EXAMPLE: HYDROGEN-LIKE ION, Z={}", atom.z())));
    println!("\nModel: {atom}");

    if args.equations {
        println!("\n{}", equations_panel("Bohr Model", BOHR_EQUATIONS, BOHR_VARIABLES));
    }

    print_energy_levels(&atom, args.n_max)?;
    print_orbital_radii(&atom, args.n_max)?;
    print_balmer_lines(&atom)?;
    print_comparison(&atom, &BohrModel::new(args.compare)?)?;
    print_ionization(&atom)?;

    println!("\n{}", banner("END OF EXAMPLE"));
    Ok(())
}

fn print_energy_levels(atom: &BohrModel, n_max: u32) -> Result<(), BohrError> {
    println!("{}", section("1. ENERGY LEVELS"));

    let diagram = EnergyLevelDiagram::new(atom, n_max, &[])?;

    let mut table = Table::new(["n", "E (J)", "E (eV)"]).align(0, Align::Left);
    for level in &diagram.levels {
        table.push_row([
            level.n.to_string(),
            format!("{:.4e}", atom.energy_level(level.n)?),
            format!("{:.3}", level.energy_ev),
        ]);
    }
    print!("{}", table.render());
    Ok(())
}

fn print_orbital_radii(atom: &BohrModel, n_max: u32) -> Result<(), BohrError> {
    println!("{}", section("2. ORBITAL RADII"));

    let mut table = Table::new(["n", "r (m)", "r (Å)"]).align(0, Align::Left);
    for n in 1..=n_max {
        table.push_row([
            n.to_string(),
            format!("{:.4e}", atom.orbital_radius(n)?),
            format!("{:.3}", atom.orbital_radius_angstrom(n)?),
        ]);
    }
    print!("{}", table.render());
    Ok(())
}

fn print_balmer_lines(atom: &BohrModel) -> Result<(), BohrError> {
    println!("{}", section("3. ELECTRONIC TRANSITIONS - BALMER SERIES"));
    println!("(transitions down to n=2)\n");

    let mut table = Table::new(["transition", "|ΔE| (J)", "λ (nm)", "ν (Hz)", "region"])
        .align(0, Align::Left)
        .align(4, Align::Left);
    for line in atom.series_lines(SpectralSeries::Balmer, 4)? {
        table.push_row([
            line.transition.to_string(),
            format!("{:.4e}", line.photon_energy()),
            format!("{:.1}", line.wavelength_nm),
            format!("{:.4e}", line.frequency),
            line.region().name().to_string(),
        ]);
    }
    print!("{}", table.render());
    Ok(())
}

fn print_comparison(atom: &BohrModel, other: &BohrModel) -> Result<(), BohrError> {
    println!("{}", section(&format!("4. COMPARISON: Z={} vs Z={}", atom.z(), other.z())));

    let e_atom = atom.energy_level_ev(1)?;
    let e_other = other.energy_level_ev(1)?;
    let r_atom = atom.orbital_radius_angstrom(1)?;
    let r_other = other.orbital_radius_angstrom(1)?;

    println!("\nGround state (n=1):");
    let mut table = Table::new(["ion", "E₁ (eV)", "r₁ (Å)"]).align(0, Align::Left);
    table.push_row([format!("Z={}", atom.z()), format!("{e_atom:.2}"), format!("{r_atom:.3}")]);
    table.push_row([format!("Z={}", other.z()), format!("{e_other:.2}"), format!("{r_other:.3}")]);
    print!("{}", table.render());

    println!("\nEnergy ratio: E(Z={})/E(Z={}) = {:.2}", other.z(), atom.z(), e_other / e_atom);
    println!("Radius ratio: r(Z={})/r(Z={}) = {:.2}", other.z(), atom.z(), r_other / r_atom);
    Ok(())
}

fn print_ionization(atom: &BohrModel) -> Result<(), BohrError> {
    println!("{}", section("5. IONIZATION ENERGY"));

    println!("\nEnergy needed to ionize Z={} from n=1:", atom.z());
    println!("  E_ionization = {:.2} eV", atom.ionization_energy_ev(1)?);
    println!("  Equivalent to {:.1} kJ/mol", atom.ionization_energy_kj_per_mol(1)?);
    Ok(())
}
