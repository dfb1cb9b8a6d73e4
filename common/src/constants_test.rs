#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::constants::*;
    use crate::units::*;

    #[test]
    fn test_rydberg_energy_in_ev() {
        assert_relative_eq!(RYDBERG_ENERGY_EV, 13.605_693_122_994, max_relative = 1e-12);
    }

    #[test]
    fn test_speed_of_light_in_nm() {
        assert_relative_eq!(C_NM_PER_S, 2.997_924_58e17, max_relative = 1e-15);
    }

    #[test]
    fn test_energy_conversions() {
        assert_relative_eq!(joules_to_ev(J_PER_EV), 1.0);
        assert_relative_eq!(ev_to_joules(1.0), ELEMENTARY_CHARGE);

        let original = -13.6;
        assert_relative_eq!(joules_to_ev(ev_to_joules(original)), original, max_relative = 1e-12);

        assert_relative_eq!(ev_to_kj_per_mol(1.0), 96.485);
    }

    #[test]
    fn test_length_conversions() {
        assert_relative_eq!(meters_to_angstrom(BOHR_RADIUS), 0.529_177_210_903, max_relative = 1e-12);
        assert_relative_eq!(meters_to_nm(656.0e-9), 656.0, max_relative = 1e-12);
    }
}
