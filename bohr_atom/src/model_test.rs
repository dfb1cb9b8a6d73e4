#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use common::constants::{BOHR_RADIUS, C_NM_PER_S, J_PER_EV, RYDBERG_ENERGY};

    use crate::error::BohrError;
    use crate::model::BohrModel;

    #[test]
    fn test_construction() {
        let model = BohrModel::new(3).unwrap();
        assert_eq!(model.z(), 3);
        assert_eq!(model.to_string(), "BohrModel(Z=3)");

        assert_eq!(BohrModel::hydrogen(), BohrModel::new(1).unwrap());
        assert_eq!(BohrModel::default().z(), 1);
    }

    #[test]
    fn test_zero_atomic_number_is_rejected() {
        let err = BohrModel::new(0).unwrap_err();
        assert!(matches!(err, BohrError::InvalidParameter { name: "Z", value: 0, .. }));
        assert_eq!(err.to_string(), "Invalid parameter Z = 0: must be at least 1");
    }

    #[test]
    fn test_hydrogen_energy_levels() {
        let hydrogen = BohrModel::hydrogen();

        assert_relative_eq!(hydrogen.energy_level(1).unwrap(), -RYDBERG_ENERGY);
        assert_relative_eq!(hydrogen.energy_level(2).unwrap(), -RYDBERG_ENERGY / 4.0);
        assert_relative_eq!(hydrogen.energy_level_ev(1).unwrap(), -13.605_693, max_relative = 1e-6);
        assert_relative_eq!(hydrogen.energy_level_ev(2).unwrap(), -3.401_423, max_relative = 1e-6);
    }

    #[test]
    fn test_ev_uses_the_elementary_charge() {
        let model = BohrModel::new(5).unwrap();
        for n in 1..=10 {
            let joules = model.energy_level(n).unwrap();
            assert_eq!(model.energy_level_ev(n).unwrap(), joules / J_PER_EV);
        }
    }

    #[test]
    fn test_energy_scales_with_z_squared() {
        let hydrogen = BohrModel::hydrogen();
        let helium_ion = BohrModel::new(2).unwrap();
        let lithium_ion = BohrModel::new(3).unwrap();

        let e_h = hydrogen.energy_level_ev(1).unwrap();
        assert_relative_eq!(helium_ion.energy_level_ev(1).unwrap(), 4.0 * e_h, max_relative = 1e-12);
        assert_relative_eq!(lithium_ion.energy_level_ev(1).unwrap(), 9.0 * e_h, max_relative = 1e-12);
        assert_relative_eq!(helium_ion.energy_level_ev(1).unwrap(), -54.4228, max_relative = 1e-5);
    }

    #[test]
    fn test_energy_levels_rise_toward_zero() {
        let model = BohrModel::new(2).unwrap();
        let mut previous = model.energy_level(1).unwrap();
        assert!(previous < 0.0);
        for n in 2..=50 {
            let energy = model.energy_level(n).unwrap();
            assert!(energy < 0.0);
            assert!(energy > previous);
            previous = energy;
        }
    }

    #[test]
    fn test_orbital_radius() {
        let hydrogen = BohrModel::hydrogen();
        assert_relative_eq!(hydrogen.orbital_radius(1).unwrap(), BOHR_RADIUS);
        assert_relative_eq!(hydrogen.orbital_radius(3).unwrap(), 9.0 * BOHR_RADIUS);
        assert_relative_eq!(hydrogen.orbital_radius_angstrom(1).unwrap(), 0.529_177, max_relative = 1e-6);

        let helium_ion = BohrModel::new(2).unwrap();
        assert_relative_eq!(
            helium_ion.orbital_radius_angstrom(1).unwrap(),
            hydrogen.orbital_radius_angstrom(1).unwrap() / 2.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_level_zero_is_rejected() {
        let model = BohrModel::hydrogen();
        assert!(matches!(
            model.energy_level(0),
            Err(BohrError::InvalidParameter { name: "n", value: 0, .. })
        ));
        assert!(model.energy_level_ev(0).is_err());
        assert!(model.orbital_radius(0).is_err());
        assert!(model.orbital_radius_angstrom(0).is_err());
        assert!(model.ionization_energy(0).is_err());
    }

    #[test]
    fn test_ionization_energy() {
        let hydrogen = BohrModel::hydrogen();
        assert_relative_eq!(hydrogen.ionization_energy_ev(1).unwrap(), 13.605_693, max_relative = 1e-6);
        assert_relative_eq!(hydrogen.ionization_energy(2).unwrap(), RYDBERG_ENERGY / 4.0);
        assert_relative_eq!(hydrogen.ionization_energy_kj_per_mol(1).unwrap(), 1312.745, max_relative = 1e-6);
    }

    #[test]
    fn test_transition_energy_sign() {
        let hydrogen = BohrModel::hydrogen();

        let emission = hydrogen.transition_energy(3, 2).unwrap();
        let absorption = hydrogen.transition_energy(2, 3).unwrap();
        assert!(emission < 0.0);
        assert!(absorption > 0.0);
        assert_relative_eq!(emission, -absorption);
        assert_relative_eq!(emission, -5.0 * RYDBERG_ENERGY / 36.0, max_relative = 1e-12);

        assert_eq!(hydrogen.transition_energy(4, 4).unwrap(), 0.0);
    }

    #[test]
    fn test_transition_names_the_offending_level() {
        let hydrogen = BohrModel::hydrogen();
        assert!(matches!(
            hydrogen.transition_energy(0, 2),
            Err(BohrError::InvalidParameter { name: "n_initial", .. })
        ));
        assert!(matches!(
            hydrogen.transition_energy(2, 0),
            Err(BohrError::InvalidParameter { name: "n_final", .. })
        ));
        assert!(matches!(
            hydrogen.transition_wavelength_nm(0, 0),
            Err(BohrError::InvalidParameter { name: "n_initial", .. })
        ));
    }

    #[test]
    fn test_balmer_alpha() {
        let hydrogen = BohrModel::hydrogen();
        assert_relative_eq!(hydrogen.transition_wavelength_nm(3, 2).unwrap(), 656.112, max_relative = 1e-5);
        assert_relative_eq!(hydrogen.transition_frequency(3, 2).unwrap(), 4.569_225e14, max_relative = 1e-6);

        // Absorption gives the same photon.
        assert_relative_eq!(
            hydrogen.transition_wavelength_nm(2, 3).unwrap(),
            hydrogen.transition_wavelength_nm(3, 2).unwrap()
        );
    }

    #[test]
    fn test_null_transition_is_undefined() {
        let hydrogen = BohrModel::hydrogen();
        let expected = BohrError::DivisionUndefined { n_initial: 2, n_final: 2 };
        assert_eq!(hydrogen.transition_wavelength_nm(2, 2), Err(expected));
        assert_eq!(hydrogen.transition_frequency(2, 2), Err(expected));
        assert_eq!(hydrogen.transition(2, 2), Err(expected));
    }

    #[test]
    fn test_wavelength_times_frequency_is_c() {
        let model = BohrModel::new(4).unwrap();
        for (ni, nf) in [(2, 1), (7, 3), (1, 6), (20, 19)] {
            let product =
                model.transition_wavelength_nm(ni, nf).unwrap() * model.transition_frequency(ni, nf).unwrap();
            assert_relative_eq!(product, C_NM_PER_S, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_transition_bundle_matches_individual_queries() {
        let model = BohrModel::new(2).unwrap();
        let line = model.transition(4, 3).unwrap();

        assert_eq!(line.transition.n_initial, 4);
        assert_eq!(line.transition.n_final, 3);
        assert_eq!(line.energy, model.transition_energy(4, 3).unwrap());
        assert_eq!(line.wavelength_nm, model.transition_wavelength_nm(4, 3).unwrap());
        assert_eq!(line.frequency, model.transition_frequency(4, 3).unwrap());
        assert_relative_eq!(line.wavelength_nm, 468.652, max_relative = 1e-5);
    }

    #[test]
    fn test_model_is_shareable_across_threads() {
        let model = BohrModel::new(3).unwrap();
        let expected = model.energy_level(2).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(move || model.energy_level(2).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }
}
