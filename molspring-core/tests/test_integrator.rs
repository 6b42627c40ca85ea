//! Tests for kinematic Euler integration

use glam::DVec3;
use molspring_core::integrator::integrate;
use molspring_core::tests::test_helpers::{approx_eq_vec, diatomic};

#[test]
fn test_atoms_at_rest_never_move() {
    // A strongly stretched bond: forces exist but integration ignores them
    let mut molecule = diatomic(1.5, 0.74, 450.0);
    let start: Vec<DVec3> = molecule.atoms().iter().map(|a| a.pos).collect();

    for _ in 0..1000 {
        let report = integrate(&mut molecule, 0.01);
        assert!(report.is_clean());
    }

    for (atom, pos) in molecule.atoms().iter().zip(start) {
        assert_eq!(atom.pos, pos);
    }
}

#[test]
fn test_position_advances_by_velocity() {
    let mut molecule = diatomic(1.5, 0.74, 450.0);
    molecule.atoms_mut()[0].vel = DVec3::new(1.0, 2.0, 3.0);

    integrate(&mut molecule, 0.5);
    integrate(&mut molecule, 0.5);

    let atoms = molecule.atoms();
    assert!(approx_eq_vec(atoms[0].pos, DVec3::new(1.0, 2.0, 3.0), 1e-12));
    assert_eq!(atoms[1].pos, DVec3::new(1.5, 0.0, 0.0));
}

#[test]
fn test_velocity_and_force_untouched() {
    let mut molecule = diatomic(1.5, 0.74, 450.0);
    molecule.atoms_mut()[1].vel = DVec3::new(-0.2, 0.0, 0.0);

    for _ in 0..10 {
        integrate(&mut molecule, 0.1);
    }

    let atoms = molecule.atoms();
    assert_eq!(atoms[1].vel, DVec3::new(-0.2, 0.0, 0.0));
    assert_eq!(atoms[0].force, DVec3::ZERO);
    assert_eq!(atoms[1].force, DVec3::ZERO);
}

#[test]
fn test_non_finite_velocity_is_reported() {
    let mut molecule = diatomic(1.5, 0.74, 450.0);
    molecule.atoms_mut()[1].vel = DVec3::new(f64::NAN, 0.0, 0.0);

    let report = integrate(&mut molecule, 0.1);

    assert_eq!(report.non_finite_atoms, vec![1]);
    assert!(!report.is_stable());
}
