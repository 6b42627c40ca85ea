//! Tests for molecule assembly and energy aggregation

use glam::DVec3;
use molspring_core::engine::{Atom, Bond, Molecule};
use molspring_core::error::BuildError;
use molspring_core::tests::test_helpers::{approx_eq, atom_at, diatomic};

fn triatomic() -> Molecule {
    let mut molecule = Molecule::new();
    molecule.add_atom(atom_at("H", DVec3::new(-1.0, 0.0, 0.0)));
    molecule.add_atom(atom_at("O", DVec3::ZERO));
    molecule.add_atom(atom_at("H", DVec3::new(0.0, 2.0, 0.0)));
    molecule
}

#[test]
fn test_new_molecule_is_empty() {
    let molecule = Molecule::new();
    assert!(molecule.atoms().is_empty());
    assert!(molecule.bonds().is_empty());
    assert_eq!(molecule.total_energy(), 0.0);
}

#[test]
fn test_add_atom_returns_insertion_index() {
    let mut molecule = Molecule::new();
    assert_eq!(molecule.add_atom(atom_at("H", DVec3::ZERO)), 0);
    assert_eq!(molecule.add_atom(atom_at("O", DVec3::X)), 1);
    assert_eq!(molecule.atoms()[1].element, "O");
}

#[test]
fn test_new_atom_starts_at_rest() {
    let atom = Atom::new("H", DVec3::new(1.0, 2.0, 3.0), 1.008, 0.4).unwrap();
    assert_eq!(atom.vel, DVec3::ZERO);
    assert_eq!(atom.force, DVec3::ZERO);
    assert_eq!(atom.mass(), 1.008);
    assert_eq!(atom.charge, 0.4);
}

#[test]
fn test_non_positive_mass_rejected() {
    for mass in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let result = Atom::new("H", DVec3::ZERO, mass, 0.0);
        assert!(
            matches!(result, Err(BuildError::InvalidMass { .. })),
            "mass {mass} should be rejected"
        );
    }
}

#[test]
fn test_self_bond_rejected() {
    let mut molecule = triatomic();
    let result = molecule.add_bond(Bond::new(1, 1, 1.0, 1.0));
    assert_eq!(result, Err(BuildError::SelfBond(1)));
    assert!(molecule.bonds().is_empty());
}

#[test]
fn test_bond_to_foreign_atom_rejected() {
    let mut molecule = triatomic();
    let result = molecule.add_bond(Bond::new(0, 3, 1.0, 1.0));
    assert_eq!(result, Err(BuildError::AtomOutOfRange { index: 3, count: 3 }));
}

#[test]
fn test_invalid_bond_parameters_rejected() {
    let mut molecule = triatomic();
    assert!(matches!(
        molecule.add_bond(Bond::new(0, 1, 0.0, 1.0)),
        Err(BuildError::InvalidBondParameter { name: "r0", .. })
    ));
    assert!(matches!(
        molecule.add_bond(Bond::new(0, 1, 1.0, -5.0)),
        Err(BuildError::InvalidBondParameter { name: "k", .. })
    ));
}

#[test]
fn test_total_energy_sums_bonds() {
    let mut molecule = triatomic();
    // O-H1 at distance 1.0 with r0 0.5: 0.5 * 10 * 0.25 = 1.25
    molecule.add_bond(Bond::new(0, 1, 0.5, 10.0)).unwrap();
    // O-H2 at distance 2.0 with r0 1.0: 0.5 * 4 * 1.0 = 2.0
    molecule.add_bond(Bond::new(1, 2, 1.0, 4.0)).unwrap();
    assert!(approx_eq(molecule.total_energy(), 3.25, 1e-12));
}

#[test]
fn test_total_energy_tracks_position_changes() {
    let mut molecule = diatomic(0.74, 0.74, 450.0);
    assert_eq!(molecule.total_energy(), 0.0);

    molecule.atoms_mut()[1].pos.x = 1.74;
    assert!(approx_eq(molecule.total_energy(), 225.0, 1e-9));
}

#[test]
fn test_bond_endpoints() {
    let molecule = diatomic(1.5, 0.74, 450.0);
    let (a, b) = molecule.bond_endpoints(0).unwrap();
    assert_eq!(a.pos, DVec3::ZERO);
    assert_eq!(b.pos, DVec3::new(1.5, 0.0, 0.0));
    assert!(molecule.bond_endpoints(1).is_none());
}
