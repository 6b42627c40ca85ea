//! Test helper utilities for molspring tests

use crate::engine::{Atom, Bond, Molecule};
use crate::runtime::SimulationResult;
use glam::DVec3;
use std::fs;
use std::path::PathBuf;

/// Check if two floating point values are approximately equal within tolerance
pub fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

/// Check if two vectors are approximately equal component-wise
pub fn approx_eq_vec(a: DVec3, b: DVec3, tol: f64) -> bool {
    (a - b).abs().max_element() <= tol
}

/// Unit-mass atom of element `element` at `pos`
pub fn atom_at(element: &str, pos: DVec3) -> Atom {
    Atom::new(element, pos, 1.0, 0.0).expect("unit mass is valid")
}

/// Two unit-mass hydrogens `distance` apart on the x axis, joined by one bond
pub fn diatomic(distance: f64, r0: f64, k: f64) -> Molecule {
    let mut molecule = Molecule::new();
    let a = molecule.add_atom(atom_at("H", DVec3::ZERO));
    let b = molecule.add_atom(atom_at("H", DVec3::new(distance, 0.0, 0.0)));
    molecule
        .add_bond(Bond::new(a, b, r0, k))
        .expect("diatomic bond is valid");
    molecule
}

/// Separation of the first two atoms
pub fn separation(molecule: &Molecule) -> f64 {
    let atoms = molecule.atoms();
    atoms[0].pos.distance(atoms[1].pos)
}

/// Path of a scenario fixture under `tests/data`
pub fn scenario_path(filename: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("data");
    path.push(filename);
    path
}

/// Run a scenario fixture from `tests/data`
pub fn run_scenario_file(filename: &str) -> Result<SimulationResult, Box<dyn std::error::Error>> {
    let src = fs::read_to_string(scenario_path(filename))?;
    Ok(crate::run_scenario(&src)?)
}
