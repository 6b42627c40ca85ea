//! Static checks on scenarios and molecule construction
//!
//! [`analyze_scenario`] collects every problem it can find so a user sees
//! them all at once; [`build_molecule`] stops at the first one.

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::elements::{MassTable, StandardMasses};
use crate::engine::{Atom, Bond, Molecule};
use crate::error::BuildError;
use crate::runtime::StepMode;
use crate::scenario::Scenario;
use glam::DVec3;
use std::collections::HashMap;

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Analyze a scenario against the standard mass table
pub fn analyze_scenario(scenario: &Scenario) -> Diagnostics {
    analyze_scenario_with(scenario, &StandardMasses)
}

/// Analyze a scenario and return diagnostics; atoms without an explicit
/// mass must resolve through `masses`
pub fn analyze_scenario_with(scenario: &Scenario, masses: &dyn MassTable) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();

    // Atoms: duplicate names and resolvable masses
    let mut names = HashMap::new();
    for (idx, atom) in scenario.atoms.iter().enumerate() {
        let label = atom.label(idx);
        if names.insert(label.clone(), idx).is_some() {
            diagnostics.push(Diagnostic::error(format!(
                "duplicate atom name '{}'",
                label
            )));
        }
        let mass = match atom.mass {
            Some(mass) => Some(mass),
            None => match masses.mass_of(&atom.element) {
                Ok(mass) => Some(mass),
                Err(e) => {
                    diagnostics.push(Diagnostic::error(format!("atom '{}': {}", label, e)));
                    None
                }
            },
        };
        if let Some(mass) = mass {
            if !is_positive(mass) {
                diagnostics.push(Diagnostic::error(format!(
                    "atom '{}' has invalid mass {}",
                    label, mass
                )));
            }
        }
    }

    // Bonds: references and parameters
    for (idx, bond) in scenario.bonds.iter().enumerate() {
        for name in &bond.atoms {
            if !names.contains_key(name) {
                diagnostics.push(Diagnostic::error(format!(
                    "bond {} references unknown atom '{}'",
                    idx, name
                )));
            }
        }
        if bond.atoms[0] == bond.atoms[1] {
            diagnostics.push(Diagnostic::error(format!(
                "bond {} connects '{}' to itself",
                idx, bond.atoms[0]
            )));
        }
        if !is_positive(bond.r0) {
            diagnostics.push(Diagnostic::error(format!(
                "bond {} has invalid equilibrium length {}",
                idx, bond.r0
            )));
        }
        if !is_positive(bond.k) {
            diagnostics.push(Diagnostic::error(format!(
                "bond {} has invalid stiffness {}",
                idx, bond.k
            )));
        }
    }

    // Run parameters
    let simulate = &scenario.simulate;
    match simulate.method {
        StepMode::Integrate { dt } if !is_positive(dt) => {
            diagnostics.push(Diagnostic::error(format!("invalid time step dt = {}", dt)));
        }
        StepMode::Minimize { gamma } if !is_positive(gamma) => {
            diagnostics.push(Diagnostic::error(format!(
                "invalid minimization step gamma = {}",
                gamma
            )));
        }
        _ => {}
    }
    if simulate.steps == 0 {
        diagnostics.push(Diagnostic::warning("simulation runs zero steps"));
    }
    if simulate.report_every == 0 {
        diagnostics.push(Diagnostic::warning(
            "report_every is 0, no energies will be reported",
        ));
    }

    diagnostics
}

/// Build a Molecule from a Scenario, resolving missing masses through `masses`
pub fn build_molecule(scenario: &Scenario, masses: &dyn MassTable) -> Result<Molecule, BuildError> {
    let mut molecule = Molecule::new();
    let mut name_to_idx: HashMap<String, usize> = HashMap::new();

    for (idx, decl) in scenario.atoms.iter().enumerate() {
        let label = decl.label(idx);
        if name_to_idx.contains_key(&label) {
            return Err(BuildError::DuplicateAtom(label));
        }

        let pos = DVec3::from(decl.position);
        let atom = match decl.mass {
            Some(mass) => Atom::new(decl.element.as_str(), pos, mass, decl.charge)?,
            None => Atom::from_table(decl.element.as_str(), pos, decl.charge, masses)?,
        };
        let atom_idx = molecule.add_atom(atom.with_velocity(DVec3::from(decl.velocity)));
        name_to_idx.insert(label, atom_idx);
    }

    for decl in &scenario.bonds {
        let [a, b] = &decl.atoms;
        let a_idx = *name_to_idx
            .get(a)
            .ok_or_else(|| BuildError::UnknownAtom(a.clone()))?;
        let b_idx = *name_to_idx
            .get(b)
            .ok_or_else(|| BuildError::UnknownAtom(b.clone()))?;
        molecule.add_bond(Bond::new(a_idx, b_idx, decl.r0, decl.k))?;
    }

    Ok(molecule)
}
