use crate::diagnostics::StepReport;
use crate::engine::Molecule;
use glam::DVec3;
use tracing::debug;

/// Recompute the force on every atom from every bond.
///
/// Accumulators are zeroed first, then each bond adds its force to `atom1`
/// and subtracts it from `atom2`. Bonds whose atoms coincide contribute
/// nothing and are listed in the returned report. Positions and velocities
/// are left untouched.
pub fn compute_forces(molecule: &mut Molecule) -> StepReport {
    let mut report = StepReport::default();
    let (atoms, bonds) = molecule.split_mut();

    for atom in atoms.iter_mut() {
        atom.force = DVec3::ZERO;
    }

    for (idx, bond) in bonds.iter().enumerate() {
        match bond.force_on_atom1(atoms) {
            Some(force) => {
                atoms[bond.atom1].force += force;
                atoms[bond.atom2].force -= force;
            }
            None => {
                debug!(
                    bond = idx,
                    atom1 = bond.atom1,
                    atom2 = bond.atom2,
                    "bonded atoms coincide, skipping bond force"
                );
                report.degenerate_bonds.push(idx);
            }
        }
    }

    report
}
