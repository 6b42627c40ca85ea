use crate::diagnostics::StepReport;
use crate::engine::Molecule;

/// Step the molecule forward by dt using kinematic Euler: x += v*dt.
///
/// Forces and masses are not consulted and velocities are never updated,
/// so atoms that start at rest stay where they are.
pub fn integrate(molecule: &mut Molecule, dt: f64) -> StepReport {
    for atom in molecule.atoms_mut() {
        atom.pos += atom.vel * dt;
    }

    let mut report = StepReport::default();
    report.scan_non_finite(molecule);
    report
}
