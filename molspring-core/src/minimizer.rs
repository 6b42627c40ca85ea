use crate::diagnostics::StepReport;
use crate::engine::Molecule;
use crate::forces::compute_forces;

/// One steepest-descent step: refresh forces, then move every atom by
/// `gamma * force / mass`.
///
/// There is no line search or convergence test. A `gamma` that is too large
/// overshoots and raises the energy; that shows up in the energies and, once
/// values overflow, in `non_finite_atoms` of the returned report.
pub fn minimization_step(molecule: &mut Molecule, gamma: f64) -> StepReport {
    let mut report = compute_forces(molecule);

    for atom in molecule.atoms_mut() {
        atom.pos += gamma * (atom.force / atom.mass());
    }

    report.scan_non_finite(molecule);
    report
}
