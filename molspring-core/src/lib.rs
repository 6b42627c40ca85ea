pub mod analyzer;
pub mod diagnostics;
pub mod elements;
pub mod engine;
pub mod error;
pub mod forces;
pub mod integrator;
pub mod minimizer;
pub mod potentials;
pub mod runtime;
pub mod scenario;

pub use analyzer::{analyze_scenario, analyze_scenario_with, build_molecule};
pub use diagnostics::{Diagnostic, DiagnosticSeverity, Diagnostics, StepReport};
pub use elements::{CustomMasses, MassTable, StandardMasses};
pub use engine::{Atom, Bond, Molecule};
pub use error::{BuildError, LookupError, ScenarioError, SimulationError};
pub use forces::compute_forces;
pub use glam::DVec3;
pub use integrator::integrate;
pub use minimizer::minimization_step;
pub use runtime::{
    build_simulation_context, get_atom_states, get_bond_segments, run, run_scenario,
    run_scenario_with, step_simulation, try_run, AtomState, BondSegment, EnergyReport,
    RunSummary, SimulationContext, SimulationResult, StepMode,
};
pub use scenario::{load_scenario, parse_scenario, Scenario};

// Test helpers module (public for integration tests)
// Always compiled - integration tests are separate crates and need access
pub mod tests;
