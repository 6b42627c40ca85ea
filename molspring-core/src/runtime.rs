use crate::analyzer::{analyze_scenario_with, build_molecule};
use crate::diagnostics::StepReport;
use crate::elements::{MassTable, StandardMasses};
use crate::engine::Molecule;
use crate::error::{ScenarioError, SimulationError};
use crate::integrator::integrate;
use crate::minimizer::minimization_step;
use crate::scenario::{parse_scenario, Scenario};
use glam::DVec3;
use serde::Deserialize;
use tracing::{info, warn};

fn default_dt() -> f64 {
    0.001
}

fn default_gamma() -> f64 {
    0.0001
}

/// How a single step advances the molecule
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepMode {
    /// Kinematic Euler with time step `dt`
    Integrate {
        #[serde(default = "default_dt")]
        dt: f64,
    },
    /// Steepest descent with step size `gamma`
    Minimize {
        #[serde(default = "default_gamma")]
        gamma: f64,
    },
}

impl Default for StepMode {
    fn default() -> Self {
        StepMode::Integrate { dt: default_dt() }
    }
}

impl StepMode {
    pub fn apply(&self, molecule: &mut Molecule) -> StepReport {
        match *self {
            StepMode::Integrate { dt } => integrate(molecule, dt),
            StepMode::Minimize { gamma } => minimization_step(molecule, gamma),
        }
    }
}

/// Total energy observed after a step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyReport {
    pub step: usize,
    pub total_energy: f64,
}

/// What a driver loop did
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub steps_run: usize,
    pub energies: Vec<EnergyReport>,
    /// Bond evaluations skipped because the atoms coincided, summed over all steps
    pub degenerate_events: usize,
    /// First step after which some atom held a non-finite value
    pub first_unstable_step: Option<usize>,
    pub final_energy: f64,
}

impl RunSummary {
    fn record(&mut self, step: usize, report: &StepReport, molecule: &Molecule, report_every: usize) {
        self.steps_run += 1;
        self.degenerate_events += report.degenerate_bonds.len();

        if !report.is_stable() && self.first_unstable_step.is_none() {
            warn!(
                step,
                atoms = ?report.non_finite_atoms,
                "non-finite atom state, continuing"
            );
            self.first_unstable_step = Some(step);
        }

        if report_every > 0 && step % report_every == 0 {
            let total_energy = molecule.total_energy();
            info!(step, total_energy, "energy report");
            self.energies.push(EnergyReport { step, total_energy });
        }
    }
}

/// Call `step_fn` exactly `num_steps` times, recording the total energy
/// after every step whose index is a multiple of `report_every` (step 0
/// included; 0 disables reporting).
///
/// Numerical trouble never stops the loop: NaN or infinite values simply
/// flow into the following steps and are noted in the summary.
pub fn run<F>(
    molecule: &mut Molecule,
    num_steps: usize,
    mut step_fn: F,
    report_every: usize,
) -> RunSummary
where
    F: FnMut(&mut Molecule) -> StepReport,
{
    let mut summary = RunSummary::default();
    for step in 0..num_steps {
        let report = step_fn(molecule);
        summary.record(step, &report, molecule, report_every);
    }
    summary.final_energy = molecule.total_energy();
    summary
}

/// Like [`run`], but stop with [`SimulationError::NumericalInstability`] at
/// the first step that leaves an atom non-finite.
pub fn try_run<F>(
    molecule: &mut Molecule,
    num_steps: usize,
    mut step_fn: F,
    report_every: usize,
) -> Result<RunSummary, SimulationError>
where
    F: FnMut(&mut Molecule) -> StepReport,
{
    let mut summary = RunSummary::default();
    for step in 0..num_steps {
        let report = step_fn(molecule).check(step)?;
        summary.record(step, &report, molecule, report_every);
    }
    summary.final_energy = molecule.total_energy();
    Ok(summary)
}

/// A molecule plus its stepping rule, advanced one step per external tick
#[derive(Debug, Clone)]
pub struct SimulationContext {
    pub molecule: Molecule,
    pub mode: StepMode,
    pub step: usize,
}

impl SimulationContext {
    pub fn new(molecule: Molecule, mode: StepMode) -> Self {
        Self {
            molecule,
            mode,
            step: 0,
        }
    }
}

/// Advance the context by exactly one step
pub fn step_simulation(ctx: &mut SimulationContext) -> StepReport {
    let report = ctx.mode.apply(&mut ctx.molecule);
    ctx.step += 1;
    report
}

/// Read-only view of one atom, for renderers and reports
#[derive(Debug, Clone, PartialEq)]
pub struct AtomState {
    pub index: usize,
    pub element: String,
    pub pos: DVec3,
}

/// Endpoints of one bond
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondSegment {
    pub start: DVec3,
    pub end: DVec3,
}

pub fn get_atom_states(molecule: &Molecule) -> Vec<AtomState> {
    molecule
        .atoms()
        .iter()
        .enumerate()
        .map(|(index, atom)| AtomState {
            index,
            element: atom.element.clone(),
            pos: atom.pos,
        })
        .collect()
}

pub fn get_bond_segments(molecule: &Molecule) -> Vec<BondSegment> {
    (0..molecule.bonds().len())
        .filter_map(|i| molecule.bond_endpoints(i))
        .map(|(a, b)| BondSegment {
            start: a.pos,
            end: b.pos,
        })
        .collect()
}

/// Final result of running a scenario
#[derive(Debug)]
pub struct SimulationResult {
    pub summary: RunSummary,
    pub atoms: Vec<AtomState>,
}

/// Analyze a scenario and build the context that runs it
pub fn build_simulation_context(
    scenario: &Scenario,
    masses: &dyn MassTable,
) -> Result<SimulationContext, ScenarioError> {
    let diagnostics = analyze_scenario_with(scenario, masses);
    for diagnostic in diagnostics.warnings() {
        warn!("{}", diagnostic.message);
    }
    if diagnostics.has_errors() {
        let errors: Vec<String> = diagnostics.errors().map(|d| d.to_string()).collect();
        return Err(ScenarioError::Invalid {
            count: errors.len(),
            report: errors.join("\n"),
        });
    }

    let molecule = build_molecule(scenario, masses)?;
    Ok(SimulationContext::new(molecule, scenario.simulate.method))
}

/// Run an already parsed scenario to completion
pub fn run_scenario_with(
    scenario: &Scenario,
    masses: &dyn MassTable,
) -> Result<SimulationResult, ScenarioError> {
    let mut ctx = build_simulation_context(scenario, masses)?;
    let simulate = &scenario.simulate;
    let mode = ctx.mode;
    info!(
        atoms = ctx.molecule.atoms().len(),
        bonds = ctx.molecule.bonds().len(),
        steps = simulate.steps,
        ?mode,
        "starting run"
    );

    let step_fn = |m: &mut Molecule| mode.apply(m);
    let summary = if simulate.strict {
        try_run(&mut ctx.molecule, simulate.steps, step_fn, simulate.report_every)?
    } else {
        run(&mut ctx.molecule, simulate.steps, step_fn, simulate.report_every)
    };

    Ok(SimulationResult {
        summary,
        atoms: get_atom_states(&ctx.molecule),
    })
}

/// Main entry point: parse and run a scenario, looking up masses in the
/// standard table
pub fn run_scenario(source: &str) -> Result<SimulationResult, ScenarioError> {
    let scenario = parse_scenario(source)?;
    run_scenario_with(&scenario, &StandardMasses)
}
