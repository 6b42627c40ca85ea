mod logging;

use clap::{Parser, Subcommand};
use molspring_core::{
    analyze_scenario, get_atom_states, load_scenario, run, run_scenario_with, Atom, AtomState,
    Bond, DVec3, Molecule, RunSummary, StandardMasses, StepMode,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "molspring")]
#[command(about = "molspring - harmonic bond networks, integrated or minimized", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Silence all log output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scenario file
    Run {
        /// Path to the TOML scenario
        file: PathBuf,

        /// Override the number of steps
        #[arg(long)]
        steps: Option<usize>,

        /// Override the energy report cadence (0 disables reports)
        #[arg(long)]
        report_every: Option<usize>,

        /// Stop at the first non-finite atom state
        #[arg(long)]
        strict: bool,
    },
    /// Parse and analyze a scenario without running it
    Check {
        /// Path to the TOML scenario
        file: PathBuf,
    },
    /// Relax a stretched H2 molecule by steepest descent
    Demo {
        #[arg(long, default_value_t = 500)]
        steps: usize,

        #[arg(long, default_value_t = 0.0001)]
        gamma: f64,

        #[arg(long, default_value_t = 10)]
        report_every: usize,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet);

    let outcome = match cli.command {
        Commands::Run {
            file,
            steps,
            report_every,
            strict,
        } => run_file(&file, steps, report_every, strict),
        Commands::Check { file } => check_file(&file),
        Commands::Demo {
            steps,
            gamma,
            report_every,
        } => run_demo(steps, gamma, report_every),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_file(
    file: &PathBuf,
    steps: Option<usize>,
    report_every: Option<usize>,
    strict: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut scenario = load_scenario(file)?;
    if let Some(steps) = steps {
        scenario.simulate.steps = steps;
    }
    if let Some(report_every) = report_every {
        scenario.simulate.report_every = report_every;
    }
    scenario.simulate.strict |= strict;

    let result = run_scenario_with(&scenario, &StandardMasses)?;
    print_summary(&result.summary);
    print_atoms(&result.atoms);

    Ok(())
}

fn check_file(file: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let scenario = load_scenario(file)?;
    let diagnostics = analyze_scenario(&scenario);

    for diagnostic in diagnostics.iter() {
        println!("{}", diagnostic);
    }
    if diagnostics.has_errors() {
        return Err(format!("{} has errors", file.display()).into());
    }

    println!(
        "{}: {} atoms, {} bonds, ok",
        file.display(),
        scenario.atoms.len(),
        scenario.bonds.len()
    );
    Ok(())
}

fn run_demo(steps: usize, gamma: f64, report_every: usize) -> Result<(), Box<dyn std::error::Error>> {
    let mut molecule = Molecule::new();
    let h1 = molecule.add_atom(Atom::new("H", DVec3::ZERO, 1.0, 0.0)?);
    let h2 = molecule.add_atom(Atom::new("H", DVec3::new(1.5, 0.0, 0.0), 1.0, 0.0)?);
    molecule.add_bond(Bond::new(h1, h2, 0.74, 450.0))?;

    let mode = StepMode::Minimize { gamma };
    let summary = run(&mut molecule, steps, |m| mode.apply(m), report_every);

    print_summary(&summary);
    print_atoms(&get_atom_states(&molecule));
    Ok(())
}

fn print_summary(summary: &RunSummary) {
    for report in &summary.energies {
        println!("Step {}, Total Energy: {:.4}", report.step, report.total_energy);
    }
    println!(
        "Finished {} steps, final energy {:.6}",
        summary.steps_run, summary.final_energy
    );
    if summary.degenerate_events > 0 {
        println!(
            "Skipped {} bond evaluations with coincident atoms",
            summary.degenerate_events
        );
    }
    if let Some(step) = summary.first_unstable_step {
        println!("Warning: state became non-finite at step {}", step);
    }
}

fn print_atoms(atoms: &[AtomState]) {
    for atom in atoms {
        println!(
            "{:>4} {:<3} {:>12.6} {:>12.6} {:>12.6}",
            atom.index, atom.element, atom.pos.x, atom.pos.y, atom.pos.z
        );
    }
}
