//! Diagnostics for scenario analysis and per-step numerical health

use crate::engine::Molecule;
use crate::error::SimulationError;
use std::fmt;

/// How serious a diagnostic is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticSeverity {
    Error,
    Warning,
}

/// A single finding from scenario analysis
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub severity: DiagnosticSeverity,
    pub message: String,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: DiagnosticSeverity::Error,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: DiagnosticSeverity::Warning,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.severity {
            DiagnosticSeverity::Error => "error",
            DiagnosticSeverity::Warning => "warning",
        };
        write!(f, "{}: {}", label, self.message)
    }
}

/// Collection of diagnostics in the order they were found
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items
            .iter()
            .filter(|d| d.severity == DiagnosticSeverity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items
            .iter()
            .filter(|d| d.severity == DiagnosticSeverity::Warning)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// One diagnostic per line
    pub fn render(&self) -> String {
        self.items
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// What happened during one integration or minimization step.
///
/// Steps never fail on their own. Callers that want strict behavior turn
/// the report into an error with [`StepReport::check`]; everyone else can
/// drop it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Bonds skipped by the force engine because their atoms coincided
    pub degenerate_bonds: Vec<usize>,
    /// Atoms holding a NaN or infinite position, velocity or force after the step
    pub non_finite_atoms: Vec<usize>,
}

impl StepReport {
    /// Record every atom of `molecule` whose state is no longer finite
    pub fn scan_non_finite(&mut self, molecule: &Molecule) {
        self.non_finite_atoms = molecule
            .atoms()
            .iter()
            .enumerate()
            .filter(|(_, atom)| !atom.is_finite())
            .map(|(i, _)| i)
            .collect();
    }

    pub fn is_clean(&self) -> bool {
        self.degenerate_bonds.is_empty() && self.non_finite_atoms.is_empty()
    }

    pub fn is_stable(&self) -> bool {
        self.non_finite_atoms.is_empty()
    }

    /// Fail with [`SimulationError::NumericalInstability`] if any atom went
    /// non-finite. Degenerate bonds are recovered locally and pass.
    pub fn check(self, step: usize) -> Result<Self, SimulationError> {
        if self.is_stable() {
            Ok(self)
        } else {
            Err(SimulationError::NumericalInstability {
                step,
                atoms: self.non_finite_atoms,
            })
        }
    }
}
