//! TOML scenario files
//!
//! A scenario declares the atoms, the bonds between them (by atom name) and
//! how to run the simulation:
//!
//! ```toml
//! [[atoms]]
//! name = "h1"
//! element = "H"
//! position = [0.0, 0.0, 0.0]
//!
//! [[atoms]]
//! name = "h2"
//! element = "H"
//! position = [1.5, 0.0, 0.0]
//!
//! [[bonds]]
//! atoms = ["h1", "h2"]
//! r0 = 0.74
//! k = 450.0
//!
//! [simulate]
//! steps = 500
//! report_every = 10
//!
//! [simulate.method]
//! kind = "minimize"
//! gamma = 0.0001
//! ```

use crate::error::ScenarioError;
use crate::runtime::StepMode;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A parsed scenario file
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    #[serde(default)]
    pub atoms: Vec<AtomDecl>,
    #[serde(default)]
    pub bonds: Vec<BondDecl>,
    #[serde(default)]
    pub simulate: SimulateDecl,
}

/// Atom declaration: `[[atoms]]`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AtomDecl {
    pub name: Option<String>,
    pub element: String,
    pub position: [f64; 3],
    #[serde(default)]
    pub velocity: [f64; 3],
    /// Looked up from the element when absent
    pub mass: Option<f64>,
    #[serde(default)]
    pub charge: f64,
}

impl AtomDecl {
    /// Name bonds use to refer to this atom; `<element><index>` when unnamed
    pub fn label(&self, index: usize) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("{}{}", self.element, index),
        }
    }
}

/// Bond declaration: `[[bonds]]`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BondDecl {
    pub atoms: [String; 2],
    pub r0: f64,
    pub k: f64,
}

/// Run parameters: `[simulate]`
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulateDecl {
    pub steps: usize,
    pub report_every: usize,
    /// Abort on the first non-finite state instead of carrying on
    pub strict: bool,
    pub method: StepMode,
}

impl Default for SimulateDecl {
    fn default() -> Self {
        Self {
            steps: 100,
            report_every: 10,
            strict: false,
            method: StepMode::default(),
        }
    }
}

/// Parse a scenario from TOML source
pub fn parse_scenario(source: &str) -> Result<Scenario, ScenarioError> {
    Ok(toml::from_str(source)?)
}

/// Read and parse a scenario file
pub fn load_scenario(path: impl AsRef<Path>) -> Result<Scenario, ScenarioError> {
    let source = fs::read_to_string(path)?;
    parse_scenario(&source)
}
