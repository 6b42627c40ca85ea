//! Error types for molecule construction, simulation and scenario loading

use thiserror::Error;

/// Mass lookup failure reported by a [`crate::elements::MassTable`]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LookupError {
    #[error("no atomic mass known for element '{0}'")]
    UnknownElement(String),
}

/// Rejected construction of an atom, bond or molecule
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    #[error("invalid mass {mass} for element '{element}': mass must be positive and finite")]
    InvalidMass { element: String, mass: f64 },

    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("bond references atom {index}, but the molecule has {count} atoms")]
    AtomOutOfRange { index: usize, count: usize },

    #[error("bond connects atom {0} to itself")]
    SelfBond(usize),

    #[error("invalid bond parameter {name} = {value}: must be positive and finite")]
    InvalidBondParameter { name: &'static str, value: f64 },

    #[error("bond references unknown atom '{0}'")]
    UnknownAtom(String),

    #[error("duplicate atom name '{0}'")]
    DuplicateAtom(String),
}

/// Fatal numerical failure, only raised by strict runs
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error("numerical instability at step {step}: non-finite state on atoms {atoms:?}")]
    NumericalInstability { step: usize, atoms: Vec<usize> },
}

/// Anything that can go wrong between reading a scenario and finishing its run
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scenario: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("scenario has {count} error(s):\n{report}")]
    Invalid { count: usize, report: String },

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Simulation(#[from] SimulationError),
}
