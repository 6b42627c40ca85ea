//! Atomic mass lookup
//!
//! Molecule construction never embeds a periodic table directly: callers
//! hand a [`MassTable`] to [`crate::engine::Atom::from_table`] or
//! [`crate::analyzer::build_molecule`]. [`StandardMasses`] covers the common
//! elements, [`CustomMasses`] and plain closures cover everything else.

use crate::error::LookupError;
use phf::{phf_map, Map};
use std::collections::HashMap;

/// Resolves an element symbol to its atomic mass
pub trait MassTable {
    fn mass_of(&self, element: &str) -> Result<f64, LookupError>;
}

impl<F> MassTable for F
where
    F: Fn(&str) -> Result<f64, LookupError>,
{
    fn mass_of(&self, element: &str) -> Result<f64, LookupError> {
        self(element)
    }
}

// Standard atomic weights in g/mol.
static ATOMIC_MASSES: Map<&'static str, f64> = phf_map! {
    "H" => 1.008,
    "He" => 4.0026,
    "Li" => 6.94,
    "Be" => 9.0122,
    "B" => 10.81,
    "C" => 12.011,
    "N" => 14.007,
    "O" => 15.999,
    "F" => 18.998,
    "Ne" => 20.18,
    "Na" => 22.99,
    "Mg" => 24.305,
    "Al" => 26.982,
    "Si" => 28.085,
    "P" => 30.974,
    "S" => 32.06,
    "Cl" => 35.45,
    "Ar" => 39.948,
    "K" => 39.098,
    "Ca" => 40.078,
    "Sc" => 44.956,
    "Ti" => 47.867,
    "V" => 50.942,
    "Cr" => 51.996,
    "Mn" => 54.938,
    "Fe" => 55.845,
    "Co" => 58.933,
    "Ni" => 58.693,
    "Cu" => 63.546,
    "Zn" => 65.38,
    "Ga" => 69.723,
    "Ge" => 72.63,
    "As" => 74.922,
    "Se" => 78.971,
    "Br" => 79.904,
    "Kr" => 83.798,
    "Ag" => 107.87,
    "I" => 126.9,
    "Xe" => 131.29,
    "Pt" => 195.08,
    "Au" => 196.97,
};

/// Built-in table of standard atomic weights
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardMasses;

impl MassTable for StandardMasses {
    fn mass_of(&self, element: &str) -> Result<f64, LookupError> {
        let symbol = element.trim();
        ATOMIC_MASSES
            .get(symbol)
            .copied()
            .ok_or_else(|| LookupError::UnknownElement(symbol.to_string()))
    }
}

/// Caller-supplied table, e.g. for pseudo-atoms or synthetic test masses
#[derive(Debug, Clone, Default)]
pub struct CustomMasses {
    masses: HashMap<String, f64>,
}

impl CustomMasses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, element: impl Into<String>, mass: f64) -> Self {
        self.insert(element, mass);
        self
    }

    pub fn insert(&mut self, element: impl Into<String>, mass: f64) {
        self.masses.insert(element.into(), mass);
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for CustomMasses {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            masses: iter.into_iter().map(|(e, m)| (e.into(), m)).collect(),
        }
    }
}

impl MassTable for CustomMasses {
    fn mass_of(&self, element: &str) -> Result<f64, LookupError> {
        self.masses
            .get(element)
            .copied()
            .ok_or_else(|| LookupError::UnknownElement(element.to_string()))
    }
}
