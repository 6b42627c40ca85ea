use crate::elements::MassTable;
use crate::error::BuildError;
use crate::potentials::{harmonic_bond_energy, harmonic_bond_force};
use glam::DVec3;

/// A point mass in the molecule
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub element: String,
    pub pos: DVec3,
    pub vel: DVec3,
    /// Force accumulator, only meaningful right after [`crate::forces::compute_forces`]
    pub force: DVec3,
    /// Stored for a future nonbonded term, unused by any energy or force
    pub charge: f64,
    mass: f64,
}

impl Atom {
    /// Create an atom at rest. Fails if `mass` is not a positive finite number.
    pub fn new(
        element: impl Into<String>,
        pos: DVec3,
        mass: f64,
        charge: f64,
    ) -> Result<Self, BuildError> {
        let element = element.into();
        if !(mass.is_finite() && mass > 0.0) {
            return Err(BuildError::InvalidMass { element, mass });
        }
        Ok(Self {
            element,
            pos,
            vel: DVec3::ZERO,
            force: DVec3::ZERO,
            charge,
            mass,
        })
    }

    /// Create an atom whose mass is resolved from `table` by element symbol
    pub fn from_table(
        element: impl Into<String>,
        pos: DVec3,
        charge: f64,
        table: &dyn MassTable,
    ) -> Result<Self, BuildError> {
        let element = element.into();
        let mass = table.mass_of(&element)?;
        Self::new(element, pos, mass, charge)
    }

    pub fn with_velocity(mut self, vel: DVec3) -> Self {
        self.vel = vel;
        self
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Whether position, velocity and force are all finite
    pub fn is_finite(&self) -> bool {
        self.pos.is_finite() && self.vel.is_finite() && self.force.is_finite()
    }
}

/// A harmonic spring between two atoms of the same molecule
#[derive(Debug, Clone, PartialEq)]
pub struct Bond {
    pub atom1: usize, // atom index
    pub atom2: usize, // atom index
    pub r0: f64,      // equilibrium length
    pub k: f64,       // stiffness
}

impl Bond {
    pub fn new(atom1: usize, atom2: usize, r0: f64, k: f64) -> Self {
        Self { atom1, atom2, r0, k }
    }

    /// Separation `|p1 - p2|` of the bonded atoms.
    ///
    /// `atoms` must be the owning molecule's [`Molecule::atoms`]; an index
    /// past the end of a foreign slice panics.
    pub fn current_distance(&self, atoms: &[Atom]) -> f64 {
        atoms[self.atom1].pos.distance(atoms[self.atom2].pos)
    }

    /// Bond energy; `atoms` as for [`Bond::current_distance`]
    pub fn energy(&self, atoms: &[Atom]) -> f64 {
        harmonic_bond_energy(self.current_distance(atoms), self.r0, self.k)
    }

    /// Force vector on `atom1`; `atom2` receives its negation.
    ///
    /// Returns `None` when both atoms sit on the same point, since the bond
    /// direction is undefined there. `atoms` as for [`Bond::current_distance`].
    pub fn force_on_atom1(&self, atoms: &[Atom]) -> Option<DVec3> {
        let r_vec = atoms[self.atom1].pos - atoms[self.atom2].pos;
        let r = r_vec.length();
        if r == 0.0 {
            return None;
        }
        Some(r_vec * (harmonic_bond_force(r, self.r0, self.k) / r))
    }

    fn validate(&self, atom_count: usize) -> Result<(), BuildError> {
        for index in [self.atom1, self.atom2] {
            if index >= atom_count {
                return Err(BuildError::AtomOutOfRange {
                    index,
                    count: atom_count,
                });
            }
        }
        if self.atom1 == self.atom2 {
            return Err(BuildError::SelfBond(self.atom1));
        }
        for (name, value) in [("r0", self.r0), ("k", self.k)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(BuildError::InvalidBondParameter { name, value });
            }
        }
        Ok(())
    }
}

/// Atoms and the bonds between them.
///
/// The molecule owns every atom; bonds refer to atoms by their insertion
/// index, which never changes since nothing can be removed.
#[derive(Debug, Clone, Default)]
pub struct Molecule {
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
}

impl Molecule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an atom and return its index
    pub fn add_atom(&mut self, atom: Atom) -> usize {
        self.atoms.push(atom);
        self.atoms.len() - 1
    }

    /// Append a bond after checking that it joins two distinct atoms of this
    /// molecule with positive parameters. Returns the bond index.
    pub fn add_bond(&mut self, bond: Bond) -> Result<usize, BuildError> {
        bond.validate(self.atoms.len())?;
        self.bonds.push(bond);
        Ok(self.bonds.len() - 1)
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn atoms_mut(&mut self) -> &mut [Atom] {
        &mut self.atoms
    }

    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    /// The two atoms joined by bond `index`
    pub fn bond_endpoints(&self, index: usize) -> Option<(&Atom, &Atom)> {
        let bond = self.bonds.get(index)?;
        Some((&self.atoms[bond.atom1], &self.atoms[bond.atom2]))
    }

    /// Sum of all bond energies at the current positions
    pub fn total_energy(&self) -> f64 {
        self.bonds.iter().map(|bond| bond.energy(&self.atoms)).sum()
    }

    pub(crate) fn split_mut(&mut self) -> (&mut [Atom], &[Bond]) {
        (&mut self.atoms, &self.bonds)
    }
}
