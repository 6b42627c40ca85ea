//! Harmonic bond potential

/// Energy of a harmonic bond stretched (or compressed) to length `r`:
/// `0.5 * k * (r - r0)^2`
#[inline]
pub fn harmonic_bond_energy(r: f64, r0: f64, k: f64) -> f64 {
    0.5 * k * (r - r0).powi(2)
}

/// Restoring force magnitude `-k * (r - r0)`.
///
/// Negative when stretched (the partners are pulled together along
/// `p1 - p2`), positive when compressed.
#[inline]
pub fn harmonic_bond_force(r: f64, r0: f64, k: f64) -> f64 {
    -k * (r - r0)
}
