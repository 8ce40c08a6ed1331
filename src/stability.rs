//! Stability test for a denominator polynomial without root finding.

use alloc::vec::Vec;

use crate::traits::FloatScalar;

/// Schur–Cohn test: true if every root of
/// `A(z) = a[0] + a[1]·z⁻¹ + … + a[n]·z⁻ⁿ` lies strictly inside the unit circle.
///
/// Repeatedly reads the reflection coefficient `k_m = a_m[m]` of the monic
/// polynomial and steps down one degree with
/// `a_{m−1}[i] = (a_m[i] − k_m·a_m[m−i]) / (1 − k_m²)`.
/// The polynomial is stable iff every `|k_m| < 1`.
///
/// An empty slice, a zero or non-finite leading coefficient, or any non-finite
/// coefficient is reported as unstable.
///
/// # Example
///
/// ```
/// use iirdesign::stability::is_stable;
///
/// assert!(is_stable(&[1.0_f64, -0.5]));      // pole at 0.5
/// assert!(!is_stable(&[1.0_f64, -1.5]));     // pole at 1.5
/// assert!(!is_stable(&[1.0_f64, 0.0, 1.0])); // poles at ±j
/// ```
pub fn is_stable<T: FloatScalar>(a: &[T]) -> bool {
    let a0 = match a.first() {
        Some(&a0) if a0 != T::zero() && a0.is_finite() => a0,
        _ => return false,
    };
    let mut p: Vec<T> = a.iter().map(|&c| c / a0).collect();
    if p.iter().any(|c| !c.is_finite()) {
        return false;
    }

    for m in (1..p.len()).rev() {
        let k = p[m];
        if !(k.abs() < T::one()) {
            return false;
        }
        let denom = T::one() - k * k;
        let next: Vec<T> = (0..m).map(|i| (p[i] - k * p[m - i]) / denom).collect();
        p = next;
    }
    true
}
