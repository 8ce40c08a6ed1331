use alloc::vec;
use alloc::vec::Vec;

use num_complex::Complex;

use crate::complex::magnitude;
use crate::error::FilterError;
use crate::traits::FloatScalar;

use super::DesignSettings;

/// Expand `∏(z − r_k)` into real coefficients, highest power first.
///
/// Returns `roots.len() + 1` coefficients with a leading `1`. Read as powers
/// of `z⁻¹` after dividing through by `zⁿ`, this is directly the `b` or `a`
/// vector of a transfer function.
///
/// Roots must come in conjugate pairs (or be real) for the product to have
/// real coefficients.
///
/// # Errors
///
/// Returns [`FilterError::NumericInstability`] if any coefficient keeps an
/// imaginary part larger than `settings.imag_tol` times the largest
/// coefficient magnitude (floored at 1).
///
/// # Example
///
/// ```
/// use iirdesign::Complex;
/// use iirdesign::design::{expand_roots, DesignSettings};
///
/// // (z + 1)² = z² + 2z + 1
/// let roots = [Complex::new(-1.0_f64, 0.0); 2];
/// let c = expand_roots(&roots, &DesignSettings::default()).unwrap();
/// assert_eq!(c, vec![1.0, 2.0, 1.0]);
/// ```
pub fn expand_roots<T: FloatScalar>(
    roots: &[Complex<T>],
    settings: &DesignSettings<T>,
) -> Result<Vec<T>, FilterError> {
    let coeffs = expand_complex(roots);

    let scale = coeffs
        .iter()
        .map(|&c| magnitude(c))
        .fold(T::one(), |acc, m| acc.max(m));
    let limit = settings.imag_tol * scale;

    let mut real = Vec::with_capacity(coeffs.len());
    for (i, c) in coeffs.iter().enumerate() {
        if !(c.im.abs() <= limit) {
            tracing::debug!(index = i, residual = ?c.im, limit = ?limit, "non-real polynomial coefficient");
            return Err(FilterError::NumericInstability);
        }
        real.push(c.re);
    }
    Ok(real)
}

/// Complex coefficients of `∏(z − r_k)`, highest power first.
fn expand_complex<T: FloatScalar>(roots: &[Complex<T>]) -> Vec<Complex<T>> {
    let zero = Complex::new(T::zero(), T::zero());
    let mut coeffs = vec![zero; roots.len() + 1];
    coeffs[0] = Complex::new(T::one(), T::zero());

    // Multiply in one (z − r) factor per step; `deg` is the current degree.
    for (deg, &r) in roots.iter().enumerate() {
        for i in (1..=deg + 1).rev() {
            coeffs[i] = coeffs[i] - r * coeffs[i - 1];
        }
    }
    coeffs
}

/// Evaluate the monic polynomial `∏(z − r_k)` at `z`.
pub(crate) fn eval_monic<T: FloatScalar>(roots: &[Complex<T>], z: Complex<T>) -> Complex<T> {
    roots
        .iter()
        .fold(Complex::new(T::one(), T::zero()), |acc, &r| acc * (z - r))
}

