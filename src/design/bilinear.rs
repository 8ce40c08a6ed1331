use alloc::vec;
use alloc::vec::Vec;

use num_complex::Complex;

use crate::complex::{checked_div, magnitude, real};
use crate::error::{Argument, FilterError};
use crate::traits::FloatScalar;

use super::polynomial::eval_monic;
use super::Zpk;

/// Bilinear transform of an all-pole low-pass analog filter to the z-plane.
///
/// Each analog pole `p` maps to `(2·fs + p) / (2·fs − p)`. The `n` zeros at
/// infinity of the analog low-pass map to `z = −1`. The gain is solved from
/// the digital polynomials themselves so that `H(1) = 1`:
///
/// ```text
/// k = ∏(1 − pz_k) / ∏(1 − z_k)
/// ```
///
/// # Errors
///
/// - [`FilterError::InvalidArgument`] if `sample_rate` is not positive and finite.
/// - [`FilterError::DivisionByZero`] if an analog pole sits at `s = 2·fs`.
/// - [`FilterError::InternalInvariantViolation`] if a digital pole lands on or
///   outside the unit circle, which a left half-plane analog pole never does.
///
/// # Example
///
/// ```
/// use iirdesign::Complex;
/// use iirdesign::design::bilinear_zpk;
///
/// let zpk = bilinear_zpk(&[Complex::new(-1000.0_f64, 0.0)], 500.0).unwrap();
/// assert!(zpk.poles[0].norm() < 1e-12);
/// assert_eq!(zpk.zeros[0], Complex::new(-1.0, 0.0));
/// assert!((zpk.gain - 0.5).abs() < 1e-12);
/// ```
pub fn bilinear_zpk<T: FloatScalar>(
    analog_poles: &[Complex<T>],
    sample_rate: T,
) -> Result<Zpk<T>, FilterError> {
    if !sample_rate.is_finite() || sample_rate <= T::zero() {
        return Err(Argument::SampleRate.into());
    }
    let c = real(T::two() * sample_rate);

    let poles = analog_poles
        .iter()
        .map(|&p| checked_div(c + p, c - p))
        .collect::<Result<Vec<_>, _>>()?;

    for (k, &pz) in poles.iter().enumerate() {
        let r = magnitude(pz);
        if !(r < T::one()) {
            tracing::error!(index = k, magnitude = ?r, "digital pole outside the unit circle");
            return Err(FilterError::InternalInvariantViolation);
        }
    }

    let zeros = vec![real(-T::one()); poles.len()];

    let one = real(T::one());
    let den_at_one = eval_monic(&poles, one);
    let num_at_one = eval_monic(&zeros, one);
    let gain = checked_div(den_at_one, num_at_one)?.re;

    Ok(Zpk { zeros, poles, gain })
}
