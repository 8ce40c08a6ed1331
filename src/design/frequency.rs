use alloc::vec::Vec;

use num_complex::Complex;

use crate::error::{Argument, FilterError};
use crate::traits::FloatScalar;

/// Validate a sample rate and a cutoff frequency against it.
pub(crate) fn validate_frequencies<T: FloatScalar>(cutoff: T, sample_rate: T) -> Result<(), FilterError> {
    if !sample_rate.is_finite() || sample_rate <= T::zero() {
        tracing::debug!(?sample_rate, "rejecting sample rate");
        return Err(Argument::SampleRate.into());
    }
    let nyquist = sample_rate / T::two();
    if !cutoff.is_finite() || cutoff <= T::zero() || cutoff >= nyquist {
        tracing::debug!(?cutoff, ?nyquist, "rejecting cutoff frequency");
        return Err(Argument::Cutoff.into());
    }
    Ok(())
}

/// Pre-warped analog cutoff in rad/s: `2·fs·tan(π·cutoff / fs)`.
///
/// The bilinear transform compresses the frequency axis; designing the analog
/// filter at this frequency puts the digital −3 dB point exactly at `cutoff`.
///
/// # Errors
///
/// Returns [`FilterError::InvalidArgument`] unless `0 < cutoff < sample_rate / 2`
/// and `sample_rate` is positive and finite.
///
/// # Example
///
/// ```
/// use iirdesign::design::prewarp;
///
/// let wc = prewarp(125.0_f64, 500.0).unwrap();
/// assert!((wc - 1000.0).abs() < 1e-9);
/// ```
pub fn prewarp<T: FloatScalar>(cutoff: T, sample_rate: T) -> Result<T, FilterError> {
    validate_frequencies(cutoff, sample_rate)?;
    Ok(T::two() * sample_rate * (T::PI() * cutoff / sample_rate).tan())
}

/// Low-pass to low-pass transformation: scale every pole by `warped`.
///
/// Substituting `s → s/ωc` into the prototype denominator moves each pole
/// from `p` to `ωc·p`. A positive `warped` keeps every pole in the left
/// half-plane.
pub fn scale_poles<T: FloatScalar>(poles: &[Complex<T>], warped: T) -> Vec<Complex<T>> {
    poles.iter().map(|&p| p * warped).collect()
}
