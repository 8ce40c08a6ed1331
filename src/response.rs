//! Frequency response of `(b, a)` transfer functions.
//!
//! Evaluates `H(e^{jω}) = Σ b_k e^{−jωk} / Σ a_k e^{−jωk}` on the unit circle.
//!
//! # Example
//!
//! ```
//! use iirdesign::design::butter_lowpass;
//! use iirdesign::response::frequency_response;
//!
//! let tf = butter_lowpass(4, 60.0_f64, 500.0).unwrap();
//! let h = frequency_response(tf.b(), tf.a(), 60.0, 500.0).unwrap();
//! assert!((h.norm() - core::f64::consts::FRAC_1_SQRT_2).abs() < 1e-9);
//! ```

use alloc::vec::Vec;

use num_complex::Complex;

use crate::complex::{checked_div, magnitude, unit_phasor};
use crate::error::{Argument, FilterError};
use crate::traits::FloatScalar;

/// Sampled frequency response.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyResponse<T> {
    /// Normalized angular frequencies in rad/sample, in `[0, π)`.
    pub w: Vec<T>,
    /// Complex response at each entry of `w`.
    pub h: Vec<Complex<T>>,
}

impl<T: FloatScalar> FrequencyResponse<T> {
    /// Frequencies of `w` in Hz for sampling rate `sample_rate`.
    pub fn frequencies_hz(&self, sample_rate: T) -> Vec<T> {
        let scale = sample_rate / (T::two() * T::PI());
        self.w.iter().map(|&w| w * scale).collect()
    }

    /// Magnitude of each response value in dB.
    pub fn magnitude_db(&self) -> Vec<T> {
        self.h.iter().map(|&h| magnitude_db(h)).collect()
    }
}

/// `20·log10(|h|)`.
#[inline]
pub fn magnitude_db<T: FloatScalar>(h: Complex<T>) -> T {
    T::from_usize(20) * magnitude(h).log10()
}

/// `Σ c_k w^k` by Horner's rule.
fn eval_series<T: FloatScalar>(coeffs: &[T], w: Complex<T>) -> Complex<T> {
    coeffs
        .iter()
        .rev()
        .fold(Complex::new(T::zero(), T::zero()), |acc, &c| acc * w + c)
}

fn validate_denominator<T: FloatScalar>(a: &[T]) -> Result<(), FilterError> {
    match a.first() {
        Some(&a0) if a0 != T::zero() => Ok(()),
        _ => Err(Argument::Denominator.into()),
    }
}

fn response_at<T: FloatScalar>(b: &[T], a: &[T], omega: T) -> Result<Complex<T>, FilterError> {
    let w = unit_phasor(-omega);
    checked_div(eval_series(b, w), eval_series(a, w))
}

/// Response at `n` evenly spaced frequencies `ω_k = π·k / n`, `k = 0 .. n-1`.
///
/// `b` and `a` may have different lengths.
///
/// # Errors
///
/// - [`FilterError::InvalidArgument`] if `n == 0` or `a` is empty or `a[0] == 0`.
/// - [`FilterError::DivisionByZero`] if the denominator vanishes at a sampled
///   frequency (a pole on the unit circle).
pub fn freqz<T: FloatScalar>(b: &[T], a: &[T], n: usize) -> Result<FrequencyResponse<T>, FilterError> {
    if n == 0 {
        return Err(Argument::Points.into());
    }
    validate_denominator(a)?;

    let step = T::PI() / T::from_usize(n);
    let w: Vec<T> = (0..n).map(|k| T::from_usize(k) * step).collect();
    let h = w
        .iter()
        .map(|&omega| response_at(b, a, omega))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(FrequencyResponse { w, h })
}

/// Response at a single frequency `freq` Hz.
///
/// # Errors
///
/// As [`freqz`], plus [`FilterError::InvalidArgument`] if `sample_rate` is not
/// positive and finite.
pub fn frequency_response<T: FloatScalar>(
    b: &[T],
    a: &[T],
    freq: T,
    sample_rate: T,
) -> Result<Complex<T>, FilterError> {
    if !sample_rate.is_finite() || sample_rate <= T::zero() {
        return Err(Argument::SampleRate.into());
    }
    validate_denominator(a)?;
    let omega = T::two() * T::PI() * freq / sample_rate;
    response_at(b, a, omega)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::butter_lowpass;

    const TOL: f64 = 1e-10;

    #[test]
    fn dc_and_nyquist_of_lowpass() {
        let tf = butter_lowpass(4, 60.0_f64, 500.0).unwrap();
        let dc = frequency_response(tf.b(), tf.a(), 0.0, 500.0).unwrap();
        assert!((dc.re - 1.0).abs() < TOL && dc.im.abs() < TOL);
        let ny = frequency_response(tf.b(), tf.a(), 250.0, 500.0).unwrap();
        assert!(ny.norm() < 1e-8);
    }

    #[test]
    fn cutoff_is_three_db_down_across_orders() {
        for order in 1..=8 {
            let tf = butter_lowpass(order, 1000.0_f64, 8000.0).unwrap();
            let h = tf.frequency_response(1000.0, 8000.0).unwrap();
            assert!(
                (magnitude_db(h) + 3.010_299_956_639_812).abs() < 1e-6,
                "order {}: {} dB",
                order,
                magnitude_db(h)
            );
        }
    }

    #[test]
    fn freqz_grid_and_monotone_magnitude() {
        let tf = butter_lowpass(5, 60.0_f64, 500.0).unwrap();
        let r = freqz(tf.b(), tf.a(), 64).unwrap();
        assert_eq!(r.w.len(), 64);
        assert_eq!(r.h.len(), 64);
        assert_eq!(r.w[0], 0.0);
        assert!((r.w[32] - core::f64::consts::FRAC_PI_2).abs() < TOL);
        // Butterworth magnitude is monotonically non-increasing.
        let mags: Vec<f64> = r.h.iter().map(|h| h.norm()).collect();
        for pair in mags.windows(2) {
            assert!(pair[1] <= pair[0] + 1e-12);
        }
        let hz = r.frequencies_hz(500.0);
        assert!((hz[32] - 125.0).abs() < 1e-9);
    }

    #[test]
    fn freqz_rejects_bad_input() {
        assert_eq!(
            freqz(&[1.0_f64], &[1.0], 0).unwrap_err(),
            FilterError::InvalidArgument(Argument::Points)
        );
        assert_eq!(
            freqz(&[1.0_f64], &[0.0, 1.0], 8).unwrap_err(),
            FilterError::InvalidArgument(Argument::Denominator)
        );
        // Pole at z = 1 makes the DC response undefined.
        assert_eq!(
            freqz(&[1.0_f64, 0.0], &[1.0, -1.0], 8).unwrap_err(),
            FilterError::DivisionByZero
        );
    }
}
