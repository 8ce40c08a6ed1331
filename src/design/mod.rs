//! Butterworth low-pass design by the bilinear transform.
//!
//! The design runs as a chain of independently usable stages:
//!
//! 1. [`prototype_poles`] — normalized analog Butterworth poles (cutoff 1 rad/s)
//! 2. [`prewarp`] / [`scale_poles`] — move the prototype to the pre-warped cutoff
//! 3. [`bilinear_zpk`] — map poles and zeros to the z-plane, solve the gain
//! 4. [`expand_roots`] — expand roots into transfer-function coefficients
//!
//! [`butter_lowpass`] runs the whole chain.
//!
//! # Example
//!
//! ```
//! use iirdesign::design::butter_lowpass;
//!
//! let tf = butter_lowpass(4, 60.0_f64, 500.0).unwrap();
//! assert_eq!(tf.a().len(), 5);
//! assert_eq!(tf.a()[0], 1.0);
//! assert!((tf.dc_gain() - 1.0).abs() < 1e-12);
//! ```

mod bilinear;
mod frequency;
mod polynomial;
mod prototype;


pub use bilinear::bilinear_zpk;
pub use frequency::{prewarp, scale_poles};
pub use polynomial::expand_roots;
pub use prototype::prototype_poles;

use alloc::vec::Vec;

use num_complex::Complex;

use crate::complex::{checked_div, real};
use crate::error::FilterError;
use crate::traits::FloatScalar;
use crate::transfer::TransferFunction;

/// Settings for the design chain.
#[derive(Debug, Clone, Copy)]
pub struct DesignSettings<T> {
    /// Largest imaginary residue tolerated after polynomial expansion,
    /// relative to the largest coefficient magnitude (floored at 1).
    pub imag_tol: T,
}

impl<T: FloatScalar> Default for DesignSettings<T> {
    fn default() -> Self {
        Self {
            imag_tol: T::epsilon().sqrt(),
        }
    }
}

/// Zeros, poles and gain of a digital filter.
///
/// `H(z) = gain · ∏(z − zeros[k]) / ∏(z − poles[k])`
#[derive(Debug, Clone, PartialEq)]
pub struct Zpk<T> {
    /// Digital zeros.
    pub zeros: Vec<Complex<T>>,
    /// Digital poles, all strictly inside the unit circle for a designed filter.
    pub poles: Vec<Complex<T>>,
    /// Gain giving unity response at `z = 1`.
    pub gain: T,
}

impl<T: FloatScalar> Zpk<T> {
    /// Expand into `(b, a)` form with `a[0] = 1` and `sum(b) == sum(a)`.
    ///
    /// The numerator is rescaled from the expanded polynomials, so `self.gain`
    /// only serves the zero/pole/gain view.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::NumericInstability`] if either expansion is not
    /// real within `settings.imag_tol`,
    /// [`FilterError::CoefficientLengthMismatch`] if zero and pole counts differ,
    /// and [`FilterError::DivisionByZero`] if the zero polynomial vanishes at `z = 1`.
    pub fn to_transfer_function(
        &self,
        settings: &DesignSettings<T>,
    ) -> Result<TransferFunction<T>, FilterError> {
        if self.zeros.len() != self.poles.len() {
            return Err(FilterError::CoefficientLengthMismatch);
        }
        let a = expand_roots(&self.poles, settings)?;
        let numerator = expand_roots(&self.zeros, settings)?;
        // Gain is taken from the expanded polynomials so sum(b) == sum(a)
        // holds for the rounded coefficients, not just the exact roots.
        let sum_a = a.iter().fold(T::zero(), |acc, &c| acc + c);
        let sum_z = numerator.iter().fold(T::zero(), |acc, &c| acc + c);
        let gain = checked_div(real(sum_a), real(sum_z))?.re;
        let b = numerator.into_iter().map(|c| c * gain).collect();
        Ok(TransferFunction::from_normalized(b, a))
    }

    /// Filter order (number of poles).
    pub fn order(&self) -> usize {
        self.poles.len()
    }
}

/// Design a digital Butterworth low-pass filter in zero/pole/gain form.
///
/// # Errors
///
/// Returns [`FilterError::InvalidArgument`] if `order == 0`, `sample_rate` is
/// not positive and finite, or `cutoff` is not in `(0, sample_rate/2)`.
pub fn butter_lowpass_zpk<T: FloatScalar>(
    order: usize,
    cutoff: T,
    sample_rate: T,
) -> Result<Zpk<T>, FilterError> {
    let prototype = prototype_poles::<T>(order)?;
    let warped = prewarp(cutoff, sample_rate)?;
    tracing::debug!(order, ?cutoff, ?sample_rate, ?warped, "designing butterworth low-pass");

    let analog = scale_poles(&prototype, warped);
    let zpk = bilinear_zpk(&analog, sample_rate)?;
    tracing::trace!(poles = ?zpk.poles, gain = ?zpk.gain, "digital zpk");
    Ok(zpk)
}

/// Design a digital Butterworth low-pass filter.
///
/// Returns coefficient vectors of length `order + 1` with `a[0] = 1` and unity
/// gain at DC. The magnitude response is `1/√2` at `cutoff`.
///
/// # Arguments
///
/// * `order` — filter order (1, 2, 3, …)
/// * `cutoff` — −3 dB frequency in Hz (must be in `(0, sample_rate/2)`)
/// * `sample_rate` — sampling rate in Hz
///
/// # Errors
///
/// See [`butter_lowpass_zpk`]; expansion may also report
/// [`FilterError::NumericInstability`].
///
/// # Example
///
/// ```
/// use iirdesign::design::butter_lowpass;
///
/// let tf = butter_lowpass(1, 125.0_f64, 500.0).unwrap();
/// let (b, a) = tf.into_parts();
/// assert!((b[0] - 0.5).abs() < 1e-12 && (b[1] - 0.5).abs() < 1e-12);
/// assert!((a[0] - 1.0).abs() < 1e-12 && a[1].abs() < 1e-12);
/// ```
pub fn butter_lowpass<T: FloatScalar>(
    order: usize,
    cutoff: T,
    sample_rate: T,
) -> Result<TransferFunction<T>, FilterError> {
    butter_lowpass_with(order, cutoff, sample_rate, &DesignSettings::default())
}

/// [`butter_lowpass`] with explicit [`DesignSettings`].
pub fn butter_lowpass_with<T: FloatScalar>(
    order: usize,
    cutoff: T,
    sample_rate: T,
    settings: &DesignSettings<T>,
) -> Result<TransferFunction<T>, FilterError> {
    butter_lowpass_zpk(order, cutoff, sample_rate)?.to_transfer_function(settings)
}
