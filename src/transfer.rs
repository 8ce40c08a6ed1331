use alloc::vec::Vec;

use num_complex::Complex;

use crate::error::FilterError;
use crate::lfilter::{self, normalize, FilterSettings, FilterState};
use crate::response;
use crate::stability;
use crate::traits::FloatScalar;

/// Digital transfer function in polynomial form:
///
/// ```text
/// H(z) = (b[0] + b[1]·z⁻¹ + … + b[n]·z⁻ⁿ) / (1 + a[1]·z⁻¹ + … + a[n]·z⁻ⁿ)
/// ```
///
/// Always holds `b.len() == a.len() == order + 1` and `a[0] == 1`. Immutable
/// once built; share it freely between streams.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferFunction<T> {
    b: Vec<T>,
    a: Vec<T>,
}

impl<T: FloatScalar> TransferFunction<T> {
    /// Build from raw coefficients, normalizing by `a[0]`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidArgument`] if `a` is empty or `a[0] == 0`,
    /// and [`FilterError::CoefficientLengthMismatch`] if the lengths differ.
    ///
    /// # Example
    ///
    /// ```
    /// use iirdesign::TransferFunction;
    ///
    /// let tf = TransferFunction::new(vec![2.0_f64, 4.0], vec![2.0, 1.0]).unwrap();
    /// assert_eq!(tf.b(), &[1.0, 2.0]);
    /// assert_eq!(tf.a(), &[1.0, 0.5]);
    /// ```
    pub fn new(b: Vec<T>, a: Vec<T>) -> Result<Self, FilterError> {
        Self::new_with(b, a, &FilterSettings::default())
    }

    /// [`new`](Self::new) honoring [`FilterSettings::length_policy`].
    pub fn new_with(b: Vec<T>, a: Vec<T>, settings: &FilterSettings) -> Result<Self, FilterError> {
        let (b, a) = normalize(&b, &a, settings)?;
        Ok(Self { b, a })
    }

    /// Coefficients already known to satisfy the invariants.
    pub(crate) fn from_normalized(b: Vec<T>, a: Vec<T>) -> Self {
        debug_assert_eq!(b.len(), a.len());
        Self { b, a }
    }

    /// Numerator coefficients.
    pub fn b(&self) -> &[T] {
        &self.b
    }

    /// Denominator coefficients, `a[0] == 1`.
    pub fn a(&self) -> &[T] {
        &self.a
    }

    /// Filter order, `a.len() - 1`.
    pub fn order(&self) -> usize {
        self.a.len() - 1
    }

    /// Consume into `(b, a)`.
    pub fn into_parts(self) -> (Vec<T>, Vec<T>) {
        (self.b, self.a)
    }

    /// `H(1) = sum(b) / sum(a)`.
    pub fn dc_gain(&self) -> T {
        let sum = |c: &[T]| c.iter().fold(T::zero(), |acc, &v| acc + v);
        sum(&self.b) / sum(&self.a)
    }

    /// True if every pole lies strictly inside the unit circle.
    pub fn is_stable(&self) -> bool {
        stability::is_stable(&self.a)
    }

    /// Complex response at `freq` Hz for sampling rate `sample_rate`.
    pub fn frequency_response(&self, freq: T, sample_rate: T) -> Result<Complex<T>, FilterError> {
        response::frequency_response(&self.b, &self.a, freq, sample_rate)
    }

    /// Filter a whole signal from zero initial state.
    pub fn filter(&self, input: &[T]) -> Result<Vec<T>, FilterError> {
        let mut z = alloc::vec![T::zero(); self.order()];
        lfilter::run(&self.b, &self.a, &mut z, input)
    }

    /// Filter a chunk of a stream, continuing from `state`.
    pub fn filter_streaming(
        &self,
        input: &[T],
        state: &FilterState<T>,
    ) -> Result<(Vec<T>, FilterState<T>), FilterError> {
        lfilter::lfilter(&self.b, &self.a, input, Some(state))
    }
}
