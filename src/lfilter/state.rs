use alloc::vec;
use alloc::vec::Vec;

use crate::complex::{checked_div, real};
use crate::error::FilterError;
use crate::traits::FloatScalar;

use super::{normalize, FilterSettings};

/// Delay line of a DF-II-T filter: `order` values, one per pole.
///
/// A state belongs to exactly one logical stream. It is passed into a
/// filtering call and a new one is returned, so independent streams never
/// share mutable data.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState<T> {
    z: Vec<T>,
}

impl<T: FloatScalar> FilterState<T> {
    /// All-zero state for a filter of the given order.
    pub fn zeros(order: usize) -> Self {
        Self {
            z: vec![T::zero(); order],
        }
    }

    /// Wrap an existing delay line.
    pub fn from_vec(z: Vec<T>) -> Self {
        Self { z }
    }

    /// State a filter settles into after a constant input `level` of
    /// infinite duration.
    ///
    /// Starting a stream from this state instead of zeros removes the
    /// start-up transient when the first samples sit near `level`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::DivisionByZero`] if `sum(a) == 0` (a pole at
    /// `z = 1`), plus the coefficient validation errors of [`lfilter`](super::lfilter).
    ///
    /// # Example
    ///
    /// ```
    /// use iirdesign::design::butter_lowpass;
    /// use iirdesign::lfilter::{lfilter, FilterState};
    ///
    /// let tf = butter_lowpass(3, 20.0_f64, 200.0).unwrap();
    /// let zi = FilterState::steady_state(tf.b(), tf.a(), 2.0).unwrap();
    /// let (y, _) = lfilter(tf.b(), tf.a(), &[2.0; 8], Some(&zi)).unwrap();
    /// assert!(y.iter().all(|&v| (v - 2.0).abs() < 1e-9));
    /// ```
    pub fn steady_state(b: &[T], a: &[T], level: T) -> Result<Self, FilterError> {
        let (b, a) = normalize(b, a, &FilterSettings::default())?;
        let sum_b = b.iter().fold(T::zero(), |acc, &v| acc + v);
        let sum_a = a.iter().fold(T::zero(), |acc, &v| acc + v);
        let gain = checked_div(real(sum_b), real(sum_a))?.re;

        let n = a.len() - 1;
        let mut z = vec![T::zero(); n];
        let mut carry = T::zero();
        for i in (0..n).rev() {
            carry = carry + (b[i + 1] - a[i + 1] * gain) * level;
            z[i] = carry;
        }
        Ok(Self { z })
    }

    /// Number of delay elements (the filter order).
    pub fn len(&self) -> usize {
        self.z.len()
    }

    /// True for the state of a zeroth-order (pure gain) filter.
    pub fn is_empty(&self) -> bool {
        self.z.is_empty()
    }

    /// Delay-line values, `z[0]` first.
    pub fn as_slice(&self) -> &[T] {
        &self.z
    }

    /// Consume into the delay-line values.
    pub fn into_vec(self) -> Vec<T> {
        self.z
    }
}
