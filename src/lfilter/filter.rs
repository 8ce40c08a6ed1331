use alloc::vec::Vec;

use crate::error::{Argument, FilterError};
use crate::traits::FloatScalar;
use crate::transfer::TransferFunction;

use super::{run, step, FilterState};

/// A streaming IIR filter: coefficients plus a private delay line.
///
/// Uses Direct Form II Transposed:
/// ```text
/// y     = b[0]·x + z[0]
/// z[i]  = b[i+1]·x + z[i+1] − a[i+1]·y
/// z[n-1] = b[n]·x − a[n]·y
/// ```
///
/// # Example
///
/// ```
/// use iirdesign::design::butter_lowpass;
/// use iirdesign::lfilter::IirFilter;
///
/// let mut lpf = IirFilter::new(butter_lowpass(4, 1000.0_f64, 8000.0).unwrap());
/// let y = lpf.tick(1.0).unwrap();
/// assert!(y > 0.0 && y < 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct IirFilter<T> {
    tf: TransferFunction<T>,
    z: Vec<T>,
}

impl<T: FloatScalar> IirFilter<T> {
    /// Create a filter with zero initial state.
    pub fn new(tf: TransferFunction<T>) -> Self {
        let z = alloc::vec![T::zero(); tf.order()];
        Self { tf, z }
    }

    /// Create a filter resuming from `state`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidArgument`] if `state.len()` is not the filter order.
    pub fn with_state(tf: TransferFunction<T>, state: FilterState<T>) -> Result<Self, FilterError> {
        if state.len() != tf.order() {
            return Err(Argument::StateLength.into());
        }
        Ok(Self {
            tf,
            z: state.into_vec(),
        })
    }

    /// Process a single input sample, returning the filtered output.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::NumericOverflow`] if the output or any state
    /// value is not finite. The state is then unusable until [`reset`](Self::reset).
    #[inline]
    pub fn tick(&mut self, x: T) -> Result<T, FilterError> {
        let y = step(self.tf.b(), self.tf.a(), &mut self.z, x);
        if y.is_finite() && self.z.iter().all(|v| v.is_finite()) {
            Ok(y)
        } else {
            Err(FilterError::NumericOverflow)
        }
    }

    /// Process a slice of input samples into an output slice.
    ///
    /// # Panics
    ///
    /// Panics if `output.len() < input.len()`.
    pub fn process(&mut self, input: &[T], output: &mut [T]) -> Result<(), FilterError> {
        assert!(output.len() >= input.len());
        let y = run(self.tf.b(), self.tf.a(), &mut self.z, input)?;
        output[..y.len()].copy_from_slice(&y);
        Ok(())
    }

    /// Process a slice of samples in-place.
    pub fn process_inplace(&mut self, data: &mut [T]) -> Result<(), FilterError> {
        for sample in data.iter_mut() {
            *sample = self.tick(*sample)?;
        }
        Ok(())
    }

    /// Reset internal state to zero.
    pub fn reset(&mut self) {
        self.z.iter_mut().for_each(|v| *v = T::zero());
    }

    /// Snapshot of the current delay line.
    pub fn state(&self) -> FilterState<T> {
        FilterState::from_vec(self.z.clone())
    }

    /// Coefficients this filter runs.
    pub fn transfer_function(&self) -> &TransferFunction<T> {
        &self.tf
    }
}
