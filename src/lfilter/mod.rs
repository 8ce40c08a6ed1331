//! Recursive (IIR) filtering in Direct Form II Transposed.
//!
//! [`lfilter`] filters a whole signal and returns the final delay line as a
//! [`FilterState`]; feeding that state to the next call continues the same
//! stream exactly. [`IirFilter`] owns its coefficients and state for
//! sample-at-a-time use.
//!
//! Coefficients are immutable and can be shared between threads; each stream
//! needs its own state.
//!
//! # Example
//!
//! ```
//! use iirdesign::lfilter::{lfilter, FilterState};
//!
//! let b = [0.5_f64, 0.5];
//! let a = [1.0, 0.0];
//! let (y1, s) = lfilter(&b, &a, &[1.0, 1.0], None).unwrap();
//! let (y2, _) = lfilter(&b, &a, &[1.0, 1.0], Some(&s)).unwrap();
//! assert_eq!(y1, vec![0.5, 1.0]);
//! assert_eq!(y2, vec![1.0, 1.0]);
//! ```

mod filter;
mod state;

#[cfg(test)]
mod tests;

pub use filter::IirFilter;
pub use state::FilterState;

use alloc::vec::Vec;

use crate::error::{Argument, FilterError};
use crate::traits::FloatScalar;

/// How [`lfilter_with`] treats `b` and `a` of different lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthPolicy {
    /// Different lengths are an error.
    #[default]
    Strict,
    /// The shorter vector is padded with trailing zeros.
    ZeroPad,
}

/// Settings for filtering.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterSettings {
    /// How `b` and `a` of different lengths are handled.
    pub length_policy: LengthPolicy,
}

/// Validate and normalize `(b, a)` so that both have the same length and
/// `a[0] = 1`.
pub(crate) fn normalize<T: FloatScalar>(
    b: &[T],
    a: &[T],
    settings: &FilterSettings,
) -> Result<(Vec<T>, Vec<T>), FilterError> {
    let a0 = match a.first() {
        Some(&a0) if a0 != T::zero() && a0.is_finite() => a0,
        _ => return Err(Argument::Denominator.into()),
    };

    let len = match settings.length_policy {
        LengthPolicy::Strict if b.len() != a.len() => {
            tracing::debug!(b_len = b.len(), a_len = a.len(), "coefficient length mismatch");
            return Err(FilterError::CoefficientLengthMismatch);
        }
        LengthPolicy::Strict => a.len(),
        LengthPolicy::ZeroPad => a.len().max(b.len()),
    };

    let scale = |c: &[T]| -> Vec<T> {
        let mut v: Vec<T> = c.iter().map(|&x| x / a0).collect();
        v.resize(len, T::zero());
        v
    };
    let mut a = scale(a);
    a[0] = T::one();
    Ok((scale(b), a))
}

/// One DF-II-T step. `z.len()` must equal `b.len() - 1`.
#[inline]
pub(crate) fn step<T: FloatScalar>(b: &[T], a: &[T], z: &mut [T], x: T) -> T {
    let n = z.len();
    if n == 0 {
        return b[0] * x;
    }
    let y = b[0] * x + z[0];
    for i in 0..n - 1 {
        z[i] = b[i + 1] * x + z[i + 1] - a[i + 1] * y;
    }
    z[n - 1] = b[n] * x - a[n] * y;
    y
}

/// Run normalized coefficients over `input`, updating `z` in place.
pub(crate) fn run<T: FloatScalar>(
    b: &[T],
    a: &[T],
    z: &mut [T],
    input: &[T],
) -> Result<Vec<T>, FilterError> {
    let mut output = Vec::with_capacity(input.len());
    for (idx, &x) in input.iter().enumerate() {
        let y = step(b, a, z, x);
        if !y.is_finite() {
            tracing::debug!(sample = idx, "non-finite filter output");
            return Err(FilterError::NumericOverflow);
        }
        output.push(y);
    }
    if z.iter().any(|v| !v.is_finite()) {
        tracing::debug!("non-finite filter state");
        return Err(FilterError::NumericOverflow);
    }
    Ok(output)
}

/// Filter `input` through `H(z) = B(z⁻¹) / A(z⁻¹)`.
///
/// `state` is the delay line left by a previous call on the same stream, or
/// `None` for zero initial conditions. Returns the output (same length as
/// `input`) and the final delay line.
///
/// # Errors
///
/// - [`FilterError::InvalidArgument`] if `a` is empty or `a[0] == 0`, or if
///   `state` does not hold `len(a) − 1` values.
/// - [`FilterError::CoefficientLengthMismatch`] if `len(b) != len(a)`.
/// - [`FilterError::NumericOverflow`] if any output or state value is not finite.
pub fn lfilter<T: FloatScalar>(
    b: &[T],
    a: &[T],
    input: &[T],
    state: Option<&FilterState<T>>,
) -> Result<(Vec<T>, FilterState<T>), FilterError> {
    lfilter_with(b, a, input, state, &FilterSettings::default())
}

/// [`lfilter`] with explicit [`FilterSettings`].
pub fn lfilter_with<T: FloatScalar>(
    b: &[T],
    a: &[T],
    input: &[T],
    state: Option<&FilterState<T>>,
    settings: &FilterSettings,
) -> Result<(Vec<T>, FilterState<T>), FilterError> {
    let (b, a) = normalize(b, a, settings)?;
    let order = a.len() - 1;

    let mut z = match state {
        Some(s) if s.len() != order => {
            tracing::debug!(expected = order, got = s.len(), "filter state length mismatch");
            return Err(Argument::StateLength.into());
        }
        Some(s) => s.as_slice().to_vec(),
        None => alloc::vec![T::zero(); order],
    };

    let output = run(&b, &a, &mut z, input)?;
    Ok((output, FilterState::from_vec(z)))
}
