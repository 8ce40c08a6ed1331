//! # iirdesign
//!
//! Digital Butterworth low-pass design and causal IIR filtering, from first
//! principles. no-std compatible (requires `alloc`).
//!
//! ## Quick start
//!
//! ```
//! use iirdesign::{apply_filter, design_lowpass_butterworth};
//!
//! // 4th-order low-pass at 60 Hz for a 500 Hz sampled signal
//! let tf = design_lowpass_butterworth(4, 60.0_f64, 500.0).unwrap();
//! let y = apply_filter(tf.b(), tf.a(), &[1.0; 200]).unwrap();
//! assert!((y[199] - 1.0).abs() < 1e-6);
//! ```
//!
//! ## Modules
//!
//! - [`design`] — the design chain: analog prototype poles, pre-warping and
//!   frequency scaling, bilinear transform to zeros/poles/gain, and polynomial
//!   expansion into `(b, a)`. Every stage is a public function so each numeric
//!   contract can be checked on its own.
//!
//! - [`lfilter`] — Direct Form II Transposed filtering. One-shot ([`lfilter::lfilter`]
//!   without state), chunked streaming with an explicit [`FilterState`], and a
//!   sample-at-a-time [`IirFilter`].
//!
//! - [`response`] — frequency response (`freqz`) of any `(b, a)` pair.
//!
//! - [`stability`] — Schur–Cohn stability test on a denominator.
//!
//! - [`complex`] — the checked complex helpers the design stages rely on.
//!
//! - [`traits`] — [`FloatScalar`], implemented by `f32` and `f64`.
//!
//! ## Streaming
//!
//! Coefficients are immutable and may be shared across threads. Each stream
//! carries its own [`FilterState`]; filtering a signal in chunks with the
//! state carried over gives the same output as filtering it in one call.
//!
//! ```
//! use iirdesign::{apply_filter_streaming, design_lowpass_butterworth, FilterState};
//!
//! let tf = design_lowpass_butterworth(2, 10.0_f64, 100.0).unwrap();
//! let state = FilterState::zeros(tf.order());
//! let (_y1, state) = apply_filter_streaming(tf.b(), tf.a(), &[1.0, 0.5], &state).unwrap();
//! let (_y2, _state) = apply_filter_streaming(tf.b(), tf.a(), &[0.25, 0.0], &state).unwrap();
//! ```
//!
//! ## Cargo features
//!
//! | Feature | Default  | Description |
//! |---------|----------|-------------|
//! | `std`   | yes      | Hardware FPU via system libm, `std` support in `tracing`. Without it, floats use `libm` |
//!
//! Diagnostics are emitted as `tracing` events; install a subscriber to see them.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod complex;
pub mod design;
mod error;
pub mod lfilter;
pub mod response;
pub mod stability;
pub mod traits;
mod transfer;

pub use design::{DesignSettings, Zpk};
pub use error::{Argument, FilterError};
pub use lfilter::{FilterSettings, FilterState, IirFilter, LengthPolicy};
pub use num_complex::Complex;
pub use traits::FloatScalar;
pub use transfer::TransferFunction;

use alloc::vec::Vec;

/// Design a digital low-pass Butterworth filter.
///
/// Returns `(b, a)` of length `order + 1`, with `a[0] = 1` and unity DC gain.
///
/// # Errors
///
/// Returns [`FilterError::InvalidArgument`] if `order < 1`, `cutoff <= 0`,
/// or `cutoff >= sample_rate / 2`.
///
/// ```
/// use iirdesign::{design_lowpass_butterworth, FilterError};
///
/// assert!(matches!(
///     design_lowpass_butterworth::<f64>(4, 260.0, 500.0),
///     Err(FilterError::InvalidArgument(_))
/// ));
/// ```
pub fn design_lowpass_butterworth<T: FloatScalar>(
    order: usize,
    cutoff: T,
    sample_rate: T,
) -> Result<TransferFunction<T>, FilterError> {
    design::butter_lowpass(order, cutoff, sample_rate)
}

/// Filter `input` with zero initial state; the output has the same length.
///
/// # Errors
///
/// See [`lfilter::lfilter`].
pub fn apply_filter<T: FloatScalar>(b: &[T], a: &[T], input: &[T]) -> Result<Vec<T>, FilterError> {
    lfilter::lfilter(b, a, input, None).map(|(y, _)| y)
}

/// Filter one chunk of a stream, continuing from `state`.
///
/// Returns the output chunk and the state to pass with the next chunk.
///
/// # Errors
///
/// See [`lfilter::lfilter`].
pub fn apply_filter_streaming<T: FloatScalar>(
    b: &[T],
    a: &[T],
    input: &[T],
    state: &FilterState<T>,
) -> Result<(Vec<T>, FilterState<T>), FilterError> {
    lfilter::lfilter(b, a, input, Some(state))
}

/// Design a low-pass Butterworth filter and apply it to `input` in one call.
///
/// # Example
///
/// ```
/// use iirdesign::butter_lowpass_filter;
///
/// let y = butter_lowpass_filter(&[1.0_f64, 1.0, 1.0, 1.0], 125.0, 500.0, 1).unwrap();
/// assert!((y[0] - 0.5).abs() < 1e-12);
/// assert!((y[3] - 1.0).abs() < 1e-12);
/// ```
pub fn butter_lowpass_filter<T: FloatScalar>(
    input: &[T],
    cutoff: T,
    sample_rate: T,
    order: usize,
) -> Result<Vec<T>, FilterError> {
    design::butter_lowpass(order, cutoff, sample_rate)?.filter(input)
}
