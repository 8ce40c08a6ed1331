/// Input that failed validation in [`FilterError::InvalidArgument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument {
    /// Filter order is zero.
    Order,
    /// Cutoff frequency is not in `(0, sample_rate / 2)` or not finite.
    Cutoff,
    /// Sampling frequency is not positive and finite.
    SampleRate,
    /// Denominator is empty or its leading coefficient is zero.
    Denominator,
    /// Streaming state length does not match the filter order.
    StateLength,
    /// Zero frequency points requested.
    Points,
}

impl core::fmt::Display for Argument {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Argument::Order => write!(f, "filter order must be at least 1"),
            Argument::Cutoff => write!(f, "cutoff frequency must be in (0, sample_rate/2)"),
            Argument::SampleRate => write!(f, "sample rate must be positive and finite"),
            Argument::Denominator => {
                write!(f, "denominator must be non-empty with a non-zero leading coefficient")
            }
            Argument::StateLength => write!(f, "filter state length must equal the filter order"),
            Argument::Points => write!(f, "number of frequency points must be at least 1"),
        }
    }
}

/// Errors from filter design and filtering.
///
/// ```
/// use iirdesign::{design_lowpass_butterworth, Argument, FilterError};
///
/// let err = design_lowpass_butterworth::<f64>(0, 60.0, 500.0).unwrap_err();
/// assert_eq!(err, FilterError::InvalidArgument(Argument::Order));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterError {
    /// A caller-supplied parameter is out of range.
    InvalidArgument(Argument),
    /// Numerator and denominator have different lengths.
    CoefficientLengthMismatch,
    /// Complex division by a value of zero magnitude.
    DivisionByZero,
    /// Polynomial expansion left an imaginary residue above tolerance.
    NumericInstability,
    /// Filtering produced a NaN or infinite output or state value.
    NumericOverflow,
    /// A designed digital pole lies on or outside the unit circle.
    InternalInvariantViolation,
}

impl core::fmt::Display for FilterError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FilterError::InvalidArgument(arg) => write!(f, "invalid argument: {}", arg),
            FilterError::CoefficientLengthMismatch => {
                write!(f, "numerator and denominator lengths differ")
            }
            FilterError::DivisionByZero => write!(f, "complex division by zero"),
            FilterError::NumericInstability => {
                write!(f, "polynomial coefficients are not real within tolerance")
            }
            FilterError::NumericOverflow => write!(f, "filter output is NaN or infinity"),
            FilterError::InternalInvariantViolation => {
                write!(f, "designed filter has a pole outside the unit circle")
            }
        }
    }
}

impl core::error::Error for FilterError {}

impl From<Argument> for FilterError {
    fn from(arg: Argument) -> Self {
        FilterError::InvalidArgument(arg)
    }
}
