//! Complex helpers for pole/zero algebra.
//!
//! Addition, subtraction, multiplication, conjugation and the `re`/`im`
//! projections come from [`num_complex::Complex`]. This module adds the two
//! operations the design stages need with stricter contracts: a division that
//! reports a zero divisor instead of producing NaN, and a magnitude helper.

use num_complex::Complex;

use crate::error::FilterError;
use crate::traits::FloatScalar;

/// Complex division `num / den`.
///
/// # Errors
///
/// Returns [`FilterError::DivisionByZero`] if `den` has zero magnitude.
///
/// # Example
///
/// ```
/// use iirdesign::Complex;
/// use iirdesign::complex::checked_div;
///
/// let q = checked_div(Complex::new(1.0_f64, 1.0), Complex::new(0.0, 2.0)).unwrap();
/// assert!((q.re - 0.5).abs() < 1e-15 && (q.im + 0.5).abs() < 1e-15);
/// assert!(checked_div(Complex::new(1.0_f64, 0.0), Complex::new(0.0, 0.0)).is_err());
/// ```
#[inline]
pub fn checked_div<T: FloatScalar>(num: Complex<T>, den: Complex<T>) -> Result<Complex<T>, FilterError> {
    if den.re == T::zero() && den.im == T::zero() {
        return Err(FilterError::DivisionByZero);
    }
    // Smith's method: |den|² is never formed, so it cannot underflow.
    let q = if den.re.abs() >= den.im.abs() {
        let r = den.im / den.re;
        let d = den.re + den.im * r;
        Complex::new((num.re + num.im * r) / d, (num.im - num.re * r) / d)
    } else {
        let r = den.re / den.im;
        let d = den.re * r + den.im;
        Complex::new((num.re * r + num.im) / d, (num.im * r - num.re) / d)
    };
    Ok(q)
}

/// Magnitude `|z|`, computed without intermediate overflow.
#[inline]
pub fn magnitude<T: FloatScalar>(z: Complex<T>) -> T {
    z.re.hypot(z.im)
}

/// Point on the unit circle at angle `theta`.
#[inline]
pub fn unit_phasor<T: FloatScalar>(theta: T) -> Complex<T> {
    let (s, c) = theta.sin_cos();
    Complex::new(c, s)
}

/// Promote a real value into a complex one.
#[inline]
pub fn real<T: FloatScalar>(x: T) -> Complex<T> {
    Complex::new(x, T::zero())
}
