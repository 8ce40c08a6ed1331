use alloc::vec::Vec;

use num_complex::Complex;

use crate::complex::unit_phasor;
use crate::error::{Argument, FilterError};
use crate::traits::FloatScalar;

/// Normalized analog Butterworth prototype poles (cutoff 1 rad/s).
///
/// Pole `k` sits at angle `θ_k = π·(2k + n + 1) / (2n)` on the unit circle,
/// for `k = 0 .. n-1`. All poles lie in the open left half-plane.
///
/// Conjugate partners `k` and `n-1-k` are emitted as exact conjugates, and
/// the real pole of an odd order is exactly `-1`, so products of the poles
/// have no spurious imaginary part.
///
/// # Errors
///
/// Returns [`FilterError::InvalidArgument`] if `order == 0`.
///
/// # Example
///
/// ```
/// use iirdesign::design::prototype_poles;
///
/// let p = prototype_poles::<f64>(2).unwrap();
/// let r = core::f64::consts::FRAC_1_SQRT_2;
/// assert!((p[0].re + r).abs() < 1e-15 && (p[0].im - r).abs() < 1e-15);
/// assert_eq!(p[1], p[0].conj());
/// ```
pub fn prototype_poles<T: FloatScalar>(order: usize) -> Result<Vec<Complex<T>>, FilterError> {
    if order == 0 {
        tracing::debug!(order, "rejecting zero filter order");
        return Err(Argument::Order.into());
    }

    let n = T::from_usize(order);
    let two = T::two();
    let pi = T::PI();

    let mut poles: Vec<Complex<T>> = Vec::with_capacity(order);
    for k in 0..order {
        let mirror = order - 1 - k;
        let pole = if mirror < k {
            // Upper half already computed; reuse its conjugate.
            poles[mirror].conj()
        } else if mirror == k {
            // θ = π
            Complex::new(-T::one(), T::zero())
        } else {
            let kf = T::from_usize(k);
            let theta = pi * (two * kf + n + T::one()) / (two * n);
            unit_phasor(theta)
        };
        poles.push(pole);
    }
    Ok(poles)
}
