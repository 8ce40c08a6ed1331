use core::fmt::Debug;
use num_traits::{Float, FloatConst};

/// Trait for the real sample and coefficient types.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32` and `f64`.
pub trait FloatScalar: Float + FloatConst + Debug + Default + Send + Sync + 'static {
    /// Convert a count (order, index, point number) into `Self`.
    #[inline]
    fn from_usize(n: usize) -> Self {
        <Self as num_traits::NumCast>::from(n).unwrap_or_else(Self::nan)
    }

    /// The constant `2`.
    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }
}

impl<T: Float + FloatConst + Debug + Default + Send + Sync + 'static> FloatScalar for T {}
