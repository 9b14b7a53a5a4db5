use super::FuzzyEq;
use num_traits::Float;
use std::fmt::Debug;

/// Floating point number abstraction used by [Vector2D](crate::core::math::Vector2D).
///
/// Implemented for `f32` and `f64`.
pub trait Real: Float + FuzzyEq<Self> + Default + Debug + Send + Sync + 'static {
    /// Default epsilon used for fuzzy comparisons.
    fn fuzzy_epsilon() -> Self;

    /// Round the exact stored binary value to `places` decimal places, exact halves go to the
    /// even digit. Non-finite values are returned unchanged.
    fn round_decimal(self, places: usize) -> Self;

    #[inline]
    fn half() -> Self {
        Self::one() / Self::two()
    }

    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }
}

macro_rules! impl_real {
    ($($t:ty => $eps:expr),*) => {
        $(
            impl Real for $t {
                #[inline]
                fn fuzzy_epsilon() -> Self {
                    $eps
                }

                fn round_decimal(self, places: usize) -> Self {
                    if !self.is_finite() {
                        return self;
                    }

                    // fixed precision formatting rounds the exact value, ties to even
                    format!("{:.*}", places, self).parse().unwrap_or(self)
                }
            }
        )*
    };
}

impl_real!(f32 => 1e-5, f64 => 1e-8);
