//! Rounding helpers and the 2D vector value type.
mod operand;
mod vector2d;

pub use operand::{Operand, Product};
pub use vector2d::Vector2D;

use crate::core::traits::Real;

/// Number of decimal places every [Vector2D] coordinate is rounded to when constructed.
pub const DECIMAL_PLACES: usize = 2;

/// Round `value` to the nearest integer, resolving exact halves to the even neighbor.
///
/// # Examples
/// ```
/// # use vector2d::core::math::*;
/// assert_eq!(round_half_even(2.5), 2.0);
/// assert_eq!(round_half_even(3.5), 4.0);
/// assert_eq!(round_half_even(-2.5), -2.0);
/// assert_eq!(round_half_even(2.6), 3.0);
/// ```
#[inline]
pub fn round_half_even<T>(value: T) -> T
where
    T: Real,
{
    if (value - value.trunc()).abs() == T::half() {
        T::two() * (value / T::two()).round()
    } else {
        value.round()
    }
}

/// Round `value` to `places` decimal places.
///
/// The exact binary value is rounded (not `value * 10^places`), so inputs such as `2.675`, which
/// is stored slightly below the halfway point, round down. Exact halves go to the even digit and
/// non-finite values are returned unchanged.
///
/// # Examples
/// ```
/// # use vector2d::core::math::*;
/// assert_eq!(round_to_places(3.14159, 2), 3.14);
/// assert_eq!(round_to_places(0.125, 2), 0.12);
/// assert_eq!(round_to_places(2.675, 2), 2.67);
/// assert_eq!(round_to_places(-1.006, 2), -1.01);
/// ```
#[inline]
pub fn round_to_places<T>(value: T, places: usize) -> T
where
    T: Real,
{
    value.round_decimal(places)
}
