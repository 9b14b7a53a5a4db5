use super::Vector2D;
use crate::{core::traits::Real, VectorError};
use std::any::{type_name, Any};

/// Right hand side of a polymorphic vector multiplication.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<T = f64> {
    /// Scale the vector.
    Scalar(T),
    /// Dot product with the vector.
    Vector(Vector2D<T>),
}

/// Result of a polymorphic vector multiplication, the kind depends on the [Operand] kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Product<T = f64> {
    /// Result of multiplying by [Operand::Scalar].
    Vector(Vector2D<T>),
    /// Result of multiplying by [Operand::Vector].
    Scalar(T),
}

impl<T> Product<T> {
    /// Returns the vector if the product is [Product::Vector].
    #[inline]
    pub fn vector(self) -> Option<Vector2D<T>> {
        match self {
            Product::Vector(v) => Some(v),
            Product::Scalar(_) => None,
        }
    }

    /// Returns the number if the product is [Product::Scalar].
    #[inline]
    pub fn scalar(self) -> Option<T> {
        match self {
            Product::Vector(_) => None,
            Product::Scalar(s) => Some(s),
        }
    }
}

impl<T> From<T> for Operand<T>
where
    T: Real,
{
    #[inline]
    fn from(scalar: T) -> Self {
        Operand::Scalar(scalar)
    }
}

impl<T> From<Vector2D<T>> for Operand<T>
where
    T: Real,
{
    #[inline]
    fn from(v: Vector2D<T>) -> Self {
        Operand::Vector(v)
    }
}

/// Cast `value` to `T` if it is one of the primitive number types or a `bool` (as 0 or 1).
fn scalar_operand<T>(value: &dyn Any) -> Option<T>
where
    T: Real,
{
    macro_rules! try_cast {
        ($($t:ty),*) => {
            $(
                if let Some(n) = value.downcast_ref::<$t>() {
                    return num_traits::cast(*n);
                }
            )*
        };
    }

    try_cast!(f64, f32, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
    value
        .downcast_ref::<bool>()
        .map(|&b| if b { T::one() } else { T::zero() })
}

impl<T> Vector2D<T>
where
    T: Real,
{
    /// Multiply by a scalar ([Vector2D::scale]) or a vector ([Vector2D::dot]) depending on the
    /// `rhs` operand kind.
    ///
    /// # Examples
    /// ```
    /// # use vector2d::*;
    /// let v = Vector2D::new(1.0, 2.0);
    /// assert_eq!(v.mul_operand(Operand::Scalar(2.0)), Product::Vector(Vector2D::new(2.0, 4.0)));
    /// assert_eq!(v.mul_operand(Operand::Vector(v)), Product::Scalar(5.0));
    /// ```
    #[inline]
    pub fn mul_operand(self, rhs: Operand<T>) -> Product<T> {
        match rhs {
            Operand::Scalar(s) => Product::Vector(self.scale(s)),
            Operand::Vector(v) => Product::Scalar(self.dot(v)),
        }
    }

    /// Multiply by an operand whose kind is only known at runtime.
    ///
    /// Numbers of any primitive type scale the vector (`bool` counts as 0 or 1), a [Vector2D] (or
    /// an [Operand]) of the same number type gives the dot product. Any other type fails with
    /// [VectorError::UnsupportedOperandType] naming the type of `rhs`.
    ///
    /// # Examples
    /// ```
    /// # use vector2d::*;
    /// let v = Vector2D::new(1.0, 1.0);
    /// assert_eq!(v.try_mul(3), Ok(Product::Vector(Vector2D::new(3.0, 3.0))));
    /// assert_eq!(v.try_mul(v), Ok(Product::Scalar(2.0)));
    /// assert_eq!(
    ///     v.try_mul("text"),
    ///     Err(VectorError::UnsupportedOperandType { type_name: "&str" })
    /// );
    /// ```
    pub fn try_mul<R>(self, rhs: R) -> Result<Product<T>, VectorError>
    where
        R: Any,
    {
        let rhs_any = &rhs as &dyn Any;
        if let Some(operand) = rhs_any.downcast_ref::<Operand<T>>() {
            return Ok(self.mul_operand(*operand));
        }

        if let Some(v) = rhs_any.downcast_ref::<Vector2D<T>>() {
            return Ok(self.mul_operand(Operand::Vector(*v)));
        }

        match scalar_operand::<T>(rhs_any) {
            Some(s) => Ok(self.mul_operand(Operand::Scalar(s))),
            None => {
                let type_name = type_name::<R>();
                log::debug!("unsupported multiplication of {} with {}", self, type_name);
                Err(VectorError::UnsupportedOperandType { type_name })
            }
        }
    }
}
