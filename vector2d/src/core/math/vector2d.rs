use super::{round_half_even, round_to_places, DECIMAL_PLACES};
use crate::{
    core::traits::{FuzzyEq, Real, Vector2Ref},
    VectorError, ZeroVectorContext,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    ops::{Add, Mul, Neg, Sub},
};

/// Immutable 2D vector with coordinates rounded to [DECIMAL_PLACES] decimal places.
///
/// All operations return new vectors, every derived vector is rounded again at creation.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(
        from = "Vector2DFields<T>",
        bound(deserialize = "T: Real + Deserialize<'de>")
    )
)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector2D<T = f64> {
    x: T,
    y: T,
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct Vector2DFields<T> {
    x: T,
    y: T,
}

#[cfg(feature = "serde")]
impl<T> From<Vector2DFields<T>> for Vector2D<T>
where
    T: Real,
{
    fn from(fields: Vector2DFields<T>) -> Self {
        Vector2D::new(fields.x, fields.y)
    }
}

impl<T> Vector2D<T>
where
    T: Real,
{
    /// Create a new vector, rounding `x` and `y` to [DECIMAL_PLACES] decimal places.
    ///
    /// # Examples
    /// ```
    /// # use vector2d::*;
    /// let v = Vector2D::new(1.006, -2.3449);
    /// assert_eq!(v.x(), 1.01);
    /// assert_eq!(v.y(), -2.34);
    /// ```
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Vector2D {
            x: round_to_places(x, DECIMAL_PLACES),
            y: round_to_places(y, DECIMAL_PLACES),
        }
    }

    /// Zero length vector `(0, 0)`.
    #[inline]
    pub fn zero() -> Self {
        Vector2D::new(T::zero(), T::zero())
    }

    /// Displacement vector from `start` to `end`.
    ///
    /// Accepts tuples, arrays, or vectors (anything implementing [Vector2Ref]).
    ///
    /// # Examples
    /// ```
    /// # use vector2d::*;
    /// let v = Vector2D::from_two_points((1.0, 1.0), (4.0, 5.0));
    /// assert_eq!(v, Vector2D::new(3.0, 4.0));
    /// ```
    #[inline]
    pub fn from_two_points<P>(start: P, end: P) -> Self
    where
        P: Vector2Ref<Num = T>,
    {
        Vector2D::new(end.x() - start.x(), end.y() - start.y())
    }

    #[inline]
    pub fn x(&self) -> T {
        self.x
    }

    #[inline]
    pub fn y(&self) -> T {
        self.y
    }

    /// Multiply each component by `scalar`.
    #[inline]
    pub fn scale(self, scalar: T) -> Self {
        Vector2D::new(self.x * scalar, self.y * scalar)
    }

    /// Dot product with `other`, the result is not rounded.
    #[inline]
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Euclidean length, zero vector has length 0.
    #[inline]
    pub fn length(self) -> T {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Vector in the same direction with length (approximately) 1.
    ///
    /// Fails if the length is exactly zero.
    ///
    /// # Examples
    /// ```
    /// # use vector2d::*;
    /// assert_eq!(Vector2D::new(3.0, 4.0).normalized(), Ok(Vector2D::new(0.6, 0.8)));
    /// assert_eq!(
    ///     Vector2D::<f64>::zero().normalized(),
    ///     Err(VectorError::ZeroVector(ZeroVectorContext::Normalize))
    /// );
    /// ```
    pub fn normalized(self) -> Result<Self, VectorError> {
        let length = self.length();
        if length == T::zero() {
            log::debug!("normalized called on zero vector {}", self);
            return Err(VectorError::ZeroVector(ZeroVectorContext::Normalize));
        }

        Ok(self.scale(T::one() / length))
    }

    /// Angle in whole degrees between this vector and `other`, always within `[0, 180]`.
    ///
    /// Fails if the product of the two lengths is exactly zero. The product is checked rather
    /// than each length so extremely small (but non-zero) vectors still produce an angle.
    ///
    /// # Examples
    /// ```
    /// # use vector2d::*;
    /// let right = Vector2D::new(1.0, 0.0);
    /// assert_eq!(right.angle_between(right), Ok(0));
    /// assert_eq!(right.angle_between(Vector2D::new(-1.0, 0.0)), Ok(180));
    /// assert_eq!(right.angle_between(Vector2D::new(1.0, 1.0)), Ok(45));
    /// ```
    pub fn angle_between(self, other: Self) -> Result<i32, VectorError> {
        let lengths_product = self.length() * other.length();
        if lengths_product == T::zero() {
            log::debug!("angle_between called with zero vector: {} {}", self, other);
            return Err(VectorError::ZeroVector(ZeroVectorContext::Angle));
        }

        // min before max so a NaN cosine clamps to 1
        let cos_angle = (self.dot(other) / lengths_product)
            .min(T::one())
            .max(-T::one());
        let degrees = round_half_even(cos_angle.acos().to_degrees());
        match degrees.to_i32() {
            Some(degrees) => Ok(degrees),
            // acos of a value in [-1, 1] is a finite angle in [0, 180] degrees
            None => unreachable!("angle {:?} outside [0, 180] degrees", degrees),
        }
    }

    /// Angle in whole degrees between this vector and the positive Y axis `(0, 1)`.
    ///
    /// # Examples
    /// ```
    /// # use vector2d::*;
    /// assert_eq!(Vector2D::new(0.0, 1.0).angle(), Ok(0));
    /// assert_eq!(Vector2D::new(1.0, 0.0).angle(), Ok(90));
    /// assert_eq!(Vector2D::new(-1.0, 0.0).angle(), Ok(90));
    /// ```
    #[inline]
    pub fn angle(self) -> Result<i32, VectorError> {
        self.angle_between(Vector2D::new(T::zero(), T::one()))
    }

    /// Rotate counter-clockwise by `degrees` (any value, negative or beyond a full turn).
    ///
    /// # Examples
    /// ```
    /// # use vector2d::*;
    /// let v = Vector2D::new(1.0, 0.0);
    /// assert_eq!(v.rotate(90.0), Vector2D::new(0.0, 1.0));
    /// assert_eq!(v.rotate(-90.0), Vector2D::new(0.0, -1.0));
    /// ```
    pub fn rotate(self, degrees: T) -> Self {
        let (sin_theta, cos_theta) = degrees.to_radians().sin_cos();
        Vector2D::new(
            self.x * cos_theta - self.y * sin_theta,
            self.x * sin_theta + self.y * cos_theta,
        )
    }
}

impl<T> Default for Vector2D<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<T> Vector2Ref for Vector2D<T>
where
    T: Real,
{
    type Num = T;

    #[inline]
    fn x(&self) -> T {
        self.x
    }

    #[inline]
    fn y(&self) -> T {
        self.y
    }
}

impl<T> FuzzyEq<T> for Vector2D<T>
where
    T: Real,
{
    #[inline]
    fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        self.x.fuzzy_eq_eps(other.x, fuzzy_epsilon) && self.y.fuzzy_eq_eps(other.y, fuzzy_epsilon)
    }
}

impl<T> From<(T, T)> for Vector2D<T>
where
    T: Real,
{
    #[inline]
    fn from(v: (T, T)) -> Self {
        Vector2D::new(v.0, v.1)
    }
}

impl<T> From<[T; 2]> for Vector2D<T>
where
    T: Real,
{
    #[inline]
    fn from(v: [T; 2]) -> Self {
        Vector2D::new(v[0], v[1])
    }
}

/// Renders `Vector(x=<x>, y=<y>)` using the shortest round trip form of each stored value,
/// integral values keep a trailing `.0`. Large and small magnitudes use Rust's exponent form
/// (`1e16`, not `1e+16`).
impl<T> fmt::Display for Vector2D<T>
where
    T: Real,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector(x={:?}, y={:?})", self.x, self.y)
    }
}

impl<T> Add for Vector2D<T>
where
    T: Real,
{
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Vector2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T> Sub for Vector2D<T>
where
    T: Real,
{
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Vector2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T> Neg for Vector2D<T>
where
    T: Real,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        self.scale(-T::one())
    }
}

/// `vector * vector` is the dot product.
impl<T> Mul for Vector2D<T>
where
    T: Real,
{
    type Output = T;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.dot(rhs)
    }
}

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<$t> for Vector2D<$t> {
                type Output = Vector2D<$t>;

                #[inline]
                fn mul(self, rhs: $t) -> Self::Output {
                    self.scale(rhs)
                }
            }

            impl Mul<Vector2D<$t>> for $t {
                type Output = Vector2D<$t>;

                #[inline]
                fn mul(self, rhs: Vector2D<$t>) -> Self::Output {
                    rhs.scale(self)
                }
            }
        )*
    };
}

impl_scalar_mul!(f32, f64);
