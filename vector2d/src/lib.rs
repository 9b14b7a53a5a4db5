//! Immutable 2D vector value type.
//!
//! Every [Vector2D] stores its coordinates rounded to
//! [DECIMAL_PLACES](crate::core::math::DECIMAL_PLACES) decimal places. Rounding happens once, when
//! a vector is constructed or derived from another operation, never when it is read.
//!
//! # Examples
//! ```
//! # use vector2d::*;
//! let v = Vector2D::from_two_points((1.0, 1.0), (4.0, 5.0));
//! assert_eq!(v, Vector2D::new(3.0, 4.0));
//! assert_eq!(v.length(), 5.0);
//! assert_eq!(v.to_string(), "Vector(x=3.0, y=4.0)");
//! assert_eq!(Vector2D::new(1.0, 0.0).angle_between(Vector2D::new(0.0, 1.0)), Ok(90));
//! ```
#![forbid(unsafe_code)]

pub mod core;
mod error;

pub use crate::core::math::{Operand, Product, Vector2D};
pub use error::{VectorError, ZeroVectorContext};
