//! Numeric traits and the [Vector2D](math::Vector2D) value type.
pub mod math;
pub mod traits;
