use super::Real;

/// Read access to the coordinates of a 2D point or vector.
pub trait Vector2Ref {
    type Num: Real;
    fn x(&self) -> Self::Num;
    fn y(&self) -> Self::Num;

    #[inline]
    fn to_tuple(&self) -> (Self::Num, Self::Num) {
        (self.x(), self.y())
    }
}

impl<T> Vector2Ref for (T, T)
where
    T: Real,
{
    type Num = T;

    #[inline]
    fn x(&self) -> T {
        self.0
    }

    #[inline]
    fn y(&self) -> T {
        self.1
    }
}

impl<T> Vector2Ref for [T; 2]
where
    T: Real,
{
    type Num = T;

    #[inline]
    fn x(&self) -> T {
        self[0]
    }

    #[inline]
    fn y(&self) -> T {
        self[1]
    }
}
