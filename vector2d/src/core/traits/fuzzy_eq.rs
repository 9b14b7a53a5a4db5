use super::Real;

/// Approximate equality within an epsilon.
pub trait FuzzyEq<T>: Sized {
    /// Fuzzy equal comparison with `other` using `fuzzy_epsilon` given.
    fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool;

    /// Fuzzy equal comparison with `other` using `T::fuzzy_epsilon()`.
    #[inline]
    fn fuzzy_eq(&self, other: Self) -> bool
    where
        T: Real,
    {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}

macro_rules! impl_fuzzy_eq {
    ($($t:ty),*) => {
        $(
            impl FuzzyEq<$t> for $t {
                #[inline]
                fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: $t) -> bool {
                    (*self - other).abs() < fuzzy_epsilon
                }
            }
        )*
    };
}

impl_fuzzy_eq!(f32, f64);
