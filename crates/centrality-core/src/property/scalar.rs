//! Numeric traits the generic kernels are instantiated with.

use std::fmt::Debug;
use std::ops::{Add, AddAssign, Mul, MulAssign};

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
    impl Sealed for usize {}
}

/// A path length: hop counts for breadth-first search, weight sums for
/// Dijkstra.
pub trait Distance:
    sealed::Sealed + Copy + PartialOrd + Add<Output = Self> + Send + Sync + Debug + 'static
{
    const ZERO: Self;
    /// Sentinel for vertices the current source has not reached.
    const UNREACHED: Self;
}

impl Distance for usize {
    const ZERO: Self = 0;
    const UNREACHED: Self = Self::MAX;
}

/// Floating-point value types a betweenness map may hold.
pub trait Float:
    Distance + AddAssign + Mul<Output = Self> + MulAssign + Default
{
    fn from_f64(value: f64) -> Self;
}

macro_rules! impl_float {
    ($($t:ty),*) => {$(
        impl Distance for $t {
            const ZERO: Self = 0.0;
            const UNREACHED: Self = <$t>::INFINITY;
        }

        impl Float for $t {
            #[allow(clippy::cast_possible_truncation)]
            fn from_f64(value: f64) -> Self {
                value as $t
            }
        }
    )*};
}

impl_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::{Distance, Float};

    #[test]
    fn unreached_sorts_after_every_real_distance() {
        assert!(f64::UNREACHED > 1e300);
        assert!(f32::UNREACHED > f32::MAX);
        assert!(usize::UNREACHED > usize::ZERO);
    }

    #[test]
    fn from_f64_narrows_to_target_type() {
        assert!((f32::from_f64(0.25) - 0.25).abs() < f32::EPSILON);
        assert!(f32::from_f64(f64::MAX).is_infinite());
        assert!((f64::from_f64(-3.5) + 3.5).abs() < f64::EPSILON);
    }
}
