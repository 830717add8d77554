//! Lane-generic numeric backend.
//!
//! Every kernel in this crate is written once against [`Number`] and
//! instantiated for plain scalars (`f32`, `f64`) and for the `wide` lane
//! bundles that the build target supports:
//!
//! | tier    | target features            | lane types         |
//! |---------|----------------------------|--------------------|
//! | scalar  | always                     | `f32`, `f64`       |
//! | 128-bit | `sse2`, `neon` or `simd128` | `f64x2`, `f32x4`  |
//! | 256-bit | `avx`                      | `f64x4`, `f32x8`   |
//! | 512-bit | `avx512f`                  | `f64x8`            |
//!
//! Tier selection happens at compile time through `cfg(target_feature)`,
//! so a lane type that the target cannot execute natively simply does not
//! implement [`Number`].
//!
//! Lane decisions never branch per lane: comparisons produce a
//! [`LaneMask`] and [`Number::select`] blends the two candidates.

mod scalar;
#[cfg(any(
    target_feature = "sse2",
    target_feature = "neon",
    target_feature = "simd128"
))]
mod lanes;
pub mod pow;

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};

pub use pow::{
    Bias, FAST_POW_TOLERANCE, LowerBias, NoBias, UpperBias, fast_pow, fast_pow_biased, pow,
    pow_lanes, pow_scalar,
};
pub use scalar::Scalar;

/// Result of a lane-wise comparison.
///
/// For scalars this is `bool`; for lane bundles it is the bundle itself
/// with every bit of a lane set where the comparison holds.
pub trait LaneMask: Copy + Debug + Send + Sync + 'static {
    /// Lane-wise conjunction.
    fn and(self, other: Self) -> Self;
    /// Lane-wise disjunction.
    fn or(self, other: Self) -> Self;
    /// True iff the mask is set in every lane.
    fn all(self) -> bool;
    /// True iff the mask is set in at least one lane.
    fn any(self) -> bool;
}

impl LaneMask for bool {
    #[inline]
    fn and(self, other: Self) -> Self {
        self && other
    }

    #[inline]
    fn or(self, other: Self) -> Self {
        self || other
    }

    #[inline]
    fn all(self) -> bool {
        self
    }

    #[inline]
    fn any(self) -> bool {
        self
    }
}

/// A scalar or a fixed-width bundle of scalars with elementwise arithmetic.
pub trait Number:
    Copy
    + Debug
    + Default
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Element type of a lane.
    type Scalar: Scalar;
    /// Comparison result.
    type Mask: LaneMask;
    /// Number of lanes (1 for scalars).
    const LANES: usize;

    /// Broadcast a scalar into every lane.
    fn splat(value: Self::Scalar) -> Self;

    /// Broadcast an `f64` literal, rounding to the element precision.
    #[inline]
    fn constant(value: f64) -> Self {
        Self::splat(<Self::Scalar as Scalar>::from_f64_lossy(value))
    }

    fn max(self, other: Self) -> Self;
    fn min(self, other: Self) -> Self;
    fn sqrt(self) -> Self;
    fn abs(self) -> Self;

    fn lt_mask(self, other: Self) -> Self::Mask;
    fn le_mask(self, other: Self) -> Self::Mask;
    fn gt_mask(self, other: Self) -> Self::Mask;
    fn ge_mask(self, other: Self) -> Self::Mask;
    fn eq_mask(self, other: Self) -> Self::Mask;

    /// Lane-wise `if mask { if_true } else { if_false }`.
    fn select(mask: Self::Mask, if_true: Self, if_false: Self) -> Self;

    /// Value of lane `index`.
    ///
    /// # Panics
    /// If `index >= Self::LANES`.
    fn lane(self, index: usize) -> Self::Scalar;

    /// Build a value lane by lane.
    fn from_fn(f: impl FnMut(usize) -> Self::Scalar) -> Self;

    /// Load `Self::LANES` consecutive values starting at `first`.
    ///
    /// # Panics
    /// If `values` holds fewer than `first + Self::LANES` entries.
    #[inline]
    fn load(values: &[Self::Scalar], first: usize) -> Self {
        Self::from_fn(|k| values[first + k])
    }

    /// Gather one value per lane from `values` at the positions in `indices`.
    ///
    /// # Panics
    /// If `indices` holds fewer than `Self::LANES` entries or any index is out
    /// of range.
    #[inline]
    fn gather(values: &[Self::Scalar], indices: &[usize]) -> Self {
        Self::from_fn(|k| values[indices[k]])
    }

    /// `self^exponent` at full element precision.
    fn powf_exact(self, exponent: Self) -> Self;

    /// `self^exponent` evaluated in single precision.
    fn powf_single(self, exponent: Self) -> Self;
}
