//! Scalar element types: the portable fallback tier.

use std::fmt::Display;

use num_traits::{Float, FromPrimitive};
#[cfg(feature = "vector-math")]
use wide::{f32x4, f64x2};

use super::Number;

/// Element type of a [`Number`]: `f32` or `f64`.
///
/// A scalar is also a one-lane [`Number`] whose mask is `bool`.
pub trait Scalar: Number<Scalar = Self, Mask = bool> + Float + FromPrimitive + Display {
    /// Convert an `f64` constant, rounding to this precision.
    fn from_f64_lossy(value: f64) -> Self;

    fn into_f64(self) -> f64;
}

impl Scalar for f64 {
    #[inline]
    fn from_f64_lossy(value: f64) -> Self {
        value
    }

    #[inline]
    fn into_f64(self) -> f64 {
        self
    }
}

impl Scalar for f32 {
    #[inline]
    fn from_f64_lossy(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn into_f64(self) -> f64 {
        f64::from(self)
    }
}

// With `vector-math` a scalar is evaluated in lane 0 of the narrowest bundle,
// so scalar and lane code produce identical bits.

#[inline]
fn pow_f64_exact(x: f64, y: f64) -> f64 {
    #[cfg(feature = "vector-math")]
    {
        f64x2::splat(x).pow_f64x2(f64x2::splat(y)).to_array()[0]
    }
    #[cfg(not(feature = "vector-math"))]
    {
        x.powf(y)
    }
}

#[inline]
pub(super) fn pow_f32_exact(x: f32, y: f32) -> f32 {
    #[cfg(feature = "vector-math")]
    {
        f32x4::splat(x).pow_f32x4(f32x4::splat(y)).to_array()[0]
    }
    #[cfg(not(feature = "vector-math"))]
    {
        x.powf(y)
    }
}

#[inline]
fn pow_f64_single(x: f64, y: f64) -> f64 {
    f64::from(pow_f32_exact(x as f32, y as f32))
}

macro_rules! impl_scalar_number {
    ($t:ident, $pow_exact:ident, $pow_single:ident) => {
        impl Number for $t {
            type Scalar = $t;
            type Mask = bool;
            const LANES: usize = 1;

            #[inline]
            fn splat(value: $t) -> Self {
                value
            }

            #[inline]
            fn max(self, other: Self) -> Self {
                $t::max(self, other)
            }

            #[inline]
            fn min(self, other: Self) -> Self {
                $t::min(self, other)
            }

            #[inline]
            fn sqrt(self) -> Self {
                $t::sqrt(self)
            }

            #[inline]
            fn abs(self) -> Self {
                $t::abs(self)
            }

            #[inline]
            fn lt_mask(self, other: Self) -> bool {
                self < other
            }

            #[inline]
            fn le_mask(self, other: Self) -> bool {
                self <= other
            }

            #[inline]
            fn gt_mask(self, other: Self) -> bool {
                self > other
            }

            #[inline]
            fn ge_mask(self, other: Self) -> bool {
                self >= other
            }

            #[inline]
            fn eq_mask(self, other: Self) -> bool {
                self == other
            }

            #[inline]
            fn select(mask: bool, if_true: Self, if_false: Self) -> Self {
                if mask { if_true } else { if_false }
            }

            #[inline]
            fn lane(self, index: usize) -> $t {
                assert_eq!(index, 0, "a scalar has a single lane");
                self
            }

            #[inline]
            fn from_fn(mut f: impl FnMut(usize) -> $t) -> Self {
                f(0)
            }

            #[inline]
            fn powf_exact(self, exponent: Self) -> Self {
                $pow_exact(self, exponent)
            }

            #[inline]
            fn powf_single(self, exponent: Self) -> Self {
                $pow_single(self, exponent)
            }
        }
    };
}

impl_scalar_number!(f64, pow_f64_exact, pow_f64_single);
impl_scalar_number!(f32, pow_f32_exact, pow_f32_exact);
