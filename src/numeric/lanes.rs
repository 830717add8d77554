//! `wide` lane bundles, one block per instruction-set tier.

use wide::{CmpEq, CmpGe, CmpGt, CmpLe, CmpLt, f32x4, f64x2};
#[cfg(target_feature = "avx")]
use wide::{f32x8, f64x4};
#[cfg(target_feature = "avx512f")]
use wide::f64x8;

use super::{LaneMask, Number};

macro_rules! lane_pow {
    ($x:expr, $y:expr, $ty:ident, $wide_pow:ident) => {{
        #[cfg(feature = "vector-math")]
        {
            $x.$wide_pow($y)
        }
        #[cfg(not(feature = "vector-math"))]
        {
            let (x, y) = ($x.to_array(), $y.to_array());
            $ty::new(std::array::from_fn(|k| x[k].powf(y[k])))
        }
    }};
}

macro_rules! impl_lane_number {
    ($ty:ident, $scalar:ident, $lanes:literal, $wide_pow:ident, $pow_single:path) => {
        impl LaneMask for $ty {
            #[inline]
            fn and(self, other: Self) -> Self {
                self & other
            }

            #[inline]
            fn or(self, other: Self) -> Self {
                self | other
            }

            #[inline]
            fn all(self) -> bool {
                $ty::all(self)
            }

            #[inline]
            fn any(self) -> bool {
                $ty::any(self)
            }
        }

        impl Number for $ty {
            type Scalar = $scalar;
            type Mask = $ty;
            const LANES: usize = $lanes;

            #[inline]
            fn splat(value: $scalar) -> Self {
                $ty::splat(value)
            }

            #[inline]
            fn max(self, other: Self) -> Self {
                $ty::max(self, other)
            }

            #[inline]
            fn min(self, other: Self) -> Self {
                $ty::min(self, other)
            }

            #[inline]
            fn sqrt(self) -> Self {
                $ty::sqrt(self)
            }

            #[inline]
            fn abs(self) -> Self {
                $ty::abs(self)
            }

            #[inline]
            fn lt_mask(self, other: Self) -> Self {
                <$ty as CmpLt>::simd_lt(self, other)
            }

            #[inline]
            fn le_mask(self, other: Self) -> Self {
                <$ty as CmpLe>::simd_le(self, other)
            }

            #[inline]
            fn gt_mask(self, other: Self) -> Self {
                <$ty as CmpGt>::simd_gt(self, other)
            }

            #[inline]
            fn ge_mask(self, other: Self) -> Self {
                <$ty as CmpGe>::simd_ge(self, other)
            }

            #[inline]
            fn eq_mask(self, other: Self) -> Self {
                <$ty as CmpEq>::simd_eq(self, other)
            }

            #[inline]
            fn select(mask: Self, if_true: Self, if_false: Self) -> Self {
                mask.blend(if_true, if_false)
            }

            #[inline]
            fn lane(self, index: usize) -> $scalar {
                self.to_array()[index]
            }

            #[inline]
            fn from_fn(f: impl FnMut(usize) -> $scalar) -> Self {
                $ty::new(std::array::from_fn(f))
            }

            #[inline]
            fn powf_exact(self, exponent: Self) -> Self {
                lane_pow!(self, exponent, $ty, $wide_pow)
            }

            #[inline]
            fn powf_single(self, exponent: Self) -> Self {
                $pow_single(self, exponent)
            }
        }
    };
}

// Single-precision pow for f64 bundles: narrow into the f32 bundle of the
// same tier, padding unused lanes with 1^1.

#[inline]
fn f32x4_pow(x: f32x4, y: f32x4) -> f32x4 {
    lane_pow!(x, y, f32x4, pow_f32x4)
}

#[inline]
fn f64x2_pow_single(x: f64x2, y: f64x2) -> f64x2 {
    let (x, y) = (x.to_array(), y.to_array());
    let narrow = |v: [f64; 2]| f32x4::new([v[0] as f32, v[1] as f32, 1.0, 1.0]);
    let r = f32x4_pow(narrow(x), narrow(y)).to_array();
    f64x2::new([f64::from(r[0]), f64::from(r[1])])
}

impl_lane_number!(f64x2, f64, 2, pow_f64x2, f64x2_pow_single);
impl_lane_number!(f32x4, f32, 4, pow_f32x4, f32x4_pow);

#[cfg(target_feature = "avx")]
#[inline]
fn f32x8_pow(x: f32x8, y: f32x8) -> f32x8 {
    lane_pow!(x, y, f32x8, pow_f32x8)
}

#[cfg(target_feature = "avx")]
#[inline]
fn f64x4_pow_single(x: f64x4, y: f64x4) -> f64x4 {
    let narrow = |v: f64x4| f32x4::new(v.to_array().map(|e| e as f32));
    let r = f32x4_pow(narrow(x), narrow(y));
    f64x4::new(r.to_array().map(f64::from))
}

#[cfg(target_feature = "avx")]
impl_lane_number!(f64x4, f64, 4, pow_f64x4, f64x4_pow_single);
#[cfg(target_feature = "avx")]
impl_lane_number!(f32x8, f32, 8, pow_f32x8, f32x8_pow);

#[cfg(target_feature = "avx512f")]
#[inline]
fn f64x8_pow_single(x: f64x8, y: f64x8) -> f64x8 {
    let narrow = |v: f64x8| f32x8::new(v.to_array().map(|e| e as f32));
    let r = f32x8_pow(narrow(x), narrow(y));
    f64x8::new(r.to_array().map(f64::from))
}

#[cfg(target_feature = "avx512f")]
impl_lane_number!(f64x8, f64, 8, pow_f64x8, f64x8_pow_single);
