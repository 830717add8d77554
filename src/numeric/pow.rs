//! Exact and fast power functions over [`Number`].
//!
//! [`pow`] evaluates at full element precision. [`fast_pow`] narrows to
//! single precision, evaluates there and widens the result again, which is
//! markedly cheaper for `f64` lanes at the cost of accuracy. Within the
//! physically relevant domain (bases in `[1e-6, 1e6]`, exponents in
//! `[-3, 3]`) the relative error of [`fast_pow`] stays below
//! [`FAST_POW_TOLERANCE`].
//!
//! Which implementation backs the evaluation is a build decision: with the
//! `vector-math` feature both scalars and lanes use the vectorized `wide`
//! routines, otherwise the platform `powf` is applied lane by lane.

use super::{Number, Scalar};

/// Relative error bound of [`fast_pow`] in the physically relevant domain.
pub const FAST_POW_TOLERANCE: f64 = 1e-4;

/// Rounding policy applied to a [`fast_pow`] result.
pub trait Bias {
    const NAME: &'static str;

    fn apply<N: Number>(value: N) -> N;
}

/// Return the single-precision result unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoBias;

/// Shift the result up by the tolerance so it never underestimates the
/// exact power of a positive base.
#[derive(Clone, Copy, Debug, Default)]
pub struct UpperBias;

/// Shift the result down by the tolerance so it never overestimates the
/// exact power of a positive base.
#[derive(Clone, Copy, Debug, Default)]
pub struct LowerBias;

impl Bias for NoBias {
    const NAME: &'static str = "none";

    #[inline]
    fn apply<N: Number>(value: N) -> N {
        value
    }
}

impl Bias for UpperBias {
    const NAME: &'static str = "upper";

    #[inline]
    fn apply<N: Number>(value: N) -> N {
        value * N::constant(1.0 + FAST_POW_TOLERANCE)
    }
}

impl Bias for LowerBias {
    const NAME: &'static str = "lower";

    #[inline]
    fn apply<N: Number>(value: N) -> N {
        value * N::constant(1.0 - FAST_POW_TOLERANCE)
    }
}

/// `x^b` at full precision with a scalar exponent broadcast to every lane.
#[inline]
pub fn pow<N: Number>(x: N, b: N::Scalar) -> N {
    x.powf_exact(N::splat(b))
}

/// `x^b` at full precision with a per-lane exponent.
#[inline]
pub fn pow_lanes<N: Number>(x: N, b: N) -> N {
    x.powf_exact(b)
}

/// `x^b` for plain scalars.
#[inline]
pub fn pow_scalar<S: Scalar>(x: S, b: S) -> S {
    <S as Number>::powf_exact(x, b)
}

/// Approximate `x^b` evaluated in single precision.
#[inline]
pub fn fast_pow<N: Number>(x: N, b: N::Scalar) -> N {
    fast_pow_biased::<NoBias, N>(x, b)
}

/// Approximate `x^b` evaluated in single precision, rounded by `B`.
#[inline]
pub fn fast_pow_biased<B: Bias, N: Number>(x: N, b: N::Scalar) -> N {
    B::apply(x.powf_single(N::splat(b)))
}
