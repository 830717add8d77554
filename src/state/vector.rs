//! Small fixed-size vector helpers over [`Number`].

use crate::numeric::Number;

/// Euclidean inner product `a · b`.
#[inline(always)]
pub fn dot<const D: usize, N: Number>(a: &[N; D], b: &[N; D]) -> N {
    a.iter()
        .zip(b)
        .fold(N::constant(0.0), |acc, (&x, &y)| acc + x * y)
}

/// `|a|²`.
#[inline(always)]
pub fn norm_square<const D: usize, N: Number>(a: &[N; D]) -> N {
    dot(a, a)
}

/// `s · a`.
#[inline(always)]
pub fn scale<const D: usize, N: Number>(a: &[N; D], s: N) -> [N; D] {
    a.map(|x| x * s)
}

/// `a + s · b`.
#[inline(always)]
pub fn axpy<const D: usize, N: Number>(a: &[N; D], s: N, b: &[N; D]) -> [N; D] {
    std::array::from_fn(|i| a[i] + s * b[i])
}
