//! Conserved state and flux tensor types.
//!
//! A conserved shallow-water state in `D` space dimensions is the water
//! depth `h` followed by the momentum `m = h v`:
//!
//! U = (h, m_1, ..., m_D)
//!
//! Component 0 is the depth, components `1..=D` are momentum. Both types are
//! generic over the lane type `N`, so one `State<2, f64x4>` carries four
//! independent states side by side.
//!
//! Only `D ∈ {1, 2, 3}` is supported. Any other dimension is rejected when
//! the constructors are instantiated, i.e. at build time.

mod flux;
pub mod vector;

use std::ops::{Add, Index, Mul, Sub};

use crate::numeric::Number;

pub use flux::Flux;

/// Compile-time guard for the spatial dimension.
pub(crate) struct SpatialDimension<const D: usize>;

impl<const D: usize> SpatialDimension<D> {
    pub(crate) const SUPPORTED: () = assert!(
        D >= 1 && D <= 3,
        "only 1, 2 and 3 space dimensions are supported"
    );
}

/// Compile-time guard for [`State::expand`].
struct Expansion<const D: usize, const D2: usize>;

impl<const D: usize, const D2: usize> Expansion<D, D2> {
    const VALID: () = assert!(D2 >= D, "cannot expand a state into fewer dimensions");
}

/// Conserved shallow-water state (h, m).
#[derive(Clone, Copy, Debug)]
pub struct State<const D: usize, N> {
    h: N,
    m: [N; D],
}

impl<const D: usize, N: Number> State<D, N> {
    /// Number of conserved components, `D + 1`.
    pub const PROBLEM_DIMENSION: usize = D + 1;

    /// Create a state from depth and momentum.
    #[inline(always)]
    pub fn new(h: N, m: [N; D]) -> Self {
        let () = SpatialDimension::<D>::SUPPORTED;
        Self { h, m }
    }

    /// State with every component zero.
    #[inline(always)]
    pub fn zero() -> Self {
        Self::new(N::constant(0.0), [N::constant(0.0); D])
    }

    /// Water depth `h`.
    #[inline(always)]
    pub fn h(&self) -> N {
        self.h
    }

    /// Momentum `m`.
    #[inline(always)]
    pub fn m(&self) -> [N; D] {
        self.m
    }

    /// Component `k` (0 is depth).
    ///
    /// # Panics
    /// If `k > D`.
    #[inline(always)]
    pub fn component(&self, k: usize) -> N {
        if k == 0 { self.h } else { self.m[k - 1] }
    }

    /// Copy of this state with component `k` replaced.
    ///
    /// # Panics
    /// If `k > D`.
    pub fn with_component(mut self, k: usize, value: N) -> Self {
        if k == 0 {
            self.h = value;
        } else {
            self.m[k - 1] = value;
        }
        self
    }

    /// Lane-wise choice between two states.
    #[inline(always)]
    pub fn select(mask: N::Mask, if_true: Self, if_false: Self) -> Self {
        Self {
            h: N::select(mask, if_true.h, if_false.h),
            m: std::array::from_fn(|i| N::select(mask, if_true.m[i], if_false.m[i])),
        }
    }

    /// Extract lane `k` as a scalar state.
    pub fn lane(&self, k: usize) -> State<D, N::Scalar> {
        State::new(self.h.lane(k), self.m.map(|m| m.lane(k)))
    }

    /// Pack one scalar state per lane.
    ///
    /// # Panics
    /// If `lanes` holds fewer than `N::LANES` states.
    pub fn from_lanes(lanes: &[State<D, N::Scalar>]) -> Self {
        Self::new(
            N::from_fn(|l| lanes[l].h),
            std::array::from_fn(|i| N::from_fn(|l| lanes[l].m[i])),
        )
    }

    /// Embed into `D2 ≥ D` dimensions, padding the momentum with zeros.
    pub fn expand<const D2: usize>(&self) -> State<D2, N> {
        let () = Expansion::<D, D2>::VALID;
        let m = std::array::from_fn(|i| if i < D { self.m[i] } else { N::constant(0.0) });
        State::new(self.h, m)
    }
}

impl<const D: usize, N: Number> Index<usize> for State<D, N> {
    type Output = N;

    fn index(&self, k: usize) -> &N {
        if k == 0 { &self.h } else { &self.m[k - 1] }
    }
}

impl<const D: usize, N: Number> Add for State<D, N> {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self {
            h: self.h + rhs.h,
            m: std::array::from_fn(|i| self.m[i] + rhs.m[i]),
        }
    }
}

impl<const D: usize, N: Number> Sub for State<D, N> {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self {
            h: self.h - rhs.h,
            m: std::array::from_fn(|i| self.m[i] - rhs.m[i]),
        }
    }
}

impl<const D: usize, N: Number> Mul<N> for State<D, N> {
    type Output = Self;

    #[inline(always)]
    fn mul(self, s: N) -> Self {
        Self {
            h: self.h * s,
            m: self.m.map(|m| m * s),
        }
    }
}
