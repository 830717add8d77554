//! Flux tensor of a conserved state.

use std::ops::Add;

use super::{SpatialDimension, State, vector::dot};
use crate::numeric::Number;

/// Flux tensor `f(U)`: one row of `N^D` per conserved component.
///
/// Row 0 is the mass flux, rows `1..=D` the momentum flux. Contracting with
/// a normal `n` yields the normal flux `f(U) · n` as a [`State`].
#[derive(Clone, Copy, Debug)]
pub struct Flux<const D: usize, N> {
    mass: [N; D],
    momentum: [[N; D]; D],
}

impl<const D: usize, N: Number> Flux<D, N> {
    #[inline(always)]
    pub fn new(mass: [N; D], momentum: [[N; D]; D]) -> Self {
        let () = SpatialDimension::<D>::SUPPORTED;
        Self { mass, momentum }
    }

    #[inline(always)]
    pub fn mass(&self) -> [N; D] {
        self.mass
    }

    #[inline(always)]
    pub fn momentum(&self) -> [[N; D]; D] {
        self.momentum
    }

    /// Row `k` (0 is the mass flux).
    ///
    /// # Panics
    /// If `k > D`.
    #[inline(always)]
    pub fn row(&self, k: usize) -> [N; D] {
        if k == 0 { self.mass } else { self.momentum[k - 1] }
    }

    /// Normal flux `f(U) · n`.
    #[inline(always)]
    pub fn contract(&self, normal: &[N; D]) -> State<D, N> {
        State::new(
            dot(&self.mass, normal),
            std::array::from_fn(|i| dot(&self.momentum[i], normal)),
        )
    }
}

impl<const D: usize, N: Number> Add for Flux<D, N> {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self {
            mass: std::array::from_fn(|j| self.mass[j] + rhs.mass[j]),
            momentum: std::array::from_fn(|i| {
                std::array::from_fn(|j| self.momentum[i][j] + rhs.momentum[i][j])
            }),
        }
    }
}
