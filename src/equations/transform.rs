//! Conversions between conserved and primitive states.

use crate::numeric::Number;
use crate::physics::ShallowWater;
use crate::state::State;

impl ShallowWater {
    /// Conserved state `(h, h v)` from a primitive state `(h, v)`.
    #[inline(always)]
    pub fn from_primitive_state<const D: usize, N: Number>(
        &self,
        primitive: &State<D, N>,
    ) -> State<D, N> {
        let h = primitive.h();
        State::new(h, primitive.m().map(|v| v * h))
    }

    /// Primitive state `(h, v)` from a conserved state, using the
    /// regularized inverse depth.
    #[inline(always)]
    pub fn to_primitive_state<const D: usize, N: Number>(&self, u: &State<D, N>) -> State<D, N> {
        State::new(u.h(), self.velocity(u))
    }

    /// Embed a state into `D2 ≥ D` space dimensions with zero extra momentum.
    #[inline(always)]
    pub fn expand_state<const D2: usize, const D: usize, N: Number>(
        &self,
        u: &State<D, N>,
    ) -> State<D2, N> {
        u.expand::<D2>()
    }

    /// Apply a linear transformation of the velocity frame to the momentum.
    ///
    /// The depth is left untouched; `lambda` maps the momentum vector.
    pub fn apply_galilei_transform<const D: usize, N: Number>(
        &self,
        u: &State<D, N>,
        lambda: impl Fn([N; D]) -> [N; D],
    ) -> State<D, N> {
        State::new(u.h(), lambda(u.m()))
    }
}
