//! Boundary state resolution.

use super::Boundary;
use crate::numeric::{LaneMask, Number};
use crate::physics::ShallowWater;
use crate::state::State;
use crate::state::vector::{axpy, dot};

impl ShallowWater {
    /// State to evaluate the boundary flux with, for boundary regime `id`.
    ///
    /// `normal` is the outward unit normal. `get_dirichlet_data` yields the
    /// prescribed state; it is called at most once, and only if the regime
    /// needs it in at least one lane.
    pub fn apply_boundary_conditions<const D: usize, N, F>(
        &self,
        id: Boundary,
        u: State<D, N>,
        normal: &[N; D],
        get_dirichlet_data: F,
    ) -> State<D, N>
    where
        N: Number,
        F: FnOnce() -> State<D, N>,
    {
        match id {
            Boundary::Dirichlet => get_dirichlet_data(),
            Boundary::Slip => {
                let m = u.m();
                State::new(u.h(), axpy(&m, -dot(&m, normal), normal))
            }
            Boundary::NoSlip => State::new(u.h(), [N::constant(0.0); D]),
            Boundary::Dynamic => self.apply_dynamic_boundary(u, normal, get_dirichlet_data),
        }
    }

    fn apply_dynamic_boundary<const D: usize, N, F>(
        &self,
        u: State<D, N>,
        normal: &[N; D],
        get_dirichlet_data: F,
    ) -> State<D, N>
    where
        N: Number,
        F: FnOnce() -> State<D, N>,
    {
        let zero = N::constant(0.0);
        let a = self.speed_of_sound(&u);
        let vn = dot(&u.m(), normal) * self.inverse_water_depth(&u);

        let supersonic_inflow = vn.lt_mask(-a);
        let subsonic_inflow = vn.ge_mask(-a).and(vn.le_mask(zero));
        let subsonic_outflow = vn.gt_mask(zero).and(vn.le_mask(a));

        // Supersonic outflow everywhere: keep the interior state.
        if !supersonic_inflow
            .or(subsonic_inflow)
            .or(subsonic_outflow)
            .any()
        {
            return u;
        }

        let u_dirichlet = get_dirichlet_data();
        let inflow = self.prescribe_riemann_characteristic::<2, D, N>(&u_dirichlet, &u, normal);
        let outflow = self.prescribe_riemann_characteristic::<1, D, N>(&u, &u_dirichlet, normal);

        let result = State::select(supersonic_inflow, u_dirichlet, u);
        let result = State::select(subsonic_inflow, inflow, result);
        State::select(subsonic_outflow, outflow, result)
    }
}
