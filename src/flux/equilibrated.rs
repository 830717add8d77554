//! Raw flux, star states and equilibrated interface fluxes.
//!
//! Well-balancing follows the hydrostatic reconstruction of Audusse et al.
//! (2004): at an interface between nodes i and j both states are rescaled to
//! the depth they would have above the higher of the two bed levels,
//!
//! Z* = max(Z_i, Z_j),   H*_ij = max(0, h_i + Z_i - Z*),
//!
//! keeping the velocity. For a lake at rest (`h + Z` constant, `m = 0`) both
//! star states coincide, so the pressure terms cancel exactly.

use super::precomputed::{N_PRECOMPUTED_VALUES, Precomputed, PrecomputedValues};
use crate::numeric::Number;
use crate::physics::ShallowWater;
use crate::state::{Flux, State};

impl ShallowWater {
    /// `high_order_flux` is available.
    pub const HAVE_HIGH_ORDER_FLUX: bool = true;
    /// `equilibrated_states` is available.
    pub const HAVE_EQUILIBRATED_STATES: bool = true;
    /// Number of precomputed values per node (the topography).
    pub const N_PRECOMPUTED_VALUES: usize = N_PRECOMPUTED_VALUES;

    /// Physical flux tensor `f(U) = (m, m ⊗ v + ½ g h² I)`.
    #[inline(always)]
    pub fn f<const D: usize, N: Number>(&self, u: &State<D, N>) -> Flux<D, N> {
        let h_inv = self.inverse_water_depth(u);
        let m = u.m();
        let p = self.pressure(u);
        let momentum = std::array::from_fn(|i| {
            std::array::from_fn(|k| {
                let advective = m[i] * (m[k] * h_inv);
                if i == k { advective + p } else { advective }
            })
        });
        Flux::new(m, momentum)
    }

    /// State rescaled to the depth above `max(z_left, z_right)`.
    ///
    /// Returns `u` unchanged where the bed is flat (`z_left == z_right`).
    #[inline(always)]
    pub fn star_state<const D: usize, N: Number>(
        &self,
        u: &State<D, N>,
        z_left: N,
        z_right: N,
    ) -> State<D, N> {
        let z_max = z_left.max(z_right);
        let h_star = N::constant(0.0).max(u.h() + z_left - z_max);
        let star = *u * (h_star * self.inverse_water_depth(u));
        State::select(z_left.eq_mask(z_right), *u, star)
    }

    /// The pair `(U*_ij, U*_ji)` of topography-reconciled interface states.
    #[inline(always)]
    pub fn equilibrated_states<const D: usize, N: Number>(
        &self,
        prec_i: &Precomputed<D, N>,
        prec_j: &Precomputed<D, N>,
    ) -> [State<D, N>; 2] {
        [
            self.star_state(&prec_i.state, prec_i.topography, prec_j.topography),
            self.star_state(&prec_j.state, prec_j.topography, prec_i.topography),
        ]
    }

    /// Low-order equilibrated flux `f(U*_ij) + f(U*_ji)`.
    #[inline(always)]
    pub fn flux<const D: usize, N: Number>(
        &self,
        prec_i: &Precomputed<D, N>,
        prec_j: &Precomputed<D, N>,
    ) -> Flux<D, N> {
        let [star_ij, star_ji] = self.equilibrated_states(prec_i, prec_j);
        self.f(&star_ij) + self.f(&star_ji)
    }

    /// High-order centered flux `f(U_i) + f(U_j)`.
    #[inline(always)]
    pub fn high_order_flux<const D: usize, N: Number>(
        &self,
        prec_i: &Precomputed<D, N>,
        prec_j: &Precomputed<D, N>,
    ) -> Flux<D, N> {
        self.f(&prec_i.state) + self.f(&prec_j.state)
    }

    /// Pair `u` with the topography of nodes `i..i + N::LANES`.
    #[inline(always)]
    pub fn flux_contribution<const D: usize, N, P>(
        &self,
        precomputed: &P,
        i: usize,
        u: &State<D, N>,
    ) -> Precomputed<D, N>
    where
        N: Number,
        P: PrecomputedValues<Scalar = N::Scalar>,
    {
        Precomputed::new(*u, precomputed.get::<N>(i))
    }

    /// Pair `u` with the topography of the nodes listed in `js`.
    #[inline(always)]
    pub fn flux_contribution_gather<const D: usize, N, P>(
        &self,
        precomputed: &P,
        js: &[usize],
        u: &State<D, N>,
    ) -> Precomputed<D, N>
    where
        N: Number,
        P: PrecomputedValues<Scalar = N::Scalar>,
    {
        Precomputed::new(*u, precomputed.get_gather::<N>(js))
    }
}
