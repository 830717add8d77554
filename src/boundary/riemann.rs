//! Riemann invariants of the normal flow at a boundary.
//!
//! For the shallow water equations the invariants along a normal `n` are
//!
//! R1 = v·n - 2a,   R2 = v·n + 2a,   a = sqrt(g h).
//!
//! Given both invariants the normal velocity and depth follow as
//!
//! v·n = (R1 + R2) / 2,   h = ((R2 - R1) / 4)² / g.

use crate::numeric::{Number, Scalar, pow};
use crate::physics::ShallowWater;
use crate::state::State;
use crate::state::vector::{axpy, dot, scale};

/// Compile-time guard for the characteristic index.
struct RiemannComponent<const C: usize>;

impl<const C: usize> RiemannComponent<C> {
    const VALID: () = assert!(C == 1 || C == 2, "the Riemann component must be 1 or 2");
}

impl ShallowWater {
    /// The Riemann invariants `(R1, R2)` of `u` along `normal`.
    #[inline(always)]
    pub fn riemann_invariants<const D: usize, N: Number>(
        &self,
        u: &State<D, N>,
        normal: &[N; D],
    ) -> (N, N) {
        let two = N::constant(2.0);
        let a = self.speed_of_sound(u);
        let vn = dot(&u.m(), normal) * self.inverse_water_depth(u);
        (vn - two * a, vn + two * a)
    }

    /// Replace Riemann invariant `C` of `u` by the one of `u_bar`.
    ///
    /// The other invariant and the tangential velocity are taken from `u`.
    /// `C` must be 1 or 2; any other value fails to build.
    pub fn prescribe_riemann_characteristic<const C: usize, const D: usize, N: Number>(
        &self,
        u: &State<D, N>,
        u_bar: &State<D, N>,
        normal: &[N; D],
    ) -> State<D, N> {
        let () = RiemannComponent::<C>::VALID;

        let (r1, r2) = self.riemann_invariants(u, normal);
        let (r1_bar, r2_bar) = self.riemann_invariants(u_bar, normal);
        let r1 = if C == 1 { r1_bar } else { r1 };
        let r2 = if C == 2 { r2_bar } else { r2 };

        let h_inv = self.inverse_water_depth(u);
        let vn = dot(&u.m(), normal) * h_inv;
        let v_perp = axpy(&scale(&u.m(), h_inv), -vn, normal);

        let vn_new = N::constant(0.5) * (r1 + r2);
        let quarter_jump = N::constant(0.25) * (r2 - r1);
        let h_new = N::constant(self.gravity_inverse())
            * pow(quarter_jump, N::Scalar::from_f64_lossy(2.0));

        State::new(h_new, scale(&axpy(&v_perp, vn_new, normal), h_new))
    }
}
