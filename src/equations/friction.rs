//! Manning bottom friction.
//!
//! S(U) = (0, -g n² |v| v / h^{1/3})
//!
//! The depth is regularized with `max(h, h_tiny)` before the fractional
//! power so the source stays finite on dry states.

use crate::numeric::{Number, Scalar, fast_pow};
use crate::physics::ShallowWater;
use crate::state::State;
use crate::state::vector::{norm_square, scale};

impl ShallowWater {
    /// Manning friction source term of a conserved state.
    pub fn manning_friction<const D: usize, N: Number>(&self, u: &State<D, N>) -> State<D, N> {
        let zero = N::constant(0.0);
        let v = self.velocity(u);
        let speed = norm_square(&v).sqrt();
        let h_reg = u.h().max(N::constant(self.h_tiny()));
        let h_factor = fast_pow(h_reg, N::Scalar::from_f64_lossy(-1.0 / 3.0));
        let coefficient = N::constant(-self.g_mannings_sqd()) * speed * h_factor;
        State::new(zero, scale(&v, coefficient))
    }
}
