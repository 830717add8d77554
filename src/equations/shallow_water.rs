//! Shallow water state algebra.
//!
//! The shallow water equations in `D` space dimensions:
//!
//! ∂h/∂t + ∇·m = 0                                   (mass)
//! ∂m/∂t + ∇·(m ⊗ v + ½ g h² I) = -g h ∇Z            (momentum)
//!
//! where:
//! - h = water depth
//! - m = h v = momentum
//! - g = gravitational acceleration
//! - Z = bottom topography
//!
//! # Dry states
//!
//! Velocities are recovered from momentum with the desingularized inverse
//!
//! 1/h ≈ 2h / (h² + max(h, h_tiny)²)
//!
//! which equals `1/h` exactly for `h ≥ h_tiny` and tends smoothly to zero as
//! the depth vanishes, so no kernel ever divides by an exact zero.

use crate::numeric::{LaneMask, Number};
use crate::physics::ShallowWater;
use crate::state::{SpatialDimension, State};
use crate::state::vector::{norm_square, scale};

/// Human-readable name of the equation system.
pub const PROBLEM_NAME: &str = "Shallow water equations";

/// Names of the conserved components in `D` dimensions.
pub fn component_names<const D: usize>() -> &'static [&'static str] {
    let () = SpatialDimension::<D>::SUPPORTED;
    match D {
        1 => &["h", "m"],
        2 => &["h", "m_1", "m_2"],
        3 => &["h", "m_1", "m_2", "m_3"],
        _ => &[],
    }
}

/// Names of the primitive components `(h, v)` in `D` dimensions.
pub fn primitive_component_names<const D: usize>() -> &'static [&'static str] {
    let () = SpatialDimension::<D>::SUPPORTED;
    match D {
        1 => &["h", "v"],
        2 => &["h", "v_1", "v_2"],
        3 => &["h", "v_1", "v_2", "v_3"],
        _ => &[],
    }
}

impl ShallowWater {
    /// Water depth `h = U[0]`.
    #[inline(always)]
    pub fn water_depth<const D: usize, N: Number>(&self, u: &State<D, N>) -> N {
        u.h()
    }

    /// Momentum `m = U[1..=D]`.
    #[inline(always)]
    pub fn momentum<const D: usize, N: Number>(&self, u: &State<D, N>) -> [N; D] {
        u.m()
    }

    /// Regularized inverse depth `2h / (h² + max(h, h_tiny)²)`.
    #[inline(always)]
    pub fn inverse_water_depth<const D: usize, N: Number>(&self, u: &State<D, N>) -> N {
        let h = u.h();
        let h_max = h.max(N::constant(self.h_tiny()));
        N::constant(2.0) * h / (h * h + h_max * h_max)
    }

    /// Velocity `v = m / h` using the regularized inverse depth.
    #[inline(always)]
    pub fn velocity<const D: usize, N: Number>(&self, u: &State<D, N>) -> [N; D] {
        scale(&u.m(), self.inverse_water_depth(u))
    }

    /// Kinetic energy `½ h |v|²`.
    #[inline(always)]
    pub fn kinetic_energy<const D: usize, N: Number>(&self, u: &State<D, N>) -> N {
        let v = self.velocity(u);
        N::constant(0.5) * u.h() * norm_square(&v)
    }

    /// Hydrostatic pressure `½ g h²`.
    #[inline(always)]
    pub fn pressure<const D: usize, N: Number>(&self, u: &State<D, N>) -> N {
        let h = u.h();
        N::constant(0.5 * self.gravity()) * h * h
    }

    /// Gravity wave speed `sqrt(g h)`.
    #[inline(always)]
    pub fn speed_of_sound<const D: usize, N: Number>(&self, u: &State<D, N>) -> N {
        (N::constant(self.gravity()) * u.h()).sqrt()
    }

    /// Mathematical entropy (total energy) `½ g h² + ½ h |v|²`.
    pub fn mathematical_entropy<const D: usize, N: Number>(&self, u: &State<D, N>) -> N {
        self.pressure(u) + self.kinetic_energy(u)
    }

    /// Derivative of the mathematical entropy with respect to U:
    /// `(g h - ½ |v|², v)`.
    pub fn mathematical_entropy_derivative<const D: usize, N: Number>(
        &self,
        u: &State<D, N>,
    ) -> State<D, N> {
        let v = self.velocity(u);
        let eta_h = N::constant(self.gravity()) * u.h() - N::constant(0.5) * norm_square(&v);
        State::new(eta_h, v)
    }

    /// True iff the depth is strictly positive in every lane.
    ///
    /// A single inadmissible lane makes the whole bundle inadmissible.
    pub fn is_admissible<const D: usize, N: Number>(&self, u: &State<D, N>) -> bool {
        let admissible = u.h().gt_mask(N::constant(0.0)).all();

        #[cfg(feature = "debug-output")]
        if !admissible {
            log::trace!("bounds violation: non-positive water depth h = {:?}", u.h());
        }

        admissible
    }
}
