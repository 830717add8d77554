//! Shallow water equations: state algebra, transforms and source terms.
//!
//! ∂U/∂t + ∇·f(U) = s(U)
//!
//! with the conserved state U = (h, m). The kernels are methods on the
//! finalized [`ShallowWater`](crate::ShallowWater) configuration:
//!
//! - `shallow_water`: depth, velocity, pressure, entropy, admissibility
//! - `transform`: primitive/conserved conversion, dimension expansion,
//!   Galilei transforms
//! - `friction`: Manning bottom friction

mod friction;
mod shallow_water;
mod transform;

pub use shallow_water::{PROBLEM_NAME, component_names, primitive_component_names};
