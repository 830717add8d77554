//! # swe-kernels
//!
//! Well-balanced shallow water kernels for explicit conservation-law solvers.
//!
//! This crate provides the per-node and per-interface building blocks that a
//! finite element or finite volume time stepper consumes:
//! - Conserved state algebra (depth, velocity, pressure, entropy)
//! - Physical flux and equilibrated star-state fluxes over variable topography
//! - Riemann-invariant boundary conditions
//! - Primitive/conserved transforms and Manning friction
//! - A lane-generic numeric backend with exact and fast `pow`
//!
//! Every kernel is a pure function of a finalized [`ShallowWater`]
//! configuration and its inputs. Kernels are generic over the space dimension
//! `D ∈ {1, 2, 3}` and over the lane type [`Number`], so the same code runs on
//! `f64`, `f32` and the `wide` SIMD bundles enabled by the build target.
//!
//! # Example
//!
//! ```
//! use swe_kernels::{Precomputed, ShallowWaterParameters, State};
//!
//! let sw = ShallowWaterParameters::new().finalize().unwrap();
//!
//! // Lake at rest over a bed step: the interface flux carries no mass.
//! let left = Precomputed::new(State::new(2.0, [0.0]), 1.0);
//! let right = Precomputed::new(State::new(1.0, [0.0]), 2.0);
//! let f = sw.flux(&left, &right);
//! assert_eq!(f.row(0), [0.0]);
//! ```

pub mod boundary;
pub mod equations;
pub mod error;
pub mod flux;
pub mod numeric;
pub mod physics;
pub mod state;

// Re-export main types for convenience
pub use boundary::Boundary;
pub use equations::{PROBLEM_NAME, component_names, primitive_component_names};
pub use error::{BoundaryError, ParameterError};
pub use flux::{N_PRECOMPUTED_VALUES, Precomputed, PrecomputedValues, TopographyStore};
pub use numeric::{
    Bias, FAST_POW_TOLERANCE, LaneMask, LowerBias, NoBias, Number, Scalar, UpperBias, fast_pow,
    fast_pow_biased, pow, pow_lanes, pow_scalar,
};
pub use physics::{ShallowWater, ShallowWaterParameters};
pub use state::{Flux, State};
