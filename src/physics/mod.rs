//! Physical configuration of the shallow-water system.
//!
//! - [`ShallowWaterParameters`]: mutable, serde-deserializable option bundle
//! - [`ShallowWater`]: finalized, immutable configuration with derived caches
//!
//! The state, flux and boundary kernels are implemented as methods on
//! [`ShallowWater`] in the `equations`, `flux` and `boundary` modules.

pub mod parameters;

pub use parameters::{ShallowWater, ShallowWaterParameters};
