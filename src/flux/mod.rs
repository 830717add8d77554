//! Interface fluxes.
//!
//! - [`ShallowWater::f`](crate::ShallowWater::f): physical flux tensor
//! - [`ShallowWater::star_state`](crate::ShallowWater::star_state): hydrostatic
//!   reconstruction of a state against the neighboring bed level
//! - [`ShallowWater::flux`](crate::ShallowWater::flux): low-order equilibrated
//!   flux `f(U*_ij) + f(U*_ji)`
//! - [`ShallowWater::high_order_flux`](crate::ShallowWater::high_order_flux):
//!   centered flux `f(U_i) + f(U_j)`
//!
//! Fluxes operate on [`Precomputed`] records pairing a state with the
//! topography of its node, assembled through `flux_contribution` from a
//! [`PrecomputedValues`] store.

mod equilibrated;
mod precomputed;

pub use precomputed::{N_PRECOMPUTED_VALUES, Precomputed, PrecomputedValues, TopographyStore};
