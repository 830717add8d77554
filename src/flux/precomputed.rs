//! Per-node precomputed values consumed by the interface fluxes.
//!
//! The shallow-water flux needs a single precomputed value per node, the
//! bottom topography `Z`. The mesh collaborator owns the storage and hands it
//! to the kernels through [`PrecomputedValues`].

use crate::numeric::{Number, Scalar};
use crate::state::State;

/// Number of precomputed values stored per node.
pub const N_PRECOMPUTED_VALUES: usize = 1;

/// A conserved state together with the topography at its node.
#[derive(Clone, Copy, Debug)]
pub struct Precomputed<const D: usize, N> {
    pub state: State<D, N>,
    pub topography: N,
}

impl<const D: usize, N: Number> Precomputed<D, N> {
    #[inline(always)]
    pub fn new(state: State<D, N>, topography: N) -> Self {
        Self { state, topography }
    }
}

/// Read access to per-node precomputed values.
pub trait PrecomputedValues {
    type Scalar: Scalar;

    /// Node values in index order.
    fn values(&self) -> &[Self::Scalar];

    /// Values of nodes `i..i + N::LANES`, one per lane.
    ///
    /// # Panics
    /// If the range runs past the end of the store.
    #[inline(always)]
    fn get<N: Number<Scalar = Self::Scalar>>(&self, i: usize) -> N {
        N::load(self.values(), i)
    }

    /// Values of the nodes listed in `js`, one per lane.
    ///
    /// # Panics
    /// If `js` is shorter than `N::LANES` or holds an out-of-range index.
    #[inline(always)]
    fn get_gather<N: Number<Scalar = Self::Scalar>>(&self, js: &[usize]) -> N {
        N::gather(self.values(), js)
    }
}

/// Contiguous topography store, one value per node.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TopographyStore<S> {
    values: Vec<S>,
}

impl<S: Scalar> TopographyStore<S> {
    pub fn new(values: Vec<S>) -> Self {
        Self { values }
    }

    /// Evaluate `topography` at every node index in `0..n_nodes`.
    pub fn from_fn(n_nodes: usize, topography: impl FnMut(usize) -> S) -> Self {
        Self {
            values: (0..n_nodes).map(topography).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Overwrite the value of node `i`.
    pub fn set(&mut self, i: usize, value: S) {
        self.values[i] = value;
    }
}

impl<S: Scalar> FromIterator<S> for TopographyStore<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<S: Scalar> PrecomputedValues for TopographyStore<S> {
    type Scalar = S;

    #[inline(always)]
    fn values(&self) -> &[S] {
        &self.values
    }
}
