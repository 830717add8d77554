//! Boundary conditions for the shallow water equations.
//!
//! A boundary condition maps the state at a boundary node to the state that
//! the boundary flux is evaluated with.
//!
//! # Available Boundary Conditions
//!
//! | Tag | Raw id | Result |
//! |-----|--------|--------|
//! | `Slip` | 2 | normal momentum removed, tangential momentum kept |
//! | `NoSlip` | 3 | momentum set to zero |
//! | `Dirichlet` | 4 | prescribed state |
//! | `Dynamic` | 5 | characteristic treatment, see below |
//!
//! # Dynamic boundaries
//!
//! With normal velocity `vn = v·n` and wave speed `a = sqrt(g h)` each lane
//! independently falls into one regime:
//!
//! | Regime | Condition | Result |
//! |--------|-----------|--------|
//! | supersonic inflow | `vn < -a` | prescribed state |
//! | subsonic inflow | `-a ≤ vn ≤ 0` | outgoing `R2` from the interior, rest prescribed |
//! | subsonic outflow | `0 < vn ≤ a` | incoming `R1` prescribed, rest from the interior |
//! | supersonic outflow | `vn > a` | interior state unchanged |
//!
//! where `R1 = vn - 2a` and `R2 = vn + 2a` are the Riemann invariants.

mod conditions;
mod riemann;

use crate::error::BoundaryError;

/// Boundary regime of a boundary node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// Prescribed state
    Dirichlet,
    /// Impermeable wall, tangential flow allowed
    Slip,
    /// Impermeable wall at rest
    NoSlip,
    /// Characteristic in/outflow
    Dynamic,
}

impl Boundary {
    /// Raw boundary id used by the mesh.
    pub fn id(self) -> u32 {
        match self {
            Boundary::Slip => 2,
            Boundary::NoSlip => 3,
            Boundary::Dirichlet => 4,
            Boundary::Dynamic => 5,
        }
    }
}

impl TryFrom<u32> for Boundary {
    type Error = BoundaryError;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        match id {
            2 => Ok(Boundary::Slip),
            3 => Ok(Boundary::NoSlip),
            4 => Ok(Boundary::Dirichlet),
            5 => Ok(Boundary::Dynamic),
            _ => Err(BoundaryError::UnknownBoundaryId(id)),
        }
    }
}

impl From<Boundary> for u32 {
    fn from(boundary: Boundary) -> Self {
        boundary.id()
    }
}
