//! Shallow-water physical parameters.
//!
//! Configuration is two-phase: a mutable [`ShallowWaterParameters`] bundle is
//! filled in (by hand, through the `with_*` builder methods, or deserialized
//! by an external parameter loader) and then consumed by
//! [`ShallowWaterParameters::finalize`], which validates it and derives the
//! cached quantities used by the kernels. The resulting [`ShallowWater`] is
//! read-only and can be shared freely between threads.

use serde::{Deserialize, Serialize};

use crate::error::ParameterError;

/// Dry-state tolerances above this value visibly perturb wet solutions.
const LARGE_DRY_STATE_TOLERANCE: f64 = 1e-3;

/// Manning coefficients above this value are unusual even for rough channels.
const LARGE_MANNINGS_FRICTION: f64 = 0.2;

// =============================================================================
// Parameters
// =============================================================================

/// Mutable shallow-water parameter bundle.
///
/// # Example
///
/// ```
/// use swe_kernels::ShallowWaterParameters;
///
/// let sw = ShallowWaterParameters::new()
///     .with_gravity(9.81)
///     .with_reference_water_depth(2.0)
///     .finalize()
///     .unwrap();
/// assert!((sw.h_tiny() - 2e-10).abs() < 1e-20);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShallowWaterParameters {
    /// Gravitational acceleration g (m/s²)
    pub gravity: f64,
    /// Typical water depth H of the problem (m), scales the dry-state tolerance
    pub reference_water_depth: f64,
    /// Relative depth below which a state is considered dry
    pub dry_state_tolerance: f64,
    /// Manning's roughness coefficient n (s/m^{1/3})
    pub mannings_friction: f64,
}

impl Default for ShallowWaterParameters {
    fn default() -> Self {
        Self {
            gravity: 9.81,
            reference_water_depth: 1.0,
            dry_state_tolerance: 1e-10,
            mannings_friction: 0.0,
        }
    }
}

impl ShallowWaterParameters {
    /// Parameters with default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_reference_water_depth(mut self, depth: f64) -> Self {
        self.reference_water_depth = depth;
        self
    }

    pub fn with_dry_state_tolerance(mut self, tolerance: f64) -> Self {
        self.dry_state_tolerance = tolerance;
        self
    }

    pub fn with_mannings_friction(mut self, n: f64) -> Self {
        self.mannings_friction = n;
        self
    }

    /// Validate the parameters and derive the cached quantities.
    ///
    /// # Errors
    /// Returns a [`ParameterError`] if a value is not finite, gravity or the
    /// reference depth is not positive, the dry-state tolerance lies outside
    /// `(0, 1)`, or the Manning coefficient is negative.
    pub fn finalize(self) -> Result<ShallowWater, ParameterError> {
        self.validate()?;

        if self.dry_state_tolerance > LARGE_DRY_STATE_TOLERANCE {
            log::warn!(
                "dry state tolerance {:.3e} is large, wet states near the threshold will be perturbed",
                self.dry_state_tolerance
            );
        }
        if self.mannings_friction > LARGE_MANNINGS_FRICTION {
            log::warn!(
                "Manning's coefficient {:.3} is unusually large",
                self.mannings_friction
            );
        }

        let sw = ShallowWater::derive(self);
        log::debug!(
            "shallow water finalized: g = {}, h_tiny = {:.3e}, reference speed = {:.4}, \
             g n^2 = {:.3e}, tiny entropy = {:.3e}",
            sw.gravity(),
            sw.h_tiny(),
            sw.reference_speed(),
            sw.g_mannings_sqd(),
            sw.tiny_entropy_number()
        );
        Ok(sw)
    }

    fn validate(&self) -> Result<(), ParameterError> {
        let values = [
            ("gravity", self.gravity),
            ("reference_water_depth", self.reference_water_depth),
            ("dry_state_tolerance", self.dry_state_tolerance),
            ("mannings_friction", self.mannings_friction),
        ];
        if let Some(&(name, value)) = values.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ParameterError::non_finite(name, value));
        }

        if self.gravity <= 0.0 {
            return Err(ParameterError::NonPositiveGravity(self.gravity));
        }
        if self.reference_water_depth <= 0.0 {
            return Err(ParameterError::NonPositiveReferenceDepth(
                self.reference_water_depth,
            ));
        }
        if self.dry_state_tolerance <= 0.0 || self.dry_state_tolerance >= 1.0 {
            return Err(ParameterError::InvalidDryStateTolerance(
                self.dry_state_tolerance,
            ));
        }
        if self.mannings_friction < 0.0 {
            return Err(ParameterError::NegativeFriction(self.mannings_friction));
        }
        Ok(())
    }
}

// =============================================================================
// Finalized configuration
// =============================================================================

/// Finalized shallow-water configuration.
///
/// Holds the validated parameters and the derived caches. All state, flux
/// and boundary kernels are methods on this type.
#[derive(Clone, Debug)]
pub struct ShallowWater {
    parameters: ShallowWaterParameters,
    h_tiny: f64,
    gravity_inverse: f64,
    g_mannings_sqd: f64,
    reference_speed: f64,
    h_kinetic_energy_tiny: f64,
    tiny_entropy_number: f64,
}

impl ShallowWater {
    /// Derive the caches from already validated parameters.
    fn derive(parameters: ShallowWaterParameters) -> Self {
        let g = parameters.gravity;
        let n = parameters.mannings_friction;
        let h_tiny = parameters.reference_water_depth * parameters.dry_state_tolerance;
        let reference_speed = (g * parameters.reference_water_depth).sqrt();
        Self {
            h_tiny,
            gravity_inverse: 1.0 / g,
            g_mannings_sqd: g * n * n,
            reference_speed,
            h_kinetic_energy_tiny: h_tiny * reference_speed * reference_speed,
            tiny_entropy_number: g * h_tiny * h_tiny,
            parameters,
        }
    }

    /// The validated parameters.
    pub fn parameters(&self) -> &ShallowWaterParameters {
        &self.parameters
    }

    #[inline(always)]
    pub fn gravity(&self) -> f64 {
        self.parameters.gravity
    }

    #[inline(always)]
    pub fn reference_water_depth(&self) -> f64 {
        self.parameters.reference_water_depth
    }

    #[inline(always)]
    pub fn dry_state_tolerance(&self) -> f64 {
        self.parameters.dry_state_tolerance
    }

    #[inline(always)]
    pub fn mannings_friction(&self) -> f64 {
        self.parameters.mannings_friction
    }

    /// Absolute dry-state depth `H · tolerance`.
    #[inline(always)]
    pub fn h_tiny(&self) -> f64 {
        self.h_tiny
    }

    /// `1 / g`.
    #[inline(always)]
    pub fn gravity_inverse(&self) -> f64 {
        self.gravity_inverse
    }

    /// `g n²`.
    #[inline(always)]
    pub fn g_mannings_sqd(&self) -> f64 {
        self.g_mannings_sqd
    }

    /// `sqrt(g H)`.
    #[inline(always)]
    pub fn reference_speed(&self) -> f64 {
        self.reference_speed
    }

    /// Kinetic-energy scale of a dry state, `h_tiny · g H`.
    #[inline(always)]
    pub fn h_kinetic_energy_tiny(&self) -> f64 {
        self.h_kinetic_energy_tiny
    }

    /// Entropy scale of a dry state, `g · h_tiny²`.
    #[inline(always)]
    pub fn tiny_entropy_number(&self) -> f64 {
        self.tiny_entropy_number
    }
}

impl Default for ShallowWater {
    /// Finalized default parameters (g = 9.81, H = 1).
    fn default() -> Self {
        Self::derive(ShallowWaterParameters::default())
    }
}
