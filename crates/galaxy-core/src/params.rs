//! Galaxy shape and appearance parameters.
//!
//! A `GalaxyParams` value is immutable for the lifetime of one generation:
//! the panel edits a working copy and commits the whole set through
//! `GalaxyManager::rebuild`. Colors are linear RGB triples; no gamma
//! handling happens anywhere in the pipeline.

use glam::Vec3;

use crate::constants::*;
use crate::error::GalaxyError;

#[derive(Clone, Debug, PartialEq)]
pub struct GalaxyParams {
    /// Number of points to generate.
    pub count: u32,
    /// World-space sprite size of a single point.
    pub point_size: f32,
    /// Outer radius of the galaxy disc.
    pub radius: f32,
    /// Number of evenly spaced spiral arms.
    pub branches: u32,
    /// Radians of twist per world unit of radius. Sign sets the winding
    /// direction.
    pub spin: f32,
    /// Magnitude of the per-axis jitter applied to every point.
    pub randomness: f32,
    /// Exponent biasing jitter toward zero; higher values give tighter arms
    /// with sparse outliers.
    pub randomness_power: f32,
    pub inside_color: Vec3,
    pub outside_color: Vec3,
}

impl Default for GalaxyParams {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            point_size: DEFAULT_POINT_SIZE,
            radius: DEFAULT_RADIUS,
            branches: DEFAULT_BRANCHES,
            spin: DEFAULT_SPIN,
            randomness: DEFAULT_RANDOMNESS,
            randomness_power: DEFAULT_RANDOMNESS_POWER,
            inside_color: Vec3::from(DEFAULT_INSIDE_COLOR),
            outside_color: Vec3::from(DEFAULT_OUTSIDE_COLOR),
        }
    }
}

impl GalaxyParams {
    /// Reject parameter sets the generator cannot give a meaning to.
    ///
    /// Everything else degrades gracefully: `randomness == 0` produces a
    /// perfectly smooth spiral, `branches == 1` a single arm.
    pub fn validate(&self) -> Result<(), GalaxyError> {
        if self.count == 0 {
            return Err(GalaxyError::InvalidParameter(
                "count must be at least 1".into(),
            ));
        }
        if self.branches == 0 {
            return Err(GalaxyError::InvalidParameter(
                "branches must be at least 1".into(),
            ));
        }
        if self.radius <= 0.0 {
            return Err(GalaxyError::InvalidParameter(format!(
                "radius must be positive, got {}",
                self.radius
            )));
        }
        Ok(())
    }
}
