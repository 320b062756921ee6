//! Point-cloud generation.
//!
//! `generate` is a pure function from a parameter set to flat position and
//! color buffers; it holds no state and takes no seed, so every call yields
//! a visually fresh galaxy. Each point is produced independently of all
//! others, which keeps the loop trivially parallelizable should a future
//! frontend need it.

use glam::Vec3;
use rand::prelude::*;
use std::f32::consts::TAU;

use crate::error::GalaxyError;
use crate::params::GalaxyParams;

/// The generated artifact: interleaved-by-index position and color buffers
/// plus the parameters they were derived from.
///
/// Invariant: `positions.len() == colors.len() == 3 * params.count`.
#[derive(Clone, Debug)]
pub struct PointCloud {
    pub positions: Vec<f32>,
    pub colors: Vec<f32>,
    pub params: GalaxyParams,
}

impl PointCloud {
    /// Number of points in the cloud.
    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Position of point `i` as a vector.
    pub fn position(&self, i: usize) -> Vec3 {
        let i3 = i * 3;
        Vec3::new(
            self.positions[i3],
            self.positions[i3 + 1],
            self.positions[i3 + 2],
        )
    }

    /// Color of point `i` as a vector.
    pub fn color(&self, i: usize) -> Vec3 {
        let i3 = i * 3;
        Vec3::new(self.colors[i3], self.colors[i3 + 1], self.colors[i3 + 2])
    }
}

/// Generate a spiral galaxy point cloud from `params`.
///
/// Points are placed uniformly in radius (denser near the core), assigned to
/// one of `branches` arms by index, twisted by `spin` proportionally to
/// radius, then jittered per axis by a power-law offset. Color interpolates
/// linearly from `inside_color` at the core to `outside_color` at the rim.
pub fn generate(params: &GalaxyParams) -> Result<PointCloud, GalaxyError> {
    params.validate()?;

    let len = params.count as usize * 3;
    let mut positions: Vec<f32> = Vec::new();
    let mut colors: Vec<f32> = Vec::new();
    positions
        .try_reserve_exact(len)
        .map_err(|_| GalaxyError::AllocationFailure(format!("{len} floats for positions")))?;
    colors
        .try_reserve_exact(len)
        .map_err(|_| GalaxyError::AllocationFailure(format!("{len} floats for colors")))?;

    let mut rng = rand::thread_rng();
    let branches = params.branches as f32;

    for i in 0..params.count {
        let r = rng.gen::<f32>() * params.radius;
        let spin_angle = r * params.spin;
        let branch_angle = (i % params.branches) as f32 / branches * TAU;
        let angle = branch_angle + spin_angle;

        // Sign is drawn independently of magnitude, per axis.
        let mut offset = || {
            let u: f32 = rng.gen();
            let sign = if rng.gen::<bool>() { 1.0 } else { -1.0 };
            u.powf(params.randomness_power) * sign * params.randomness
        };
        let (ox, oy, oz) = (offset(), offset(), offset());

        positions.push(angle.cos() * r + ox);
        positions.push(oy);
        positions.push(angle.sin() * r + oz);

        let mixed = params
            .inside_color
            .lerp(params.outside_color, r / params.radius);
        colors.push(mixed.x);
        colors.push(mixed.y);
        colors.push(mixed.z);
    }

    Ok(PointCloud {
        positions,
        colors,
        params: params.clone(),
    })
}
