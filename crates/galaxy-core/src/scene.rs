//! Generator instance lifecycle.
//!
//! `GalaxyManager` owns at most one live galaxy at a time and drives the
//! rendering side through the `GalaxyScene` seam. The rebuild ordering is a
//! correctness requirement: the replacement is fully generated and allocated
//! before the old instance is touched (a failed rebuild leaves the old
//! galaxy attached), and the old drawable is detached and released before
//! the new one is attached (no frame ever sees two galaxies).

use crate::error::GalaxyError;
use crate::galaxy::{generate, PointCloud};
use crate::params::GalaxyParams;

/// The rendering collaborator, as seen from the lifecycle manager.
///
/// `allocate` uploads the cloud's buffers and returns an opaque handle
/// without making anything visible; `attach`/`detach` toggle visibility in
/// the scene; `release` frees the GPU resources behind a handle. Releasing
/// a never-attached or already-detached handle must be a no-op, never fatal.
pub trait GalaxyScene {
    type Handle;

    fn allocate(&mut self, cloud: &PointCloud) -> Result<Self::Handle, GalaxyError>;
    fn attach(&mut self, handle: &Self::Handle);
    fn detach(&mut self, handle: &Self::Handle);
    fn release(&mut self, handle: Self::Handle);
}

/// One live galaxy: the generated cloud plus the scene's handle for it.
pub struct GalaxyInstance<H> {
    pub cloud: PointCloud,
    pub handle: H,
}

/// Owns the single active galaxy instance and swaps it on committed edits.
///
/// Two states: Empty (nothing attached) and Active (exactly one instance
/// attached). The manager lives for the process lifetime.
pub struct GalaxyManager<S: GalaxyScene> {
    active: Option<GalaxyInstance<S::Handle>>,
}

impl<S: GalaxyScene> GalaxyManager<S> {
    pub fn new() -> Self {
        Self { active: None }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<&GalaxyInstance<S::Handle>> {
        self.active.as_ref()
    }

    /// Destroy the current galaxy (if any) and build a fresh one from
    /// `params`.
    ///
    /// On any error the previously active instance is left untouched.
    pub fn rebuild(&mut self, scene: &mut S, params: &GalaxyParams) -> Result<(), GalaxyError> {
        let cloud = generate(params)?;
        let handle = scene.allocate(&cloud)?;

        // Old instance goes away completely before the new one shows up.
        self.dispose_active(scene);
        scene.attach(&handle);
        self.active = Some(GalaxyInstance { cloud, handle });

        log::info!(
            "galaxy rebuilt: {} points, {} branches, radius {}",
            params.count,
            params.branches,
            params.radius
        );
        Ok(())
    }

    /// Detach and release the active instance. No-op when already Empty.
    pub fn dispose_active(&mut self, scene: &mut S) {
        if let Some(inst) = self.active.take() {
            scene.detach(&inst.handle);
            scene.release(inst.handle);
        }
    }
}

impl<S: GalaxyScene> Default for GalaxyManager<S> {
    fn default() -> Self {
        Self::new()
    }
}
