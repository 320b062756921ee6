// Shared tuning constants used by the generator defaults and the native
// frontend's parameter panel.

// Defaults (the values the demo opens with)
pub const DEFAULT_COUNT: u32 = 100_000;
pub const DEFAULT_POINT_SIZE: f32 = 0.01;
pub const DEFAULT_RADIUS: f32 = 2.5;
pub const DEFAULT_BRANCHES: u32 = 8;
pub const DEFAULT_SPIN: f32 = 1.0;
pub const DEFAULT_RANDOMNESS: f32 = 1.0;
pub const DEFAULT_RANDOMNESS_POWER: f32 = 3.5;

// Default palette: warm core fading to a deep blue rim
pub const DEFAULT_INSIDE_COLOR: [f32; 3] = [1.0, 0.376, 0.188]; // #ff6030
pub const DEFAULT_OUTSIDE_COLOR: [f32; 3] = [0.106, 0.224, 0.518]; // #1b3984

// Panel ranges; committed edits are clamped to these
pub const COUNT_MIN: u32 = 100;
pub const COUNT_MAX: u32 = 1_000_000;
pub const POINT_SIZE_MIN: f32 = 0.01;
pub const POINT_SIZE_MAX: f32 = 0.1;
pub const RADIUS_MIN: f32 = 0.01;
pub const RADIUS_MAX: f32 = 20.0;
pub const BRANCHES_MIN: u32 = 2;
pub const BRANCHES_MAX: u32 = 20;
pub const SPIN_MIN: f32 = -5.0;
pub const SPIN_MAX: f32 = 5.0;
pub const RANDOMNESS_MIN: f32 = 0.0;
pub const RANDOMNESS_MAX: f32 = 2.0;
pub const RANDOMNESS_POWER_MIN: f32 = 1.0;
pub const RANDOMNESS_POWER_MAX: f32 = 10.0;

// View
pub const CAMERA_EYE: [f32; 3] = [3.0, 3.0, 3.0];
pub const ROTATION_SPEED: f32 = 0.1; // radians per second, applied by the render loop
