//! Keyboard parameter panel.
//!
//! Each keypress is one committed edit: the key maps to a `ParamAction`,
//! `apply` mutates a working copy of the parameters within the panel
//! ranges, and the caller triggers a rebuild with the result. Pure
//! functions, testable without a window.

use galaxy_core::constants::*;
use galaxy_core::GalaxyParams;
use winit::keyboard::KeyCode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamAction {
    CountUp,
    CountDown,
    SizeUp,
    SizeDown,
    RadiusUp,
    RadiusDown,
    BranchesUp,
    BranchesDown,
    SpinUp,
    SpinDown,
    RandomnessUp,
    RandomnessDown,
    PowerUp,
    PowerDown,
    SwapPalette,
    Reset,
}

/// Map a physical key to a parameter edit. Upper row raises, home row
/// lowers; unbound keys return `None`.
#[inline]
pub fn action_for_key(code: KeyCode) -> Option<ParamAction> {
    use ParamAction::*;
    match code {
        KeyCode::KeyQ => Some(CountUp),
        KeyCode::KeyA => Some(CountDown),
        KeyCode::KeyW => Some(SizeUp),
        KeyCode::KeyS => Some(SizeDown),
        KeyCode::KeyE => Some(RadiusUp),
        KeyCode::KeyD => Some(RadiusDown),
        KeyCode::KeyR => Some(BranchesUp),
        KeyCode::KeyF => Some(BranchesDown),
        KeyCode::KeyT => Some(SpinUp),
        KeyCode::KeyG => Some(SpinDown),
        KeyCode::KeyY => Some(RandomnessUp),
        KeyCode::KeyH => Some(RandomnessDown),
        KeyCode::KeyU => Some(PowerUp),
        KeyCode::KeyJ => Some(PowerDown),
        KeyCode::KeyP => Some(SwapPalette),
        KeyCode::Digit0 => Some(Reset),
        _ => None,
    }
}

/// Apply one committed edit to the working parameter set, clamped to the
/// panel ranges so the result always validates.
pub fn apply(action: ParamAction, params: &mut GalaxyParams) {
    use ParamAction::*;
    match action {
        CountUp => params.count = (params.count.saturating_mul(2)).min(COUNT_MAX),
        CountDown => params.count = (params.count / 2).max(COUNT_MIN),
        SizeUp => params.point_size = (params.point_size + 0.01).min(POINT_SIZE_MAX),
        SizeDown => params.point_size = (params.point_size - 0.01).max(POINT_SIZE_MIN),
        RadiusUp => params.radius = (params.radius + 0.5).min(RADIUS_MAX),
        RadiusDown => params.radius = (params.radius - 0.5).max(RADIUS_MIN),
        BranchesUp => params.branches = (params.branches + 1).min(BRANCHES_MAX),
        BranchesDown => params.branches = (params.branches - 1).max(BRANCHES_MIN),
        SpinUp => params.spin = (params.spin + 0.25).min(SPIN_MAX),
        SpinDown => params.spin = (params.spin - 0.25).max(SPIN_MIN),
        RandomnessUp => params.randomness = (params.randomness + 0.1).min(RANDOMNESS_MAX),
        RandomnessDown => params.randomness = (params.randomness - 0.1).max(RANDOMNESS_MIN),
        PowerUp => {
            params.randomness_power = (params.randomness_power + 0.5).min(RANDOMNESS_POWER_MAX)
        }
        PowerDown => {
            params.randomness_power = (params.randomness_power - 0.5).max(RANDOMNESS_POWER_MIN)
        }
        SwapPalette => std::mem::swap(&mut params.inside_color, &mut params.outside_color),
        Reset => *params = GalaxyParams::default(),
    }
}
