// Host-side tests for the keyboard parameter panel. The mapping and apply
// functions are pure, so no window or GPU is needed.

#[path = "../src/input.rs"]
mod input;

use galaxy_core::constants::*;
use galaxy_core::GalaxyParams;
use input::{action_for_key, apply, ParamAction};
use winit::keyboard::KeyCode;

#[test]
fn bound_keys_map_to_actions() {
    assert_eq!(action_for_key(KeyCode::KeyQ), Some(ParamAction::CountUp));
    assert_eq!(action_for_key(KeyCode::KeyA), Some(ParamAction::CountDown));
    assert_eq!(action_for_key(KeyCode::KeyP), Some(ParamAction::SwapPalette));
    assert_eq!(action_for_key(KeyCode::Digit0), Some(ParamAction::Reset));
    assert_eq!(action_for_key(KeyCode::KeyZ), None);
    assert_eq!(action_for_key(KeyCode::Space), None);
    assert_eq!(action_for_key(KeyCode::Escape), None);
}

#[test]
fn repeated_edits_stay_within_panel_ranges() {
    let actions = [
        ParamAction::CountUp,
        ParamAction::CountDown,
        ParamAction::SizeUp,
        ParamAction::SizeDown,
        ParamAction::RadiusUp,
        ParamAction::RadiusDown,
        ParamAction::BranchesUp,
        ParamAction::BranchesDown,
        ParamAction::SpinUp,
        ParamAction::SpinDown,
        ParamAction::RandomnessUp,
        ParamAction::RandomnessDown,
        ParamAction::PowerUp,
        ParamAction::PowerDown,
    ];
    for action in actions {
        let mut params = GalaxyParams::default();
        for _ in 0..100 {
            apply(action, &mut params);
        }
        assert!(
            params.validate().is_ok(),
            "{action:?} drove params invalid: {params:?}"
        );
        assert!((COUNT_MIN..=COUNT_MAX).contains(&params.count));
        assert!((POINT_SIZE_MIN..=POINT_SIZE_MAX + 1e-6).contains(&params.point_size));
        assert!((RADIUS_MIN..=RADIUS_MAX).contains(&params.radius));
        assert!((BRANCHES_MIN..=BRANCHES_MAX).contains(&params.branches));
        assert!((SPIN_MIN..=SPIN_MAX).contains(&params.spin));
        assert!((RANDOMNESS_MIN - 1e-6..=RANDOMNESS_MAX + 1e-6).contains(&params.randomness));
        assert!(
            (RANDOMNESS_POWER_MIN..=RANDOMNESS_POWER_MAX + 1e-6)
                .contains(&params.randomness_power)
        );
    }
}

#[test]
fn swap_palette_twice_restores_colors() {
    let mut params = GalaxyParams::default();
    let original = params.clone();
    apply(ParamAction::SwapPalette, &mut params);
    assert_eq!(params.inside_color, original.outside_color);
    assert_eq!(params.outside_color, original.inside_color);
    apply(ParamAction::SwapPalette, &mut params);
    assert_eq!(params, original);
}

#[test]
fn reset_returns_to_defaults() {
    let mut params = GalaxyParams::default();
    apply(ParamAction::CountUp, &mut params);
    apply(ParamAction::RadiusUp, &mut params);
    apply(ParamAction::SwapPalette, &mut params);
    assert_ne!(params, GalaxyParams::default());
    apply(ParamAction::Reset, &mut params);
    assert_eq!(params, GalaxyParams::default());
}
