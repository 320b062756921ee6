// Sanity checks on tuning constants and their relationships.

use galaxy_core::constants::*;
use galaxy_core::GalaxyParams;

#[test]
#[allow(clippy::assertions_on_constants)]
fn panel_ranges_are_ordered_and_positive() {
    assert!(COUNT_MIN >= 1 && COUNT_MIN < COUNT_MAX);
    assert!(POINT_SIZE_MIN > 0.0 && POINT_SIZE_MIN < POINT_SIZE_MAX);
    assert!(RADIUS_MIN > 0.0 && RADIUS_MIN < RADIUS_MAX);
    assert!(BRANCHES_MIN >= 1 && BRANCHES_MIN < BRANCHES_MAX);
    assert!(SPIN_MIN < SPIN_MAX);
    assert!(RANDOMNESS_MIN >= 0.0 && RANDOMNESS_MIN < RANDOMNESS_MAX);
    assert!(RANDOMNESS_POWER_MIN > 0.0 && RANDOMNESS_POWER_MIN < RANDOMNESS_POWER_MAX);
    assert!(ROTATION_SPEED > 0.0);
}

#[test]
fn defaults_sit_inside_the_panel_ranges() {
    let p = GalaxyParams::default();
    assert!(p.validate().is_ok());
    assert!((COUNT_MIN..=COUNT_MAX).contains(&p.count));
    assert!((POINT_SIZE_MIN..=POINT_SIZE_MAX).contains(&p.point_size));
    assert!((RADIUS_MIN..=RADIUS_MAX).contains(&p.radius));
    assert!((BRANCHES_MIN..=BRANCHES_MAX).contains(&p.branches));
    assert!((SPIN_MIN..=SPIN_MAX).contains(&p.spin));
    assert!((RANDOMNESS_MIN..=RANDOMNESS_MAX).contains(&p.randomness));
    assert!((RANDOMNESS_POWER_MIN..=RANDOMNESS_POWER_MAX).contains(&p.randomness_power));
}

#[test]
fn default_palette_is_a_valid_rgb_pair() {
    for c in DEFAULT_INSIDE_COLOR.iter().chain(DEFAULT_OUTSIDE_COLOR.iter()) {
        assert!((0.0..=1.0).contains(c));
    }
    // Warm core, cool rim.
    assert!(DEFAULT_INSIDE_COLOR[0] > DEFAULT_OUTSIDE_COLOR[0]);
    assert!(DEFAULT_INSIDE_COLOR[2] < DEFAULT_OUTSIDE_COLOR[2]);
}
