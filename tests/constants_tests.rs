// Host-side tests for constants and their relationships with the core crate.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_distance_matches_layout() {
    assert_eq!(CAMERA_Z, hero_core::constants::CAMERA_DISTANCE);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn lighting_is_within_reasonable_bounds() {
    assert!(AMBIENT_LIGHT > 0.0 && AMBIENT_LIGHT < 1.0);
    assert!(DIFFUSE_LIGHT > 0.0);
    assert!(AMBIENT_LIGHT + DIFFUSE_LIGHT <= 1.2);
    let len = LIGHT_DIR.iter().map(|c| c * c).sum::<f32>().sqrt();
    assert!(len > 0.0);
}

#[test]
fn clear_color_is_the_light_grey_backdrop() {
    for c in CLEAR_RGB {
        assert!((0.0..=1.0).contains(&c));
    }
    // #e0e0e2 is slightly bluer than it is red
    assert!(CLEAR_RGB[2] >= CLEAR_RGB[0]);
}

#[test]
fn instance_capacity_fits_default_scene() {
    // eleven floating shapes plus the logo
    assert!(MAX_INSTANCES >= hero_core::default_roster().len() + 1);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn core_constants_have_logical_relationships() {
    use hero_core::constants::*;
    assert!(RESPONSIVE_SCALE_MIN < RESPONSIVE_SCALE_MAX);
    assert!(ZOOM_MOBILE_LANDSCAPE < ZOOM_MOBILE_PORTRAIT);
    assert!(ZOOM_DESKTOP_ULTRAWIDE < ZOOM_DESKTOP_WIDE);
    assert!(ZOOM_DESKTOP_WIDE < ZOOM_DESKTOP_STANDARD);
    assert!(ASPECT_WIDE < ASPECT_ULTRAWIDE);
    assert!(LANDSCAPE_MARGIN_X < 0.5 && PORTRAIT_MARGIN_X < 0.5);
    assert!(LANDSCAPE_MARGIN_Y < 0.5 && PORTRAIT_MARGIN_Y < 0.5);
    assert!(FLOAT_RANGE[0] < FLOAT_RANGE[1]);
    assert!(ACTIVE_CYCLE_PERIOD_MS > 0);
}
