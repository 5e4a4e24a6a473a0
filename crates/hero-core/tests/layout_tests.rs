// Host-side tests for the responsive layout math.

use glam::Vec3;
use hero_core::*;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn remap_maps_endpoints_and_midpoint() {
    assert!(approx(remap(0.0, 0.0, 10.0, -5.0, 5.0), -5.0));
    assert!(approx(remap(10.0, 0.0, 10.0, -5.0, 5.0), 5.0));
    assert!(approx(remap(5.0, 0.0, 10.0, -5.0, 5.0), 0.0));
}

#[test]
fn remap_is_order_preserving() {
    let mut prev = remap(-20.0, -12.0, 30.0, -71.0, 71.0);
    for i in -19..=40 {
        let out = remap(i as f32, -12.0, 30.0, -71.0, 71.0);
        assert!(out > prev, "remap not increasing at {i}");
        prev = out;
    }
}

#[test]
fn degenerate_remap_returns_output_midpoint() {
    for val in [-1000.0, -3.0, 0.0, 7.0, 1e6] {
        assert_eq!(remap(val, 4.0, 4.0, -10.0, 30.0), 10.0);
    }
    assert_eq!(remap(1.0, 0.0, 0.0, -5.0, 5.0), 0.0);
}

#[test]
fn lerp_clamped_clamps_t() {
    assert_eq!(lerp_clamped(-0.5, 2.0, 4.0), 2.0);
    assert_eq!(lerp_clamped(1.5, 2.0, 4.0), 4.0);
    assert!(approx(lerp_clamped(0.25, 2.0, 4.0), 2.5));
    // reversed ranges interpolate downward
    assert!(approx(lerp_clamped(0.25, 4.0, 2.0), 3.5));
}

#[test]
fn bounding_box_covers_all_points() {
    let b = BoundingBox::from_positions([
        Vec3::new(-3.0, 2.0, 9.0),
        Vec3::new(5.0, -1.0, 0.0),
        Vec3::new(1.0, 7.0, -4.0),
    ])
    .unwrap();
    assert_eq!(b.min_x, -3.0);
    assert_eq!(b.max_x, 5.0);
    assert_eq!(b.min_y, -1.0);
    assert_eq!(b.max_y, 7.0);
}

#[test]
fn bounding_box_of_nothing_is_none() {
    assert!(BoundingBox::from_positions(std::iter::empty::<Vec3>()).is_none());
}

#[test]
fn responsive_scale_desktop_full_hd() {
    // height 1080 * 0.8 / (200 / 8) / 100 = 0.3456, clamped up to 0.5
    let vp = ViewportState::from_size(1920.0, 1080.0);
    assert_eq!(responsive_scale(Some(&vp)), 0.5);
}

#[test]
fn responsive_scale_mid_range_value() {
    // portrait mobile: width 375 * 0.8 / (200 / 5) / 100 = 0.075 -> 0.5
    let vp = ViewportState::from_size(375.0, 667.0);
    assert_eq!(responsive_scale(Some(&vp)), 0.5);
    // a tall desktop window uses the width: 2400 * 0.8 / 20 / 100 = 0.96
    let vp = ViewportState::from_size(2400.0, 2600.0);
    assert!(approx(responsive_scale(Some(&vp)), 0.96));
}

#[test]
fn responsive_scale_is_always_clamped() {
    let sizes = [
        (1.0, 1000.0),
        (1000.0, 1.0),
        (1.0, 1.0),
        (100_000.0, 90_000.0),
        (0.0, 0.0),
        (768.0, 768.0),
        (5000.0, 20_000.0),
    ];
    for (w, h) in sizes {
        let vp = ViewportState::from_size(w, h);
        let s = responsive_scale(Some(&vp));
        assert!((0.5..=3.0).contains(&s), "scale {s} out of range for {w}x{h}");
    }
    let huge = ViewportState::from_size(100_000.0, 90_000.0);
    assert_eq!(responsive_scale(Some(&huge)), 3.0);
}

#[test]
fn responsive_scale_defaults_to_one_without_inputs() {
    assert_eq!(responsive_scale(None), 1.0);
    let mut vp = ViewportState::default();
    vp.zoom = 0.0;
    assert_eq!(responsive_scale(Some(&vp)), 1.0);
}

#[test]
fn display_area_landscape_uses_ten_percent_margins() {
    let vp = ViewportState::from_size(2000.0, 1000.0);
    let area = DisplayArea::for_viewport(&vp, 1.0);
    assert!(!area.portrait);
    assert!(approx(area.x, 200.0 * 0.8 * 2.0));
    assert!(approx(area.y, 200.0 * 0.8));
}

#[test]
fn display_area_portrait_uses_axis_margins() {
    let vp = ViewportState::from_size(500.0, 1000.0);
    let area = DisplayArea::for_viewport(&vp, 2.0);
    assert!(area.portrait);
    assert!(approx(area.x, 200.0 * 0.4 * 2.0));
    assert!(approx(area.y, 200.0 * 0.6 / 0.5 * 2.0));
}

#[test]
fn mapper_spreads_bounds_across_area() {
    let bounds = BoundingBox::from_positions([Vec3::new(-10.0, -5.0, 0.0), Vec3::new(10.0, 5.0, 0.0)]);
    let mut mapper = LayoutMapper::new(bounds);
    let vp = ViewportState::from_size(1920.0, 1080.0);
    mapper.update(Some(&vp));
    let area = mapper.area().unwrap();

    let lo = mapper.place(Vec3::new(-10.0, -5.0, 3.0));
    let hi = mapper.place(Vec3::new(10.0, 5.0, -2.0));
    assert!(approx(lo.x, -area.x / 2.0));
    assert!(approx(lo.y, -area.y / 2.0));
    assert!(approx(hi.x, area.x / 2.0));
    assert!(approx(hi.y, area.y / 2.0));
    // Z is never remapped
    assert_eq!(lo.z, 3.0);
    assert_eq!(hi.z, -2.0);
}

#[test]
fn mapper_centers_single_object() {
    let bounds = BoundingBox::from_positions([Vec3::new(42.0, -7.0, 1.0)]);
    let mut mapper = LayoutMapper::new(bounds);
    mapper.update(Some(&ViewportState::from_size(1280.0, 900.0)));
    assert_eq!(mapper.place(Vec3::new(42.0, -7.0, 1.0)), Vec3::new(0.0, 0.0, 1.0));
}

#[test]
fn mapper_centers_collinear_axis() {
    let bounds = BoundingBox::from_positions([Vec3::new(-4.0, 3.0, 0.0), Vec3::new(4.0, 3.0, 0.0)]);
    let mut mapper = LayoutMapper::new(bounds);
    mapper.update(Some(&ViewportState::from_size(1280.0, 900.0)));
    let p = mapper.place(Vec3::new(4.0, 3.0, 0.0));
    assert_eq!(p.y, 0.0);
    assert!(p.x > 0.0);
}

#[test]
fn mapper_without_viewport_or_bounds_returns_source() {
    let src = Vec3::new(3.0, 4.0, 5.0);
    let mapper = LayoutMapper::new(BoundingBox::from_positions([Vec3::ZERO, Vec3::ONE]));
    assert_eq!(mapper.place(src), src);
    assert_eq!(mapper.responsive_scale(), 1.0);

    let mut no_bounds = LayoutMapper::new(None);
    no_bounds.update(Some(&ViewportState::default()));
    assert_eq!(no_bounds.place(src), src);
}

#[test]
fn mapper_treats_empty_viewports_as_unmeasured() {
    let bounds = BoundingBox::from_positions([Vec3::new(-4.0, -2.0, 0.0), Vec3::new(4.0, 2.0, 0.0)]);
    let src = Vec3::new(0.5, 0.5, 0.0);
    for (w, h) in [(1280.0, 0.0), (0.0, 720.0), (0.0, 0.0), (f32::NAN, 720.0)] {
        let mut mapper = LayoutMapper::new(bounds);
        mapper.update(Some(&ViewportState::from_size(w, h)));
        let p = mapper.place(src);
        assert!(p.is_finite(), "{w}x{h} placed at {p}");
        assert_eq!(p, src);
        assert_eq!(mapper.responsive_scale(), 1.0);
        assert!(mapper.area().is_none());
    }
}

#[test]
fn zero_zoom_still_remaps_at_unit_scale() {
    let bounds = BoundingBox::from_positions([Vec3::new(-4.0, -2.0, 0.0), Vec3::new(4.0, 2.0, 0.0)]);
    let mut mapper = LayoutMapper::new(bounds);
    let mut vp = ViewportState::from_size(1920.0, 1080.0);
    vp.zoom = 0.0;
    mapper.update(Some(&vp));
    assert_eq!(mapper.responsive_scale(), 1.0);
    let area = mapper.area().unwrap();
    let p = mapper.place(Vec3::new(4.0, 2.0, 0.0));
    assert!(approx(p.x, area.half_x()));
    assert!(approx(p.y, area.half_y()));
}
