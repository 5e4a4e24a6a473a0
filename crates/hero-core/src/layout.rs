//! Responsive layout: fits the floating objects' source X/Y into a display
//! rectangle derived from the viewport and camera zoom.

use crate::constants::*;
use crate::viewport::ViewportState;
use glam::Vec3;

/// Linear map of `val` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// A zero-width input range maps every value to the output midpoint.
#[inline]
pub fn remap(val: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    if in_max - in_min == 0.0 {
        return (out_min + out_max) / 2.0;
    }
    ((val - in_min) / (in_max - in_min)) * (out_max - out_min) + out_min
}

/// Interpolate between `from` and `to`, with `t` clamped to `[0, 1]`.
#[inline]
pub fn lerp_clamped(t: f32, from: f32, to: f32) -> f32 {
    from + (to - from) * t.clamp(0.0, 1.0)
}

/// X/Y extent of a set of source positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl BoundingBox {
    /// Returns `None` for an empty set.
    pub fn from_positions<I>(positions: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vec3>,
    {
        let mut it = positions.into_iter();
        let first = it.next()?;
        let init = Self {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        Some(it.fold(init, |b, p| Self {
            min_x: b.min_x.min(p.x),
            max_x: b.max_x.max(p.x),
            min_y: b.min_y.min(p.y),
            max_y: b.max_y.max(p.y),
        }))
    }
}

/// Multiplier normalising object spacing and travel across viewport sizes.
///
/// Always within `[RESPONSIVE_SCALE_MIN, RESPONSIVE_SCALE_MAX]`; 1 when no
/// viewport has been measured or the zoom is zero.
pub fn responsive_scale(viewport: Option<&ViewportState>) -> f32 {
    let Some(vp) = viewport else {
        return 1.0;
    };
    if vp.zoom == 0.0 {
        return 1.0;
    }
    let world_per_px = CAMERA_DISTANCE / vp.zoom;
    let major = if vp.is_landscape() { vp.height } else { vp.width };
    let scale_factor = (major * USABLE_VIEWPORT_FRACTION) / world_per_px;
    // min-then-max keeps NaN inputs inside the range
    (scale_factor / SCALE_NORMALIZER)
        .min(RESPONSIVE_SCALE_MAX)
        .max(RESPONSIVE_SCALE_MIN)
}

/// Full extents of the rectangle objects are spread across.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayArea {
    pub x: f32,
    pub y: f32,
    pub portrait: bool,
}

impl DisplayArea {
    pub fn for_viewport(vp: &ViewportState, scale: f32) -> Self {
        let aspect = vp.aspect();
        if aspect > 1.0 {
            Self {
                x: AREA_BASE * (1.0 - 2.0 * LANDSCAPE_MARGIN_X) * aspect * scale,
                y: AREA_BASE * (1.0 - 2.0 * LANDSCAPE_MARGIN_Y) * scale,
                portrait: false,
            }
        } else {
            Self {
                x: AREA_BASE * (1.0 - 2.0 * PORTRAIT_MARGIN_X) * scale,
                y: AREA_BASE * (1.0 - 2.0 * PORTRAIT_MARGIN_Y) / aspect * scale,
                portrait: true,
            }
        }
    }

    #[inline]
    pub fn half_x(&self) -> f32 {
        self.x / 2.0
    }

    #[inline]
    pub fn half_y(&self) -> f32 {
        self.y / 2.0
    }
}

/// Holds the bounding box of the floating objects and the display frame
/// derived from the latest viewport.
#[derive(Clone, Debug)]
pub struct LayoutMapper {
    bounds: Option<BoundingBox>,
    scale: f32,
    area: Option<DisplayArea>,
}

impl LayoutMapper {
    pub fn new(bounds: Option<BoundingBox>) -> Self {
        Self {
            bounds,
            scale: 1.0,
            area: None,
        }
    }

    /// Recompute scale and display area. `None`, or a viewport without area,
    /// resets to neutral defaults.
    pub fn update(&mut self, viewport: Option<&ViewportState>) {
        let viewport = viewport.filter(|vp| vp.has_area());
        self.scale = responsive_scale(viewport);
        self.area = viewport.map(|vp| DisplayArea::for_viewport(vp, self.scale));
    }

    #[inline]
    pub fn bounds(&self) -> Option<BoundingBox> {
        self.bounds
    }

    #[inline]
    pub fn responsive_scale(&self) -> f32 {
        self.scale
    }

    #[inline]
    pub fn area(&self) -> Option<DisplayArea> {
        self.area
    }

    /// Display position for a floating object. Z is never remapped; without
    /// bounds or a display area the source position is returned unchanged.
    pub fn place(&self, source: Vec3) -> Vec3 {
        let (Some(b), Some(area)) = (self.bounds, self.area) else {
            return source;
        };
        let x = remap(source.x, b.min_x, b.max_x, -area.half_x(), area.half_x());
        let y = remap(source.y, b.min_y, b.max_y, -area.half_y(), area.half_y());
        Vec3::new(x, y, source.z)
    }
}
