use glam::{Mat4, Vec3};

/// Orthographic camera whose frustum spans the viewport in CSS pixels divided
/// by `zoom`, so one world unit covers `zoom` pixels.
#[derive(Clone, Copy, Debug)]
pub struct OrthoCamera {
    pub eye: Vec3,
    pub target: Vec3,
    pub width_px: f32,
    pub height_px: f32,
    pub zoom: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl OrthoCamera {
    pub fn new(eye_z: f32, width_px: f32, height_px: f32, zoom: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, eye_z),
            target: Vec3::ZERO,
            width_px,
            height_px,
            zoom,
            znear: 0.1,
            zfar: 1000.0,
        }
    }

    /// Half extents of the visible area in world units.
    pub fn half_extents(&self) -> (f32, f32) {
        let zoom = if self.zoom > 0.0 { self.zoom } else { 1.0 };
        (
            self.width_px.max(1.0) / 2.0 / zoom,
            self.height_px.max(1.0) / 2.0 / zoom,
        )
    }

    pub fn projection_matrix(&self) -> Mat4 {
        let (hx, hy) = self.half_extents();
        Mat4::orthographic_rh(-hx, hx, -hy, hy, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, Vec3::Y)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
