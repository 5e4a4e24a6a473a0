use crate::spring::{Spring2, SpringConfig};

/// Latest raw pointer sample plus its spring-smoothed follower, both in
/// normalized window units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub sx: f32,
    pub sy: f32,
}

/// Normalize a client-space pointer position against the window size.
/// A zero-sized window yields the top-left corner.
#[inline]
pub fn normalize_client(client_x: f32, client_y: f32, width: f32, height: f32) -> [f32; 2] {
    let x = if width > 0.0 { client_x / width } else { 0.0 };
    let y = if height > 0.0 { client_y / height } else { 0.0 };
    [x, y]
}

#[derive(Clone, Debug)]
pub struct PointerTracker {
    raw: [f32; 2],
    smooth: Spring2,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new(SpringConfig::default())
    }
}

impl PointerTracker {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            raw: [0.0, 0.0],
            smooth: Spring2::new(config, [0.0, 0.0]),
        }
    }

    /// Record a pointer-move sample; the smoothed value starts chasing it on
    /// the next `step`.
    pub fn sample(&mut self, x: f32, y: f32) {
        self.raw = [x, y];
        self.smooth.set_target(self.raw);
    }

    pub fn step(&mut self, dt_sec: f32) -> [f32; 2] {
        self.smooth.step(dt_sec)
    }

    #[inline]
    pub fn raw(&self) -> [f32; 2] {
        self.raw
    }

    #[inline]
    pub fn smoothed(&self) -> [f32; 2] {
        self.smooth.value()
    }

    pub fn state(&self) -> PointerState {
        let [sx, sy] = self.smoothed();
        PointerState {
            x: self.raw[0],
            y: self.raw[1],
            sx,
            sy,
        }
    }
}
