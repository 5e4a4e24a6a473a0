use crate::constants::*;

/// Device class derived from the window size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    Desktop,
}

impl DeviceClass {
    /// Mobile when either dimension is at or below the breakpoint.
    pub fn classify(width: f32, height: f32) -> Self {
        if width <= MOBILE_BREAKPOINT_PX || height <= MOBILE_BREAKPOINT_PX {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    pub width: f32,
    pub height: f32,
    pub is_mobile: bool,
    pub zoom: f32,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT_WIDTH,
            height: DEFAULT_VIEWPORT_HEIGHT,
            is_mobile: false,
            zoom: ZOOM_DESKTOP_STANDARD,
        }
    }
}

impl ViewportState {
    pub fn from_size(width: f32, height: f32) -> Self {
        let class = DeviceClass::classify(width, height);
        Self {
            width,
            height,
            is_mobile: class == DeviceClass::Mobile,
            zoom: zoom_for(class, aspect_ratio(width, height)),
        }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        aspect_ratio(self.width, self.height)
    }

    #[inline]
    pub fn is_landscape(&self) -> bool {
        self.aspect() > 1.0
    }

    /// False for collapsed or hidden windows, whose aspect is not a number.
    #[inline]
    pub fn has_area(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

#[inline]
pub fn aspect_ratio(width: f32, height: f32) -> f32 {
    width / height
}

/// Camera zoom lookup keyed on device class and aspect bucket.
pub fn zoom_for(class: DeviceClass, aspect: f32) -> f32 {
    match class {
        DeviceClass::Mobile if aspect > 1.0 => ZOOM_MOBILE_LANDSCAPE,
        DeviceClass::Mobile => ZOOM_MOBILE_PORTRAIT,
        DeviceClass::Desktop if aspect > ASPECT_ULTRAWIDE => ZOOM_DESKTOP_ULTRAWIDE,
        DeviceClass::Desktop if aspect > ASPECT_WIDE => ZOOM_DESKTOP_WIDE,
        DeviceClass::Desktop => ZOOM_DESKTOP_STANDARD,
    }
}

/// Tracks the latest window measurement. Every resize or orientation change
/// replaces the state outright; there is no debouncing.
#[derive(Clone, Debug, Default)]
pub struct ViewportMonitor {
    state: ViewportState,
    measured: bool,
}

impl ViewportMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new window size. Returns true when the derived state changed.
    /// An empty window is ignored and the previous state kept.
    pub fn update(&mut self, width: f32, height: f32) -> bool {
        let next = ViewportState::from_size(width, height);
        if !next.has_area() {
            log::debug!("[viewport] ignoring empty window {}x{}", width, height);
            return false;
        }
        let changed = !self.measured || next != self.state;
        if self.state.is_mobile != next.is_mobile || self.state.zoom != next.zoom {
            log::debug!(
                "[viewport] {}x{} mobile={} zoom={}",
                width,
                height,
                next.is_mobile,
                next.zoom
            );
        }
        self.state = next;
        self.measured = true;
        changed
    }

    #[inline]
    pub fn state(&self) -> ViewportState {
        self.state
    }

    /// The state once a real measurement exists.
    #[inline]
    pub fn measured_state(&self) -> Option<ViewportState> {
        self.measured.then_some(self.state)
    }

    /// Whether a real measurement has been recorded yet.
    #[inline]
    pub fn is_measured(&self) -> bool {
        self.measured
    }
}
