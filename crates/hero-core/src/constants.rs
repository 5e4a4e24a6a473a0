// Shared layout/animation tuning constants used by the web frontend.

// Viewport classification
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0; // either dimension at or below this is mobile
pub const DEFAULT_VIEWPORT_WIDTH: f32 = 1920.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 1080.0;

// Camera zoom lookup
pub const ZOOM_MOBILE_LANDSCAPE: f32 = 2.5;
pub const ZOOM_MOBILE_PORTRAIT: f32 = 5.0;
pub const ZOOM_DESKTOP_ULTRAWIDE: f32 = 8.0;
pub const ZOOM_DESKTOP_WIDE: f32 = 9.0;
pub const ZOOM_DESKTOP_STANDARD: f32 = 10.0;
pub const ASPECT_ULTRAWIDE: f32 = 1.5;
pub const ASPECT_WIDE: f32 = 1.2;

// Responsive scale
pub const CAMERA_DISTANCE: f32 = 200.0; // orthographic camera eye Z
pub const USABLE_VIEWPORT_FRACTION: f32 = 0.8;
pub const SCALE_NORMALIZER: f32 = 100.0;
pub const RESPONSIVE_SCALE_MIN: f32 = 0.5;
pub const RESPONSIVE_SCALE_MAX: f32 = 3.0;

// Display area margins (fraction of each side)
pub const LANDSCAPE_MARGIN_X: f32 = 0.1;
pub const LANDSCAPE_MARGIN_Y: f32 = 0.1;
pub const PORTRAIT_MARGIN_X: f32 = 0.3;
pub const PORTRAIT_MARGIN_Y: f32 = 0.2;
pub const AREA_BASE: f32 = 200.0;

// Pointer-follow spring (also used for the active-object kick)
pub const SPRING_STIFFNESS: f32 = 75.0;
pub const SPRING_DAMPING: f32 = 100.0;
pub const SPRING_MASS: f32 = 3.0;
pub const SPRING_REST_DELTA: f32 = 1e-3;
pub const SPRING_REST_SPEED: f32 = 1e-3;

// Pointer-driven motion
pub const ROTATION_SPAN_PER_MULTIPLIER: f32 = 0.5; // half-range of tilt per unit multiplier
pub const TRAVEL_SPAN_PER_MULTIPLIER: f32 = 2.0; // half-range of travel per unit multiplier

// Active-object cycle
pub const ACTIVE_CYCLE_PERIOD_MS: u64 = 2000;

// Float bob
pub const FLOAT_SPEED: f32 = 1.0;
pub const FLOAT_ROTATION_INTENSITY: f32 = 1.0;
pub const FLOAT_INTENSITY: f32 = 1.0;
pub const FLOAT_RANGE: [f32; 2] = [-0.1, 0.1];
pub const FLOAT_PHASE_MAX: f32 = 10_000.0;
