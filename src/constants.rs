// Rendering and DOM constants for the web frontend.

// DOM
pub const CANVAS_ID: &str = "hero-canvas";

// Camera
pub const CAMERA_Z: f32 = 200.0; // orthographic eye distance, matches the layout's camera distance

// Background #e0e0e2 (linear, for sRGB surfaces)
pub const CLEAR_RGB: [f64; 3] = [0.745, 0.745, 0.753];

// Lighting
pub const LIGHT_DIR: [f32; 3] = [-0.4, 0.7, 0.6]; // towards the key light, world space
pub const AMBIENT_LIGHT: f32 = 0.45;
pub const DIFFUSE_LIGHT: f32 = 0.65;

// Instance buffer capacity
pub const MAX_INSTANCES: usize = 64;
