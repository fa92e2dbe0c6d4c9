// Renderer and browser-facing constants: projection, canvas, DOM hooks.

// Projection
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;

// Canvas backing store never exceeds this device pixel ratio
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Background clear color (linear)
pub const CLEAR_COLOR: [f64; 3] = [0.005, 0.006, 0.012];

// Light helper marker
pub const LIGHT_HELPER_SIZE: f32 = 0.4;
pub const LIGHT_HELPER_COLOR: [f32; 3] = [1.0, 0.9, 0.3];

// Depth buffer format shared by every scene pipeline
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;

// DOM hooks
pub const CANVAS_SELECTOR: &str = "canvas.webgl";
pub const SECTION_SELECTOR: &str = "section";
pub const SCROLL_DOWN_BUTTON_ID: &str = "scroll-down";
pub const DEBUG_PANEL_ID: &str = "debug-panel";
