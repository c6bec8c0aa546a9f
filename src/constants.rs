// DOM hooks and render tuning for the web front-end.

// Element ids
pub const CANVAS_ID: &str = "app-canvas";
pub const GATEKEEPER_ID: &str = "gatekeeper";
pub const UI_CONTAINER_ID: &str = "ui-container";
pub const LYRIC_TEXT_ID: &str = "lyric-text";
pub const PROGRESS_FILL_ID: &str = "progress-fill";
pub const NEXT_TRACK_ID: &str = "next-track";

// Caption styling per track (first track glows, the rest use the funk style)
pub const LYRIC_CLASS_GLOW: &str = "neon-glow";
pub const LYRIC_CLASS_FUNK: &str = "funk-style";

// Text rasterization for the intro point cloud
pub const TEXT_CANVAS_W: u32 = 640;
pub const TEXT_CANVAS_H: u32 = 160;
pub const TEXT_FONT: &str = "bold 112px 'Orbitron', 'Segoe UI', sans-serif";
pub const TEXT_SAMPLE_STEP: usize = 3; // sample every Nth pixel in both axes
pub const TEXT_ALPHA_THRESHOLD: u8 = 128;

// Rendering
pub const CLEAR_RGB: [f64; 3] = [0.01, 0.0, 0.03];
pub const SPRITE_SIZE_MULTIPLIER: f32 = 1.5; // world units per unit of element scale
pub const FIELD_ALPHA: f32 = 0.8;
pub const DRIVE_CLEAR_BOOST: f32 = 0.04; // background lift per unit of drive
