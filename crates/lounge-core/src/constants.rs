// Shared pipeline and visual tuning constants. These feed `LoungeConfig::default()`.

// Analysis
pub const FFT_SIZE: u32 = 256; // frequency_bin_count = FFT_SIZE / 2
pub const FFT_SIZE_MIN: u32 = 32;
pub const FFT_SIZE_MAX: u32 = 32768;

// Element field
pub const ELEMENT_COUNT: usize = 15_000;
pub const FIELD_SPREAD: f32 = 2000.0; // edge length of the cube elements are scattered in
pub const ELEMENT_SIZE_MIN: f32 = 1.0;
pub const ELEMENT_SIZE_MAX: f32 = 3.0;
pub const ELEMENT_SPEED_MAX: f32 = 40.0; // world units, used as a drift direction/magnitude
pub const ELEMENT_SEED: u64 = 42;

// Intro point cloud
pub const INTRO_TEXT: &str = "AFTER DARK";
pub const INTRO_WIDTH: f32 = 900.0; // world-space width the sampled text is fitted to
pub const FALLBACK_RING_RADIUS: f32 = 260.0;
pub const FALLBACK_RING_THICKNESS: f32 = 24.0;
pub const FALLBACK_RING_POINTS: usize = 2048;

// Camera
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 4000.0;
pub const CAMERA_INTRO_Z: f32 = 1400.0;
pub const CAMERA_ACTIVE_Z: f32 = 500.0;

// Entry transition (seconds)
pub const CAMERA_MOVE_SECS: f32 = 3.0;
pub const INTRO_FADE_SECS: f32 = 1.5;
pub const MORPH_SECS: f32 = 2.5;

// Per-track palette (violet, cyan, amber)
pub const TRACK_TINTS: [[f32; 3]; 3] = [
    [0.737, 0.0, 1.0],
    [0.0, 0.949, 1.0],
    [1.0, 0.8, 0.0],
];
pub const TRACK_COUNT: u32 = 3;

// Lyric line reveal
pub const LYRIC_FADE_SECS: f32 = 1.0;
pub const LYRIC_RISE_PX: f32 = 20.0; // a new line starts this far below its resting place
