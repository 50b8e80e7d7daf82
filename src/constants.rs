pub const DEFAULT_MAX_WIDTH: u32 = 1920;
pub const DEFAULT_JPEG_QUALITY: u8 = 80;
pub const DEFAULT_PNG_QUALITY: u8 = 80;
pub const DEFAULT_KEEP_THRESHOLD: f64 = 30.0;

pub const MIN_QUALITY: u8 = 1;
pub const MAX_QUALITY: u8 = 100;

/// Canonical recognized extensions. `webp` is opt-in via
/// `RunConfig::include_webp` rather than a member of this set.
pub const RECOGNIZED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif"];
pub const WEBP_EXTENSION: &str = "webp";

pub const ZOPFLI_ITERATIONS: u8 = 15;
pub const LIBDEFLATER_HIGH_LEVEL: u8 = 12;
pub const LIBDEFLATER_LOW_LEVEL: u8 = 8;
pub const OXIPNG_PRESET: u8 = 4;

// Size display coloring cutoffs, in KB
pub const SIZE_RED_KB: f64 = 500.0;
pub const SIZE_YELLOW_KB: f64 = 250.0;

pub const SUMMARY_RULE: &str = "----------------------------";
