// File: crates/sunburst-core/src/types.rs
// Summary: Shared constants (sizes, thresholds, timings).

/// Default chart width (and height) in pixels.
pub const WIDTH: u32 = 600;

/// Smallest value a category may hold; keeps every arc visible after edits.
pub const SAFE_MIN: f64 = 1.0;

/// Minimum mid-radius arc length, in pixels, for a label to be shown.
pub const MIN_ARC_LENGTH: f64 = 30.0;

/// Arc/label zoom transition length.
pub const ZOOM_DURATION_MS: u64 = 750;
/// Center title fade length.
pub const TITLE_FADE_MS: u64 = 300;

/// Label wrap widths in pixels: first ring, then deeper rings.
pub const WRAP_WIDTH_INNER: f64 = 80.0;
pub const WRAP_WIDTH_OUTER: f64 = 60.0;
pub const WRAP_MAX_LINES: usize = 2;
/// Line advance in em.
pub const LINE_HEIGHT_EM: f64 = 1.1;

/// Label font sizes in pixels.
pub const FONT_LARGE: f32 = 14.0;
pub const FONT_SMALL: f32 = 11.0;
/// Arcs wider than this (radians) get the large font on first render.
pub const LARGE_FONT_MIN_ANGLE: f64 = 0.25;

/// Tooltip offset from the pointer, in pixels.
pub const TOOLTIP_OFFSET: (f64, f64) = (10.0, -20.0);
