//! Shared numeric constants for the markup canvas.

// ── Zoom ────────────────────────────────────────────────────────

/// Smallest allowed view scale.
pub const MIN_ZOOM: f64 = 0.2;

/// Largest allowed view scale.
pub const MAX_ZOOM: f64 = 8.0;

/// Multiplier applied by a single zoom-in / zoom-out step.
pub const ZOOM_STEP_FACTOR: f64 = 1.2;

/// Scale change per wheel pixel. Scrolling down (positive `dy`) zooms out.
pub const WHEEL_ZOOM_SENSITIVITY: f64 = 0.005;

// ── Gestures ────────────────────────────────────────────────────

/// Screen-space movement (per axis, in pixels) below which a press/release pair is a click.
pub const CLICK_THRESHOLD_PX: f64 = 5.0;

/// Drawn shapes must exceed this width and height (image percent) to be committed.
pub const MIN_SHAPE_SIZE_PCT: f64 = 1.0;

// ── Percent space ───────────────────────────────────────────────

/// Upper bound of the image-percentage coordinate space.
pub const PCT_MAX: f64 = 100.0;
