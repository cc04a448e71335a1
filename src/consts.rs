//! Shared numeric constants for the floorplan crate.

// ── World scale ─────────────────────────────────────────────────

/// Pixels per meter at zoom 1.0.
pub const WORLD_SCALE_PX: f64 = 20.0;

// ── Zoom ────────────────────────────────────────────────────────

/// Smallest permitted viewport scale factor.
pub const MIN_ZOOM: f64 = 0.25;

/// Largest permitted viewport scale factor.
pub const MAX_ZOOM: f64 = 5.0;

/// Scale multiplier applied per discrete zoom step (one wheel notch or keypress).
pub const ZOOM_STEP: f64 = 1.2;

/// Border in screen pixels left around the plan by fit-to-bounds.
pub const FIT_MARGIN_PX: f64 = 24.0;

// ── Elements ────────────────────────────────────────────────────

/// Absolute minimum element extent in meters; resize requests floor here.
pub const MIN_ELEMENT_SIZE_M: f64 = 0.1;

// ── Default plan ────────────────────────────────────────────────

/// Width of a freshly reset plan, in meters.
pub const DEFAULT_PLAN_WIDTH_M: f64 = 40.0;

/// Height of a freshly reset plan, in meters.
pub const DEFAULT_PLAN_HEIGHT_M: f64 = 20.0;

/// Grid spacing of a freshly reset plan, in meters.
pub const DEFAULT_GRID_STEP_M: f64 = 0.5;
