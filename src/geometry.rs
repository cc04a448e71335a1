//! Pure geometry helpers: grid snapping and AABB containment clamping.
//!
//! Everything here is a total function over plain numbers with no knowledge
//! of elements, plans, or the viewport. The layout store calls into this
//! module on every position- or size-mutating operation.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

/// Round `value` to the nearest multiple of `step`.
///
/// Halfway cases round away from zero (`f64::round` semantics). `step`
/// must be positive; this is a caller contract, checked in debug builds only.
#[must_use]
pub fn snap_to_grid(value: f64, step: f64) -> f64 {
    debug_assert!(step > 0.0, "snap step must be positive");
    (value / step).round() * step
}

/// Largest multiple of `step` that is less than or equal to `value`.
///
/// Clamping against an off-grid bound can leave a snapped coordinate off
/// the grid; this settles it on the next multiple toward the interior
/// without crossing the bound.
#[must_use]
pub fn grid_floor(value: f64, step: f64) -> f64 {
    debug_assert!(step > 0.0, "snap step must be positive");
    (value / step).floor() * step
}

/// Clamp the top-left corner of a `w × h` box so the box lies within the
/// `[0, bound_w] × [0, bound_h]` plane.
///
/// When the box is larger than the plane the corner pins to the origin
/// side; callers must accept that the far edge then overflows.
#[must_use]
pub fn clamp_aabb_inside(x: f64, y: f64, w: f64, h: f64, bound_w: f64, bound_h: f64) -> (f64, f64) {
    let max_x = (bound_w - w).max(0.0);
    let max_y = (bound_h - h).max(0.0);
    (x.clamp(0.0, max_x), y.clamp(0.0, max_y))
}
