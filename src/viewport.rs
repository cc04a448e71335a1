//! Viewport transform: the pan/zoom camera over the floor plan and the
//! world ↔ screen coordinate conversions the renderer depends on.
//!
//! World coordinates here are zoom-independent pixels: the renderer maps
//! meters to world pixels with a single multiply by the configured
//! `world_scale_px` and hands those to this module. `scale` is the zoom
//! factor and `x` / `y` translate the world origin in screen pixels. The
//! transform is independent of the layout store; the rendering surface is
//! the only component reading both.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::config::EditorConfig;

/// A point in either screen or world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Pan/zoom state mapping world coordinates to screen pixels.
///
/// `scale` stays within the configured zoom limits through every
/// operation. Ephemeral per-session state; never persisted.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    /// Uniform scale factor (zoom); the same for both axes.
    pub scale: f64,
    /// Screen-space x of the world origin, in pixels.
    pub x: f64,
    /// Screen-space y of the world origin, in pixels.
    pub y: f64,
    min_zoom: f64,
    max_zoom: f64,
    zoom_step: f64,
}

impl Viewport {
    /// Create an identity transform bounded by the config's zoom limits.
    #[must_use]
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            scale: 1.0,
            x: 0.0,
            y: 0.0,
            min_zoom: config.min_zoom,
            max_zoom: config.max_zoom,
            zoom_step: config.zoom_step,
        }
    }

    /// Convert a screen-space point (pixels) to world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.x) / self.scale,
            y: (screen.y - self.y) / self.scale,
        }
    }

    /// Convert a world-space point to screen coordinates (pixels).
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point {
            x: world.x * self.scale + self.x,
            y: world.y * self.scale + self.y,
        }
    }

    /// Convert a screen-space distance (pixels) to world-space distance.
    #[must_use]
    pub fn screen_dist_to_world(&self, screen_dist: f64) -> f64 {
        screen_dist / self.scale
    }

    /// Center the world rectangle in the viewport at the largest scale that
    /// keeps a `margin_px` border visible on every side.
    ///
    /// The fitted scale clamps into the zoom limits, so a very large world
    /// may still overflow the viewport at minimum zoom. Idempotent:
    /// re-invoking with the same arguments yields the same transform.
    pub fn fit_to_bounds(&mut self, viewport_w: f64, viewport_h: f64, world_w: f64, world_h: f64, margin_px: f64) {
        let fit = ((viewport_w - margin_px * 2.0) / world_w).min((viewport_h - margin_px * 2.0) / world_h);
        self.scale = fit.clamp(self.min_zoom, self.max_zoom);
        self.x = (viewport_w - world_w * self.scale) / 2.0;
        self.y = (viewport_h - world_h * self.scale) / 2.0;
    }

    /// Rescale by `factor`, keeping the world point under `screen_pt` fixed
    /// on screen.
    pub fn zoom_at_point(&mut self, factor: f64, screen_pt: Point) {
        let next = (self.scale * factor).clamp(self.min_zoom, self.max_zoom);
        let anchor = self.screen_to_world(screen_pt);
        self.scale = next;
        self.x = screen_pt.x - anchor.x * next;
        self.y = screen_pt.y - anchor.y * next;
    }

    /// Rescale by `factor` around the viewport center.
    pub fn zoom_centered(&mut self, factor: f64, viewport_w: f64, viewport_h: f64) {
        self.zoom_at_point(factor, Point::new(viewport_w / 2.0, viewport_h / 2.0));
    }

    /// Zoom factor for one wheel notch.
    ///
    /// Only the sign of `delta_y` is read: every wheel event applies one
    /// configured step regardless of delta magnitude, and positive delta
    /// (scrolling down) zooms out.
    #[must_use]
    pub fn wheel_factor(&self, delta_y: f64) -> f64 {
        if delta_y > 0.0 { 1.0 / self.zoom_step } else { self.zoom_step }
    }

    /// The configured discrete zoom step factor.
    #[must_use]
    pub fn zoom_step(&self) -> f64 {
        self.zoom_step
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}
