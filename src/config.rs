//! Editor configuration: the numeric knobs of the core grouped for injection.
//!
//! Hosts construct a [`crate::store::LayoutStore`] and a
//! [`crate::viewport::Viewport`] from one `EditorConfig`. Every field has a
//! default from [`crate::consts`], and the struct deserializes with
//! per-field defaults so a host config document may override any subset.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts;

/// Dimensions and grid spacing of a freshly reset plan.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanDefaults {
    /// Plane width in meters.
    pub width_m: f64,
    /// Plane height in meters.
    pub height_m: f64,
    /// Grid spacing in meters.
    pub grid_step_m: f64,
}

impl Default for PlanDefaults {
    fn default() -> Self {
        Self {
            width_m: consts::DEFAULT_PLAN_WIDTH_M,
            height_m: consts::DEFAULT_PLAN_HEIGHT_M,
            grid_step_m: consts::DEFAULT_GRID_STEP_M,
        }
    }
}

/// Configuration consumed by the store and the viewport transform.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Pixels per meter at zoom 1.0; the renderer's meter-to-pixel factor.
    pub world_scale_px: f64,
    /// Smallest permitted viewport scale factor.
    pub min_zoom: f64,
    /// Largest permitted viewport scale factor.
    pub max_zoom: f64,
    /// Scale multiplier applied per discrete zoom step.
    pub zoom_step: f64,
    /// Border in screen pixels left around the plan by fit-to-bounds.
    pub fit_margin_px: f64,
    /// Absolute minimum element extent in meters.
    pub min_element_size_m: f64,
    /// Plan created by reset.
    pub default_plan: PlanDefaults,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            world_scale_px: consts::WORLD_SCALE_PX,
            min_zoom: consts::MIN_ZOOM,
            max_zoom: consts::MAX_ZOOM,
            zoom_step: consts::ZOOM_STEP,
            fit_margin_px: consts::FIT_MARGIN_PX,
            min_element_size_m: consts::MIN_ELEMENT_SIZE_M,
            default_plan: PlanDefaults::default(),
        }
    }
}
