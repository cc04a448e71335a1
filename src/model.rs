//! Document model: floor-plan elements, their properties, and the plan itself.
//!
//! This module defines the data types describing what is on the floor plan
//! (`Element`, `ElementKind`), the creation payload (`ElementSpec`), and the
//! bounded plane that owns the elements (`FloorPlan`). Data flows into this
//! layer from persisted documents (JSON deserialization) and from the layout
//! store (mutations). The renderer reads `elements` in insertion order,
//! which is paint order.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for a placed element.
pub type ElementId = Uuid;

/// Document schema version written into plans created by this crate.
pub const SCHEMA_VERSION: u32 = 1;

/// The kind of a placed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Storage rack.
    Rack,
    /// Floor zone (staging, picking, buffer, and the like).
    Zone,
    /// Door or dock opening.
    Door,
    /// Free-standing text label.
    Label,
    /// Wall or fence segment of the site boundary.
    Boundary,
}

/// A placed element as stored in the plan and on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    /// Unique identifier, assigned at creation and immutable thereafter.
    pub id: ElementId,
    /// Element kind; immutable after creation.
    pub kind: ElementKind,
    /// Left edge of the bounding box in meters.
    pub x: f64,
    /// Top edge of the bounding box in meters.
    pub y: f64,
    /// Width of the bounding box in meters; always strictly positive.
    pub width: f64,
    /// Height of the bounding box in meters; always strictly positive.
    pub height: f64,
    /// Clockwise rotation in degrees, normalized to `[0, 360)`.
    ///
    /// Rotation is presentational: containment clamping uses the un-rotated
    /// bounding box, so a rotated element may visually protrude past the
    /// plan edge.
    pub rotation: f64,
    /// Display label, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Fill color as a CSS color string, if overriding the kind default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    /// Whether the element is locked against editing in the UI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    /// Whether the element is hidden from the rendering surface.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    /// Open-ended per-element properties; never interpreted by this crate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,
}

/// Creation payload: an element without an id.
///
/// The store's `add_element` consumes one, assigns a fresh id, and appends
/// the result to the plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementSpec {
    /// Element kind.
    pub kind: ElementKind,
    /// Left edge in meters.
    pub x: f64,
    /// Top edge in meters.
    pub y: f64,
    /// Width in meters.
    pub width: f64,
    /// Height in meters.
    pub height: f64,
    /// Clockwise rotation in degrees.
    pub rotation: f64,
    /// Display label, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Fill color, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    /// Locked flag, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    /// Hidden flag, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    /// Open-ended properties, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,
}

impl ElementSpec {
    /// Materialize the spec into an element with the given id.
    pub(crate) fn into_element(self, id: ElementId) -> Element {
        Element {
            id,
            kind: self.kind,
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            rotation: self.rotation,
            label: self.label,
            fill: self.fill,
            locked: self.locked,
            hidden: self.hidden,
            meta: self.meta,
        }
    }
}

/// The floor-plan document: a bounded plane plus its elements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorPlan {
    /// Plane width in meters; positive, fixed while a store owns the plan.
    pub width_m: f64,
    /// Plane height in meters; positive, fixed while a store owns the plan.
    pub height_m: f64,
    /// Grid spacing used by snapping, in meters; positive.
    pub grid_step_m: f64,
    /// Placed elements; insertion order is paint order.
    pub elements: Vec<Element>,
    /// Document schema version carried through round-trips; not interpreted here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<u32>,
}

impl FloorPlan {
    /// Create an empty plan with the given dimensions and grid spacing.
    #[must_use]
    pub fn new(width_m: f64, height_m: f64, grid_step_m: f64) -> Self {
        Self {
            width_m,
            height_m,
            grid_step_m,
            elements: Vec::new(),
            schema_version: Some(SCHEMA_VERSION),
        }
    }

    /// Look up an element by id.
    #[must_use]
    pub fn element(&self, id: &ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == *id)
    }

    pub(crate) fn element_mut(&mut self, id: &ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id == *id)
    }

    /// Number of elements on the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the plan has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Rejection reasons for a plan handed to the store's `load_plan`.
#[derive(Debug, Error)]
pub enum PlanError {
    /// Plan dimensions must both be positive.
    #[error("plan dimensions must be positive, got {width_m} x {height_m}")]
    NonPositivePlan {
        /// Offending plane width.
        width_m: f64,
        /// Offending plane height.
        height_m: f64,
    },
    /// Grid step must be positive for snapping to be defined.
    #[error("grid step must be positive, got {0}")]
    NonPositiveGridStep(f64),
    /// Element extents must be strictly positive.
    #[error("element {id} has non-positive extents {width} x {height}")]
    NonPositiveExtent {
        /// Offending element.
        id: ElementId,
        /// Offending width.
        width: f64,
        /// Offending height.
        height: f64,
    },
}
