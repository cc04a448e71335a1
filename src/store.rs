//! Layout store: the mutable state container for one editing session.
//!
//! `LayoutStore` owns the current floor plan, the selection, and the
//! snap-mode flag, and exposes every mutation the editor performs. Each
//! operation is atomic and total: operating on an id that no longer exists
//! is a no-op, not an error. Geometry invariants (grid snapping, boundary
//! clamping, the minimum element size) are enforced here on every position-
//! or size-mutating call.
//!
//! The store carries a monotonically increasing revision counter, bumped
//! exactly on observable state changes. The rendering surface repaints
//! whenever the revision it last painted is stale; no-op calls leave it
//! untouched.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashSet;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::EditorConfig;
use crate::geometry::{clamp_aabb_inside, grid_floor, snap_to_grid};
use crate::model::{Element, ElementId, ElementSpec, FloorPlan, PlanError};

/// Mutable, observable layout state for one editing session.
///
/// A plain owned value: construct one per session (or per test) from an
/// [`EditorConfig`] and pass it by reference to whatever needs it.
#[derive(Debug)]
pub struct LayoutStore {
    config: EditorConfig,
    plan: FloorPlan,
    selected: HashSet<ElementId>,
    snap_to_grid_on: bool,
    revision: u64,
}

impl LayoutStore {
    /// Create a store holding a fresh default plan, snap mode on.
    #[must_use]
    pub fn new(config: EditorConfig) -> Self {
        let d = config.default_plan;
        Self {
            config,
            plan: FloorPlan::new(d.width_m, d.height_m, d.grid_step_m),
            selected: HashSet::new(),
            snap_to_grid_on: true,
            revision: 0,
        }
    }

    // --- Queries ---

    /// The current plan.
    #[must_use]
    pub fn plan(&self) -> &FloorPlan {
        &self.plan
    }

    /// Look up an element by id.
    #[must_use]
    pub fn element(&self, id: &ElementId) -> Option<&Element> {
        self.plan.element(id)
    }

    /// Ids of the currently selected elements.
    #[must_use]
    pub fn selected_ids(&self) -> &HashSet<ElementId> {
        &self.selected
    }

    /// Whether the element with `id` is selected.
    #[must_use]
    pub fn is_selected(&self, id: &ElementId) -> bool {
        self.selected.contains(id)
    }

    /// Whether move and resize targets snap to the grid.
    #[must_use]
    pub fn snap_enabled(&self) -> bool {
        self.snap_to_grid_on
    }

    /// Revision counter; bumped on every observable state change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    // --- Mutations ---

    /// Replace everything with a fresh default plan, clear the selection,
    /// and re-enable snap mode.
    pub fn reset(&mut self) {
        let d = self.config.default_plan;
        self.plan = FloorPlan::new(d.width_m, d.height_m, d.grid_step_m);
        self.selected.clear();
        self.snap_to_grid_on = true;
        self.bump();
        debug!("store reset");
    }

    /// Add a new element at the top of the paint order, returning its
    /// freshly assigned id.
    ///
    /// The initial position and size are stored as given: callers supply
    /// in-bounds geometry, and only move and resize re-clamp. Rotation is
    /// normalized into `[0, 360)`.
    pub fn add_element(&mut self, spec: ElementSpec) -> ElementId {
        let id = Uuid::new_v4();
        let mut el = spec.into_element(id);
        el.rotation = el.rotation.rem_euclid(360.0);
        debug!(%id, kind = ?el.kind, x = el.x, y = el.y, "element added");
        self.plan.elements.push(el);
        self.bump();
        id
    }

    /// Replace the selection with the de-duplicated `ids`.
    ///
    /// Ids of already-deleted elements are accepted and simply inert.
    /// Re-applying the same logical set is a no-op.
    pub fn select_elements(&mut self, ids: &[ElementId]) {
        let next: HashSet<ElementId> = ids.iter().copied().collect();
        if next != self.selected {
            self.selected = next;
            self.bump();
        }
    }

    /// Empty the selection.
    pub fn clear_selection(&mut self) {
        if !self.selected.is_empty() {
            self.selected.clear();
            self.bump();
        }
    }

    /// Delete every selected element, then clear the selection.
    ///
    /// Stale ids in the selection are inert; an empty selection makes the
    /// whole call a no-op. Returns the number of elements removed.
    pub fn delete_selected(&mut self) -> usize {
        if self.selected.is_empty() {
            return 0;
        }
        let selected = std::mem::take(&mut self.selected);
        let before = self.plan.elements.len();
        self.plan.elements.retain(|e| !selected.contains(&e.id));
        let removed = before - self.plan.elements.len();
        self.bump();
        debug!(removed, "selected elements deleted");
        removed
    }

    /// Move an element by a world-space delta in meters.
    ///
    /// With snap mode on, the target position rounds to the grid before the
    /// bounds clamp; a coordinate the clamp pulled back from the far edge
    /// then re-aligns down to the grid, so a snapped move always lands both
    /// in-bounds and on-grid. Returns `false` (and changes nothing) if `id`
    /// is unknown.
    pub fn move_by(&mut self, id: &ElementId, dx: f64, dy: f64) -> bool {
        let (bound_w, bound_h) = (self.plan.width_m, self.plan.height_m);
        let step = self.plan.grid_step_m;
        let snap = self.snap_to_grid_on;
        let Some(el) = self.plan.element_mut(id) else {
            return false;
        };
        let mut nx = el.x + dx;
        let mut ny = el.y + dy;
        if snap {
            nx = snap_to_grid(nx, step);
            ny = snap_to_grid(ny, step);
        }
        let (mut cx, mut cy) = clamp_aabb_inside(nx, ny, el.width, el.height, bound_w, bound_h);
        if snap {
            if cx < nx {
                cx = grid_floor(cx, step).max(0.0);
            }
            if cy < ny {
                cy = grid_floor(cy, step).max(0.0);
            }
        }
        el.x = cx;
        el.y = cy;
        self.bump();
        debug!(%id, x = cx, y = cy, "element moved");
        true
    }

    /// Resize an element to the requested extents in meters.
    ///
    /// Extents floor at the configured minimum size before snapping, and
    /// the floor is re-applied after snapping so a coarse grid cannot round
    /// an extent to zero. The position re-clamps against the new size, so
    /// the element may shift to stay in bounds; a coordinate the clamp
    /// moved re-aligns to the grid as in [`Self::move_by`]. Returns `false`
    /// if `id` is unknown.
    pub fn resize_to(&mut self, id: &ElementId, width: f64, height: f64) -> bool {
        let (bound_w, bound_h) = (self.plan.width_m, self.plan.height_m);
        let step = self.plan.grid_step_m;
        let snap = self.snap_to_grid_on;
        let min = self.config.min_element_size_m;
        let Some(el) = self.plan.element_mut(id) else {
            return false;
        };
        let mut w = width.max(min);
        let mut h = height.max(min);
        if snap {
            w = snap_to_grid(w, step).max(min);
            h = snap_to_grid(h, step).max(min);
        }
        let (mut cx, mut cy) = clamp_aabb_inside(el.x, el.y, w, h, bound_w, bound_h);
        if snap {
            if cx < el.x {
                cx = grid_floor(cx, step).max(0.0);
            }
            if cy < el.y {
                cy = grid_floor(cy, step).max(0.0);
            }
        }
        el.x = cx;
        el.y = cy;
        el.width = w;
        el.height = h;
        self.bump();
        debug!(%id, width = w, height = h, "element resized");
        true
    }

    /// Set an element's rotation, normalized into `[0, 360)`.
    ///
    /// Negative inputs wrap: `-90` becomes `270`. The bounding box is not
    /// re-clamped for rotation. Returns `false` if `id` is unknown.
    pub fn rotate_to(&mut self, id: &ElementId, degrees: f64) -> bool {
        let Some(el) = self.plan.element_mut(id) else {
            return false;
        };
        el.rotation = degrees.rem_euclid(360.0);
        self.bump();
        true
    }

    /// Set snap mode to `explicit`, or flip it when `None`.
    ///
    /// Affects subsequent move/resize calls only; stored geometry is left
    /// untouched. Returns the new value.
    pub fn toggle_snap(&mut self, explicit: Option<bool>) -> bool {
        let next = explicit.unwrap_or(!self.snap_to_grid_on);
        if next != self.snap_to_grid_on {
            self.snap_to_grid_on = next;
            self.bump();
        }
        self.snap_to_grid_on
    }

    /// Replace the current plan with a loaded document.
    ///
    /// Structurally impossible plans (non-positive dimensions, grid step,
    /// or element extents) are rejected. Out-of-bounds elements are
    /// re-clamped rather than rejected, re-establishing the containment
    /// invariant for documents an upstream validator let through; rotation
    /// re-normalizes the same way. The selection clears; snap mode is left
    /// as it was.
    pub fn load_plan(&mut self, mut plan: FloorPlan) -> Result<(), PlanError> {
        if plan.width_m <= 0.0 || plan.height_m <= 0.0 {
            return Err(PlanError::NonPositivePlan { width_m: plan.width_m, height_m: plan.height_m });
        }
        if plan.grid_step_m <= 0.0 {
            return Err(PlanError::NonPositiveGridStep(plan.grid_step_m));
        }
        for el in &plan.elements {
            if el.width <= 0.0 || el.height <= 0.0 {
                return Err(PlanError::NonPositiveExtent { id: el.id, width: el.width, height: el.height });
            }
        }
        for el in &mut plan.elements {
            let (cx, cy) = clamp_aabb_inside(el.x, el.y, el.width, el.height, plan.width_m, plan.height_m);
            if (cx - el.x).abs() > f64::EPSILON || (cy - el.y).abs() > f64::EPSILON {
                warn!(id = %el.id, from_x = el.x, from_y = el.y, to_x = cx, to_y = cy, "element re-clamped into plan bounds on load");
            }
            el.x = cx;
            el.y = cy;
            el.rotation = el.rotation.rem_euclid(360.0);
        }
        self.plan = plan;
        self.selected.clear();
        self.bump();
        Ok(())
    }

    fn bump(&mut self) {
        self.revision += 1;
    }
}

impl Default for LayoutStore {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}
