//! Layout state engine for an interactive warehouse floor-plan editor.
//!
//! This crate owns the authoritative model of the floor plan and every
//! operation that mutates it: placing, moving, resizing, and rotating
//! rectangular elements on a bounded grid, under grid-snapping and
//! boundary-clamping invariants, plus the selection model and the pan/zoom
//! viewport transform the rendering surface depends on. The rendering
//! surface, input-event wiring, and persisted-document validation live
//! outside this crate: they read state from [`store::LayoutStore`] and
//! [`viewport::Viewport`] and feed user intent back in as mutation calls.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`store`] | Mutable layout store: plan, selection, and snap mode |
//! | [`model`] | Floor-plan document model and element types |
//! | [`geometry`] | Pure numeric helpers: snapping and containment clamping |
//! | [`viewport`] | Pan/zoom transform and coordinate conversions |
//! | [`config`] | Editor configuration knobs |
//! | [`consts`] | Shared numeric default constants |

pub mod config;
pub mod consts;
pub mod geometry;
pub mod model;
pub mod store;
pub mod viewport;
