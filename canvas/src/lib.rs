//! Geometry and interaction engine for a browser vector drawing surface.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! scene of drawable objects, the pan/zoom view, and the pointer state machine
//! that turns raw input into scene mutations. Every handler returns a list of
//! [`engine::Action`]s; the host repaints and refreshes its panels from those
//! and never reaches into engine state directly.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`doc`] | Scene model: drawable objects, paint order, selection |
//! | [`geom`] | Shape variants, bounding boxes, local/world rotation |
//! | [`shape`] | Building shapes and frames from a drag gesture |
//! | [`camera`] | Pan/zoom view transform and coordinate conversions |
//! | [`input`] | Tools, buttons, cursors, and the gesture state machine |
//! | [`hit`] | Hit-testing against bodies and selection handles |
//! | [`transform`] | Resize and rotate gesture math |
//! | [`panel`] | Layers/properties read models and edit commands |
//! | [`render`] | Scene rendering to a `Canvas2D` context |
//! | [`config`] | Tunables, loadable from JSON |
//! | [`error`] | Edit and config errors |
//! | [`consts`] | Shared numeric constants (world size, handle sizes, zoom step) |

pub mod camera;
pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod error;
pub mod geom;
pub mod hit;
pub mod input;
pub mod panel;
pub mod render;
pub mod shape;
pub mod transform;
