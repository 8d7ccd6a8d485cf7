//! Geometry and interaction core for the wound-tracking body map.
//!
//! A clinician clicks on a front or back body diagram to place a wound
//! marker; the crate turns that click into a named anatomical zone, manages
//! pan/zoom of the diagram, keeps the overview thumbnail in sync, and finds
//! existing markers near a point. It compiles to WebAssembly for the browser
//! and natively for tests and the `bodymap-cli` tool.
//!
//! All coordinates that leave the crate are in the fixed 512 × 1024 diagram
//! space, independent of how large the diagram is drawn.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`viewport`] | Screen ↔ diagram coordinate transform |
//! | [`zones`] | Coarse and fine anatomical zone classifiers |
//! | [`controller`] | Pan/zoom/drag state machine |
//! | [`overview`] | Overview thumbnail projection |
//! | [`proximity`] | Markers within a radius of a point |
//! | [`marker`] | Saved and pending wound markers |
//! | [`keys`] | Keyboard shortcut dispatch |
//! | [`listeners`] | Scoped event-listener registration |
//! | [`engine`] | Testable [`engine::BodyMapCore`] producing [`engine::Action`]s |
//! | [`render`] | Asset selection and canvas overlays |
//! | [`web`] | `wasm-bindgen` widget wiring DOM events to the core |
//! | [`config`] | Tunables loaded from JSON |
//! | [`consts`] | Diagram dimensions and default tunables |

pub mod config;
pub mod consts;
pub mod controller;
pub mod engine;
pub mod keys;
pub mod listeners;
pub mod marker;
pub mod overview;
pub mod proximity;
pub mod render;
pub mod viewport;
pub mod web;
pub mod zones;
