//! Interaction engine for annotating construction drawings in the browser.
//!
//! This crate is compiled to WebAssembly. It owns everything between a raw DOM
//! pointer event and a document change: mapping screen pixels into
//! image-percentage space under pan/zoom and letterboxing, deciding what a
//! press means, running the drawing/moving/resizing/marquee/panning gesture
//! state machine, and hit-testing shapes. The host JavaScript layer renders
//! the image and overlays, forwards DOM events, and persists the resulting
//! [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Testable [`engine::EngineCore`] and the [`engine::Action`] stream |
//! | [`bindings`] | `wasm-bindgen` facade ([`bindings::MarkupEngine`]) |
//! | [`doc`] | Shapes, pins, and the in-memory document store |
//! | [`camera`] | View transform and zoom/pan controller |
//! | [`mapper`] | Screen ↔ image-percent coordinate mapping |
//! | [`geom`] | Percent-space points and rectangles |
//! | [`hit`] | Hit-testing, marquee selection, resize handles |
//! | [`input`] | Tools, input event types, and the gesture state machine |
//! | [`policy`] | Pointer-down decision table |
//! | [`config`] | Engine tunables and their validation |
//! | [`consts`] | Shared numeric constants (zoom limits, thresholds) |

pub mod bindings;
pub mod camera;
pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod geom;
pub mod hit;
pub mod input;
pub mod mapper;
pub mod policy;
