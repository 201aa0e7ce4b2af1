//! Camera module — eye transform and projection parameters.
//!
//! The engine does NOT store or manage cameras. A [`Camera`] is a tool
//! provided by the engine, owned and driven by the caller (typically the
//! per-frame update logic), and read back for shader upload.

mod camera;

pub use camera::{Camera, ProjectionMode};
