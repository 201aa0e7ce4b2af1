//! Resource module — CPU-side mesh data for the built-in primitives

pub mod primitives;

pub use primitives::*;
