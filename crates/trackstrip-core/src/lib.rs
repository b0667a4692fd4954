//! Trackstrip Core
//!
//! Fundamental types shared by the trackstrip crates: vector math, plain
//! geometry primitives, an RGBA color usable straight from GPU buffers, and
//! logging setup.

pub mod color;
pub mod geometry;
pub mod logging;
pub mod math;

pub use color::Color;
pub use geometry::{Rect, Size};
