/// Vector math via SIMD-accelerated [`glam`] types.
///
/// This module re-exports all types and functions from the [`glam`] crate.
/// Pointer positions and velocities throughout the trackstrip crates are
/// [`Vec2`] values from here.
///
/// # Examples
///
/// ```
/// use trackstrip_core::math::Vec2;
///
/// let position = Vec2::new(10.0, 20.0);
/// let velocity = Vec2::new(1.0, 0.5);
/// let new_position = position + velocity * 0.016;
/// ```
///
/// [`glam`]: https://docs.rs/glam
pub mod fast {
    pub use glam::*;
}

pub use fast::*;
