//! Pure math/data for geometry in Bouncy
//!
//! This crate contains the geometry primitives shared by the touch tracking
//! and animation layers. It has no dependencies.

mod geometry;

pub use geometry::*;
