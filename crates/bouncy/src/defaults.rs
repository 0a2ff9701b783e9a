//! Default parameter values for a freshly constructed [`Bouncer`].
//!
//! [`Bouncer`]: crate::Bouncer

pub use bouncy_animation::{DEF_DAMPING, DEF_TARGET_SCALE, DEF_TENSION};

/// How far (in surface-local units) a touch may wander outside the surface's
/// rectangle before it stops counting as pressed.
pub const DEF_BOUNDS_THRESHOLD: f32 = 10.0;
