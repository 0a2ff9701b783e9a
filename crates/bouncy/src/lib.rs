//! Press/release bounce effect for a single rectangular surface.
//!
//! A [`Bouncer`] consumes a pointer event stream for one surface and drives a
//! scale value through a fixed-step spring-damper simulation: pressing pulls
//! the scale toward the configured target, releasing pulls it back toward
//! 1.0, overshooting on the way. The host supplies events and the surface's
//! rectangle, renders the emitted scale, and drains the timer runtime.
//!
//! Each instance binds to exactly one surface for its entire life. Feeding it
//! events from a second surface is a usage error and is reported as
//! [`BounceError::IllegalBinding`].

pub mod defaults;

mod bouncer;
mod error;
mod input;
mod tracker;

pub use bouncer::Bouncer;
pub use error::BounceError;
pub use input::{PointerEvent, PointerEventKind, SurfaceId};
pub use tracker::{TouchSignal, TouchTracker};

pub use bouncy_animation::{Direction, SpringAnimator};
