//! Fixed-step spring-damper animation.
//!
//! The integrator assumes one uniform 20 ms step per tick regardless of how
//! the host actually schedules it; under load the animation slows down
//! rather than jumping.

mod spring;

pub use spring::{
    Direction, SpringAnimator, SpringSpec, DEF_DAMPING, DEF_TARGET_SCALE, DEF_TENSION,
    FIXED_TICK_MILLIS, MASS_COEFFICIENT, STOP_THRESHOLD,
};
