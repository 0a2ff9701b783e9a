use std::rc::Rc;

use bouncy_animation::{Direction, SpringAnimator, MASS_COEFFICIENT};
use bouncy_graphics::Rect;
use bouncy_runtime::RuntimeHandle;

use crate::defaults;
use crate::error::BounceError;
use crate::input::{PointerEvent, SurfaceId};
use crate::tracker::{TouchSignal, TouchTracker};

/// The assembled press/release bounce component.
///
/// Pointer events go in through [`Bouncer::handle_event`]; the render sink
/// receives the animated scale once per tick, and the click sink fires once
/// per completed press. Both sinks are invoked on the owning thread.
///
/// All configuration setters validate synchronously and leave prior state
/// untouched on rejection, so they may be called at any time, including
/// mid-animation; changes apply on the next tick.
pub struct Bouncer {
    tracker: TouchTracker,
    animator: SpringAnimator,
    on_click: Rc<dyn Fn()>,
}

impl Bouncer {
    pub fn new(runtime: RuntimeHandle, on_scale: Rc<dyn Fn(f32)>, on_click: Rc<dyn Fn()>) -> Self {
        Self {
            tracker: TouchTracker::new(defaults::DEF_BOUNDS_THRESHOLD),
            animator: SpringAnimator::new(runtime, on_scale),
            on_click,
        }
    }

    /// Feeds one pointer event for the bound surface. Returns whether the
    /// event was consumed.
    ///
    /// The first call binds this instance to the event's surface for the rest
    /// of its life; any later event for another surface fails with
    /// [`BounceError::IllegalBinding`].
    pub fn handle_event(
        &mut self,
        event: &PointerEvent,
        surface_rect: Rect,
    ) -> Result<bool, BounceError> {
        let (consumed, signal) = self.tracker.handle_event(event, surface_rect)?;
        match signal {
            Some(TouchSignal::Engage) => {
                self.animator.set_direction(Direction::TowardTarget);
                self.animator.start();
            }
            Some(TouchSignal::Release { clicked }) => {
                self.animator.set_direction(Direction::TowardNormal);
                self.animator.start();
                if clicked {
                    (self.on_click)();
                }
            }
            None => {}
        }
        Ok(consumed)
    }

    /// Scale the surface animates toward while pressed. The spring may
    /// overshoot it; values above 2.0 are not suggested.
    pub fn set_target_scale(&mut self, target_scale: f32) -> Result<(), BounceError> {
        if !target_scale.is_finite() || target_scale < 0.0 {
            log::warn!("rejected target_scale {target_scale}");
            return Err(BounceError::InvalidArgument {
                field: "target_scale",
                reason: "must be finite and >= 0",
            });
        }
        self.animator.set_target_scale(target_scale);
        Ok(())
    }

    /// How far a touch may wander outside the surface before the press is
    /// cancelled. Used when the binding is established; it does not reshape
    /// an existing tolerance rectangle.
    pub fn set_bounds_threshold(&mut self, bounds_threshold: f32) -> Result<(), BounceError> {
        if !bounds_threshold.is_finite() || bounds_threshold < 0.0 {
            log::warn!("rejected bounds_threshold {bounds_threshold}");
            return Err(BounceError::InvalidArgument {
                field: "bounds_threshold",
                reason: "must be finite and >= 0",
            });
        }
        self.tracker.set_bounds_threshold(bounds_threshold);
        Ok(())
    }

    /// Spring tension. Higher values speed the animation up; values outside
    /// roughly 2..=40 are not expected to behave well.
    pub fn set_tension(&mut self, tension: f32) -> Result<(), BounceError> {
        if !tension.is_finite() || tension <= 0.0 {
            log::warn!("rejected tension {tension}");
            return Err(BounceError::InvalidArgument {
                field: "tension",
                reason: "must be finite and > 0",
            });
        }
        self.animator.set_spring_constant(tension / MASS_COEFFICIENT);
        Ok(())
    }

    /// Damping applied to the velocity each tick, in `[0, 1]`. Suggested
    /// values are 0.01..=0.4: too much damping may keep the animation from
    /// ever completing, too little lets it bounce indefinitely.
    pub fn set_damping(&mut self, damping: f32) -> Result<(), BounceError> {
        if !damping.is_finite() || !(0.0..=1.0).contains(&damping) {
            log::warn!("rejected damping {damping}");
            return Err(BounceError::InvalidArgument {
                field: "damping",
                reason: "must be within [0, 1]",
            });
        }
        self.animator.set_friction(1.0 - damping);
        Ok(())
    }

    pub fn scale(&self) -> f32 {
        self.animator.scale()
    }

    pub fn is_at_rest(&self) -> bool {
        self.animator.is_at_rest()
    }

    pub fn is_touching(&self) -> bool {
        self.tracker.is_touching()
    }

    pub fn bound_surface(&self) -> Option<SurfaceId> {
        self.tracker.bound_surface()
    }

    pub fn direction(&self) -> Direction {
        self.animator.direction()
    }

    pub fn target_scale(&self) -> f32 {
        self.animator.target_scale()
    }

    pub fn bounds_threshold(&self) -> f32 {
        self.tracker.bounds_threshold()
    }
}

#[cfg(test)]
#[path = "tests/bouncer_tests.rs"]
mod tests;
