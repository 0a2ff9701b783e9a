use std::cell::RefCell;
use std::rc::Rc;

use bouncy_runtime::{RuntimeHandle, TimerRegistration};

/// Default scale animated toward while pressed.
pub const DEF_TARGET_SCALE: f32 = 0.7;
/// Default damping factor applied to the velocity each tick.
pub const DEF_DAMPING: f32 = 0.15;
/// Default spring tension before the mass coefficient is applied.
pub const DEF_TENSION: f32 = 7.5;

/// Physics are stepped every 20 ms.
pub const FIXED_TICK_MILLIS: u64 = 20;
/// Velocity and force magnitudes below this end the animation.
pub const STOP_THRESHOLD: f32 = 0.01;
/// Divisor that keeps tension values in a comfortable range.
pub const MASS_COEFFICIENT: f32 = 100.0;

/// Which attractor the spring currently pulls toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Pull toward the configured target scale (pressed state).
    TowardTarget,
    /// Pull back toward the normal scale of 1.0 (released state).
    TowardNormal,
}

/// Spring parameters in their integrator-ready form.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringSpec {
    pub target_scale: f32,
    /// `1 - damping`; multiplied into the velocity every tick.
    pub friction: f32,
    /// `tension / MASS_COEFFICIENT`; multiplied into the restoring force.
    pub spring_constant: f32,
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self {
            target_scale: DEF_TARGET_SCALE,
            friction: 1.0 - DEF_DAMPING,
            spring_constant: DEF_TENSION / MASS_COEFFICIENT,
        }
    }
}

/// One-dimensional spring-damper integrator producing a scale value per tick.
///
/// The animator is either idle or running. [`SpringAnimator::start`] is a
/// no-op while running, so there is at most one active tick stream per
/// instance. Parameter setters here are raw writes; validation happens at the
/// component boundary before values reach this type.
pub struct SpringAnimator {
    inner: Rc<RefCell<AnimatorInner>>,
}

struct AnimatorInner {
    runtime: RuntimeHandle,
    on_scale: Rc<dyn Fn(f32)>,
    spec: SpringSpec,
    direction: Direction,
    scale: f32,
    velocity: f32,
    at_rest: bool,
    registration: Option<TimerRegistration>,
}

impl SpringAnimator {
    pub fn new(runtime: RuntimeHandle, on_scale: Rc<dyn Fn(f32)>) -> Self {
        let inner = AnimatorInner {
            runtime,
            on_scale,
            spec: SpringSpec::default(),
            direction: Direction::TowardTarget,
            scale: 1.0,
            velocity: 0.0,
            at_rest: true,
            registration: None,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Takes effect on the next tick.
    pub fn set_direction(&self, direction: Direction) {
        self.inner.borrow_mut().direction = direction;
    }

    /// Starts the tick loop if it is idle. The first tick is posted with zero
    /// delay; a running loop is left untouched.
    pub fn start(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            if !inner.at_rest {
                return;
            }
            inner.at_rest = false;
        }
        Self::schedule_tick(&self.inner, 0);
    }

    pub fn direction(&self) -> Direction {
        self.inner.borrow().direction
    }

    pub fn scale(&self) -> f32 {
        self.inner.borrow().scale
    }

    pub fn velocity(&self) -> f32 {
        self.inner.borrow().velocity
    }

    pub fn is_at_rest(&self) -> bool {
        self.inner.borrow().at_rest
    }

    pub fn target_scale(&self) -> f32 {
        self.inner.borrow().spec.target_scale
    }

    pub fn set_target_scale(&self, target_scale: f32) {
        self.inner.borrow_mut().spec.target_scale = target_scale;
    }

    pub fn set_friction(&self, friction: f32) {
        self.inner.borrow_mut().spec.friction = friction;
    }

    pub fn set_spring_constant(&self, spring_constant: f32) {
        self.inner.borrow_mut().spec.spring_constant = spring_constant;
    }

    fn schedule_tick(this: &Rc<RefCell<AnimatorInner>>, delay_millis: u64) {
        let queue = {
            let inner = this.borrow();
            if inner.registration.is_some() {
                return;
            }
            inner.runtime.timer_queue()
        };
        let weak = Rc::downgrade(this);
        let registration = queue.after_millis(delay_millis, move || {
            if let Some(strong) = weak.upgrade() {
                Self::on_tick(&strong);
            }
        });
        this.borrow_mut().registration = Some(registration);
    }

    fn on_tick(this: &Rc<RefCell<AnimatorInner>>) {
        let (scale, still_running, on_scale) = {
            let mut inner = this.borrow_mut();
            inner.registration = None;

            let attractor = match inner.direction {
                Direction::TowardTarget => inner.spec.target_scale,
                Direction::TowardNormal => 1.0,
            };
            let force = attractor - inner.scale;

            inner.velocity = inner.velocity * inner.spec.friction + force * inner.spec.spring_constant;
            inner.scale += inner.velocity;

            if inner.velocity.abs() < STOP_THRESHOLD && force.abs() < STOP_THRESHOLD {
                inner.at_rest = true;
                inner.velocity = 0.0;
                // Snap to the attractor so rest is exact, not merely close.
                inner.scale = attractor;
                log::trace!("spring at rest at scale {}", inner.scale);
            }

            (inner.scale, !inner.at_rest, Rc::clone(&inner.on_scale))
        };

        on_scale(scale);

        if still_running {
            Self::schedule_tick(this, FIXED_TICK_MILLIS);
        }
    }
}

impl Clone for SpringAnimator {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
#[path = "tests/spring_tests.rs"]
mod tests;
