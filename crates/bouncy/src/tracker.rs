use bouncy_graphics::Rect;

use crate::error::BounceError;
use crate::input::{PointerEvent, PointerEventKind, SurfaceId};

/// Abstract signal produced while translating a pointer event stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchSignal {
    /// Pointer is considered down on the surface.
    Engage,
    /// Pointer lifted, left the tolerance bounds, or the touch was cancelled.
    /// `clicked` is true only for a deliberate Up inside bounds.
    Release { clicked: bool },
}

/// The single-surface binding, established on the first accepted event.
enum Binding {
    Unbound,
    BoundTo { surface: SurfaceId, tolerance: Rect },
}

/// Translates a raw pointer event stream for one surface into
/// engage/release signals.
///
/// The tolerance rectangle is computed once, at bind time, from the surface's
/// rectangle expanded by the bounds threshold. It intentionally does not
/// track later surface relocation; the component targets static surfaces.
pub struct TouchTracker {
    binding: Binding,
    bounds_threshold: f32,
    touching: bool,
}

impl TouchTracker {
    pub fn new(bounds_threshold: f32) -> Self {
        Self {
            binding: Binding::Unbound,
            bounds_threshold,
            touching: false,
        }
    }

    /// Raw write; the owning component validates before calling. Has no
    /// effect once the tracker is bound.
    pub fn set_bounds_threshold(&mut self, bounds_threshold: f32) {
        self.bounds_threshold = bounds_threshold;
    }

    pub fn bounds_threshold(&self) -> f32 {
        self.bounds_threshold
    }

    pub fn is_touching(&self) -> bool {
        self.touching
    }

    pub fn bound_surface(&self) -> Option<SurfaceId> {
        match self.binding {
            Binding::Unbound => None,
            Binding::BoundTo { surface, .. } => Some(surface),
        }
    }

    /// Feeds one event through the tracker. Returns whether the event was
    /// consumed and the signal it produced, if any.
    ///
    /// `surface_rect` is the surface's current rectangle; the bounds check
    /// translates the event position by its origin before testing against
    /// the bind-time tolerance rectangle (boundary inclusive).
    pub fn handle_event(
        &mut self,
        event: &PointerEvent,
        surface_rect: Rect,
    ) -> Result<(bool, Option<TouchSignal>), BounceError> {
        if !event.position.x.is_finite() || !event.position.y.is_finite() {
            return Err(BounceError::InvalidArgument {
                field: "position",
                reason: "coordinates must be finite",
            });
        }

        let tolerance = match self.binding {
            Binding::Unbound => {
                let tolerance = surface_rect.inflate(self.bounds_threshold);
                log::debug!(
                    "binding to surface {} with tolerance rect {:?}",
                    event.surface,
                    tolerance
                );
                self.binding = Binding::BoundTo {
                    surface: event.surface,
                    tolerance,
                };
                tolerance
            }
            Binding::BoundTo { surface, tolerance } => {
                if surface != event.surface {
                    return Err(BounceError::IllegalBinding {
                        bound: surface,
                        offered: event.surface,
                    });
                }
                tolerance
            }
        };

        match event.kind {
            PointerEventKind::Down => {
                self.touching = true;
                Ok((true, Some(TouchSignal::Engage)))
            }
            PointerEventKind::Move if self.touching => {
                let x = surface_rect.x + event.position.x;
                let y = surface_rect.y + event.position.y;
                if tolerance.contains(x, y) {
                    Ok((true, None))
                } else {
                    // Silent cancel: the press ends, no click fires.
                    self.touching = false;
                    Ok((true, Some(TouchSignal::Release { clicked: false })))
                }
            }
            PointerEventKind::Up | PointerEventKind::Cancel if self.touching => {
                self.touching = false;
                let clicked = event.kind == PointerEventKind::Up;
                Ok((true, Some(TouchSignal::Release { clicked })))
            }
            _ => Ok((false, None)),
        }
    }
}

#[cfg(test)]
#[path = "tests/tracker_tests.rs"]
mod tests;
