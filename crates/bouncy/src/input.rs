//! Pointer event model consumed by the touch tracker.

use bouncy_graphics::Point;

pub type SurfaceId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// One pointer event for one surface. Positions are in the surface's local
/// coordinate frame; the surface's own rectangle travels alongside the event
/// when it is handled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub surface: SurfaceId,
    pub kind: PointerEventKind,
    pub position: Point,
}

impl PointerEvent {
    pub fn new(surface: SurfaceId, kind: PointerEventKind, position: Point) -> Self {
        Self {
            surface,
            kind,
            position,
        }
    }
}
