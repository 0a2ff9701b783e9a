//! Scripted press/release cycle against a fake 100x100 surface.
//!
//! The runtime is drained at each pending due time instead of sleeping, so
//! the output is deterministic: the same tick sequence a real event loop
//! would produce, printed to stdout.

use std::cell::Cell;
use std::error::Error;
use std::rc::Rc;

use bouncy::{Bouncer, PointerEvent, PointerEventKind};
use bouncy_graphics::{Point, Rect, Size};
use bouncy_runtime::Runtime;

const SURFACE: u64 = 1;

fn run_until_idle(runtime: &Runtime) {
    let handle = runtime.handle();
    while let Some(due) = handle.next_due_millis() {
        runtime.drain_timers(due);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let runtime = Runtime::new();
    let handle = runtime.handle();
    let surface_rect = Rect::from_size(Size::new(100.0, 100.0));

    let tick = {
        let handle = handle.clone();
        Rc::new(move |scale: f32| {
            println!("t={:>4}ms scale={:.4}", handle.now_millis(), scale);
        })
    };
    let clicks = Rc::new(Cell::new(0u32));
    let click_sink = {
        let clicks = Rc::clone(&clicks);
        Rc::new(move || clicks.set(clicks.get() + 1))
    };

    let mut bouncer = Bouncer::new(handle, tick, click_sink);

    log::info!("press at the surface center");
    bouncer.handle_event(
        &PointerEvent::new(SURFACE, PointerEventKind::Down, Point::new(50.0, 50.0)),
        surface_rect,
    )?;
    run_until_idle(&runtime);

    log::info!("release");
    bouncer.handle_event(
        &PointerEvent::new(SURFACE, PointerEventKind::Up, Point::new(50.0, 50.0)),
        surface_rect,
    )?;
    run_until_idle(&runtime);

    println!("clicks: {}", clicks.get());
    Ok(())
}
