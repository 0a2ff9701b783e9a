use super::*;

use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn drain_runs_due_timers_in_registration_order() {
    let runtime = Runtime::new();
    let handle = runtime.handle();
    let order = Rc::new(RefCell::new(Vec::new()));

    for label in ["a", "b", "c"] {
        let order = Rc::clone(&order);
        handle.register_timer(20, move || order.borrow_mut().push(label));
    }

    runtime.drain_timers(19);
    assert!(order.borrow().is_empty());

    runtime.drain_timers(20);
    assert_eq!(order.borrow().as_slice(), &["a", "b", "c"]);
    assert!(!handle.has_pending_timers());
}

#[test]
fn drain_skips_timers_that_are_not_due_yet() {
    let runtime = Runtime::new();
    let handle = runtime.handle();
    let fired = Rc::new(RefCell::new(Vec::new()));

    {
        let fired = Rc::clone(&fired);
        handle.register_timer(10, move || fired.borrow_mut().push("early"));
    }
    {
        let fired = Rc::clone(&fired);
        handle.register_timer(50, move || fired.borrow_mut().push("late"));
    }

    runtime.drain_timers(10);
    assert_eq!(fired.borrow().as_slice(), &["early"]);
    assert_eq!(handle.next_due_millis(), Some(50));

    runtime.drain_timers(50);
    assert_eq!(fired.borrow().as_slice(), &["early", "late"]);
}

#[test]
fn delays_are_relative_to_the_latest_drain() {
    let runtime = Runtime::new();
    let handle = runtime.handle();

    runtime.drain_timers(100);
    handle.register_timer(20, || {});
    assert_eq!(handle.next_due_millis(), Some(120));
}

#[test]
fn cancel_timer_prevents_the_callback() {
    let runtime = Runtime::new();
    let handle = runtime.handle();
    let fired = Rc::new(RefCell::new(false));

    let id = {
        let fired = Rc::clone(&fired);
        handle
            .register_timer(0, move || *fired.borrow_mut() = true)
            .expect("runtime alive")
    };
    handle.cancel_timer(id);

    runtime.drain_timers(0);
    assert!(!*fired.borrow());
}

#[test]
fn dropping_a_registration_cancels_the_timer() {
    let runtime = Runtime::new();
    let queue = runtime.handle().timer_queue();
    let fired = Rc::new(RefCell::new(false));

    {
        let fired = Rc::clone(&fired);
        let registration = queue.after_millis(0, move || *fired.borrow_mut() = true);
        drop(registration);
    }

    runtime.drain_timers(0);
    assert!(!*fired.borrow());
}

#[test]
fn timers_registered_during_a_drain_run_in_a_later_drain() {
    let runtime = Runtime::new();
    let handle = runtime.handle();
    let fired = Rc::new(RefCell::new(Vec::new()));

    {
        let fired = Rc::clone(&fired);
        let rearm = handle.clone();
        handle.register_timer(0, move || {
            fired.borrow_mut().push("first");
            let fired = Rc::clone(&fired);
            rearm.register_timer(0, move || fired.borrow_mut().push("second"));
        });
    }

    runtime.drain_timers(0);
    assert_eq!(fired.borrow().as_slice(), &["first"]);

    runtime.drain_timers(0);
    assert_eq!(fired.borrow().as_slice(), &["first", "second"]);
}

#[test]
fn handle_is_inert_after_runtime_drop() {
    let runtime = Runtime::new();
    let handle = runtime.handle();
    drop(runtime);

    assert_eq!(handle.register_timer(0, || {}), None);
    assert!(!handle.has_pending_timers());
    assert_eq!(handle.next_due_millis(), None);
}
