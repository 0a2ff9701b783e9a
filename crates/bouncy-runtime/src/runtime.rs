use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

pub type TimerId = u64;

struct TimerEntry {
    id: TimerId,
    due_millis: u64,
    callback: Option<Box<dyn FnOnce() + 'static>>,
}

/// Batch of timers taken out of the queue before running them, so callbacks
/// may re-register without re-borrowing the queue. A single animation
/// typically has one pending timer.
type DueBatch = SmallVec<[TimerEntry; 4]>;

struct RuntimeInner {
    timers: RefCell<Vec<TimerEntry>>,
    next_timer_id: Cell<TimerId>,
    now_millis: Cell<u64>,
}

impl RuntimeInner {
    fn new() -> Self {
        Self {
            timers: RefCell::new(Vec::new()),
            next_timer_id: Cell::new(1),
            now_millis: Cell::new(0),
        }
    }

    fn register_timer(&self, delay_millis: u64, callback: Box<dyn FnOnce() + 'static>) -> TimerId {
        let id = self.next_timer_id.get();
        self.next_timer_id.set(id + 1);
        self.timers.borrow_mut().push(TimerEntry {
            id,
            due_millis: self.now_millis.get() + delay_millis,
            callback: Some(callback),
        });
        id
    }

    fn cancel_timer(&self, id: TimerId) {
        let mut timers = self.timers.borrow_mut();
        if let Some(index) = timers.iter().position(|entry| entry.id == id) {
            timers.remove(index);
        }
    }

    fn has_pending_timers(&self) -> bool {
        !self.timers.borrow().is_empty()
    }

    fn next_due_millis(&self) -> Option<u64> {
        self.timers
            .borrow()
            .iter()
            .map(|entry| entry.due_millis)
            .min()
    }

    fn drain_timers(&self, now_millis: u64) {
        self.now_millis.set(now_millis);

        // Take the due entries out first; callbacks may register new timers,
        // which land in a later drain even when due immediately.
        let mut due: DueBatch = SmallVec::new();
        {
            let mut timers = self.timers.borrow_mut();
            let mut index = 0;
            while index < timers.len() {
                if timers[index].due_millis <= now_millis {
                    due.push(timers.remove(index));
                } else {
                    index += 1;
                }
            }
        }

        for mut entry in due {
            if let Some(callback) = entry.callback.take() {
                callback();
            }
        }
    }
}

/// Owner of the timer queue. Lives on the rendering/event thread; the host
/// loop calls [`Runtime::drain_timers`] whenever time advances.
pub struct Runtime {
    inner: Rc<RuntimeInner>,
}

impl Runtime {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RuntimeInner::new()),
        }
    }

    pub fn handle(&self) -> RuntimeHandle {
        RuntimeHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Runs every callback whose due time is at or before `now_millis`, in
    /// registration order.
    pub fn drain_timers(&self, now_millis: u64) {
        self.inner.drain_timers(now_millis);
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloneable weak reference into the runtime. Every operation is a no-op
/// once the owning [`Runtime`] has been dropped.
#[derive(Clone)]
pub struct RuntimeHandle {
    inner: Weak<RuntimeInner>,
}

impl RuntimeHandle {
    pub fn register_timer(
        &self,
        delay_millis: u64,
        callback: impl FnOnce() + 'static,
    ) -> Option<TimerId> {
        self.inner
            .upgrade()
            .map(|inner| inner.register_timer(delay_millis, Box::new(callback)))
    }

    pub fn cancel_timer(&self, id: TimerId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.cancel_timer(id);
        }
    }

    /// The timestamp of the most recent drain.
    pub fn now_millis(&self) -> u64 {
        self.inner
            .upgrade()
            .map(|inner| inner.now_millis.get())
            .unwrap_or(0)
    }

    pub fn has_pending_timers(&self) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.has_pending_timers())
            .unwrap_or(false)
    }

    /// The earliest pending due time, if any. Hosts use this to decide when
    /// to wake up next.
    pub fn next_due_millis(&self) -> Option<u64> {
        self.inner.upgrade().and_then(|inner| inner.next_due_millis())
    }

    pub fn timer_queue(&self) -> TimerQueue {
        TimerQueue::new(self.clone())
    }
}

/// Thin scheduling front over a [`RuntimeHandle`] that hands out cancellable
/// registrations.
#[derive(Clone)]
pub struct TimerQueue {
    runtime: RuntimeHandle,
}

impl TimerQueue {
    pub fn new(runtime: RuntimeHandle) -> Self {
        Self { runtime }
    }

    pub fn runtime_handle(&self) -> RuntimeHandle {
        self.runtime.clone()
    }

    pub fn after_millis(
        &self,
        delay_millis: u64,
        callback: impl FnOnce() + 'static,
    ) -> TimerRegistration {
        let runtime = self.runtime.clone();
        match runtime.register_timer(delay_millis, callback) {
            Some(id) => TimerRegistration::new(runtime, id),
            None => TimerRegistration::inactive(runtime),
        }
    }
}

/// Handle to a scheduled callback. Dropping the registration cancels the
/// timer if it has not fired yet.
pub struct TimerRegistration {
    runtime: RuntimeHandle,
    id: Option<TimerId>,
}

impl TimerRegistration {
    fn new(runtime: RuntimeHandle, id: TimerId) -> Self {
        Self {
            runtime,
            id: Some(id),
        }
    }

    fn inactive(runtime: RuntimeHandle) -> Self {
        Self { runtime, id: None }
    }

    pub fn cancel(mut self) {
        if let Some(id) = self.id.take() {
            self.runtime.cancel_timer(id);
        }
    }
}

impl Drop for TimerRegistration {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            self.runtime.cancel_timer(id);
        }
    }
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
