//! Single-threaded cooperative timer runtime.
//!
//! Hosts own a [`Runtime`] and drive it by calling [`Runtime::drain_timers`]
//! with the current time on the owning thread. Components hold a cloneable
//! [`RuntimeHandle`] (a weak reference) and schedule callbacks through it.
//! There is no internal clock: time only moves when the host says so, which
//! keeps tests deterministic.

mod runtime;

pub use runtime::{Runtime, RuntimeHandle, TimerId, TimerQueue, TimerRegistration};
