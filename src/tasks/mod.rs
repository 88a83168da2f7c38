//! Background Tasks
//!
//! Periodic sweep of expired pagination envelopes.

mod sweep;

pub use sweep::spawn_sweep_task;
