//! Sequencer domain: cooperative timed-animation drivers.
//!
//! `Timeline` advances a single value through an ordered list of timed
//! steps; `Typewriter` reveals dialogue text one visible unit at a time.
//! Both hold explicit resumable state (current step, elapsed-in-step) and
//! are ticked from schedule systems, so they carry no ECS coupling and are
//! unit-testable in isolation.

mod timeline;
mod typewriter;

#[cfg(test)]
mod tests;

pub use timeline::{Ease, TimedStep, Timeline, TimelineStatus};
pub use typewriter::{RevealTick, RevealUnit, Typewriter, TypewriterTiming};
