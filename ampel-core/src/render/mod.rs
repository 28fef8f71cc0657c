//! Per-device pattern state machines
//!
//! Every output device renders the same [`Aspect`] through its own pattern
//! state machine. The machines are pure: a firmware task feeds them one
//! tick of its own cadence at a time and applies the returned output to
//! the device it owns. Animation counters live here and nowhere else.

pub mod buzzer;
pub mod indicator;
pub mod matrix;
pub mod screen;
pub mod wave;

pub use buzzer::BuzzerPattern;
pub use indicator::{IndicatorPattern, RgbLevels};
pub use matrix::MatrixPattern;
pub use screen::{Screen, StatusScreen};
pub use wave::TriangleWave;

use crate::signal::{Aspect, SignalSnapshot};

/// One device's pattern generator.
pub trait AspectPattern {
    /// What a tick produces for the owning task to apply to its device.
    type Output;

    /// Return the pattern to its phase-entry state: frame index 0,
    /// intensity at the top step, one-shot latches re-armed.
    fn reset(&mut self);

    /// Advance one tick of the device's cadence and produce output for
    /// the given aspect.
    fn tick(&mut self, aspect: Aspect) -> Self::Output;
}

/// Couples a pattern to the published reset epoch.
///
/// A mode toggle that lands back in Normal bumps the epoch inside the
/// snapshot, so the reset and the state that requires it arrive together:
/// the wrapper resets the pattern before the first tick that observes the
/// new epoch, and every device restarts its animation in step.
#[derive(Debug)]
pub struct Renderer<P: AspectPattern> {
    pattern: P,
    seen_epoch: u8,
}

impl<P: AspectPattern> Renderer<P> {
    pub fn new(pattern: P) -> Self {
        Self {
            pattern,
            seen_epoch: 0,
        }
    }

    pub fn tick(&mut self, snapshot: &SignalSnapshot) -> P::Output {
        if snapshot.reset_epoch != self.seen_epoch {
            self.seen_epoch = snapshot.reset_epoch;
            self.pattern.reset();
        }
        self.pattern.tick(snapshot.aspect())
    }
}
