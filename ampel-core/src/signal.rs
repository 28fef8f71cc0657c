//! Signal data model
//!
//! [`Phase`] and [`Mode`] are the authoritative state of the intersection;
//! [`SignalSnapshot`] is the value the scheduler publishes and every
//! renderer consumes. Renderers never branch on phase and mode separately -
//! they dispatch on the derived [`Aspect`], which folds Night mode and the
//! three phases into one pattern key.

use crate::config::PhaseDurations;

/// Traffic-light phase. Advances cyclically, driven by the scheduler's
/// dwell timer and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    Green,
    Yellow,
    Red,
}

impl Phase {
    /// The phase that follows `self` in the fixed cycle.
    pub const fn next(self) -> Self {
        match self {
            Self::Green => Self::Yellow,
            Self::Yellow => Self::Red,
            Self::Red => Self::Green,
        }
    }

    /// Upper-case label for the status display.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Green => "GREEN",
            Self::Yellow => "YELLOW",
            Self::Red => "RED",
        }
    }

    /// Pedestrian instruction for the status display.
    pub const fn message(self) -> &'static str {
        match self {
            Self::Green => "GO",
            Self::Yellow => "CAUTION",
            Self::Red => "STOP",
        }
    }
}

/// Operating mode. Night replaces the phase cycle's outputs with a blinking
/// caution pattern on every device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    Normal,
    Night,
}

impl Mode {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Normal => Self::Night,
            Self::Night => Self::Normal,
        }
    }

    /// Upper-case label for the status display.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Night => "NIGHT",
        }
    }
}

/// The pattern key a renderer dispatches on: the published phase, or Night.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Aspect {
    Green,
    Yellow,
    Red,
    Night,
}

impl From<Phase> for Aspect {
    fn from(phase: Phase) -> Self {
        match phase {
            Phase::Green => Self::Green,
            Phase::Yellow => Self::Yellow,
            Phase::Red => Self::Red,
        }
    }
}

/// Command sent from the button task to the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModeCommand {
    Toggle,
}

/// One atomic publication of the signal state.
///
/// The whole struct is replaced on every write, so a reader can never see a
/// phase from one update combined with a mode from another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SignalSnapshot {
    /// Published phase. Pinned to [`Phase::Green`] while mode is Night.
    pub phase: Phase,
    pub mode: Mode,
    /// Seconds remaining in the current phase, scheduler-owned.
    pub countdown_s: u8,
    /// Bumped when a mode toggle lands back in Normal; a renderer that sees
    /// it move resets its animation sub-state before drawing.
    pub reset_epoch: u8,
}

impl SignalSnapshot {
    /// The pattern key renderers dispatch on.
    pub fn aspect(&self) -> Aspect {
        match self.mode {
            Mode::Night => Aspect::Night,
            Mode::Normal => self.phase.into(),
        }
    }
}

impl Default for SignalSnapshot {
    fn default() -> Self {
        Self {
            phase: Phase::Green,
            mode: Mode::Normal,
            countdown_s: PhaseDurations::STANDARD.dwell_secs(Phase::Green),
            reset_epoch: 0,
        }
    }
}
