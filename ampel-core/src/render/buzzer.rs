//! Buzzer cadence pattern
//!
//! Green sounds a single 1 s pulse on phase entry and then stays silent
//! until the phase is entered again; the other aspects repeat fixed
//! on/off cadences for as long as they hold.

use crate::render::AspectPattern;
use crate::signal::Aspect;

/// Buzzer task cadence in milliseconds.
pub const TICK_MS: u32 = 50;

const GREEN_PULSE_MS: u32 = 1_000;

/// (on window, period) per aspect, in milliseconds.
const fn cadence(aspect: Aspect) -> (u32, u32) {
    match aspect {
        Aspect::Green => (GREEN_PULSE_MS, GREEN_PULSE_MS),
        Aspect::Yellow => (250, 500),
        Aspect::Red => (500, 2_000),
        Aspect::Night => (200, 4_000),
    }
}

#[derive(Debug, Clone)]
pub struct BuzzerPattern {
    last: Option<Aspect>,
    cycle_pos_ms: u32,
    /// One-shot latch for the green pulse; armed on every green entry.
    green_armed: bool,
}

impl BuzzerPattern {
    pub const fn new() -> Self {
        Self {
            last: None,
            cycle_pos_ms: 0,
            green_armed: true,
        }
    }
}

impl Default for BuzzerPattern {
    fn default() -> Self {
        Self::new()
    }
}

impl AspectPattern for BuzzerPattern {
    type Output = bool;

    fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns whether the buzzer sounds for the coming tick interval.
    fn tick(&mut self, aspect: Aspect) -> bool {
        if self.last != Some(aspect) {
            self.last = Some(aspect);
            self.cycle_pos_ms = 0;
            if aspect == Aspect::Green {
                self.green_armed = true;
            }
        }

        let (on_ms, period_ms) = cadence(aspect);
        let sounding =
            self.cycle_pos_ms < on_ms && (aspect != Aspect::Green || self.green_armed);

        self.cycle_pos_ms += TICK_MS;
        if self.cycle_pos_ms >= period_ms {
            self.cycle_pos_ms = 0;
            if aspect == Aspect::Green {
                self.green_armed = false;
            }
        }
        sounding
    }
}
