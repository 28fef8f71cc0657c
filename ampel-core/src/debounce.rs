//! Button debouncing
//!
//! The mode button is polled, not interrupt-driven: one sample every
//! [`crate::config::BUTTON_POLL_MS`]. A press is accepted on the first
//! pressed sample after a released one, and then only if the acceptance
//! window has elapsed since the previous accepted press. Contact bounce
//! shorter than the poll interval never produces a sample at all; bounce
//! that does is swallowed by the window.

/// A debounced logical transition of the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    Pressed,
    Released,
}

/// Debounce state for one active-low button.
#[derive(Debug, Clone)]
pub struct Debouncer {
    window_ms: u64,
    /// Most recent raw sample.
    raw_pressed: bool,
    /// Debounced logical state; differs from `raw_pressed` while a press
    /// is being suppressed by the window.
    stable_pressed: bool,
    last_accepted_ms: Option<u64>,
}

impl Debouncer {
    /// `window_ms` is the minimum spacing between two accepted presses.
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            raw_pressed: false,
            stable_pressed: false,
            last_accepted_ms: None,
        }
    }

    /// Feed one poll sample.
    ///
    /// `pressed` is the logical level (pin low = pressed) and `now_ms` a
    /// monotonic timestamp of the sample. Returns the debounced edge this
    /// sample completed, if any. Releases are not window-gated; a release
    /// is only reported when the press that preceded it was accepted.
    pub fn sample(&mut self, pressed: bool, now_ms: u64) -> Option<Edge> {
        if pressed == self.raw_pressed {
            return None;
        }
        self.raw_pressed = pressed;

        if pressed {
            let accept = match self.last_accepted_ms {
                None => true,
                Some(t) => now_ms.saturating_sub(t) >= self.window_ms,
            };
            if accept {
                self.stable_pressed = true;
                self.last_accepted_ms = Some(now_ms);
                return Some(Edge::Pressed);
            }
            None
        } else if self.stable_pressed {
            self.stable_pressed = false;
            Some(Edge::Released)
        } else {
            None
        }
    }
}
