//! Compile-time configuration
//!
//! All timing and intensity parameters are fixed at build time; there is no
//! runtime configuration surface. Renderer tick intervals live next to the
//! pattern state machines that depend on them (see [`crate::render`]).

use crate::signal::Phase;

/// Button sampling interval in milliseconds.
pub const BUTTON_POLL_MS: u64 = 100;

/// Minimum spacing between two accepted button edges, in milliseconds.
pub const DEBOUNCE_WINDOW_MS: u64 = 200;

/// PWM counter wrap shared by the indicator LED and the buzzer carrier.
///
/// 125 MHz system clock / [`PWM_CLKDIV`] / [`PWM_WRAP`] = 500 Hz.
pub const PWM_WRAP: u16 = 2000;

/// PWM clock divider shared by the indicator LED and the buzzer carrier.
pub const PWM_CLKDIV: u8 = 125;

/// Indicator LED duty level, 5% of [`PWM_WRAP`]. Full duty is blinding at
/// desk distance.
pub const INDICATOR_DUTY: u16 = PWM_WRAP / 20;

/// Brightness of the green matrix animation frames, in thousandths of full
/// pixel scale.
pub const MATRIX_GREEN_PER_MILLE: u16 = 50;

/// Matrix glyph brightness at wave step 0, in thousandths.
pub const MATRIX_WAVE_FLOOR_PER_MILLE: u16 = 10;

/// Additional matrix glyph brightness per wave step, in thousandths.
pub const MATRIX_WAVE_SLOPE_PER_MILLE: u16 = 4;

/// Highest intensity-wave step; the wave oscillates over `0..=MATRIX_WAVE_TOP`.
pub const MATRIX_WAVE_TOP: u8 = 10;

/// Dwell time of each phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhaseDurations {
    pub green_ms: u32,
    pub yellow_ms: u32,
    pub red_ms: u32,
}

impl PhaseDurations {
    /// The deployed crossing timing.
    pub const STANDARD: Self = Self {
        green_ms: 15_000,
        yellow_ms: 5_000,
        red_ms: 10_000,
    };

    /// Dwell time of `phase` in milliseconds.
    pub const fn dwell_ms(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Green => self.green_ms,
            Phase::Yellow => self.yellow_ms,
            Phase::Red => self.red_ms,
        }
    }

    /// Dwell time of `phase` in whole seconds, as shown by the countdown.
    pub const fn dwell_secs(&self, phase: Phase) -> u8 {
        (self.dwell_ms(phase) / 1000) as u8
    }
}

impl Default for PhaseDurations {
    fn default() -> Self {
        Self::STANDARD
    }
}
