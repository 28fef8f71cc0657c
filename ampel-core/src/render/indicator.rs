//! RGB indicator LED pattern
//!
//! Solid low-intensity phase colors in Normal mode; a 2 s-on/2 s-off amber
//! blink at Night. Amber is an equal red+green mix on this LED.

use crate::config::INDICATOR_DUTY;
use crate::render::AspectPattern;
use crate::signal::Aspect;

/// Indicator task cadence in milliseconds.
pub const TICK_MS: u32 = 100;

const NIGHT_ON_MS: u32 = 2_000;
const NIGHT_PERIOD_MS: u32 = 4_000;

/// PWM compare levels for the three LED channels, `0..=PWM_WRAP`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RgbLevels {
    pub red: u16,
    pub green: u16,
    pub blue: u16,
}

impl RgbLevels {
    pub const OFF: Self = Self::new(0, 0, 0);

    const fn new(red: u16, green: u16, blue: u16) -> Self {
        Self { red, green, blue }
    }
}

#[derive(Debug, Clone)]
pub struct IndicatorPattern {
    last: Option<Aspect>,
    cycle_pos_ms: u32,
}

impl IndicatorPattern {
    pub const fn new() -> Self {
        Self {
            last: None,
            cycle_pos_ms: 0,
        }
    }
}

impl Default for IndicatorPattern {
    fn default() -> Self {
        Self::new()
    }
}

impl AspectPattern for IndicatorPattern {
    type Output = RgbLevels;

    fn reset(&mut self) {
        self.last = None;
        self.cycle_pos_ms = 0;
    }

    fn tick(&mut self, aspect: Aspect) -> RgbLevels {
        if self.last != Some(aspect) {
            self.last = Some(aspect);
            self.cycle_pos_ms = 0;
        }

        let duty = INDICATOR_DUTY;
        let out = match aspect {
            Aspect::Green => RgbLevels::new(0, duty, 0),
            Aspect::Yellow => RgbLevels::new(duty, duty, 0),
            Aspect::Red => RgbLevels::new(duty, 0, 0),
            Aspect::Night => {
                if self.cycle_pos_ms < NIGHT_ON_MS {
                    RgbLevels::new(duty, duty, 0)
                } else {
                    RgbLevels::OFF
                }
            }
        };

        self.cycle_pos_ms += TICK_MS;
        if self.cycle_pos_ms >= NIGHT_PERIOD_MS {
            self.cycle_pos_ms = 0;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DUTY: u16 = INDICATOR_DUTY;

    #[test]
    fn normal_phases_are_solid() {
        let mut pattern = IndicatorPattern::new();
        for _ in 0..10 {
            assert_eq!(pattern.tick(Aspect::Green), RgbLevels::new(0, DUTY, 0));
        }
        for _ in 0..10 {
            assert_eq!(
                pattern.tick(Aspect::Yellow),
                RgbLevels::new(DUTY, DUTY, 0)
            );
        }
        for _ in 0..10 {
            assert_eq!(pattern.tick(Aspect::Red), RgbLevels::new(DUTY, 0, 0));
        }
    }

    #[test]
    fn night_blinks_two_seconds_each_way() {
        let mut pattern = IndicatorPattern::new();
        let amber = RgbLevels::new(DUTY, DUTY, 0);
        // 100 ms ticks: 20 on, 20 off, then on again.
        for _ in 0..20 {
            assert_eq!(pattern.tick(Aspect::Night), amber);
        }
        for _ in 0..20 {
            assert_eq!(pattern.tick(Aspect::Night), RgbLevels::OFF);
        }
        assert_eq!(pattern.tick(Aspect::Night), amber);
    }

    #[test]
    fn blink_restarts_when_night_is_reentered() {
        let mut pattern = IndicatorPattern::new();
        for _ in 0..25 {
            pattern.tick(Aspect::Night);
        }
        pattern.tick(Aspect::Green);
        assert_eq!(
            pattern.tick(Aspect::Night),
            RgbLevels::new(DUTY, DUTY, 0)
        );
    }

    #[test]
    fn reset_restarts_the_blink() {
        let mut pattern = IndicatorPattern::new();
        for _ in 0..25 {
            pattern.tick(Aspect::Night);
        }
        pattern.reset();
        assert_eq!(
            pattern.tick(Aspect::Night),
            RgbLevels::new(DUTY, DUTY, 0)
        );
    }
}
