//! Triangular intensity wave shared by the pulsing matrix glyphs.

/// Integer triangle oscillator over an inclusive step range.
///
/// Starts at the top bound moving down, one step per [`advance`] call.
/// Direction flips exactly on the bounds, so every step in `min..=max` is
/// produced and neither bound is ever overshot.
///
/// [`advance`]: TriangleWave::advance
#[derive(Debug, Clone)]
pub struct TriangleWave {
    min: u8,
    max: u8,
    step: u8,
    falling: bool,
}

impl TriangleWave {
    pub const fn new(min: u8, max: u8) -> Self {
        assert!(min <= max);
        Self {
            min,
            max,
            step: max,
            falling: true,
        }
    }

    /// Current step, without advancing.
    pub const fn step(&self) -> u8 {
        self.step
    }

    /// Return to the top of the range, moving down.
    pub fn reset(&mut self) {
        self.step = self.max;
        self.falling = true;
    }

    /// Move one step and return the new value.
    pub fn advance(&mut self) -> u8 {
        if self.min == self.max {
            return self.step;
        }
        if self.falling {
            self.step -= 1;
            if self.step == self.min {
                self.falling = false;
            }
        } else {
            self.step += 1;
            if self.step == self.max {
                self.falling = true;
            }
        }
        self.step
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_at_the_top_descending() {
        let mut wave = TriangleWave::new(0, 10);
        assert_eq!(wave.step(), 10);
        assert_eq!(wave.advance(), 9);
        assert_eq!(wave.advance(), 8);
    }

    #[test]
    fn reaches_the_floor_after_max_ticks_then_rises() {
        let mut wave = TriangleWave::new(0, 10);
        let mut last = wave.step();
        for _ in 0..10 {
            last = wave.advance();
        }
        assert_eq!(last, 0);
        assert_eq!(wave.advance(), 1);
    }

    #[test]
    fn one_period_visits_every_step() {
        let mut wave = TriangleWave::new(2, 7);
        let mut seen = [false; 8];
        seen[wave.step() as usize] = true;
        for _ in 0..10 {
            seen[wave.advance() as usize] = true;
        }
        assert!(seen[2..=7].iter().all(|s| *s));
    }

    #[test]
    fn reset_returns_to_the_top() {
        let mut wave = TriangleWave::new(0, 10);
        for _ in 0..7 {
            wave.advance();
        }
        wave.reset();
        assert_eq!(wave.step(), 10);
        assert_eq!(wave.advance(), 9);
    }

    #[test]
    fn degenerate_range_holds_still() {
        let mut wave = TriangleWave::new(4, 4);
        assert_eq!(wave.advance(), 4);
        assert_eq!(wave.advance(), 4);
    }

    proptest! {
        #[test]
        fn stays_in_bounds_and_turns_only_at_them(
            min in 0u8..20,
            span in 1u8..20,
            ticks in 1usize..200
        ) {
            let max = min + span;
            let mut wave = TriangleWave::new(min, max);
            let mut prev = wave.step();
            let mut prev_delta: Option<i16> = None;
            for _ in 0..ticks {
                let cur = wave.advance();
                prop_assert!(cur >= min && cur <= max);
                let delta = cur as i16 - prev as i16;
                prop_assert_eq!(delta.abs(), 1);
                if let Some(pd) = prev_delta {
                    if pd != delta {
                        // A turn is only legal on a bound.
                        prop_assert!(prev == min || prev == max);
                    }
                }
                prev_delta = Some(delta);
                prev = cur;
            }
        }
    }
}
