//! LED-matrix pattern
//!
//! Green plays the six-frame arrow animation; Yellow and Red hold their
//! glyph and pulse its brightness with the shared [`TriangleWave`]; Night
//! pulses the yellow glyph the same way.

use crate::config::{
    MATRIX_GREEN_PER_MILLE, MATRIX_WAVE_FLOOR_PER_MILLE, MATRIX_WAVE_SLOPE_PER_MILLE,
    MATRIX_WAVE_TOP,
};
use crate::frames::{self, Frame, GREEN_FRAMES, GREEN_FRAME_COUNT, RED_GLYPH, YELLOW_GLYPH};
use crate::render::{wave::TriangleWave, AspectPattern};
use crate::signal::Aspect;

/// Matrix task cadence in milliseconds.
pub const TICK_MS: u32 = 50;

/// The green animation advances every fourth tick (200 ms per frame).
const GREEN_FRAME_TICKS: u8 = 4;

#[derive(Debug, Clone)]
pub struct MatrixPattern {
    last: Option<Aspect>,
    frame_index: usize,
    frame_div: u8,
    wave: TriangleWave,
}

impl MatrixPattern {
    pub const fn new() -> Self {
        Self {
            last: None,
            frame_index: 0,
            frame_div: 0,
            wave: TriangleWave::new(0, MATRIX_WAVE_TOP),
        }
    }

    /// Glyph brightness for a wave step, in thousandths of full scale.
    const fn wave_per_mille(step: u8) -> u16 {
        MATRIX_WAVE_FLOOR_PER_MILLE + MATRIX_WAVE_SLOPE_PER_MILLE * step as u16
    }
}

impl Default for MatrixPattern {
    fn default() -> Self {
        Self::new()
    }
}

impl AspectPattern for MatrixPattern {
    type Output = Frame;

    fn reset(&mut self) {
        self.last = None;
        self.frame_index = 0;
        self.frame_div = 0;
        self.wave.reset();
    }

    /// Produce the logical frame for the coming tick interval. The owning
    /// task converts it to strip order before it goes on the wire.
    fn tick(&mut self, aspect: Aspect) -> Frame {
        if self.last != Some(aspect) {
            self.last = Some(aspect);
            self.frame_index = 0;
            self.frame_div = 0;
            self.wave.reset();
        }

        match aspect {
            Aspect::Green => {
                let frame =
                    frames::scaled(&GREEN_FRAMES[self.frame_index], MATRIX_GREEN_PER_MILLE);
                self.frame_div += 1;
                if self.frame_div == GREEN_FRAME_TICKS {
                    self.frame_div = 0;
                    self.frame_index = (self.frame_index + 1) % GREEN_FRAME_COUNT;
                }
                frame
            }
            Aspect::Yellow | Aspect::Night => {
                let step = self.wave.advance();
                frames::scaled(&YELLOW_GLYPH, Self::wave_per_mille(step))
            }
            Aspect::Red => {
                let step = self.wave.advance();
                frames::scaled(&RED_GLYPH, Self::wave_per_mille(step))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn green_advances_one_frame_per_four_ticks_and_wraps() {
        let mut pattern = MatrixPattern::new();
        for frame_no in 0..GREEN_FRAME_COUNT + 1 {
            let expected = frames::scaled(
                &GREEN_FRAMES[frame_no % GREEN_FRAME_COUNT],
                MATRIX_GREEN_PER_MILLE,
            );
            for _ in 0..GREEN_FRAME_TICKS {
                assert_eq!(pattern.tick(Aspect::Green), expected);
            }
        }
    }

    #[test]
    fn red_descends_to_the_floor_in_ten_ticks_then_rises() {
        let mut pattern = MatrixPattern::new();
        // Center pixel of the stop glyph is full red; watch its scaling.
        let center = |frame: &Frame| frame[12].r;

        let mut last = 0;
        for _ in 0..10 {
            last = center(&pattern.tick(Aspect::Red));
        }
        // Step 0: 1% of 255.
        assert_eq!(last, 2);
        // Direction has flipped; the next tick is brighter again.
        assert!(center(&pattern.tick(Aspect::Red)) > last);
    }

    #[test]
    fn first_wave_tick_starts_just_below_the_top() {
        let mut pattern = MatrixPattern::new();
        // Step 9 of 10: 46 per mille of 255.
        assert_eq!(pattern.tick(Aspect::Red)[12].r, 11);
    }

    #[test]
    fn night_pulses_the_yellow_glyph() {
        let mut night = MatrixPattern::new();
        let mut yellow = MatrixPattern::new();
        for _ in 0..30 {
            assert_eq!(night.tick(Aspect::Night), yellow.tick(Aspect::Yellow));
        }
        let lit = night.tick(Aspect::Night)[2];
        assert!(lit.r > 0 && lit.r == lit.g && lit.b == 0);
    }

    #[test]
    fn aspect_change_restarts_both_animations() {
        let mut pattern = MatrixPattern::new();
        for _ in 0..9 {
            pattern.tick(Aspect::Green);
        }
        // Wave starts fresh at the top on entry to Red.
        assert_eq!(pattern.tick(Aspect::Red)[12].r, 11);
        for _ in 0..5 {
            pattern.tick(Aspect::Red);
        }
        // Frame animation starts back at frame 0 on re-entry to Green.
        let expected = frames::scaled(&GREEN_FRAMES[0], MATRIX_GREEN_PER_MILLE);
        assert_eq!(pattern.tick(Aspect::Green), expected);
    }

    #[test]
    fn reset_restores_frame_zero_and_top_step() {
        let mut pattern = MatrixPattern::new();
        for _ in 0..13 {
            pattern.tick(Aspect::Green);
        }
        pattern.reset();
        let expected = frames::scaled(&GREEN_FRAMES[0], MATRIX_GREEN_PER_MILLE);
        assert_eq!(pattern.tick(Aspect::Green), expected);
        pattern.reset();
        assert_eq!(pattern.tick(Aspect::Red)[12].r, 11);
    }
}
