//! 5x5 LED-matrix frame data and wiring-order mapping
//!
//! Frames are stored row-major, row 0 at the top, as seen by a person
//! facing the board. The WS2812 chain is wired as a serpentine starting at
//! the bottom-right pixel, so [`to_strip_order`] mirrors rows 1 and 3 and
//! reverses the whole buffer before it goes out on the wire.

/// Matrix edge length in pixels.
pub const GRID_SIDE: usize = 5;

/// Total pixel count.
pub const PIXEL_COUNT: usize = GRID_SIDE * GRID_SIDE;

/// Number of frames in the green animation.
pub const GREEN_FRAME_COUNT: usize = 6;

/// One 24-bit pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const OFF: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scale every channel to `per_mille` thousandths of its value.
    pub const fn scaled(self, per_mille: u16) -> Self {
        const fn ch(v: u8, per_mille: u16) -> u8 {
            ((v as u32 * per_mille as u32) / 1000) as u8
        }
        Self::new(
            ch(self.r, per_mille),
            ch(self.g, per_mille),
            ch(self.b, per_mille),
        )
    }
}

/// One full-matrix image in logical (row-major, top-down) order.
pub type Frame = [Rgb; PIXEL_COUNT];

const O: Rgb = Rgb::OFF;
const G: Rgb = Rgb::new(0, 255, 0);
const Y: Rgb = Rgb::new(255, 255, 0);
const R: Rgb = Rgb::new(255, 0, 0);
const W: Rgb = Rgb::new(255, 255, 255);

/// Green-phase animation: an arrow sliding off to the right.
#[rustfmt::skip]
pub static GREEN_FRAMES: [Frame; GREEN_FRAME_COUNT] = [
    [
        O, O, G, O, O,
        O, O, O, G, O,
        G, G, G, G, G,
        O, O, O, G, O,
        O, O, G, O, O,
    ],
    [
        O, O, O, G, O,
        O, O, O, O, G,
        O, G, G, G, G,
        O, O, O, O, G,
        O, O, O, G, O,
    ],
    [
        O, O, O, O, G,
        O, O, O, O, O,
        G, O, G, G, G,
        O, O, O, O, O,
        O, O, O, O, G,
    ],
    [
        O, O, O, O, O,
        G, O, O, O, O,
        G, G, O, G, G,
        G, O, O, O, O,
        O, O, O, O, O,
    ],
    [
        G, O, O, O, O,
        O, G, O, O, O,
        G, G, G, O, G,
        O, G, O, O, O,
        G, O, O, O, O,
    ],
    [
        O, G, O, O, O,
        O, O, G, O, O,
        G, G, G, G, O,
        O, O, G, O, O,
        O, G, O, O, O,
    ],
];

/// Yellow-phase glyph (also the Night caution glyph): an exclamation mark.
#[rustfmt::skip]
pub static YELLOW_GLYPH: Frame = [
    O, O, Y, O, O,
    O, O, Y, O, O,
    O, O, Y, O, O,
    O, O, O, O, O,
    O, O, Y, O, O,
];

/// Red-phase glyph: a stop sign with a white core.
#[rustfmt::skip]
pub static RED_GLYPH: Frame = [
    O, R, R, R, O,
    R, W, W, W, R,
    R, W, R, W, R,
    R, W, W, W, R,
    O, R, R, R, O,
];

/// Scale a whole frame to `per_mille` thousandths of full brightness.
pub fn scaled(frame: &Frame, per_mille: u16) -> Frame {
    let mut out = *frame;
    for px in &mut out {
        *px = px.scaled(per_mille);
    }
    out
}

/// Reorder a logical frame into the order pixels are shifted onto the
/// chain: rows 1 and 3 mirrored, then the whole buffer reversed.
pub fn to_strip_order(frame: &Frame) -> Frame {
    let mut strip = [Rgb::OFF; PIXEL_COUNT];
    for (k, out) in strip.iter_mut().enumerate() {
        let i = PIXEL_COUNT - 1 - k;
        let (row, col) = (i / GRID_SIDE, i % GRID_SIDE);
        let col = if row % 2 == 1 { GRID_SIDE - 1 - col } else { col };
        *out = frame[row * GRID_SIDE + col];
    }
    strip
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_lit(index: usize) -> Frame {
        let mut frame = [Rgb::OFF; PIXEL_COUNT];
        frame[index] = W;
        frame
    }

    fn lit_positions(frame: &Frame) -> impl Iterator<Item = usize> + '_ {
        frame
            .iter()
            .enumerate()
            .filter(|(_, px)| **px != Rgb::OFF)
            .map(|(i, _)| i)
    }

    #[test]
    fn straight_row_pixel_lands_reversed() {
        // Row 0 is not mirrored: logical index 2 sits at buffer index 2,
        // which is the 23rd pixel shifted out.
        let strip = to_strip_order(&single_lit(2));
        assert_eq!(lit_positions(&strip).collect::<std::vec::Vec<_>>(), [22]);
    }

    #[test]
    fn mirrored_row_pixel_lands_mirrored_and_reversed() {
        // Logical index 5 (row 1, col 0) mirrors to buffer index 9.
        let strip = to_strip_order(&single_lit(5));
        assert_eq!(lit_positions(&strip).collect::<std::vec::Vec<_>>(), [15]);
    }

    #[test]
    fn bottom_row_pixel_is_among_the_first_out() {
        let strip = to_strip_order(&single_lit(20));
        assert_eq!(lit_positions(&strip).collect::<std::vec::Vec<_>>(), [4]);
    }

    #[test]
    fn strip_order_is_a_permutation() {
        let mut frame = [Rgb::OFF; PIXEL_COUNT];
        for (i, px) in frame.iter_mut().enumerate() {
            *px = Rgb::new(i as u8, 0, 0);
        }
        let strip = to_strip_order(&frame);
        let mut seen = [false; PIXEL_COUNT];
        for px in &strip {
            seen[px.r as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn scaling_matches_the_five_percent_reference() {
        assert_eq!(Rgb::new(255, 255, 0).scaled(50), Rgb::new(12, 12, 0));
        assert_eq!(Rgb::new(255, 0, 0).scaled(10), Rgb::new(2, 0, 0));
        assert_eq!(Rgb::OFF.scaled(1000), Rgb::OFF);
    }

    #[test]
    fn green_frames_use_only_the_green_channel() {
        for frame in &GREEN_FRAMES {
            for px in frame {
                assert_eq!(px.r, 0);
                assert_eq!(px.b, 0);
            }
        }
    }

    #[test]
    fn glyphs_use_their_palette_only() {
        for px in &YELLOW_GLYPH {
            assert!(*px == Rgb::OFF || *px == Rgb::new(255, 255, 0));
        }
        for px in &RED_GLYPH {
            assert!(
                *px == Rgb::OFF
                    || *px == Rgb::new(255, 0, 0)
                    || *px == Rgb::new(255, 255, 255)
            );
        }
    }
}
