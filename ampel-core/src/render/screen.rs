//! Status screen rendering
//!
//! Builds text screens for the 128x64 OLED: 8 rows of 21 characters.
//! The firmware's font covers digits, upper-case letters and basic
//! punctuation, so all screen text is upper-case.

use heapless::String;

use crate::signal::{Mode, Phase, SignalSnapshot};

/// Characters per display row.
pub const DISPLAY_COLS: usize = 21;

/// Text rows on the display.
pub const DISPLAY_ROWS: usize = 8;

/// A screen buffer the display task blits to the OLED.
pub struct Screen {
    /// Lines of text (8 rows max)
    lines: [String<22>; DISPLAY_ROWS],
    /// Row drawn inverted (the banner), if any.
    highlight_row: Option<u8>,
}

impl Screen {
    pub const fn new() -> Self {
        Self {
            lines: [
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
            ],
            highlight_row: None,
        }
    }

    pub fn clear(&mut self) {
        for line in &mut self.lines {
            line.clear();
        }
        self.highlight_row = None;
    }

    /// Set text at a specific row, truncated to the display width.
    pub fn set_line(&mut self, row: u8, text: &str) {
        if (row as usize) < self.lines.len() {
            self.lines[row as usize].clear();
            let _ = self.lines[row as usize].push_str(&text[..text.len().min(DISPLAY_COLS)]);
        }
    }

    /// Mark a row to be drawn inverted.
    pub fn set_highlight(&mut self, row: u8) {
        if (row as usize) < DISPLAY_ROWS {
            self.highlight_row = Some(row);
        }
    }

    pub fn get_line(&self, row: u8) -> &str {
        if (row as usize) < self.lines.len() {
            self.lines[row as usize].as_str()
        } else {
            ""
        }
    }

    pub fn highlight_row(&self) -> Option<u8> {
        self.highlight_row
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the signal status screens.
pub struct StatusScreen {
    screen: Screen,
}

impl StatusScreen {
    pub const fn new() -> Self {
        Self {
            screen: Screen::new(),
        }
    }

    /// The current screen buffer.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Rebuild the screen for a published snapshot.
    pub fn render(&mut self, snapshot: &SignalSnapshot) {
        match snapshot.mode {
            Mode::Normal => self.render_phase(snapshot.phase, snapshot.countdown_s),
            Mode::Night => self.render_night(),
        }
    }

    fn render_phase(&mut self, phase: Phase, countdown_s: u8) {
        self.screen.clear();
        self.screen.set_line(0, "=== TRAFFIC SIGNAL ==");
        self.screen.set_highlight(0);

        self.screen.set_line(2, "MODE   NORMAL");

        let mut phase_line: String<22> = String::new();
        let _ = write_to_string(
            &mut phase_line,
            format_args!("PHASE  {}", phase.label()),
        );
        self.screen.set_line(3, &phase_line);

        self.screen.set_line(5, &centered(phase.message()));

        let mut count_line: String<22> = String::new();
        let _ = write_to_string(&mut count_line, format_args!("{:02}", countdown_s));
        self.screen.set_line(6, &centered(&count_line));
    }

    fn render_night(&mut self) {
        self.screen.clear();
        self.screen.set_line(0, "=== TRAFFIC SIGNAL ==");
        self.screen.set_highlight(0);

        self.screen.set_line(3, &centered("** NIGHT MODE **"));
        self.screen.set_line(5, &centered("CAUTION"));
    }
}

impl Default for StatusScreen {
    fn default() -> Self {
        Self::new()
    }
}

/// Pad a string with leading spaces so it sits centered in the row.
fn centered(text: &str) -> String<22> {
    let mut line: String<22> = String::new();
    let pad = DISPLAY_COLS.saturating_sub(text.len()) / 2;
    for _ in 0..pad {
        let _ = line.push(' ');
    }
    let _ = line.push_str(&text[..text.len().min(DISPLAY_COLS)]);
    line
}

/// Helper to write formatted output to a heapless String
fn write_to_string(s: &mut String<22>, args: core::fmt::Arguments<'_>) -> core::fmt::Result {
    use core::fmt::Write;
    s.write_fmt(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(phase: Phase, mode: Mode, countdown_s: u8) -> SignalSnapshot {
        SignalSnapshot {
            phase,
            mode,
            countdown_s,
            reset_epoch: 0,
        }
    }

    #[test]
    fn screen_set_and_clear() {
        let mut screen = Screen::new();
        screen.set_line(0, "HELLO");
        screen.set_highlight(0);
        assert_eq!(screen.get_line(0), "HELLO");
        screen.clear();
        assert_eq!(screen.get_line(0), "");
        assert!(screen.highlight_row().is_none());
    }

    #[test]
    fn long_lines_truncate_to_display_width() {
        let mut screen = Screen::new();
        screen.set_line(1, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
        assert_eq!(screen.get_line(1).len(), DISPLAY_COLS);
    }

    #[test]
    fn green_screen_shows_go_and_countdown() {
        let mut status = StatusScreen::new();
        status.render(&snapshot(Phase::Green, Mode::Normal, 15));
        let screen = status.screen();
        assert!(screen.get_line(0).contains("TRAFFIC SIGNAL"));
        assert!(screen.get_line(2).contains("NORMAL"));
        assert!(screen.get_line(3).contains("GREEN"));
        assert!(screen.get_line(5).contains("GO"));
        assert!(screen.get_line(6).contains("15"));
        assert_eq!(screen.highlight_row(), Some(0));
    }

    #[test]
    fn red_screen_shows_stop() {
        let mut status = StatusScreen::new();
        status.render(&snapshot(Phase::Red, Mode::Normal, 10));
        assert!(status.screen().get_line(3).contains("RED"));
        assert!(status.screen().get_line(5).contains("STOP"));
        assert!(status.screen().get_line(6).contains("10"));
    }

    #[test]
    fn countdown_is_always_two_digits() {
        let mut status = StatusScreen::new();
        status.render(&snapshot(Phase::Yellow, Mode::Normal, 5));
        assert!(status.screen().get_line(6).contains("05"));
    }

    #[test]
    fn night_screen_has_banner_and_no_countdown() {
        let mut status = StatusScreen::new();
        status.render(&snapshot(Phase::Green, Mode::Night, 9));
        let screen = status.screen();
        assert!(screen.get_line(3).contains("NIGHT"));
        assert!(screen.get_line(5).contains("CAUTION"));
        assert_eq!(screen.get_line(2), "");
        assert_eq!(screen.get_line(6), "");
    }

    #[test]
    fn message_is_centered() {
        let mut status = StatusScreen::new();
        status.render(&snapshot(Phase::Green, Mode::Normal, 15));
        let line = status.screen().get_line(5);
        assert!(line.starts_with("         GO"));
    }
}
