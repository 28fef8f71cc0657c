//! Status display task
//!
//! Rebuilds the status screen from the latest snapshot once per second
//! and blits it to the SSD1306. The display is the one renderer that
//! reads more than the aspect: it shows the mode and the countdown, so
//! it renders from the snapshot directly instead of going through a
//! pattern state machine.

use ampel_core::render::screen::{StatusScreen, DISPLAY_COLS, DISPLAY_ROWS};
use defmt::*;
use embassy_rp::i2c::{Async, I2c};
use embassy_rp::peripherals::I2C1;
use embassy_time::{Duration, Ticker};

use crate::channels::SIGNAL_STATE;
use crate::ssd1306::Ssd1306;

/// Display refresh interval. The countdown moves once per second, so
/// refreshing faster only repeats identical frames.
const TICK_MS: u64 = 1_000;

/// Status display task
#[embassy_executor::task]
pub async fn display_task(i2c: I2c<'static, I2C1, Async>) {
    info!("Display task started");

    let mut display = Ssd1306::new(i2c);
    if let Err(e) = display.init().await {
        // A missing or broken OLED blanks the status screen and nothing
        // else; the signal itself keeps running.
        error!("display init failed: {}", e);
        return;
    }

    let mut status = StatusScreen::new();
    let mut rx = SIGNAL_STATE.receiver().unwrap();
    let mut snapshot = rx.get().await;

    let mut ticker = Ticker::every(Duration::from_millis(TICK_MS));
    loop {
        if let Some(latest) = rx.try_get() {
            snapshot = latest;
        }

        status.render(&snapshot);

        let screen = status.screen();
        display.clear();
        for row in 0..DISPLAY_ROWS as u8 {
            display.draw_text(row, 0, screen.get_line(row));
        }
        if let Some(row) = screen.highlight_row() {
            display.invert_region(row, 0, DISPLAY_COLS as u8);
        }

        if let Err(e) = display.flush().await {
            warn!("display flush failed: {}", e);
        }

        ticker.next().await;
    }
}
