//! Mode button task
//!
//! Polls button A, debounces it, and forwards each accepted press to the
//! scheduler as a toggle command. Releases are debounced but produce no
//! command.

use ampel_core::config::{BUTTON_POLL_MS, DEBOUNCE_WINDOW_MS};
use ampel_core::debounce::{Debouncer, Edge};
use ampel_core::signal::ModeCommand;
use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::{Duration, Instant, Ticker};

use crate::channels::MODE_COMMANDS;

/// Button polling and debounce task
#[embassy_executor::task]
pub async fn button_task(button: Input<'static>) {
    info!("Button task started");

    let mut debouncer = Debouncer::new(DEBOUNCE_WINDOW_MS);
    let mut ticker = Ticker::every(Duration::from_millis(BUTTON_POLL_MS));
    let started = Instant::now();

    loop {
        ticker.next().await;

        // Active low: pressed pulls the pin to ground.
        let pressed = button.is_low();
        let now_ms = started.elapsed().as_millis();

        match debouncer.sample(pressed, now_ms) {
            Some(Edge::Pressed) => {
                debug!("button press accepted");
                MODE_COMMANDS.send(ModeCommand::Toggle).await;
            }
            Some(Edge::Released) | None => {}
        }
    }
}
