//! RGB indicator LED task
//!
//! Drives the discrete RGB LED through two PWM slices. Green shares a
//! slice with nothing we use, but red and blue land on the same slice
//! (GPIO13 is 6B, GPIO12 is 6A), so the task owns one two-channel slice
//! plus one single-channel slice.

use ampel_core::render::indicator::TICK_MS;
use ampel_core::render::{IndicatorPattern, Renderer};
use defmt::*;
use embassy_rp::pwm::Pwm;
use embassy_time::{Duration, Ticker};

use crate::channels::SIGNAL_STATE;
use crate::tasks::carrier_config;

/// The two PWM slices behind the indicator LED.
pub struct IndicatorPwm {
    /// Slice 6: channel A is blue (GPIO12), channel B is red (GPIO13).
    pub red_blue: Pwm<'static>,
    /// Slice 5: channel B is green (GPIO11).
    pub green: Pwm<'static>,
}

/// Indicator LED task
#[embassy_executor::task]
pub async fn indicator_task(mut pwm: IndicatorPwm) {
    info!("Indicator task started");

    let mut renderer = Renderer::new(IndicatorPattern::new());
    let mut rx = SIGNAL_STATE.receiver().unwrap();
    let mut snapshot = rx.get().await;

    let mut rb_config = carrier_config();
    let mut green_config = carrier_config();

    let mut ticker = Ticker::every(Duration::from_millis(TICK_MS as u64));
    loop {
        if let Some(latest) = rx.try_get() {
            snapshot = latest;
        }

        let levels = renderer.tick(&snapshot);
        rb_config.compare_a = levels.blue;
        rb_config.compare_b = levels.red;
        green_config.compare_b = levels.green;
        pwm.red_blue.set_config(&rb_config);
        pwm.green.set_config(&green_config);

        ticker.next().await;
    }
}
