//! Buzzer task
//!
//! Gates the 500 Hz PWM carrier on and off to produce the per-aspect
//! cadences. Loudness is fixed at half duty; silence is zero duty rather
//! than a disabled slice, so the config write is the same either way.

use ampel_core::config::PWM_WRAP;
use ampel_core::render::buzzer::TICK_MS;
use ampel_core::render::{BuzzerPattern, Renderer};
use defmt::*;
use embassy_rp::pwm::Pwm;
use embassy_time::{Duration, Ticker};

use crate::channels::SIGNAL_STATE;
use crate::tasks::carrier_config;

/// Buzzer cadence task
#[embassy_executor::task]
pub async fn buzzer_task(mut buzzer: Pwm<'static>) {
    info!("Buzzer task started");

    let mut renderer = Renderer::new(BuzzerPattern::new());
    let mut rx = SIGNAL_STATE.receiver().unwrap();
    let mut snapshot = rx.get().await;

    let mut config = carrier_config();

    let mut ticker = Ticker::every(Duration::from_millis(TICK_MS as u64));
    loop {
        if let Some(latest) = rx.try_get() {
            snapshot = latest;
        }

        let sounding = renderer.tick(&snapshot);
        config.compare_b = if sounding { PWM_WRAP / 2 } else { 0 };
        buzzer.set_config(&config);

        ticker.next().await;
    }
}
