//! Embassy async tasks
//!
//! One scheduler task owns the published signal state; four renderer tasks
//! and the button task communicate with it via the statics in
//! [`crate::channels`].

use ampel_core::config::{PWM_CLKDIV, PWM_WRAP};
use embassy_rp::pwm::Config as PwmConfig;

pub mod button;
pub mod buzzer;
pub mod display;
pub mod indicator;
pub mod matrix;
pub mod signal;

pub use button::button_task;
pub use buzzer::buzzer_task;
pub use display::display_task;
pub use indicator::{indicator_task, IndicatorPwm};
pub use matrix::matrix_task;
pub use signal::signal_task;

/// PWM carrier shared by the RGB LED and the buzzer.
///
/// 125 MHz / 125 / 2000 = 500 Hz, audible on the piezo and flicker-free
/// on the LED.
pub fn carrier_config() -> PwmConfig {
    let mut config = PwmConfig::default();
    config.top = PWM_WRAP;
    config.divider = PWM_CLKDIV.into();
    config
}
