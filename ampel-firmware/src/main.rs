//! Ampel - Traffic-Signal Controller Firmware
//!
//! Main firmware binary for the BitDogLab (RP2040) traffic-light trainer.
//!
//! One scheduler task owns the published signal state; four renderer
//! tasks fan it out to the RGB indicator LED, the buzzer, the 5x5 WS2812
//! matrix and the SSD1306 status display, each at its own cadence. A
//! fifth task debounces the mode button.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::{I2C1, PIO0};
use embassy_rp::pio::Pio;
use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
use embassy_rp::pwm::Pwm;
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use crate::tasks::carrier_config;

mod channels;
mod font;
mod ssd1306;
mod tasks;

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => embassy_rp::pio::InterruptHandler<PIO0>;
    I2C1_IRQ => embassy_rp::i2c::InterruptHandler<I2C1>;
});

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Ampel firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Pin assignments are board-specific (BitDogLab):
    //   button A:     GPIO5, active low
    //   RGB LED:      green GPIO11 (5B), blue GPIO12 (6A), red GPIO13 (6B)
    //   buzzer A:     GPIO21 (2B)
    //   WS2812 5x5:   GPIO7 (PIO0)
    //   OLED I2C1:    SDA GPIO14, SCL GPIO15, address 0x3C

    let button = Input::new(p.PIN_5, Pull::Up);

    let carrier = carrier_config();
    let indicator = tasks::IndicatorPwm {
        red_blue: Pwm::new_output_ab(p.PWM_SLICE6, p.PIN_12, p.PIN_13, carrier.clone()),
        green: Pwm::new_output_b(p.PWM_SLICE5, p.PIN_11, carrier.clone()),
    };
    let buzzer = Pwm::new_output_b(p.PWM_SLICE2, p.PIN_21, carrier);

    info!("PWM outputs initialized");

    // Setup PIO0 for the WS2812 matrix
    let Pio { mut common, sm0, .. } = Pio::new(p.PIO0, Irqs);
    let ws2812_program = PioWs2812Program::new(&mut common);
    let matrix = PioWs2812::new(&mut common, sm0, p.DMA_CH0, p.PIN_7, &ws2812_program);

    info!("PIO WS2812 initialized");

    // Setup I2C1 for the OLED (SCL before SDA in the constructor)
    let oled_i2c = I2c::new_async(p.I2C1, p.PIN_15, p.PIN_14, Irqs, i2c::Config::default());

    info!("I2C initialized for status display");

    // Spawn tasks
    spawner.spawn(tasks::signal_task()).unwrap();
    spawner.spawn(tasks::button_task(button)).unwrap();
    spawner.spawn(tasks::indicator_task(indicator)).unwrap();
    spawner.spawn(tasks::buzzer_task(buzzer)).unwrap();
    spawner.spawn(tasks::matrix_task(matrix)).unwrap();
    spawner.spawn(tasks::display_task(oled_i2c)).unwrap();

    info!("All tasks spawned, controller running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
