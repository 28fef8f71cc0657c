//! LED matrix task
//!
//! Renders the 5x5 WS2812 matrix through the PIO-driven strip. The
//! pattern works on the logical grid (row 0 at the top); the physical
//! strip is serpentine and starts at the bottom, so every frame goes
//! through the reorder before the DMA write.

use ampel_core::frames::{to_strip_order, PIXEL_COUNT};
use ampel_core::render::matrix::TICK_MS;
use ampel_core::render::{MatrixPattern, Renderer};
use defmt::*;
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio_programs::ws2812::{Grb, PioWs2812};
use embassy_time::{Duration, Ticker};
use smart_leds::RGB8;

use crate::channels::SIGNAL_STATE;

/// LED matrix animation task
#[embassy_executor::task]
pub async fn matrix_task(mut strip: PioWs2812<'static, PIO0, 0, PIXEL_COUNT, Grb>) {
    info!("Matrix task started");

    let mut renderer = Renderer::new(MatrixPattern::new());
    let mut rx = SIGNAL_STATE.receiver().unwrap();
    let mut snapshot = rx.get().await;

    let mut ticker = Ticker::every(Duration::from_millis(TICK_MS as u64));
    loop {
        if let Some(latest) = rx.try_get() {
            snapshot = latest;
        }

        let frame = renderer.tick(&snapshot);
        let strip_frame = to_strip_order(&frame);

        let mut pixels = [RGB8::default(); PIXEL_COUNT];
        for (pixel, px) in pixels.iter_mut().zip(strip_frame.iter()) {
            *pixel = RGB8::new(px.r, px.g, px.b);
        }
        strip.write(&pixels).await;

        ticker.next().await;
    }
}
