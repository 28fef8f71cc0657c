//! Signal scheduler task
//!
//! The single writer of the published signal state. Owns the dwell timer
//! that advances the phase, the once-per-second countdown tick, and the
//! handling of mode toggles from the button.

use ampel_core::config::PhaseDurations;
use ampel_core::cycle::SignalCycle;
use ampel_core::signal::{Mode, ModeCommand};
use defmt::*;
use embassy_futures::select::{select3, Either3};
use embassy_time::{Duration, Instant, Timer};

use crate::channels::{MODE_COMMANDS, SIGNAL_STATE};

/// Signal scheduler task
///
/// Runs a three-way select over the dwell deadline, the countdown tick
/// and the command channel. When the dwell deadline and a countdown tick
/// coincide the dwell wins, so the countdown never publishes a zero: the
/// phase change replaces it.
#[embassy_executor::task]
pub async fn signal_task() {
    info!("Signal scheduler task started");

    let state = SIGNAL_STATE.sender();
    let mut cycle = SignalCycle::new(PhaseDurations::STANDARD);
    state.send(cycle.snapshot());

    let start = Instant::now();
    let mut dwell_deadline = start + Duration::from_millis(cycle.dwell_ms() as u64);
    let mut second_tick = start + Duration::from_secs(1);

    loop {
        match select3(
            Timer::at(dwell_deadline),
            Timer::at(second_tick),
            MODE_COMMANDS.receive(),
        )
        .await
        {
            Either3::First(()) => {
                let entered = dwell_deadline;
                let phase = cycle.advance_phase();
                info!("phase -> {} ({} ms)", phase, cycle.dwell_ms());
                state.send(cycle.snapshot());
                // Countdown seconds count from phase entry, so both timers
                // restart relative to the same instant.
                dwell_deadline = entered + Duration::from_millis(cycle.dwell_ms() as u64);
                second_tick = entered + Duration::from_secs(1);
            }
            Either3::Second(()) => {
                cycle.second_tick();
                state.send(cycle.snapshot());
                second_tick += Duration::from_secs(1);
            }
            Either3::Third(ModeCommand::Toggle) => {
                let mode = cycle.toggle_mode();
                info!("mode -> {}", mode);
                if mode == Mode::Normal {
                    // The dwell timer keeps running across the toggle; the
                    // forced Green serves out whatever remains of it.
                    warn!("normal mode re-entered mid-dwell, phase forced to Green");
                }
                state.send(cycle.snapshot());
            }
        }
    }
}
