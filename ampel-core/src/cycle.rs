//! Phase cycle state
//!
//! [`SignalCycle`] is the pure state behind the scheduler task: the task
//! owns the timer deadlines, this type owns everything else. It is the
//! single writer of the published [`SignalSnapshot`]; the button task only
//! sends it toggle commands.

use crate::config::PhaseDurations;
use crate::signal::{Mode, Phase, SignalSnapshot};

#[derive(Debug, Clone)]
pub struct SignalCycle {
    durations: PhaseDurations,
    phase: Phase,
    mode: Mode,
    countdown_s: u8,
    reset_epoch: u8,
}

impl SignalCycle {
    pub fn new(durations: PhaseDurations) -> Self {
        Self {
            durations,
            phase: Phase::Green,
            mode: Mode::Normal,
            countdown_s: durations.dwell_secs(Phase::Green),
            reset_epoch: 0,
        }
    }

    /// Dwell time of the phase currently counting, in milliseconds.
    ///
    /// Follows the internal phase even in Night mode: the cycle keeps
    /// running underneath the pinned Green so its period stays
    /// deterministic across mode changes.
    pub fn dwell_ms(&self) -> u32 {
        self.durations.dwell_ms(self.phase)
    }

    /// The value to publish. Phase pins to Green while mode is Night.
    pub fn snapshot(&self) -> SignalSnapshot {
        let phase = match self.mode {
            Mode::Night => Phase::Green,
            Mode::Normal => self.phase,
        };
        SignalSnapshot {
            phase,
            mode: self.mode,
            countdown_s: self.countdown_s,
            reset_epoch: self.reset_epoch,
        }
    }

    /// Advance to the next phase and reload its countdown. Called by the
    /// scheduler task when the dwell timer expires.
    pub fn advance_phase(&mut self) -> Phase {
        self.phase = self.phase.next();
        self.countdown_s = self.durations.dwell_secs(self.phase);
        self.phase
    }

    /// One-second sub-tick: count the current phase down. Saturates rather
    /// than trusting the dwell timer to be exactly second-aligned.
    pub fn second_tick(&mut self) {
        self.countdown_s = self.countdown_s.saturating_sub(1);
    }

    /// Apply a mode toggle and return the new mode.
    ///
    /// Re-entering Normal forces the phase back to Green, reloads its
    /// countdown and bumps the reset epoch so every renderer restarts its
    /// animation sub-state. The dwell timer is deliberately left alone by
    /// the caller, so the forced Green first dwells for whatever remained
    /// of the pre-toggle phase.
    pub fn toggle_mode(&mut self) -> Mode {
        self.mode = self.mode.toggled();
        if self.mode == Mode::Normal {
            self.phase = Phase::Green;
            self.countdown_s = self.durations.dwell_secs(Phase::Green);
            self.reset_epoch = self.reset_epoch.wrapping_add(1);
        }
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_cycle() -> SignalCycle {
        SignalCycle::new(PhaseDurations::STANDARD)
    }

    #[test]
    fn phases_advance_in_cyclic_order() {
        let mut cycle = make_cycle();
        assert_eq!(cycle.snapshot().phase, Phase::Green);
        assert_eq!(cycle.advance_phase(), Phase::Yellow);
        assert_eq!(cycle.advance_phase(), Phase::Red);
        assert_eq!(cycle.advance_phase(), Phase::Green);
        assert_eq!(cycle.advance_phase(), Phase::Yellow);
    }

    #[test]
    fn advance_reloads_countdown_for_the_new_phase() {
        let mut cycle = make_cycle();
        cycle.advance_phase();
        assert_eq!(cycle.snapshot().countdown_s, 5);
        cycle.advance_phase();
        assert_eq!(cycle.snapshot().countdown_s, 10);
        cycle.advance_phase();
        assert_eq!(cycle.snapshot().countdown_s, 15);
    }

    #[test]
    fn dwell_follows_current_phase() {
        let mut cycle = make_cycle();
        assert_eq!(cycle.dwell_ms(), 15_000);
        cycle.advance_phase();
        assert_eq!(cycle.dwell_ms(), 5_000);
        cycle.advance_phase();
        assert_eq!(cycle.dwell_ms(), 10_000);
    }

    #[test]
    fn green_dwell_ends_in_yellow_with_reloaded_countdown() {
        let mut cycle = make_cycle();
        // One sub-tick per elapsed second; the dwell expiry at 15 s wins
        // over the final sub-tick, so 14 decrements land.
        for _ in 0..14 {
            cycle.second_tick();
        }
        assert_eq!(cycle.snapshot().countdown_s, 1);
        cycle.advance_phase();
        let snap = cycle.snapshot();
        assert_eq!(snap.phase, Phase::Yellow);
        assert_eq!(snap.countdown_s, 5);
    }

    #[test]
    fn countdown_saturates_at_zero() {
        let mut cycle = make_cycle();
        for _ in 0..40 {
            cycle.second_tick();
        }
        assert_eq!(cycle.snapshot().countdown_s, 0);
    }

    #[test]
    fn night_pins_published_phase_to_green() {
        let mut cycle = make_cycle();
        cycle.advance_phase();
        assert_eq!(cycle.toggle_mode(), Mode::Night);
        let snap = cycle.snapshot();
        assert_eq!(snap.mode, Mode::Night);
        assert_eq!(snap.phase, Phase::Green);
    }

    #[test]
    fn night_keeps_internal_cycle_running() {
        let mut cycle = make_cycle();
        cycle.toggle_mode();
        assert_eq!(cycle.advance_phase(), Phase::Yellow);
        assert_eq!(cycle.advance_phase(), Phase::Red);
        // Published phase stays pinned while the cycle runs underneath.
        assert_eq!(cycle.snapshot().phase, Phase::Green);
        assert_eq!(cycle.dwell_ms(), 10_000);
    }

    #[test]
    fn reentering_normal_forces_green_and_bumps_epoch() {
        let mut cycle = make_cycle();
        cycle.toggle_mode();
        cycle.advance_phase();
        cycle.second_tick();
        assert_eq!(cycle.toggle_mode(), Mode::Normal);
        let snap = cycle.snapshot();
        assert_eq!(snap.phase, Phase::Green);
        assert_eq!(snap.countdown_s, 15);
        assert_eq!(snap.reset_epoch, 1);
    }

    #[test]
    fn entering_night_does_not_bump_epoch() {
        let mut cycle = make_cycle();
        assert_eq!(cycle.toggle_mode(), Mode::Night);
        assert_eq!(cycle.snapshot().reset_epoch, 0);
    }

    #[test]
    fn even_number_of_toggles_restores_normal_mode() {
        let mut cycle = make_cycle();
        for _ in 0..4 {
            cycle.toggle_mode();
        }
        assert_eq!(cycle.snapshot().mode, Mode::Normal);
        assert_eq!(cycle.snapshot().reset_epoch, 2);
    }
}
