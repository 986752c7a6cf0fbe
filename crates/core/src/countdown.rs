//! Countdown state for a timed exam session.
//!
//! The countdown only holds state. Something external (see the services
//! crate's `SessionTicker`) calls [`Countdown::tick`] once per second and
//! routes [`Tick::Completed`] into the session's time-up transition.

/// Lifecycle of a countdown. `Completed` and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownPhase {
    Running,
    Completed,
    Cancelled,
}

/// Outcome of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Still counting; carries the remaining seconds after this tick.
    Running(u32),
    /// Remaining time just reached zero. Returned exactly once.
    Completed,
    /// The countdown already stopped; the tick was ignored.
    Idle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    total_secs: u32,
    remaining_secs: u32,
    phase: CountdownPhase,
}

impl Countdown {
    /// Start counting down from `total_secs`.
    #[must_use]
    pub fn start(total_secs: u32) -> Self {
        Self {
            total_secs,
            remaining_secs: total_secs,
            phase: CountdownPhase::Running,
        }
    }

    /// Start from a duration in whole minutes.
    #[must_use]
    pub fn from_minutes(minutes: u32) -> Self {
        Self::start(minutes.saturating_mul(60))
    }

    /// Advance by one second.
    ///
    /// A zero-length countdown completes on its first tick.
    pub fn tick(&mut self) -> Tick {
        if self.phase != CountdownPhase::Running {
            return Tick::Idle;
        }

        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.phase = CountdownPhase::Completed;
            Tick::Completed
        } else {
            Tick::Running(self.remaining_secs)
        }
    }

    /// Stop without completing. No-op once stopped.
    pub fn cancel(&mut self) {
        if self.phase == CountdownPhase::Running {
            self.phase = CountdownPhase::Cancelled;
        }
    }

    #[must_use]
    pub fn total_secs(&self) -> u32 {
        self.total_secs
    }

    #[must_use]
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    /// Seconds consumed so far, always within `[0, total]`.
    #[must_use]
    pub fn elapsed_secs(&self) -> u32 {
        self.total_secs.saturating_sub(self.remaining_secs)
    }

    #[must_use]
    pub fn phase(&self) -> CountdownPhase {
        self.phase
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase == CountdownPhase::Running
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.phase == CountdownPhase::Completed
    }

    /// Share of time left, in percent. An empty countdown reports 0.
    #[must_use]
    pub fn remaining_percent(&self) -> f64 {
        if self.total_secs == 0 {
            return 0.0;
        }
        f64::from(self.remaining_secs) / f64::from(self.total_secs) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reaches_zero_after_total_ticks_and_completes_once() {
        let mut countdown = Countdown::start(3);
        assert_eq!(countdown.tick(), Tick::Running(2));
        assert_eq!(countdown.tick(), Tick::Running(1));
        assert_eq!(countdown.tick(), Tick::Completed);
        assert_eq!(countdown.remaining_secs(), 0);
        assert!(countdown.is_completed());

        assert_eq!(countdown.tick(), Tick::Idle);
        assert_eq!(countdown.tick(), Tick::Idle);
        assert_eq!(countdown.remaining_secs(), 0);
    }

    #[test]
    fn remaining_never_increases() {
        let mut countdown = Countdown::from_minutes(1);
        let mut last = countdown.remaining_secs();
        let mut completions = 0;
        for _ in 0..100 {
            if countdown.tick() == Tick::Completed {
                completions += 1;
            }
            assert!(countdown.remaining_secs() <= last);
            assert!(countdown.remaining_secs() <= countdown.total_secs());
            last = countdown.remaining_secs();
        }
        assert_eq!(completions, 1);
        assert_eq!(countdown.elapsed_secs(), 60);
    }

    #[test]
    fn cancel_is_idempotent_and_suppresses_ticks() {
        let mut countdown = Countdown::start(10);
        countdown.tick();
        countdown.cancel();
        countdown.cancel();
        assert_eq!(countdown.phase(), CountdownPhase::Cancelled);
        assert_eq!(countdown.tick(), Tick::Idle);
        assert_eq!(countdown.remaining_secs(), 9);
        assert_eq!(countdown.elapsed_secs(), 1);
    }

    #[test]
    fn cancel_after_completion_keeps_completed() {
        let mut countdown = Countdown::start(1);
        assert_eq!(countdown.tick(), Tick::Completed);
        countdown.cancel();
        assert_eq!(countdown.phase(), CountdownPhase::Completed);
    }

    #[test]
    fn zero_length_completes_on_first_tick() {
        let mut countdown = Countdown::start(0);
        assert_eq!(countdown.remaining_percent(), 0.0);
        assert_eq!(countdown.tick(), Tick::Completed);
        assert_eq!(countdown.tick(), Tick::Idle);
    }

    #[test]
    fn percent_tracks_remaining() {
        let mut countdown = Countdown::start(4);
        assert_eq!(countdown.remaining_percent(), 100.0);
        countdown.tick();
        assert_eq!(countdown.remaining_percent(), 75.0);
    }
}
