//! The per-turn countdown.
//!
//! `TurnTimer` is a logical-clock countdown: the driver feeds elapsed
//! milliseconds through the machine, never wall-clock time. The state
//! machine suspends it while a power-effect window is displaying and
//! resumes it afterwards; suspension is a first-class operation, not a
//! rendering side effect.
//!
//! Expiry is reported exactly once. After `TimerTick::Expired` the timer
//! stays in `Expired` and further ticks are no-ops until the next turn
//! starts it again.

use serde::{Deserialize, Serialize};

/// Outcome of advancing the timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum TimerTick {
    /// Time passed, or the timer was idle/suspended/already expired.
    Ticking,
    /// The countdown hit zero on this tick.
    Expired,
}

/// A suspendable countdown for one sub-turn.
///
/// ## Example
///
/// ```
/// use quiz_clash::combat::{TimerTick, TurnTimer};
///
/// let mut timer = TurnTimer::Idle;
/// timer.start(5_000);
///
/// assert_eq!(timer.tick(3_000), TimerTick::Ticking);
///
/// timer.suspend();
/// assert_eq!(timer.tick(60_000), TimerTick::Ticking); // frozen
/// timer.resume();
///
/// assert_eq!(timer.remaining_ms(), 2_000);
/// assert_eq!(timer.tick(2_000), TimerTick::Expired);
/// assert_eq!(timer.tick(1_000), TimerTick::Ticking); // never double-fires
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnTimer {
    /// No turn in progress.
    #[default]
    Idle,
    /// Counting down.
    Running { remaining_ms: u32 },
    /// Frozen during a power-effect window; remaining time is preserved.
    Suspended { remaining_ms: u32 },
    /// Countdown finished and the expiry was reported.
    Expired,
}

impl TurnTimer {
    /// Arm the countdown for a new turn.
    pub fn start(&mut self, duration_ms: u32) {
        *self = TurnTimer::Running {
            remaining_ms: duration_ms,
        };
    }

    /// Return to `Idle`, discarding any countdown.
    pub fn clear(&mut self) {
        *self = TurnTimer::Idle;
    }

    /// Advance the countdown. No-op while idle, suspended, or expired.
    pub fn tick(&mut self, delta_ms: u32) -> TimerTick {
        if delta_ms == 0 {
            return TimerTick::Ticking;
        }

        match self {
            TurnTimer::Running { remaining_ms } => {
                if delta_ms >= *remaining_ms {
                    *self = TurnTimer::Expired;
                    TimerTick::Expired
                } else {
                    *remaining_ms -= delta_ms;
                    TimerTick::Ticking
                }
            }
            _ => TimerTick::Ticking,
        }
    }

    /// Freeze the countdown. Only a running timer suspends.
    pub fn suspend(&mut self) {
        if let TurnTimer::Running { remaining_ms } = *self {
            *self = TurnTimer::Suspended { remaining_ms };
        }
    }

    /// Resume a suspended countdown with its preserved remaining time.
    pub fn resume(&mut self) {
        if let TurnTimer::Suspended { remaining_ms } = *self {
            *self = TurnTimer::Running { remaining_ms };
        }
    }

    /// Remaining time, zero when idle or expired.
    #[must_use]
    pub fn remaining_ms(&self) -> u32 {
        match self {
            TurnTimer::Running { remaining_ms } | TurnTimer::Suspended { remaining_ms } => {
                *remaining_ms
            }
            TurnTimer::Idle | TurnTimer::Expired => 0,
        }
    }

    /// Remaining whole seconds, rounded up for display.
    #[must_use]
    pub fn seconds_left(&self) -> u32 {
        self.remaining_ms().div_ceil(1000)
    }

    /// Whether the countdown is actively running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self, TurnTimer::Running { .. })
    }

    /// Whether the countdown is frozen.
    #[must_use]
    pub fn is_suspended(&self) -> bool {
        matches!(self, TurnTimer::Suspended { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_down_and_expires_once() {
        let mut timer = TurnTimer::Idle;
        timer.start(10_000);

        assert_eq!(timer.tick(4_000), TimerTick::Ticking);
        assert_eq!(timer.remaining_ms(), 6_000);
        assert_eq!(timer.tick(6_000), TimerTick::Expired);

        // Re-entrant ticks after expiry are ignored.
        assert_eq!(timer.tick(1), TimerTick::Ticking);
        assert_eq!(timer.tick(100_000), TimerTick::Ticking);
        assert_eq!(timer.remaining_ms(), 0);
    }

    #[test]
    fn test_overshoot_expires() {
        let mut timer = TurnTimer::Idle;
        timer.start(1_000);
        assert_eq!(timer.tick(50_000), TimerTick::Expired);
    }

    #[test]
    fn test_idle_ignores_ticks() {
        let mut timer = TurnTimer::Idle;
        assert_eq!(timer.tick(5_000), TimerTick::Ticking);
        assert_eq!(timer, TurnTimer::Idle);
    }

    #[test]
    fn test_suspend_preserves_remaining() {
        let mut timer = TurnTimer::Idle;
        timer.start(8_000);
        let _ = timer.tick(3_000);

        timer.suspend();
        assert!(timer.is_suspended());
        assert_eq!(timer.remaining_ms(), 5_000);

        // Frozen: any amount of time may pass.
        assert_eq!(timer.tick(1_000_000), TimerTick::Ticking);
        assert_eq!(timer.remaining_ms(), 5_000);

        timer.resume();
        assert!(timer.is_running());
        assert_eq!(timer.remaining_ms(), 5_000);
        assert_eq!(timer.tick(5_000), TimerTick::Expired);
    }

    #[test]
    fn test_suspend_only_affects_running() {
        let mut timer = TurnTimer::Idle;
        timer.suspend();
        assert_eq!(timer, TurnTimer::Idle);

        timer.start(1_000);
        let _ = timer.tick(1_000);
        timer.suspend();
        assert_eq!(timer, TurnTimer::Expired);

        // Resume without a suspension is a no-op too.
        timer.resume();
        assert_eq!(timer, TurnTimer::Expired);
    }

    #[test]
    fn test_restart_after_expiry() {
        let mut timer = TurnTimer::Idle;
        timer.start(500);
        assert_eq!(timer.tick(500), TimerTick::Expired);

        timer.start(2_000);
        assert!(timer.is_running());
        assert_eq!(timer.remaining_ms(), 2_000);
        assert_eq!(timer.tick(2_000), TimerTick::Expired);
    }

    #[test]
    fn test_zero_delta_is_noop() {
        let mut timer = TurnTimer::Idle;
        timer.start(1_000);
        assert_eq!(timer.tick(0), TimerTick::Ticking);
        assert_eq!(timer.remaining_ms(), 1_000);
    }

    #[test]
    fn test_seconds_left_rounds_up() {
        let mut timer = TurnTimer::Idle;
        timer.start(20_000);
        assert_eq!(timer.seconds_left(), 20);

        let _ = timer.tick(1);
        assert_eq!(timer.seconds_left(), 20);

        let _ = timer.tick(18_999);
        assert_eq!(timer.remaining_ms(), 1_000);
        assert_eq!(timer.seconds_left(), 1);

        let _ = timer.tick(999);
        assert_eq!(timer.seconds_left(), 1);
    }

    #[test]
    fn test_clear() {
        let mut timer = TurnTimer::Idle;
        timer.start(5_000);
        timer.clear();
        assert_eq!(timer, TurnTimer::Idle);
        assert_eq!(timer.tick(10_000), TimerTick::Ticking);
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut timer = TurnTimer::Idle;
        timer.start(7_000);
        let _ = timer.tick(2_500);

        let json = serde_json::to_string(&timer).unwrap();
        let restored: TurnTimer = serde_json::from_str(&json).unwrap();
        assert_eq!(timer, restored);
    }
}
