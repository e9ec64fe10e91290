//! Stopwatch state machine and its one-second ticker.
//!
//! The component owns all of its mutable state and is advanced from the
//! frame callback; nothing here is shared across threads. The ticker is an
//! instance-owned value: arming stores `Some(Ticker)`, every transition out
//! of *Running* takes it back out, so cancellation is the drop of a field
//! rather than a callback to unregister.

use std::fmt;
use std::time::{Duration, Instant};

/// Seconds per full ring revolution when no override is given.
pub const DEFAULT_LOOP_DURATION: u32 = 60;

// ── errors ────────────────────────────────────────────────────────────────

/// Invalid stopwatch configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stopwatch config error: {}", self.0)
    }
}

impl std::error::Error for ConfigError {}

// ── phase ─────────────────────────────────────────────────────────────────

/// The stopwatch's two states.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
    Stopped,
    Running,
}

// ── ticker ────────────────────────────────────────────────────────────────

/// Recurring fixed-period deadline, polled from the frame loop.
///
/// `poll` returns how many whole periods elapsed since the last call and
/// moves the deadline forward by that many periods, so a stalled frame loop
/// catches up without drifting the period boundary.
#[derive(Debug)]
struct Ticker {
    period: Duration,
    next_due: Instant,
}

impl Ticker {
    fn new(now: Instant, period: Duration) -> Self {
        Self { period, next_due: now + period }
    }

    fn poll(&mut self, now: Instant) -> u32 {
        let mut ticks = 0;
        while now >= self.next_due {
            self.next_due += self.period;
            ticks += 1;
        }
        ticks
    }
}

// ── stopwatch ─────────────────────────────────────────────────────────────

/// Elapsed-seconds counter with start/stop/reset and a derived ring
/// progress value.
///
/// Invariants:
/// - the ticker is armed exactly while the phase is [`Phase::Running`]
/// - progress is always recomputed from `elapsed_secs` and `loop_duration`,
///   never stored
#[derive(Debug)]
pub struct Stopwatch {
    elapsed_secs: u64,
    loop_duration: u32,
    ticker: Option<Ticker>,
}

impl Stopwatch {
    /// Creates a stopped stopwatch.
    ///
    /// `loop_duration` is the number of seconds for one full ring
    /// revolution; zero is rejected (progress would be undefined).
    pub fn new(loop_duration: u32) -> Result<Self, ConfigError> {
        if loop_duration == 0 {
            return Err(ConfigError("loop duration must be positive".to_string()));
        }
        Ok(Self {
            elapsed_secs: 0,
            loop_duration,
            ticker: None,
        })
    }

    pub fn phase(&self) -> Phase {
        if self.ticker.is_some() { Phase::Running } else { Phase::Stopped }
    }

    pub fn is_running(&self) -> bool {
        self.phase() == Phase::Running
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    /// Fraction of the current ring revolution, in [0, 1).
    pub fn progress(&self) -> f32 {
        let rem = self.elapsed_secs % u64::from(self.loop_duration);
        rem as f32 / self.loop_duration as f32
    }

    /// Arms the ticker. No-op while already running, so pressing Start twice
    /// cannot create a second ticker or reset the period boundary.
    pub fn start(&mut self, now: Instant) {
        if self.ticker.is_none() {
            self.ticker = Some(Ticker::new(now, Duration::from_secs(1)));
        }
    }

    /// Disarms the ticker, freezing the elapsed time at its current value.
    pub fn stop(&mut self) {
        self.ticker = None;
    }

    /// Start/Stop action: flips between the two phases.
    pub fn toggle(&mut self, now: Instant) {
        match self.phase() {
            Phase::Stopped => self.start(now),
            Phase::Running => self.stop(),
        }
    }

    /// Returns to the initial state: elapsed 0, stopped, ticker disarmed.
    pub fn reset(&mut self) {
        self.elapsed_secs = 0;
        self.ticker = None;
    }

    /// Applies every tick that became due by `now`. Returns the number of
    /// seconds added; always 0 while stopped.
    pub fn advance(&mut self, now: Instant) -> u32 {
        let Some(ticker) = self.ticker.as_mut() else {
            return 0;
        };
        let ticks = ticker.poll(now);
        self.elapsed_secs += u64::from(ticks);
        ticks
    }
}

// ── formatting ────────────────────────────────────────────────────────────

/// Formats a second count as zero-padded `mm:ss`.
///
/// Minutes are not wrapped at the hour: 3661 seconds is `"61:01"`.
pub fn format_time(total_seconds: u64) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    fn running_watch(now: Instant) -> Stopwatch {
        let mut sw = Stopwatch::new(DEFAULT_LOOP_DURATION).unwrap();
        sw.start(now);
        sw
    }

    // ── format_time ───────────────────────────────────────────────────────

    #[test]
    fn format_time_zero() {
        assert_eq!(format_time(0), "00:00");
    }

    #[test]
    fn format_time_pads_seconds() {
        assert_eq!(format_time(59), "00:59");
        assert_eq!(format_time(60), "01:00");
        assert_eq!(format_time(61), "01:01");
    }

    #[test]
    fn format_time_does_not_wrap_minutes_at_hour() {
        assert_eq!(format_time(3661), "61:01");
    }

    // ── configuration ─────────────────────────────────────────────────────

    #[test]
    fn zero_loop_duration_is_rejected() {
        assert!(Stopwatch::new(0).is_err());
    }

    #[test]
    fn starts_stopped_at_zero() {
        let sw = Stopwatch::new(60).unwrap();
        assert_eq!(sw.phase(), Phase::Stopped);
        assert_eq!(sw.elapsed_secs(), 0);
        assert_eq!(sw.progress(), 0.0);
    }

    // ── progress derivation ───────────────────────────────────────────────

    #[test]
    fn progress_is_elapsed_mod_loop_over_loop() {
        let now = Instant::now();
        let mut sw = Stopwatch::new(60).unwrap();
        sw.start(now);

        sw.advance(now + secs(45));
        assert_eq!(sw.elapsed_secs(), 45);
        assert!((sw.progress() - 0.75).abs() < 1e-6);
    }

    #[test]
    fn progress_wraps_and_stays_below_one() {
        let now = Instant::now();
        for elapsed in [0u64, 1, 59, 60, 61, 119, 120, 3599, 3661] {
            let mut sw = Stopwatch::new(60).unwrap();
            sw.start(now);
            sw.advance(now + secs(elapsed));

            let p = sw.progress();
            assert!((0.0..1.0).contains(&p), "progress {p} out of range for {elapsed}s");
            let expected = (elapsed % 60) as f32 / 60.0;
            assert!((p - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn progress_tracks_post_increment_elapsed() {
        // The arc and the readout must agree: after the tick that takes the
        // counter to 30/60, the arc shows half a revolution.
        let now = Instant::now();
        let mut sw = running_watch(now);
        sw.advance(now + secs(30));
        assert_eq!(sw.elapsed_secs(), 30);
        assert!((sw.progress() - 0.5).abs() < 1e-6);
    }

    // ── tick accounting ───────────────────────────────────────────────────

    #[test]
    fn n_ticks_accumulate_n_seconds() {
        let now = Instant::now();
        let mut sw = running_watch(now);

        // One poll per second, as the frame loop would deliver.
        for i in 1..=5u64 {
            assert_eq!(sw.advance(now + secs(i)), 1);
        }
        assert_eq!(sw.elapsed_secs(), 5);
    }

    #[test]
    fn stalled_polls_catch_up_in_whole_periods() {
        let now = Instant::now();
        let mut sw = running_watch(now);

        // 3.5s since arming: three whole periods are due, the half period
        // stays pending.
        assert_eq!(sw.advance(now + Duration::from_millis(3500)), 3);
        assert_eq!(sw.elapsed_secs(), 3);
        assert_eq!(sw.advance(now + secs(4)), 1);
    }

    #[test]
    fn sub_period_poll_yields_no_tick() {
        let now = Instant::now();
        let mut sw = running_watch(now);
        assert_eq!(sw.advance(now + Duration::from_millis(999)), 0);
        assert_eq!(sw.elapsed_secs(), 0);
    }

    // ── stop / start ──────────────────────────────────────────────────────

    #[test]
    fn stop_freezes_elapsed_and_progress() {
        let now = Instant::now();
        let mut sw = running_watch(now);
        sw.advance(now + secs(10));

        sw.stop();
        assert_eq!(sw.phase(), Phase::Stopped);

        // Time keeps passing; nothing accrues.
        assert_eq!(sw.advance(now + secs(100)), 0);
        assert_eq!(sw.elapsed_secs(), 10);
        assert!((sw.progress() - 10.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn restart_counts_from_a_fresh_period_boundary() {
        let now = Instant::now();
        let mut sw = running_watch(now);
        sw.advance(now + secs(10));
        sw.stop();

        // Re-arm 100s later: the 100 stopped seconds must not be due.
        let later = now + secs(100);
        sw.start(later);
        assert_eq!(sw.advance(later + Duration::from_millis(500)), 0);
        assert_eq!(sw.advance(later + secs(1)), 1);
        assert_eq!(sw.elapsed_secs(), 11);
    }

    #[test]
    fn double_start_does_not_double_tick_rate() {
        let now = Instant::now();
        let mut sw = running_watch(now);

        // Second Start press mid-period: must not re-arm or add a ticker.
        sw.start(now + Duration::from_millis(700));

        assert_eq!(sw.advance(now + secs(1)), 1);
        assert_eq!(sw.advance(now + secs(2)), 1);
        assert_eq!(sw.elapsed_secs(), 2);
    }

    #[test]
    fn toggle_alternates_phases() {
        let now = Instant::now();
        let mut sw = Stopwatch::new(60).unwrap();

        sw.toggle(now);
        assert_eq!(sw.phase(), Phase::Running);
        sw.toggle(now);
        assert_eq!(sw.phase(), Phase::Stopped);
    }

    // ── reset ─────────────────────────────────────────────────────────────

    #[test]
    fn reset_from_running_clears_everything() {
        let now = Instant::now();
        let mut sw = running_watch(now);
        sw.advance(now + secs(42));

        sw.reset();
        assert_eq!(sw.phase(), Phase::Stopped);
        assert_eq!(sw.elapsed_secs(), 0);
        assert_eq!(sw.progress(), 0.0);

        // The old ticker is gone: advancing far into the future does nothing.
        assert_eq!(sw.advance(now + secs(1000)), 0);
    }

    #[test]
    fn reset_from_stopped_is_harmless() {
        let now = Instant::now();
        let mut sw = running_watch(now);
        sw.advance(now + secs(3));
        sw.stop();

        sw.reset();
        assert_eq!(sw.phase(), Phase::Stopped);
        assert_eq!(sw.elapsed_secs(), 0);
    }
}
