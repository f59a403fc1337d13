//! Tick pacing
//!
//! Fixed-cadence driver polled from the frame loop, mirroring the
//! interval-elapsed pacing used by the preview shell.

use std::time::{Duration, Instant};

/// Repeating tick source with an idempotent start/stop contract
///
/// The ticker never schedules anything itself; the single-threaded frame
/// loop polls it with the current instant and it reports due ticks.
#[derive(Debug)]
pub struct Ticker {
    interval: Duration,
    running: bool,
    last_tick: Option<Instant>,
}

impl Ticker {
    /// Create a stopped ticker with the given cadence
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            running: false,
            last_tick: None,
        }
    }

    /// True while started and not yet stopped
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start ticking; the first tick falls one interval after `now`.
    ///
    /// No-op if already running.
    pub fn start(&mut self, now: Instant) {
        if !self.running {
            self.running = true;
            self.last_tick = Some(now);
        }
    }

    /// Stop ticking and discard the armed tick.
    ///
    /// No-op if not running.
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            self.last_tick = None;
        }
    }

    /// Report whether a tick is due at `now`, re-arming when it fires.
    ///
    /// Always false while stopped.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.running {
            return false;
        }

        match self.last_tick {
            Some(last) if now.duration_since(last) >= self.interval => {
                self.last_tick = Some(now);
                true
            }
            Some(_) => false,
            // Unreachable while running, but treat as a fresh arm
            None => {
                self.last_tick = Some(now);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(20);

    #[test]
    fn test_poll_fires_after_interval() {
        let start = Instant::now();
        let mut ticker = Ticker::new(INTERVAL);
        ticker.start(start);

        assert!(!ticker.poll(start));
        assert!(!ticker.poll(start + Duration::from_millis(10)));
        assert!(ticker.poll(start + INTERVAL));
        // Re-armed: the next tick needs a full interval again
        assert!(!ticker.poll(start + INTERVAL + Duration::from_millis(5)));
        assert!(ticker.poll(start + INTERVAL * 2));
    }

    #[test]
    fn test_start_is_idempotent() {
        let start = Instant::now();
        let mut ticker = Ticker::new(INTERVAL);
        ticker.start(start);
        // A second start must not re-arm the pending tick
        ticker.start(start + Duration::from_millis(15));
        assert!(ticker.poll(start + INTERVAL));
    }

    #[test]
    fn test_stop_is_idempotent_and_silences_poll() {
        let start = Instant::now();
        let mut ticker = Ticker::new(INTERVAL);

        ticker.stop();
        assert!(!ticker.is_running());

        ticker.start(start);
        assert!(ticker.is_running());
        ticker.stop();
        ticker.stop();
        assert!(!ticker.is_running());
        assert!(!ticker.poll(start + INTERVAL * 10));
    }
}
