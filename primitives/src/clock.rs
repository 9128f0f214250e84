use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use chrono::Utc;

/// Source of time for block timestamps and benchmark measurements.
pub trait Clock: Send + Sync + fmt::Debug {
    /// Wall-clock time as milliseconds since the Unix epoch.
    fn now_millis(&self) -> u64;

    /// A monotonic reading. Only differences between two readings are meaningful.
    fn monotonic(&self) -> Duration;
}

/// The real clock.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Creates a new `[SystemClock]`; monotonic readings are relative to this call.
    #[must_use]
    pub fn new() -> Self {
        SystemClock {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        // Pre-epoch system time is clamped.
        u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
    }

    fn monotonic(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// A deterministic clock for tests.
///
/// Time only moves when `[ManualClock::advance]` is called, or by `tick` on every read
/// when one is configured with `[ManualClock::with_tick]`.
#[derive(Debug)]
pub struct ManualClock {
    start_millis: u64,
    elapsed_nanos: AtomicU64,
    tick_nanos: u64,
}

impl ManualClock {
    /// Creates a clock frozen at `start_millis` (Unix ms).
    #[must_use]
    pub fn new(start_millis: u64) -> Self {
        Self::with_tick(start_millis, Duration::ZERO)
    }

    /// Creates a clock that moves forward by `tick` every time it is read.
    #[must_use]
    pub fn with_tick(start_millis: u64, tick: Duration) -> Self {
        ManualClock {
            start_millis,
            elapsed_nanos: AtomicU64::new(0),
            tick_nanos: duration_nanos(tick),
        }
    }

    /// Moves the clock forward.
    pub fn advance(&self, by: Duration) {
        self.elapsed_nanos
            .fetch_add(duration_nanos(by), Ordering::SeqCst);
    }

    fn read(&self) -> u64 {
        self.elapsed_nanos
            .fetch_add(self.tick_nanos, Ordering::SeqCst)
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> u64 {
        self.start_millis.saturating_add(self.read() / 1_000_000)
    }

    fn monotonic(&self) -> Duration {
        Duration::from_nanos(self.read())
    }
}

fn duration_nanos(duration: Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}
