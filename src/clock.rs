use std::time::Instant;

/// Millisecond time source for the stopwatch.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Milliseconds since the clock was created, from the OS monotonic clock.
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

#[cfg(test)]
pub use manual::ManualClock;
