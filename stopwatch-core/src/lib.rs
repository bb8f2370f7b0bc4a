//! Pure stopwatch logic with no platform dependencies.
//! Every operation takes the current clock reading in milliseconds, so the
//! whole crate is testable on host without a real clock.

pub mod format;
pub mod laps;
pub mod stopwatch;

pub use format::{dial_degrees, format_hms, format_hms_cs, TimeParts};
pub use laps::{Lap, LapRecorder};
pub use stopwatch::Stopwatch;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TimerState {
    /// Never started since creation or the last reset.
    Stopped,
    Running,
    Paused,
}

/// Converts clock reads into an elapsed duration that excludes paused spans.
///
/// While running, elapsed is `now - start_mark + accumulated`; otherwise it is
/// the frozen value captured by the last pause (zero when stopped).
#[derive(Clone, Debug)]
pub struct ElapsedTimer {
    state: TimerState,
    start_mark_ms: u64,
    accumulated_ms: u64,
    frozen_ms: u64,
}

impl ElapsedTimer {
    pub fn new() -> Self {
        Self {
            state: TimerState::Stopped,
            start_mark_ms: 0,
            accumulated_ms: 0,
            frozen_ms: 0,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn has_started(&self) -> bool {
        self.state != TimerState::Stopped
    }

    pub fn start(&mut self, now_ms: u64) {
        if self.state == TimerState::Running {
            return;
        }
        // Resume from whatever was frozen by the last pause
        self.accumulated_ms = self.frozen_ms;
        self.start_mark_ms = now_ms;
        self.state = TimerState::Running;
    }

    pub fn pause(&mut self, now_ms: u64) {
        if self.state != TimerState::Running {
            return;
        }
        self.frozen_ms = self.elapsed_ms(now_ms);
        self.state = TimerState::Paused;
    }

    /// Start when not running, pause when running.
    pub fn toggle(&mut self, now_ms: u64) -> TimerState {
        match self.state {
            TimerState::Running => self.pause(now_ms),
            TimerState::Stopped | TimerState::Paused => self.start(now_ms),
        }
        self.state
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        match self.state {
            TimerState::Running => {
                self.accumulated_ms + now_ms.saturating_sub(self.start_mark_ms)
            }
            TimerState::Stopped | TimerState::Paused => self.frozen_ms,
        }
    }
}

impl Default for ElapsedTimer {
    fn default() -> Self {
        Self::new()
    }
}
