use crate::laps::{Lap, LapRecorder};
use crate::{ElapsedTimer, TimerState};

/// A single stopwatch: one elapsed-time tracker plus its lap record.
#[derive(Clone, Debug, Default)]
pub struct Stopwatch {
    timer: ElapsedTimer,
    laps: LapRecorder,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self {
            timer: ElapsedTimer::new(),
            laps: LapRecorder::new(),
        }
    }

    pub fn state(&self) -> TimerState {
        self.timer.state()
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }

    pub fn start(&mut self, now_ms: u64) {
        self.timer.start(now_ms);
    }

    pub fn pause(&mut self, now_ms: u64) {
        self.timer.pause(now_ms);
    }

    pub fn toggle(&mut self, now_ms: u64) -> TimerState {
        self.timer.toggle(now_ms)
    }

    pub fn reset(&mut self) {
        self.timer.reset();
        self.laps.clear();
    }

    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        self.timer.elapsed_ms(now_ms)
    }

    /// Snapshot the elapsed time as a new lap.
    ///
    /// Returns `None` without recording anything if the stopwatch has not been
    /// started since the last reset. Laps taken while paused get the frozen value.
    pub fn record_lap(&mut self, now_ms: u64) -> Option<Lap> {
        if !self.timer.has_started() {
            return None;
        }
        Some(self.laps.record(self.timer.elapsed_ms(now_ms)))
    }

    pub fn laps(&self) -> &LapRecorder {
        &self.laps
    }
}
