use std::io::{self, Write};
use std::time::Duration;

use crossbeam_channel::Sender;
use stopwatch_core::{format_hms_cs, Stopwatch, TimerState};

use crate::clock::Clock;
use crate::pump::PumpCtl;
use crate::ui::{self, ViewConfig};

/// Owns the one stopwatch and everything the terminal shows about it.
pub struct StopwatchApp<C: Clock, W: Write> {
    clock: C,
    out: W,
    view: ViewConfig,
    refresh: Duration,

    stopwatch: Stopwatch,
    lap_scroll_offset: usize,

    pump: Sender<PumpCtl>,
    pump_running: bool,
    help_visible: bool,
    confirm_exit: bool,
    quit: bool,
}

impl<C: Clock, W: Write> StopwatchApp<C, W> {
    pub fn new(clock: C, out: W, view: ViewConfig, refresh: Duration, pump: Sender<PumpCtl>) -> Self {
        Self {
            clock,
            out,
            view,
            refresh,
            stopwatch: Stopwatch::new(),
            lap_scroll_offset: 0,
            pump,
            pump_running: false,
            help_visible: false,
            confirm_exit: false,
            quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn redraw(&mut self) -> io::Result<()> {
        if self.help_visible {
            return ui::draw_help(&mut self.out, &self.view);
        }
        let now = self.clock.now_ms();
        if self.confirm_exit {
            let elapsed = self.stopwatch.elapsed_ms(now);
            return ui::draw_confirm_exit(&mut self.out, &self.view, elapsed);
        }
        ui::draw_stopwatch(&mut self.out, &self.view, &self.stopwatch, self.lap_scroll_offset, now)
    }

    fn start_pump(&mut self) {
        if !self.pump_running {
            self.pump_running = true;
            self.pump.send(PumpCtl::Start(self.refresh)).ok();
        }
    }

    fn stop_pump(&mut self) {
        if self.pump_running {
            self.pump_running = false;
            self.pump.send(PumpCtl::Stop).ok();
        }
    }

    pub fn handle_pump(&mut self) -> io::Result<()> {
        if !self.stopwatch.is_running() {
            self.stop_pump();
            return Ok(());
        }
        // Overlays are static; no need to repaint them every tick
        if self.help_visible || self.confirm_exit {
            return Ok(());
        }
        self.redraw()
    }

    pub fn handle_key(&mut self, key: char) -> io::Result<()> {
        // If help screen is showing, any key dismisses it
        if self.help_visible {
            self.help_visible = false;
            return self.redraw();
        }

        if self.confirm_exit {
            match key {
                'y' | 'Y' => {
                    let now = self.clock.now_ms();
                    self.stopwatch.pause(now);
                    self.stop_pump();
                    self.confirm_exit = false;
                    self.quit = true;
                }
                'n' | 'N' => {
                    self.confirm_exit = false;
                    self.redraw()?;
                }
                _ => {}
            }
            return Ok(());
        }

        match key {
            's' | ' ' | '\r' | '\n' => self.toggle(),
            'l' => self.record_lap(),
            'r' => self.reset(),
            'j' => {
                let visible = self.view.visible_laps.max(1);
                if self.lap_scroll_offset + visible < self.stopwatch.laps().len() {
                    self.lap_scroll_offset += 1;
                }
            }
            'k' => {
                self.lap_scroll_offset = self.lap_scroll_offset.saturating_sub(1);
            }
            'h' | '?' => self.help_visible = true,
            'q' => {
                if self.stopwatch.is_running() {
                    self.confirm_exit = true;
                } else {
                    self.quit = true;
                    return Ok(());
                }
            }
            _ => {
                log::debug!("ignoring key {:?}", key);
                return Ok(());
            }
        }
        self.redraw()
    }

    fn toggle(&mut self) {
        let now = self.clock.now_ms();
        match self.stopwatch.toggle(now) {
            TimerState::Running => {
                log::info!("started at {}", format_hms_cs(self.stopwatch.elapsed_ms(now)));
                self.start_pump();
            }
            TimerState::Paused => {
                log::info!("paused at {}", format_hms_cs(self.stopwatch.elapsed_ms(now)));
                self.stop_pump();
            }
            TimerState::Stopped => {}
        }
    }

    fn record_lap(&mut self) {
        let now = self.clock.now_ms();
        match self.stopwatch.record_lap(now) {
            Some(lap) => {
                log::info!(
                    "lap {}: {} (split {})",
                    lap.number,
                    format_hms_cs(lap.lap_ms),
                    format_hms_cs(lap.split_ms)
                );
                // Jump back to the newest lap
                self.lap_scroll_offset = 0;
            }
            None => log::debug!("lap ignored, stopwatch not started"),
        }
    }

    fn reset(&mut self) {
        self.stopwatch.reset();
        self.lap_scroll_offset = 0;
        self.stop_pump();
        log::info!("reset");
    }

    /// Stop the pump for good; the app takes no more input after this.
    pub fn shutdown(&mut self) {
        self.stop_pump();
        self.pump.send(PumpCtl::Quit).ok();
        let final_time = format_hms_cs(self.stopwatch.elapsed_ms(self.clock.now_ms()));
        log::info!("exiting at {} with {} laps", final_time, self.stopwatch.laps().len());
    }
}
