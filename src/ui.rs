use std::io::{self, Write};

use stopwatch_core::{dial_degrees, format_hms, format_hms_cs, Stopwatch, TimerState};

const CLEAR: &str = "\x1b[2J\x1b[H";
const SWEEP_WIDTH: usize = 30;
const NO_LAPS: &str = "No laps recorded yet. Start timing to record laps!";

pub const HELP_TEXT: &str = "STOPWATCH HELP\n\
\n\
s, space, ENTER  start / pause / resume\n\
l                record a lap\n\
r                reset time and laps\n\
j / k            scroll laps older / newer\n\
h, ?             show this help\n\
q                quit\n\
\n\
Keys are read a line at a time; type one or\n\
more keys and press ENTER.";

/// How screens are painted, taken from the command line.
#[derive(Clone, Debug)]
pub struct ViewConfig {
    pub visible_laps: usize,
    pub clear_screen: bool,
}

fn clear_screen(out: &mut impl Write, view: &ViewConfig) -> io::Result<()> {
    if view.clear_screen {
        write!(out, "{}", CLEAR)?;
    }
    Ok(())
}

fn state_label(state: TimerState) -> &'static str {
    match state {
        TimerState::Stopped => "Ready",
        TimerState::Running => "Running",
        TimerState::Paused => "Paused",
    }
}

/// Seconds-dial sweep, filled in proportion to the dial's rotation.
fn sweep_bar(elapsed_ms: u64) -> String {
    let degrees = dial_degrees(elapsed_ms);
    let fill = ((degrees / 360.0) * SWEEP_WIDTH as f64) as usize;
    let fill = fill.min(SWEEP_WIDTH);
    format!(
        "[{}{}] {:>5.1}\u{b0}",
        "#".repeat(fill),
        ".".repeat(SWEEP_WIDTH - fill),
        degrees
    )
}

pub fn draw_stopwatch(
    out: &mut impl Write,
    view: &ViewConfig,
    state: &Stopwatch,
    lap_scroll_offset: usize,
    now_ms: u64,
) -> io::Result<()> {
    clear_screen(out, view)?;

    // Header
    writeln!(out, "STOPWATCH  [{}]", state_label(state.state()))?;
    writeln!(out)?;

    // Time display
    let elapsed = state.elapsed_ms(now_ms);
    writeln!(out, "    {}", format_hms_cs(elapsed))?;
    writeln!(out, "  {}", sweep_bar(elapsed))?;
    writeln!(out)?;

    // Lap list (most recent first)
    let laps = state.laps();
    if laps.is_empty() {
        writeln!(out, "{}", NO_LAPS)?;
    } else {
        let fastest = laps.fastest();
        let slowest = laps.slowest();
        let visible = view.visible_laps.max(1);
        for lap in laps.laps().rev().skip(lap_scroll_offset).take(visible) {
            let mark = if Some(lap.number) == fastest {
                "  fastest"
            } else if Some(lap.number) == slowest {
                "  slowest"
            } else {
                ""
            };
            writeln!(
                out,
                "Lap {:2}  {}  {}{}",
                lap.number,
                format_hms_cs(lap.lap_ms),
                format_hms_cs(lap.split_ms),
                mark
            )?;
        }
        let hidden = laps.len().saturating_sub(lap_scroll_offset + visible);
        if lap_scroll_offset > 0 || hidden > 0 {
            writeln!(out, "({} newer, {} older; j/k to scroll)", lap_scroll_offset, hidden)?;
        }
    }

    // Footer
    writeln!(out)?;
    writeln!(out, "s=start/pause  l=lap  r=reset\nh=help  q=quit")?;
    out.flush()
}

pub fn draw_help(out: &mut impl Write, view: &ViewConfig) -> io::Result<()> {
    clear_screen(out, view)?;
    writeln!(out, "{}", HELP_TEXT)?;
    writeln!(out)?;
    writeln!(out, "Press any key to close")?;
    out.flush()
}

pub fn draw_confirm_exit(out: &mut impl Write, view: &ViewConfig, elapsed_ms: u64) -> io::Result<()> {
    clear_screen(out, view)?;
    writeln!(out, "Timer Running  [{}]", format_hms(elapsed_ms))?;
    writeln!(out)?;
    writeln!(out, "The stopwatch is still running.\nExit anyway?")?;
    writeln!(out, "  y = Stop & exit\n  n = Cancel")?;
    out.flush()
}
