mod app;
mod clock;
mod error;
mod options;
mod pump;
mod ui;

use std::io::{self, BufRead};
use std::thread;

use clap::Parser;
use crossbeam_channel::{unbounded, Sender};

use crate::app::StopwatchApp;
use crate::clock::MonotonicClock;
use crate::error::AppError;
use crate::options::Options;
use crate::pump::{pump_thread, PumpCtl};

/// Messages delivered to the main loop.
#[derive(Debug, PartialEq)]
pub enum AppMsg {
    Key(char),
    Pump,
    InputClosed,
}

/// Every character of a line is a key; EOF ends input.
fn input_thread(input: impl BufRead, main: Sender<AppMsg>) {
    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("reading keys failed: {}", e);
                break;
            }
        };
        // A bare ENTER counts as a key of its own
        let keys: Vec<char> = if line.is_empty() { vec!['\r'] } else { line.chars().collect() };
        for key in keys {
            if main.send(AppMsg::Key(key)).is_err() {
                return;
            }
        }
    }
    main.send(AppMsg::InputClosed).ok();
}

fn init_logging(opts: &Options) -> Result<(), AppError> {
    env_logger::Builder::new()
        .filter_level(opts.log)
        .parse_default_env()
        .try_init()?;
    Ok(())
}

fn main() -> Result<(), AppError> {
    let opts = Options::parse();
    init_logging(&opts)?;
    log::info!("Stopwatch PID is {}", std::process::id());

    let (main_tx, main_rx) = unbounded();
    let (pump_tx, pump_rx) = unbounded::<PumpCtl>();

    // Create pump thread
    let pump_main = main_tx.clone();
    let pump = thread::spawn(move || pump_thread(pump_rx, pump_main));
    // Blocked on stdin until a line arrives; not joined on exit
    thread::spawn(move || input_thread(io::stdin().lock(), main_tx));

    let mut app = StopwatchApp::new(
        MonotonicClock::new(),
        io::stdout().lock(),
        opts.view_config(),
        opts.refresh_interval(),
        pump_tx,
    );
    app.redraw()?;

    while let Ok(msg) = main_rx.recv() {
        match msg {
            AppMsg::Key(key) => app.handle_key(key)?,
            AppMsg::Pump => app.handle_pump()?,
            AppMsg::InputClosed => {
                log::info!("input closed");
                break;
            }
        }
        if app.should_quit() {
            break;
        }
    }

    // Clean up
    app.shutdown();
    if pump.join().is_err() {
        log::error!("pump thread panicked");
    }
    Ok(())
}
