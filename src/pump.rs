use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};

use crate::AppMsg;

/// Control messages for the redraw pump.
#[derive(Debug, PartialEq)]
pub enum PumpCtl {
    Start(Duration),
    Stop,
    Quit,
}

/// Sends `AppMsg::Pump` every interval while started; blocks while stopped.
pub fn pump_thread(ctl: Receiver<PumpCtl>, main: Sender<AppMsg>) {
    let mut interval = Duration::from_millis(100);
    let mut running = false;

    loop {
        let msg = if running {
            match ctl.recv_timeout(interval) {
                Ok(msg) => msg,
                Err(RecvTimeoutError::Timeout) => {
                    if main.send(AppMsg::Pump).is_err() {
                        break;
                    }
                    continue;
                }
                Err(RecvTimeoutError::Disconnected) => break,
            }
        } else {
            // Block-wait when stopped
            match ctl.recv() {
                Ok(msg) => msg,
                Err(_) => break,
            }
        };

        match msg {
            PumpCtl::Start(every) => {
                interval = every;
                running = true;
            }
            PumpCtl::Stop => running = false,
            PumpCtl::Quit => break,
        }
    }
    log::debug!("pump thread exiting");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    #[test]
    fn test_pump_ticks_only_while_started() {
        let (ctl_tx, ctl_rx) = unbounded();
        let (main_tx, main_rx) = unbounded();
        let handle = std::thread::spawn(move || pump_thread(ctl_rx, main_tx));

        // Stopped: nothing arrives
        assert!(main_rx.recv_timeout(Duration::from_millis(50)).is_err());

        ctl_tx.send(PumpCtl::Start(Duration::from_millis(10))).unwrap();
        let tick = main_rx.recv_timeout(Duration::from_secs(2)).unwrap();
        assert!(matches!(tick, AppMsg::Pump));

        ctl_tx.send(PumpCtl::Quit).unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn test_pump_exits_when_control_dropped() {
        let (ctl_tx, ctl_rx) = unbounded::<PumpCtl>();
        let (main_tx, _main_rx) = unbounded();
        let handle = std::thread::spawn(move || pump_thread(ctl_rx, main_tx));
        drop(ctl_tx);
        handle.join().unwrap();
    }
}
