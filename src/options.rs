use std::time::Duration;

use clap::Parser;
use log::LevelFilter;

use crate::ui::ViewConfig;

#[derive(Parser, Debug)]
#[command(name = "stopwatch", version, about = "Terminal stopwatch with lap recording")]
pub struct Options {
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u64).range(10..), help = "Redraw interval in milliseconds while running")]
    pub refresh_ms: u64,

    #[arg(long, default_value_t = 8, help = "Number of lap rows shown at once")]
    pub visible_laps: usize,

    #[arg(long, help = "Don't clear the terminal before each redraw")]
    pub no_clear: bool,

    #[arg(long, default_value = "warn", help = "Sets the logger level (RUST_LOG overrides)")]
    pub log: LevelFilter,
}

impl Options {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_ms)
    }

    pub fn view_config(&self) -> ViewConfig {
        ViewConfig {
            visible_laps: self.visible_laps.max(1),
            clear_screen: !self.no_clear,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = Options::try_parse_from(["stopwatch"]).unwrap();
        assert_eq!(opts.refresh_interval(), Duration::from_millis(100));
        assert_eq!(opts.log, LevelFilter::Warn);
        let view = opts.view_config();
        assert_eq!(view.visible_laps, 8);
        assert!(view.clear_screen);
    }

    #[test]
    fn test_overrides() {
        let opts = Options::try_parse_from([
            "stopwatch",
            "--refresh-ms",
            "16",
            "--visible-laps",
            "0",
            "--no-clear",
            "--log",
            "debug",
        ])
        .unwrap();
        assert_eq!(opts.refresh_ms, 16);
        assert_eq!(opts.log, LevelFilter::Debug);
        let view = opts.view_config();
        assert_eq!(view.visible_laps, 1);
        assert!(!view.clear_screen);
    }

    #[test]
    fn test_refresh_floor() {
        assert!(Options::try_parse_from(["stopwatch", "--refresh-ms", "5"]).is_err());
    }
}
