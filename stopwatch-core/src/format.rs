/// Clock-face breakdown of a millisecond duration.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TimeParts {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub centis: u64,
}

impl TimeParts {
    pub fn from_ms(ms: u64) -> Self {
        let total_secs = ms / 1000;
        Self {
            hours: total_secs / 3600,
            minutes: (total_secs % 3600) / 60,
            seconds: total_secs % 60,
            centis: (ms % 1000) / 10,
        }
    }
}

/// Format milliseconds as "HH:MM:SS"
pub fn format_hms(ms: u64) -> String {
    let t = TimeParts::from_ms(ms);
    format!("{:02}:{:02}:{:02}", t.hours, t.minutes, t.seconds)
}

/// Format milliseconds as "HH:MM:SS.cs" (centiseconds)
pub fn format_hms_cs(ms: u64) -> String {
    let t = TimeParts::from_ms(ms);
    format!("{:02}:{:02}:{:02}.{:02}", t.hours, t.minutes, t.seconds, t.centis)
}

/// Seconds-dial rotation: 6 degrees per second, one turn per minute.
pub fn dial_degrees(ms: u64) -> f64 {
    (ms % 60_000) as f64 / 1000.0 * 6.0
}
