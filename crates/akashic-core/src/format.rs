//! Display strings for the timer button, tooltip and summary labels.

/// `mm:ss`, minutes uncapped: 1500 -> "25:00".
pub fn format_clock(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// `h:mm` for tooltip durations: 85.0 -> "1:25".
pub fn format_hours_minutes(minutes: f64) -> String {
    let total = whole_minutes(minutes);
    format!("{}:{:02}", total / 60, total % 60)
}

/// Summary label: whole hours rounded down ("10h"), or minutes below an hour ("45m").
pub fn format_hours(minutes: f64) -> String {
    let total = whole_minutes(minutes);
    if total < 60 {
        format!("{total}m")
    } else {
        format!("{}h", total / 60)
    }
}

/// `HH:MM:SS` for timeline rows.
pub fn format_elapsed(secs: u64) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        secs / 3600,
        (secs / 60) % 60,
        secs % 60
    )
}

fn whole_minutes(minutes: f64) -> u64 {
    if minutes.is_finite() && minutes > 0.0 {
        minutes.floor() as u64
    } else {
        0
    }
}
