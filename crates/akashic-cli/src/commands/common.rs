//! Helpers shared by the subcommands.

use akashic_core::{Config, Timeline};
use chrono::{DateTime, Utc};
use std::path::Path;
use tracing::debug;

/// Load `path` if given, else the user config (defaults on error).
pub fn load_config(path: Option<&Path>) -> Result<Config, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            Ok(Config::load_from(path)?)
        }
        None => Ok(Config::load_or_default()),
    }
}

/// Read a JSON array of time slices.
pub fn load_timeline(path: &Path) -> Result<Timeline, Box<dyn std::error::Error>> {
    debug!(path = %path.display(), "loading timeline");
    let timeline = Timeline::load(path)?;
    debug!(slices = timeline.len(), "loaded timeline");
    Ok(timeline)
}

/// Parse an RFC 3339 timestamp, defaulting to the current time.
pub fn parse_now(now: Option<&str>) -> Result<DateTime<Utc>, Box<dyn std::error::Error>> {
    match now {
        Some(s) => Ok(DateTime::parse_from_rfc3339(s)
            .map_err(|e| format!("invalid --now '{s}': {e}"))?
            .with_timezone(&Utc)),
        None => Ok(Utc::now()),
    }
}
