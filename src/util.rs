use crate::error::{GpaintError, Result};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use std::time::{Duration, SystemTime};

/// Parse the anchor date for the top-left pattern cell.
///
/// Accepts RFC3339, `YYYY-MM-DD`, or a natural phrase like `"44 weeks ago"`.
pub fn parse_anchor(input: &str) -> Result<DateTime<Utc>> {
    // RFC3339
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }

    // YYYY-MM-DD
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        if let Some(datetime) = date.and_hms_opt(0, 0, 0) {
            return Ok(Utc.from_utc_datetime(&datetime));
        }
    }

    // Relative duration (e.g., "44 weeks ago")
    if let Some(duration) = parse_natural_duration(input) {
        let now = SystemTime::now();
        let target = now
            .checked_sub(duration)
            .ok_or_else(|| GpaintError::InvalidDate(format!("Duration overflow for '{input}'")))?;
        return Ok(DateTime::<Utc>::from(target));
    }

    Err(GpaintError::InvalidDate(format!(
        "Invalid anchor '{input}': expected RFC3339, YYYY-MM-DD, or e.g. \"44 weeks ago\""
    )))
}

fn parse_natural_duration(input: &str) -> Option<Duration> {
    let input = input.trim().to_lowercase();

    if let Some(days) = input.strip_suffix(" days ago") {
        if let Ok(n) = days.trim().parse::<u64>() {
            return Some(Duration::from_secs(n * 86400));
        }
    }

    if let Some(weeks) = input.strip_suffix(" weeks ago") {
        if let Ok(n) = weeks.trim().parse::<u64>() {
            return Some(Duration::from_secs(n * 7 * 86400));
        }
    }

    if let Some(months) = input.strip_suffix(" months ago") {
        if let Ok(n) = months.trim().parse::<u64>() {
            return Some(Duration::from_secs(n * 30 * 86400));
        }
    }

    None
}
