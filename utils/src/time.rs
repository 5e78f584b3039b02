//! Time formatting helpers.

use ccx_types::Timestamp;
use chrono::DateTime;

/// Render a timestamp as `YYYY-MM-DD HH:MM:SS` in UTC.
///
/// Values outside chrono's range fall back to raw seconds.
pub fn format_timestamp(ts: Timestamp) -> String {
    i64::try_from(ts.as_secs())
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| ts.as_secs().to_string())
}
