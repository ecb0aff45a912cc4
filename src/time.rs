use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

/// Source of "now" for relative timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
struct FixedClock(DateTime<Utc>);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn system_clock() -> Arc<dyn Clock> {
    Arc::new(SystemClock)
}

#[cfg(test)]
pub fn fixed_clock(timestamp: i64) -> Arc<dyn Clock> {
    let now = Utc
        .timestamp_opt(timestamp, 0)
        .single()
        .unwrap_or_default();
    Arc::new(FixedClock(now))
}

/// Format a unix timestamp relative to `now` ("5m ago", "3h ago", "2d ago").
pub fn format_relative(timestamp: u64, now: DateTime<Utc>) -> String {
    let Some(then) = Utc.timestamp_opt(timestamp as i64, 0).single() else {
        return "?".to_string();
    };
    let diff = now.signed_duration_since(then);

    if diff.num_minutes() < 1 {
        "just now".to_string()
    } else if diff.num_hours() < 1 {
        format!("{}m ago", diff.num_minutes())
    } else if diff.num_days() < 1 {
        format!("{}h ago", diff.num_hours())
    } else if diff.num_days() < 365 {
        format!("{}d ago", diff.num_days())
    } else {
        format!("{}y ago", diff.num_days() / 365)
    }
}
