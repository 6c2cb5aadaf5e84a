use chrono::{DateTime, SubsecRound, Utc};

/// Current instant truncated to microseconds, the precision PostgreSQL
/// `TIMESTAMPTZ` stores, so a value written and read back compares equal.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

pub fn unix_seconds(dt: DateTime<Utc>) -> i64 {
    dt.timestamp()
}
