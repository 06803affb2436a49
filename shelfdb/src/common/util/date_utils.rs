use chrono::{DateTime, Utc};

/// Current wall-clock time used to stamp `createdAt`/`updatedAt`.
#[inline]
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now()
}

/// Whole seconds since the Unix epoch, clamped at zero for clocks set before 1970.
#[inline]
pub fn current_unix_seconds() -> u64 {
    Utc::now().timestamp().max(0) as u64
}
