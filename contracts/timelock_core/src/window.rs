use crate::errors::TimelockError;

/// Checks `scheduled_time <= now < scheduled_time + grace_period`.
///
/// A deadline past `u64::MAX` saturates, so such a transaction never expires.
pub fn check_window(now: u64, scheduled_time: u64, grace_period: u64) -> Result<(), TimelockError> {
    if now < scheduled_time {
        return Err(TimelockError::TooEarly);
    }
    if now >= scheduled_time.saturating_add(grace_period) {
        return Err(TimelockError::Expired);
    }
    Ok(())
}
