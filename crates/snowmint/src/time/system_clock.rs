use crate::TimeSource;
use std::time::{SystemTime, UNIX_EPOCH};

/// The system wall clock, truncated to millisecond resolution.
///
/// This is a plain wall clock, not a monotonic one: NTP steps or manual
/// adjustments are visible to the generator and surface as
/// [`Error::ClockMovedBackwards`](crate::Error::ClockMovedBackwards).
///
/// A system time earlier than the Unix epoch reads as `0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn current_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| {
                u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SNOWFLAKE_EPOCH_MILLIS;

    #[test]
    fn system_clock_is_past_layout_epoch() {
        assert!(SystemClock.current_millis() > SNOWFLAKE_EPOCH_MILLIS);
    }

    #[test]
    fn system_clock_does_not_jump_ahead() {
        let a = SystemClock.current_millis();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let b = SystemClock.current_millis();
        assert!(b >= a);
        assert!(b - a < 60_000);
    }
}
