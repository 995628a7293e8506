use std::ops::Add;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Nanoseconds since the Unix epoch. Zero means "not set".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp(u64);

impl Timestamp {
    pub const fn from_nanos(nanos: u64) -> Self {
        Self(nanos)
    }

    pub const fn as_nanos(self) -> u64 {
        self.0
    }

    pub fn now() -> Self {
        Self::from(SystemTime::now())
    }

    pub fn to_system_time(self) -> SystemTime {
        UNIX_EPOCH + Duration::from_nanos(self.0)
    }
}

impl From<SystemTime> for Timestamp {
    /// Times before the epoch map to zero; times past `u64::MAX` nanoseconds saturate.
    fn from(time: SystemTime) -> Self {
        let nanos = time
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| u64::try_from(d.as_nanos()).unwrap_or(u64::MAX));
        Self(nanos)
    }
}

impl Add<Duration> for Timestamp {
    type Output = Timestamp;

    fn add(self, rhs: Duration) -> Timestamp {
        let nanos = u64::try_from(rhs.as_nanos()).unwrap_or(u64::MAX);
        Timestamp(self.0.saturating_add(nanos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_time_round_trip() {
        let time = UNIX_EPOCH + Duration::from_nanos(1_600_000_000_123_456_789);
        let ts = Timestamp::from(time);
        assert_eq!(ts.as_nanos(), 1_600_000_000_123_456_789);
        assert_eq!(ts.to_system_time(), time);
    }

    #[test]
    fn test_before_epoch_is_zero() {
        let time = UNIX_EPOCH - Duration::from_secs(1);
        assert_eq!(Timestamp::from(time), Timestamp::default());
    }

    #[test]
    fn test_add_duration() {
        let ts = Timestamp::from_nanos(10) + Duration::from_millis(1);
        assert_eq!(ts.as_nanos(), 1_000_010);
        assert_eq!(
            (Timestamp::from_nanos(u64::MAX) + Duration::from_nanos(1)).as_nanos(),
            u64::MAX
        );
    }
}
