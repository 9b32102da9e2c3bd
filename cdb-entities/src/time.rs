use std::fmt;

use thiserror::Error;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

const NANOS_PER_MILLI: i128 = 1_000_000;

/// A UTC timestamp with millisecond precision.
///
/// The inner value counts the milliseconds since the unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimestampMs(i64);

#[derive(Debug, Error)]
#[error("Timestamp {0} ms is out of range")]
pub struct OutOfRangeError(i64);

impl TimestampMs {
    pub fn now() -> Self {
        OffsetDateTime::now_utc().into()
    }

    pub const fn from_inner(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn into_inner(self) -> i64 {
        self.0
    }

    pub const fn as_millis(self) -> i64 {
        self.0
    }

    /// The earliest timestamp that is strictly later than `self`.
    pub const fn successor(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl From<OffsetDateTime> for TimestampMs {
    fn from(from: OffsetDateTime) -> Self {
        Self((from.unix_timestamp_nanos() / NANOS_PER_MILLI) as i64)
    }
}

impl TryFrom<TimestampMs> for OffsetDateTime {
    type Error = OutOfRangeError;
    fn try_from(from: TimestampMs) -> Result<Self, Self::Error> {
        OffsetDateTime::from_unix_timestamp_nanos(i128::from(from.0) * NANOS_PER_MILLI)
            .map_err(|_| OutOfRangeError(from.0))
    }
}

impl fmt::Display for TimestampMs {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match OffsetDateTime::try_from(*self)
            .ok()
            .and_then(|dt| dt.format(&Rfc3339).ok())
        {
            Some(formatted) => f.write_str(&formatted),
            None => write!(f, "{} ms", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn convert_from_into_inner() {
        let t1 = TimestampMs::now();
        let i1 = t1.into_inner();
        let t2 = TimestampMs::from_inner(i1);
        assert_eq!(t1, t2);
    }

    #[test]
    fn truncate_to_millis() {
        let dt = datetime!(2020-02-29 12:34:56.789_999 UTC);
        let ts = TimestampMs::from(dt);
        assert_eq!(1_582_979_696_789, ts.as_millis());
        assert_eq!(
            datetime!(2020-02-29 12:34:56.789 UTC),
            OffsetDateTime::try_from(ts).unwrap()
        );
    }

    #[test]
    fn successor_is_strictly_later() {
        let ts = TimestampMs::from_inner(1000);
        assert!(ts.successor() > ts);
        assert_eq!(ts.successor(), ts.max(ts.successor()));
    }

    #[test]
    fn display_as_rfc3339() {
        let ts = TimestampMs::from_inner(0);
        assert_eq!("1970-01-01T00:00:00Z", ts.to_string());
        assert!(OffsetDateTime::try_from(TimestampMs::from_inner(i64::MAX)).is_err());
    }
}
