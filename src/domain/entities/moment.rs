use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

use crate::domain::errors::DomainResult;

/// Timezone in which every work-schedule rule is evaluated.
pub const BUSINESS_TZ: Tz = chrono_tz::America::Bogota;

/// An instant pinned to the business timezone.
///
/// Built only through `from_utc`/`now`; every transformation returns a new
/// value. `keep_millis` records whether the ingested instant carried
/// sub-second digits, so `to_utc_iso8601` can mirror the input precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkingMoment {
    local: DateTime<Tz>,
    keep_millis: bool,
}

impl WorkingMoment {
    /// Parses a UTC ISO-8601 instant and converts it into the business
    /// timezone. Sub-millisecond digits are truncated to milliseconds;
    /// inputs without a fractional part are truncated to whole seconds.
    pub fn from_utc(instant: &str) -> DomainResult<Self> {
        let keep_millis = instant.contains('.');
        let utc = DateTime::parse_from_rfc3339(instant)?.with_timezone(&Utc);
        Ok(Self::from_instant(utc, keep_millis))
    }

    /// Current time, truncated to whole seconds.
    pub fn now() -> Self {
        Self::from_instant(Utc::now(), false)
    }

    /// Factory for a wall-clock time already expressed in the business
    /// timezone.
    pub fn from_local(date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            local: localize(date, time),
            keep_millis: false,
        }
    }

    fn from_instant(utc: DateTime<Utc>, keep_millis: bool) -> Self {
        let nanos = utc.nanosecond();
        let kept = if keep_millis {
            nanos - nanos % 1_000_000
        } else {
            0
        };
        let utc = utc
            .with_nanosecond(kept)
            .expect("truncated nanoseconds stay in range");
        Self {
            local: utc.with_timezone(&BUSINESS_TZ),
            keep_millis,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.local.date_naive()
    }

    pub fn time(&self) -> NaiveTime {
        self.local.time()
    }

    pub fn local_datetime(&self) -> DateTime<Tz> {
        self.local
    }

    pub fn keeps_millis(&self) -> bool {
        self.keep_millis
    }

    /// Same calendar date, new wall-clock time.
    pub fn with_time(self, time: NaiveTime) -> Self {
        Self {
            local: localize(self.date(), time),
            keep_millis: self.keep_millis,
        }
    }

    /// Same wall-clock time, new calendar date.
    pub fn with_date(self, date: NaiveDate) -> Self {
        Self {
            local: localize(date, self.time()),
            keep_millis: self.keep_millis,
        }
    }

    pub fn plus_milliseconds(self, millis: i64) -> Self {
        Self {
            local: self.local + Duration::milliseconds(millis),
            keep_millis: self.keep_millis,
        }
    }

    /// UTC ISO-8601 string ending in `Z`, with milliseconds iff the
    /// ingested instant carried them.
    pub fn to_utc_iso8601(&self) -> String {
        let utc = self.local.with_timezone(&Utc);
        if self.keep_millis {
            utc.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
        } else {
            utc.format("%Y-%m-%dT%H:%M:%SZ").to_string()
        }
    }
}

fn localize(date: NaiveDate, time: NaiveTime) -> DateTime<Tz> {
    BUSINESS_TZ
        .from_local_datetime(&date.and_time(time))
        .earliest()
        .expect("wall-clock time exists in the business timezone")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_utc_into_business_timezone() {
        let m = WorkingMoment::from_utc("2025-09-26T22:00:00Z").unwrap();
        assert_eq!(m.date(), NaiveDate::from_ymd_opt(2025, 9, 26).unwrap());
        assert_eq!(m.time(), NaiveTime::from_hms_opt(17, 0, 0).unwrap());
        assert!(!m.keeps_millis());
    }

    #[test]
    fn test_round_trips_whole_second_instants() {
        let raw = "2025-04-10T15:00:00Z";
        let m = WorkingMoment::from_utc(raw).unwrap();
        assert_eq!(m.to_utc_iso8601(), raw);
    }

    #[test]
    fn test_preserves_milliseconds_only_when_present() {
        let with = WorkingMoment::from_utc("2025-04-10T15:00:00.123Z").unwrap();
        assert_eq!(with.to_utc_iso8601(), "2025-04-10T15:00:00.123Z");

        let without = WorkingMoment::from_utc("2025-04-10T15:00:00Z").unwrap();
        assert_eq!(without.to_utc_iso8601(), "2025-04-10T15:00:00Z");
    }

    #[test]
    fn test_truncates_below_millisecond_precision() {
        let m = WorkingMoment::from_utc("2025-04-10T15:00:00.123456Z").unwrap();
        assert_eq!(m.to_utc_iso8601(), "2025-04-10T15:00:00.123Z");
    }

    #[test]
    fn test_rejects_garbage_instants() {
        assert!(WorkingMoment::from_utc("not-a-date").is_err());
    }

    #[test]
    fn test_date_transforms_keep_time_and_flag() {
        let m = WorkingMoment::from_utc("2025-09-23T20:15:30.500Z").unwrap();
        let moved = m.with_date(NaiveDate::from_ymd_opt(2025, 9, 24).unwrap());
        assert_eq!(moved.time(), m.time());
        assert!(moved.keeps_millis());
        assert_eq!(moved.to_utc_iso8601(), "2025-09-24T20:15:30.500Z");
    }
}
