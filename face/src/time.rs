// ABOUTME: Wall-clock time values and the sources that produce them.
// ABOUTME: LocalClock reads the host clock; FixedClock is a settable clock for tests.

use std::cell::Cell;

use chrono::{Local, NaiveDate, NaiveDateTime, TimeDelta, Timelike};

/// A local wall-clock instant as shown on the clock face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(NaiveDateTime);

impl ClockTime {
    pub fn new(datetime: NaiveDateTime) -> Self {
        Self(datetime)
    }

    /// Builds a time on the given date, or `None` if any component is out of range.
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)?
            .and_hms_opt(hour, minute, second)
            .map(Self)
    }

    /// Hour of the day, 0-23.
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Hour on a 12-hour dial, 0-11.
    pub fn hour12(&self) -> u32 {
        self.0.hour() % 12
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Whole seconds, 0-59. A leap second is reported as 59.
    pub fn second(&self) -> u32 {
        self.0.second().min(59)
    }

    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    pub fn datetime(&self) -> NaiveDateTime {
        self.0
    }
}

pub trait TimeSource {
    fn now(&self) -> ClockTime;
}

/// The host clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl TimeSource for LocalClock {
    fn now(&self) -> ClockTime {
        ClockTime(Local::now().naive_local())
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct FixedClock {
    now: Cell<ClockTime>,
}

impl FixedClock {
    pub fn new(now: ClockTime) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    pub fn set(&self, now: ClockTime) {
        self.now.set(now);
    }

    pub fn advance(&self, by: TimeDelta) {
        let next = self.now.get().datetime() + by;
        self.now.set(ClockTime(next));
    }
}

impl TimeSource for FixedClock {
    fn now(&self) -> ClockTime {
        self.now.get()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now(&self) -> ClockTime {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u32, minute: u32, second: u32) -> ClockTime {
        ClockTime::from_ymd_hms(2026, 10, 19, hour, minute, second).unwrap()
    }

    #[test]
    fn components_are_exposed() {
        let t = at(14, 5, 9);
        assert_eq!(t.hour(), 14);
        assert_eq!(t.hour12(), 2);
        assert_eq!(t.minute(), 5);
        assert_eq!(t.second(), 9);
        assert_eq!(t.date(), NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
    }

    #[test]
    fn noon_and_midnight_are_zero_on_the_dial() {
        assert_eq!(at(0, 0, 0).hour12(), 0);
        assert_eq!(at(12, 0, 0).hour12(), 0);
        assert_eq!(at(23, 59, 59).hour12(), 11);
    }

    #[test]
    fn out_of_range_components_are_rejected() {
        assert!(ClockTime::from_ymd_hms(2026, 10, 19, 24, 0, 0).is_none());
        assert!(ClockTime::from_ymd_hms(2026, 10, 19, 0, 60, 0).is_none());
        assert!(ClockTime::from_ymd_hms(2026, 2, 30, 0, 0, 0).is_none());
    }

    #[test]
    fn leap_second_reads_as_59() {
        let leap = NaiveDate::from_ymd_opt(2016, 12, 31)
            .unwrap()
            .and_hms_milli_opt(23, 59, 59, 1_500)
            .unwrap();
        assert_eq!(ClockTime::new(leap).second(), 59);
    }

    #[test]
    fn fixed_clock_advances_across_midnight() {
        let clock = FixedClock::new(at(23, 59, 59));
        clock.advance(TimeDelta::seconds(1));
        let now = clock.now();
        assert_eq!((now.hour(), now.minute(), now.second()), (0, 0, 0));
        assert_eq!(now.date(), NaiveDate::from_ymd_opt(2026, 10, 20).unwrap());
    }

    #[test]
    fn fixed_clock_can_be_set() {
        let clock = FixedClock::new(at(1, 2, 3));
        clock.set(at(4, 5, 6));
        assert_eq!(clock.now(), at(4, 5, 6));
    }

    #[test]
    fn local_clock_yields_valid_components() {
        let now = LocalClock.now();
        assert!(now.hour() < 24);
        assert!(now.minute() < 60);
        assert!(now.second() < 60);
    }
}
