use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::*;

/// Julian Day representation (days since 4713 BC January 1, 12:00 UT).
/// JD 2451545.0 = 2000-01-01 12:00:00 UT.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct JulianDay(f64);

impl JulianDay {
    /// Create a new Julian Day value.
    pub fn new(v: f64) -> Self {
        Self(v)
    }

    /// Raw Julian Day value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Convert a Gregorian calendar date and civil time (treated as UT)
    /// into a Julian Day via the ephemeris library.
    pub fn from_calendar(date: NaiveDate, time: NaiveTime) -> Self {
        let day_fraction = (time.hour() as f64
            + time.minute() as f64 / 60.0
            + time.second() as f64 / 3600.0)
            / 24.0;
        let date = astro::time::Date {
            year: date.year() as i16,
            month: date.month() as u8,
            decimal_day: date.day() as f64 + day_fraction,
            cal_type: astro::time::CalType::Gregorian,
        };
        Self(astro::time::julian_day(&date))
    }

    /// Convert a combined date-time (treated as UT) into a Julian Day.
    pub fn from_datetime(dt: NaiveDateTime) -> Self {
        Self::from_calendar(dt.date(), dt.time())
    }

    /// Julian centuries since J2000.0.
    pub fn julian_cent(&self) -> f64 {
        (self.0 - 2451545.0) / 36525.0
    }
}

impl From<f64> for JulianDay {
    fn from(v: f64) -> Self {
        JulianDay::new(v)
    }
}
