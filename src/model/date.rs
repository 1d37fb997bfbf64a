//! Date and time values in the shape the Replicon services expect.
//!
//! Replicon does not take ISO-8601 strings: a date is the object
//! `{"year":2014,"month":3,"day":7}` (month 1-based) and a time of day is
//! `{"hour":9,"minute":30,"second":0}`. Conversion from chrono values is
//! purely calendar based, with no timezone or locale involved.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ServiceDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl ServiceDate {
    /// Back to a calendar date; `None` if the service sent an impossible one.
    pub fn to_naive_date(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for ServiceDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ServiceTime {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl From<NaiveTime> for ServiceTime {
    fn from(time: NaiveTime) -> Self {
        Self {
            hour: time.hour(),
            minute: time.minute(),
            second: time.second(),
        }
    }
}

/// Inclusive date range, as taken by the allocation and time-off operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start_date: ServiceDate,
    pub end_date: ServiceDate,
}

impl DateRange {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }
}
