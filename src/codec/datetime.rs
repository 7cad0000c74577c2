use chrono::{Duration, NaiveDate, Utc};

use super::value::impl_newtype;

/// Days since 1970-01-01, unsigned 16-bit.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(pub u16);

/// Days since 1970-01-01, signed 32-bit, so dates before the epoch fit.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date32(pub i32);

/// Seconds since the Unix epoch, unsigned 32-bit.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime(pub u32);

/// Ticks since the Unix epoch. The tick length is a column property
/// ([`Precision`]) and is not stored on the wire.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime64(pub i64);

impl_newtype! {
    Date(u16) => "Date",
    Date32(i32) => "Date32",
    DateTime(u32) => "DateTime",
    DateTime64(i64) => "DateTime64",
}

fn epoch() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(1970, 1, 1)
}

fn days_since_epoch(date: NaiveDate) -> Option<i64> {
    Some(date.signed_duration_since(epoch()?).num_days())
}

impl Date {
    pub fn from_naive_date(date: NaiveDate) -> Option<Self> {
        u16::try_from(days_since_epoch(date)?).ok().map(Date)
    }

    pub fn to_naive_date(self) -> Option<NaiveDate> {
        epoch()?.checked_add_signed(Duration::days(i64::from(self.0)))
    }
}

impl Date32 {
    pub fn from_naive_date(date: NaiveDate) -> Option<Self> {
        i32::try_from(days_since_epoch(date)?).ok().map(Date32)
    }

    pub fn to_naive_date(self) -> Option<NaiveDate> {
        epoch()?.checked_add_signed(Duration::days(i64::from(self.0)))
    }
}

impl DateTime {
    pub fn from_utc(dt: chrono::DateTime<Utc>) -> Option<Self> {
        u32::try_from(dt.timestamp()).ok().map(DateTime)
    }

    pub fn to_utc(self) -> Option<chrono::DateTime<Utc>> {
        chrono::DateTime::from_timestamp(i64::from(self.0), 0)
    }
}

/// Sub-second precision of a `DateTime64` column, as a power of ten (0..=9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Precision(u8);

impl Precision {
    pub const MAX: u8 = 9;
    pub const SECONDS: Precision = Precision(0);
    pub const MILLIS: Precision = Precision(3);
    pub const MICROS: Precision = Precision(6);
    pub const NANOS: Precision = Precision(9);

    pub fn new(p: u8) -> Option<Self> {
        (p <= Self::MAX).then_some(Precision(p))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Ticks per second.
    pub fn scale(self) -> i64 {
        10_i64.pow(u32::from(self.0))
    }

    fn nanos_per_tick(self) -> i64 {
        10_i64.pow(u32::from(Self::MAX - self.0))
    }
}

impl Default for Precision {
    fn default() -> Self {
        Precision::MILLIS
    }
}

impl DateTime64 {
    /// Sub-tick nanoseconds are truncated toward negative infinity. A leap
    /// second is clamped to the last tick of its second.
    pub fn from_utc(dt: chrono::DateTime<Utc>, precision: Precision) -> Option<Self> {
        let scale = precision.scale();
        let secs = dt.timestamp().checked_mul(scale)?;
        let frac = (i64::from(dt.timestamp_subsec_nanos()) / precision.nanos_per_tick())
            .min(scale - 1);
        secs.checked_add(frac).map(DateTime64)
    }

    pub fn to_utc(self, precision: Precision) -> Option<chrono::DateTime<Utc>> {
        let scale = precision.scale();
        let secs = self.0.div_euclid(scale);
        let nanos = self.0.rem_euclid(scale) * precision.nanos_per_tick();
        chrono::DateTime::from_timestamp(secs, u32::try_from(nanos).ok()?)
    }
}
