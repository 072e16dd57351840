//! Tick-based calendar values. A tick is 100 ns; timestamps count ticks from
//! 0001-01-01T00:00:00 on the proleptic Gregorian calendar.

use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};

pub const TICKS_PER_SECOND: i64 = 10_000_000;
const NANOS_PER_TICK: i64 = 100;

/// Ticks at 1970-01-01T00:00:00.
pub const UNIX_EPOCH_TICKS: i64 = 621_355_968_000_000_000;

/// Ticks at 9999-12-31T23:59:59.9999999, the last representable instant.
pub const MAX_TICKS: i64 = 3_155_378_975_999_999_999;

const TICKS_MASK: i64 = 0x3FFF_FFFF_FFFF_FFFF;
const KIND_SHIFT: u32 = 62;

/// What the tick count of a `Timestamp` is relative to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DateTimeKind {
    #[default]
    Unspecified = 0,
    Utc = 1,
    Local = 2,
}

impl DateTimeKind {
    fn from_bits(bits: u64) -> Self {
        match bits & 0b11 {
            0 => DateTimeKind::Unspecified,
            1 => DateTimeKind::Utc,
            // both 0b10 and 0b11 have the local flag set
            _ => DateTimeKind::Local,
        }
    }
}

/// A calendar instant with its kind, as carried on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Timestamp {
    ticks: i64,
    kind: DateTimeKind,
}

impl Timestamp {
    /// `None` when `ticks` falls outside `0..=MAX_TICKS`.
    pub const fn new(ticks: i64, kind: DateTimeKind) -> Option<Self> {
        if ticks < 0 || ticks > MAX_TICKS {
            return None;
        }
        Some(Self { ticks, kind })
    }

    pub const fn ticks(&self) -> i64 {
        self.ticks
    }

    pub const fn kind(&self) -> DateTimeKind {
        self.kind
    }

    /// Canonical 64-bit form: ticks in bits 0..62, kind in bits 62..64.
    /// The `Local` kind's ticks are stored as given; no zone conversion is done.
    /// .NET's `DateTime.ToBinary` instead stores a local value as UTC ticks, so
    /// its `Local` output decodes here as the UTC wall clock, and values it
    /// wrapped past `MAX_TICKS` near year 1 decode as corrupt.
    pub const fn to_binary(&self) -> i64 {
        self.ticks | ((self.kind as i64) << KIND_SHIFT)
    }

    /// Inverse of `to_binary`. `None` when the tick field is out of range.
    pub fn from_binary(bits: i64) -> Option<Self> {
        let kind = DateTimeKind::from_bits((bits as u64) >> KIND_SHIFT);
        Self::new(bits & TICKS_MASK, kind)
    }

    /// A `Utc` timestamp, truncated to tick precision. `None` before year 1.
    pub fn from_utc(dt: DateTime<Utc>) -> Option<Self> {
        let ticks = dt
            .timestamp()
            .checked_mul(TICKS_PER_SECOND)?
            .checked_add(i64::from(dt.timestamp_subsec_nanos()) / NANOS_PER_TICK)?
            .checked_add(UNIX_EPOCH_TICKS)?;
        Self::new(ticks, DateTimeKind::Utc)
    }

    /// An `Unspecified` timestamp for a wall-clock value.
    pub fn from_naive(dt: NaiveDateTime) -> Option<Self> {
        let utc = Self::from_utc(dt.and_utc())?;
        Self::new(utc.ticks, DateTimeKind::Unspecified)
    }

    /// The wall-clock value, whatever the kind.
    pub fn to_naive(&self) -> NaiveDateTime {
        self.as_utc().naive_utc()
    }

    /// The instant as UTC; `None` unless the kind is `Utc`.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        (self.kind == DateTimeKind::Utc).then(|| self.as_utc())
    }

    fn as_utc(&self) -> DateTime<Utc> {
        let since_epoch = self.ticks - UNIX_EPOCH_TICKS;
        let secs = since_epoch.div_euclid(TICKS_PER_SECOND);
        let nanos = (since_epoch.rem_euclid(TICKS_PER_SECOND) * NANOS_PER_TICK) as u32;
        // every tick count in 0..=MAX_TICKS lies inside chrono's range
        DateTime::from_timestamp(secs, nanos).unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

/// A signed duration in 100 ns ticks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSpan(pub i64);

impl TimeSpan {
    pub const ZERO: TimeSpan = TimeSpan(0);

    pub const fn from_ticks(ticks: i64) -> Self {
        Self(ticks)
    }

    pub const fn ticks(&self) -> i64 {
        self.0
    }

    /// Truncates toward zero to whole ticks. `None` if the tick count overflows.
    pub fn from_time_delta(td: TimeDelta) -> Option<Self> {
        if let Some(nanos) = td.num_nanoseconds() {
            return Some(Self(nanos / NANOS_PER_TICK));
        }
        td.num_microseconds()?.checked_mul(10).map(Self)
    }

    pub fn to_time_delta(&self) -> TimeDelta {
        TimeDelta::microseconds(self.0 / 10) + TimeDelta::nanoseconds((self.0 % 10) * NANOS_PER_TICK)
    }
}

impl From<TimeSpan> for TimeDelta {
    fn from(ts: TimeSpan) -> TimeDelta {
        ts.to_time_delta()
    }
}
