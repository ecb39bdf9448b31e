//! Calendar dates, wall-clock times and the time windows shifts occupy.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use crate::domain::FieldViolation;

static DATE_RE: OnceLock<Regex> = OnceLock::new();
static TIME_RE: OnceLock<Regex> = OnceLock::new();

fn date_regex() -> &'static Regex {
    DATE_RE.get_or_init(|| {
        Regex::new("^[0-9]{4}-[0-9]{2}-[0-9]{2}$")
            .unwrap_or_else(|error| panic!("date regex failed to compile: {error}"))
    })
}

fn time_regex() -> &'static Regex {
    TIME_RE.get_or_init(|| {
        Regex::new("^([01][0-9]|2[0-3]):([0-5][0-9])$")
            .unwrap_or_else(|error| panic!("time regex failed to compile: {error}"))
    })
}

/// Zero-padded `YYYY-MM-DD` date.
///
/// Ordering is the lexicographic order of the text, which matches calendar
/// order for zero-padded ISO dates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShiftDate(String);

impl ShiftDate {
    /// Parse a date, reporting violations against `field`.
    ///
    /// # Examples
    /// ```
    /// use shiftplan::domain::ShiftDate;
    ///
    /// assert!(ShiftDate::parse("date", "2024-03-01").is_ok());
    /// assert!(ShiftDate::parse("date", "2024-3-1").is_err());
    /// ```
    pub fn parse(field: &'static str, raw: &str) -> Result<Self, FieldViolation> {
        if !date_regex().is_match(raw) {
            return Err(FieldViolation::new(
                field,
                "invalid_date",
                format!("{field} must match YYYY-MM-DD"),
            ));
        }
        Ok(Self(raw.to_owned()))
    }
}

impl AsRef<str> for ShiftDate {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ShiftDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// 24-hour `HH:MM` time of day, held as minutes after midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClockTime(u16);

impl ClockTime {
    /// Parse a time, reporting violations against `field`.
    pub fn parse(field: &'static str, raw: &str) -> Result<Self, FieldViolation> {
        let invalid = || {
            FieldViolation::new(
                field,
                "invalid_time",
                format!("{field} must match HH:MM (00:00-23:59)"),
            )
        };
        let captures = time_regex().captures(raw).ok_or_else(invalid)?;
        let hours: u16 = captures[1].parse().map_err(|_| invalid())?;
        let minutes: u16 = captures[2].parse().map_err(|_| invalid())?;
        Ok(Self(hours * 60 + minutes))
    }

    /// Minutes after midnight.
    pub fn minutes(self) -> u16 {
        self.0
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

/// `[start, end)` pair of wall-clock times.
///
/// The times are not ordered against each other, so an overnight
/// `22:00`-`06:00` shift or an empty window is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start: ClockTime,
    end: ClockTime,
}

impl TimeWindow {
    pub const fn new(start: ClockTime, end: ClockTime) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> ClockTime {
        self.start
    }

    pub fn end(&self) -> ClockTime {
        self.end
    }

    /// Whether this candidate window conflicts with an existing one.
    ///
    /// A conflict is any of: the candidate starts inside `existing`, ends
    /// inside it, or fully contains it. Touching endpoints do not conflict.
    ///
    /// # Examples
    /// ```
    /// use shiftplan::domain::{ClockTime, TimeWindow};
    ///
    /// let at = |raw| ClockTime::parse("time", raw).unwrap();
    /// let existing = TimeWindow::new(at("10:00"), at("12:00"));
    /// let overlapping = TimeWindow::new(at("11:00"), at("13:00"));
    /// let touching = TimeWindow::new(at("12:00"), at("13:00"));
    ///
    /// assert!(overlapping.conflicts_with(&existing));
    /// assert!(!touching.conflicts_with(&existing));
    /// ```
    pub fn conflicts_with(&self, existing: &TimeWindow) -> bool {
        let (s, e) = (self.start, self.end);
        let (es, ee) = (existing.start, existing.end);
        (s >= es && s < ee) || (e > es && e <= ee) || (s <= es && e >= ee)
    }
}
