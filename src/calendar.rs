use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Day of week for airline scheduling. The operational week starts on
/// Saturday, so Saturday is index 0 and Friday is index 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Saturday,
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Saturday,
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    pub fn index(self) -> u8 {
        match self {
            Weekday::Saturday => 0,
            Weekday::Sunday => 1,
            Weekday::Monday => 2,
            Weekday::Tuesday => 3,
            Weekday::Wednesday => 4,
            Weekday::Thursday => 5,
            Weekday::Friday => 6,
        }
    }

    pub fn from_index(index: u8) -> Option<Weekday> {
        Weekday::ALL.get(index as usize).copied()
    }

    /// Weekday of a calendar date.
    pub fn of(date: NaiveDate) -> Weekday {
        match date.weekday() {
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        };
        write!(f, "{name}")
    }
}

/// Strip the time-of-day from a timestamp. Idempotent by construction.
pub fn date_only(datetime: NaiveDateTime) -> NaiveDate {
    datetime.date()
}

/// Walk the calendar without mutating the input date.
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date + Duration::days(days)
}

pub fn weekday_of(date: NaiveDate) -> Weekday {
    Weekday::of(date)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DaytimeError {
    OutOfRange(u32),
    InvalidFormat(String),
}

impl fmt::Display for DaytimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DaytimeError::OutOfRange(minutes) => {
                write!(f, "daytime minutes {minutes} out of range [0, 1440)")
            }
            DaytimeError::InvalidFormat(raw) => {
                write!(f, "invalid daytime '{raw}' (expected HH:MM or bare minutes)")
            }
        }
    }
}

impl std::error::Error for DaytimeError {}

/// A time of day stored as minutes since midnight, always in `[0, 1440)`.
/// Scheduled departure times (std) go through this type so checkers never
/// deal with raw clock strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Daytime(u16);

impl Daytime {
    pub const MINUTES_PER_DAY: u32 = 1440;

    pub fn new(minutes: u32) -> Result<Daytime, DaytimeError> {
        if minutes >= Self::MINUTES_PER_DAY {
            return Err(DaytimeError::OutOfRange(minutes));
        }
        Ok(Daytime(minutes as u16))
    }

    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }
}

impl FromStr for Daytime {
    type Err = DaytimeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if let Some((hours, minutes)) = trimmed.split_once(':') {
            let hours: u32 = hours
                .parse()
                .map_err(|_| DaytimeError::InvalidFormat(raw.to_string()))?;
            let minutes: u32 = minutes
                .parse()
                .map_err(|_| DaytimeError::InvalidFormat(raw.to_string()))?;
            if minutes >= 60 {
                return Err(DaytimeError::InvalidFormat(raw.to_string()));
            }
            return Daytime::new(hours * 60 + minutes);
        }
        let total: u32 = trimmed
            .parse()
            .map_err(|_| DaytimeError::InvalidFormat(raw.to_string()))?;
        Daytime::new(total)
    }
}

impl fmt::Display for Daytime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for Daytime {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Daytime {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone)]
pub enum WeekRangeError {
    EndBeforeStart { start: NaiveDate, end: NaiveDate },
}

impl fmt::Display for WeekRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekRangeError::EndBeforeStart { start, end } => {
                write!(f, "week range end {end} precedes start {start}")
            }
        }
    }
}

impl std::error::Error for WeekRangeError {}

/// One operational week: seven days starting on a Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Week {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Week {
    /// The week containing `date`, aligned back to its Saturday.
    pub fn containing(date: NaiveDate) -> Week {
        let start = add_days(date, -(Weekday::of(date).index() as i64));
        Week {
            start_date: start,
            end_date: add_days(start, 6),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// The ordered, finite sequence of weeks covering a date interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Weeks {
    weeks: Vec<Week>,
}

impl Weeks {
    /// Cover `[start, end]` with whole Saturday-aligned weeks. Consecutive
    /// weeks are gapless: each week ends the day before the next one starts.
    pub fn between(start: NaiveDate, end: NaiveDate) -> Result<Weeks, WeekRangeError> {
        if end < start {
            return Err(WeekRangeError::EndBeforeStart { start, end });
        }
        let mut weeks = Vec::new();
        let mut week = Week::containing(start);
        while week.start_date <= end {
            weeks.push(week);
            week = Week::containing(add_days(week.end_date, 1));
        }
        Ok(Weeks { weeks })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Week> {
        self.weeks.iter()
    }

    pub fn as_slice(&self) -> &[Week] {
        &self.weeks
    }

    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }
}

impl<'a> IntoIterator for &'a Weeks {
    type Item = &'a Week;
    type IntoIter = std::slice::Iter<'a, Week>;

    fn into_iter(self) -> Self::IntoIter {
        self.weeks.iter()
    }
}
