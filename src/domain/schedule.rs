// ============================================================================
// Flight Schedule
// Static lookup table over flight numbers and departure times
// ============================================================================

use chrono::{NaiveTime, TimeDelta, Timelike};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Initial capacity of an empty schedule
pub const DEFAULT_SCHEDULE_CAPACITY: usize = 20;

// ============================================================================
// Value Objects
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FlightNumber(pub u32);

impl fmt::Display for FlightNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Departure time at minute resolution (hour 0-23, minute 0-59).
///
/// Seconds and sub-second parts are always zero. Values coming from a
/// `NaiveTime` (including deserialized ones) are truncated to the minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "NaiveTime", into = "NaiveTime"))]
pub struct DepartureTime(NaiveTime);

impl DepartureTime {
    /// Create from hour and minute.
    ///
    /// # Errors
    /// Returns `InvalidTime` if `hour > 23` or `minute > 59`.
    pub fn new(hour: u32, minute: u32) -> ScheduleResult<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or(ScheduleError::InvalidTime { hour, minute })
    }

    /// Hour of day (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Minute of the hour (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }
}

impl From<NaiveTime> for DepartureTime {
    fn from(time: NaiveTime) -> Self {
        let minutes = i64::from(time.hour() * 60 + time.minute());
        Self(NaiveTime::MIN + TimeDelta::minutes(minutes))
    }
}

impl From<DepartureTime> for NaiveTime {
    fn from(departure: DepartureTime) -> Self {
        departure.0
    }
}

impl fmt::Display for DepartureTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Errors from schedule lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleError {
    /// No record departs at the requested time
    NoFlightAt(DepartureTime),
    /// No record carries the requested flight number
    UnknownFlight(FlightNumber),
    /// Hour or minute outside the clock range
    InvalidTime { hour: u32, minute: u32 },
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleError::NoFlightAt(time) => write!(f, "no flight departs at {}", time),
            ScheduleError::UnknownFlight(number) => write!(f, "unknown flight {}", number),
            ScheduleError::InvalidTime { hour, minute } => {
                write!(f, "invalid departure time {}:{}", hour, minute)
            },
        }
    }
}

impl std::error::Error for ScheduleError {}

pub type ScheduleResult<T> = Result<T, ScheduleError>;

// ============================================================================
// Schedule
// ============================================================================

/// A single row of the schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FlightRecord {
    pub number: FlightNumber,
    pub departure: DepartureTime,
}

/// Flight-number/departure-time table with linear-scan lookups.
///
/// Records keep insertion order. Lookups return the first matching record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FlightSchedule {
    records: Vec<FlightRecord>,
}

impl FlightSchedule {
    /// Create an empty schedule.
    pub fn new() -> Self {
        Self {
            records: Vec::with_capacity(DEFAULT_SCHEDULE_CAPACITY),
        }
    }

    /// Build a schedule from `(number, departure)` pairs, keeping their order.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = (FlightNumber, DepartureTime)>,
    {
        let mut schedule = Self::new();
        for (number, departure) in records {
            schedule.insert(number, departure);
        }
        schedule
    }

    /// Append a record.
    pub fn insert(&mut self, number: FlightNumber, departure: DepartureTime) {
        self.records.push(FlightRecord { number, departure });
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the schedule has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, FlightRecord> {
        self.records.iter()
    }

    /// Flight departing at exactly `departure`.
    pub fn flight_at(&self, departure: &DepartureTime) -> ScheduleResult<FlightNumber> {
        self.records
            .iter()
            .find(|record| record.departure == *departure)
            .map(|record| record.number)
            .ok_or_else(|| {
                tracing::debug!("No flight departs at {}", departure);
                ScheduleError::NoFlightAt(*departure)
            })
    }

    /// Departure time of `number`.
    pub fn departure_of(&self, number: FlightNumber) -> ScheduleResult<DepartureTime> {
        self.records
            .iter()
            .find(|record| record.number == number)
            .map(|record| record.departure)
            .ok_or_else(|| {
                tracing::debug!("Unknown flight {}", number);
                ScheduleError::UnknownFlight(number)
            })
    }

    /// Flights whose departure hour lies in `from_hour..=to_hour`, in table
    /// order.
    pub fn departing_between(&self, from_hour: u32, to_hour: u32) -> Vec<FlightNumber> {
        self.records
            .iter()
            .filter(|record| (from_hour..=to_hour).contains(&record.departure.hour()))
            .map(|record| record.number)
            .collect()
    }
}

impl fmt::Display for FlightSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, " TableFlight")?;
        for record in &self.records {
            writeln!(f, " Flight {} time {}", record.number, record.departure)?;
        }
        Ok(())
    }
}
