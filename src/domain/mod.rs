// ============================================================================
// Domain Models Module
// Construction parameters and the flight schedule lookup table
// ============================================================================

pub mod config;
pub mod schedule;

pub use config::VectorConfig;
pub use schedule::{
    DepartureTime, FlightNumber, FlightRecord, FlightSchedule, ScheduleError, ScheduleResult,
};
