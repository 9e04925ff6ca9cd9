//! Time source injected into the Truck actor as its context.

use chrono::{Local, NaiveTime, Timelike};

/// Where registration timestamps come from.
///
/// `Fixed` exists so tests and replays get stable arrival times.
#[derive(Debug, Clone, Copy, Default)]
pub enum YardClock {
    #[default]
    System,
    Fixed(NaiveTime),
}

impl YardClock {
    /// Current wall-clock time truncated to the minute.
    pub fn now(&self) -> NaiveTime {
        let time = match self {
            YardClock::System => Local::now().time(),
            YardClock::Fixed(time) => *time,
        };
        NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time)
    }
}
