//! Voting-window classification.
//!
//! The window is not persisted state: it is a pure function of the
//! wall-clock hour, recomputed on every request. Votes are accepted from
//! 06:00 (inclusive) to 18:00 (exclusive); results become visible at
//! 19:00.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// Hour (UTC) at which voting opens.
pub const VOTING_OPEN_HOUR: u32 = 6;
/// Hour (UTC) at which voting closes.
pub const VOTING_CLOSE_HOUR: u32 = 18;
/// Hour (UTC) at which results become visible.
pub const REVEAL_HOUR: u32 = 19;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WindowState {
    /// Before 06:00 -- voting has not opened yet.
    ClosedMorning,
    /// 06:00..18:00 -- votes are accepted.
    Open,
    /// 18:00..19:00 -- voting closed, results not yet revealed.
    ClosedPending,
    /// 19:00 onwards -- results are visible.
    ResultsAvailable,
}

impl WindowState {
    pub fn voting_open(self) -> bool {
        self == WindowState::Open
    }

    pub fn results_available(self) -> bool {
        self == WindowState::ResultsAvailable
    }
}

/// Classify an hour-of-day (0..=23) into the window state.
pub fn classify(hour: u32) -> WindowState {
    debug_assert!(hour < 24, "hour out of range: {hour}");
    if hour < VOTING_OPEN_HOUR {
        WindowState::ClosedMorning
    } else if hour < VOTING_CLOSE_HOUR {
        WindowState::Open
    } else if hour < REVEAL_HOUR {
        WindowState::ClosedPending
    } else {
        WindowState::ResultsAvailable
    }
}

/// The instant results become visible on the given day (19:00 UTC).
pub fn reveal_time(day: NaiveDate) -> DateTime<Utc> {
    day.and_hms_opt(REVEAL_HOUR, 0, 0)
        .expect("valid hour")
        .and_utc()
}

/// The instant voting opens on the given day (06:00 UTC).
pub fn voting_opens_at(day: NaiveDate) -> DateTime<Utc> {
    day.and_hms_opt(VOTING_OPEN_HOUR, 0, 0)
        .expect("valid hour")
        .and_utc()
}

/// The instant voting closes on the given day (18:00 UTC).
pub fn voting_closes_at(day: NaiveDate) -> DateTime<Utc> {
    day.and_hms_opt(VOTING_CLOSE_HOUR, 0, 0)
        .expect("valid hour")
        .and_utc()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn classifies_early_morning_as_closed() {
        assert_eq!(classify(0), WindowState::ClosedMorning);
        assert_eq!(classify(5), WindowState::ClosedMorning);
    }

    #[test]
    fn opens_exactly_at_six() {
        assert_eq!(classify(5), WindowState::ClosedMorning);
        assert_eq!(classify(6), WindowState::Open);
        assert!(classify(6).voting_open());
    }

    #[test]
    fn open_through_seventeen() {
        for hour in 6..18 {
            assert_eq!(classify(hour), WindowState::Open, "hour {hour}");
        }
    }

    #[test]
    fn closes_exactly_at_eighteen() {
        assert_eq!(classify(17), WindowState::Open);
        assert_eq!(classify(18), WindowState::ClosedPending);
        assert!(!classify(18).voting_open());
        assert!(!classify(18).results_available());
    }

    #[test]
    fn results_exactly_at_nineteen() {
        assert_eq!(classify(18), WindowState::ClosedPending);
        assert_eq!(classify(19), WindowState::ResultsAvailable);
        assert!(classify(19).results_available());
        assert_eq!(classify(23), WindowState::ResultsAvailable);
    }

    #[test]
    fn reveal_time_is_nineteen_hundred_utc() {
        let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let reveal = reveal_time(day);
        assert_eq!(reveal.to_rfc3339(), "2024-05-01T19:00:00+00:00");
    }

    #[test]
    fn window_bounds_are_ordered() {
        let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert!(voting_opens_at(day) < voting_closes_at(day));
        assert!(voting_closes_at(day) < reveal_time(day));
    }
}
