use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::schema::tournament;

/// Lifecycle of a tournament, derived from the clock on every read.
///
/// The value is never persisted; serialization uses the same
/// single-character codes as the stored enums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TournamentStatus {
    #[serde(rename = "O")]
    Open,
    #[serde(rename = "G")]
    Playing,
    #[serde(rename = "C")]
    Closed,
}

impl TournamentStatus {
    pub fn code(&self) -> &'static str {
        match self {
            TournamentStatus::Open => "O",
            TournamentStatus::Playing => "G",
            TournamentStatus::Closed => "C",
        }
    }
}

/// Registration still open before `finish_register_date`, playing until
/// `finish_date`, closed afterwards. Both boundary instants resolve to the
/// later window, so the status is monotonic in `now`.
pub fn status_at(
    finish_register_date: NaiveDateTime,
    finish_date: NaiveDateTime,
    now: NaiveDateTime,
) -> TournamentStatus {
    if now < finish_register_date {
        TournamentStatus::Open
    } else if now < finish_date {
        TournamentStatus::Playing
    } else {
        TournamentStatus::Closed
    }
}

impl tournament::Model {
    pub fn status_at(&self, now: NaiveDateTime) -> TournamentStatus {
        status_at(self.finish_register_date, self.finish_date, now)
    }

    pub fn status(&self) -> TournamentStatus {
        self.status_at(chrono::Utc::now().naive_utc())
    }
}

#[cfg(test)]
mod test {
    use chrono::NaiveDate;

    use super::*;

    fn dt(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_open_before_registration_closes() {
        assert_eq!(status_at(dt(10, 0), dt(20, 0), dt(5, 12)), TournamentStatus::Open);
    }

    #[test]
    fn test_playing_between_registration_close_and_finish() {
        assert_eq!(status_at(dt(10, 0), dt(20, 0), dt(15, 12)), TournamentStatus::Playing);
    }

    #[test]
    fn test_closed_after_finish() {
        assert_eq!(status_at(dt(10, 0), dt(20, 0), dt(25, 0)), TournamentStatus::Closed);
    }

    #[test]
    fn test_boundaries_resolve_to_the_later_window() {
        assert_eq!(status_at(dt(10, 0), dt(20, 0), dt(10, 0)), TournamentStatus::Playing);
        assert_eq!(status_at(dt(10, 0), dt(20, 0), dt(20, 0)), TournamentStatus::Closed);
    }

    #[test]
    fn test_status_is_monotonic_in_time() {
        let finish_register = dt(10, 0);
        let finish = dt(20, 0);

        let mut previous = None;
        for day in 1..30 {
            let status = status_at(finish_register, finish, dt(day, 6));
            if let Some(previous) = previous {
                let order = |s| match s {
                    TournamentStatus::Open => 0,
                    TournamentStatus::Playing => 1,
                    TournamentStatus::Closed => 2,
                };
                assert!(order(status) >= order(previous));
            }
            previous = Some(status);
        }
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(TournamentStatus::Open.code(), "O");
        assert_eq!(TournamentStatus::Playing.code(), "G");
        assert_eq!(TournamentStatus::Closed.code(), "C");
        assert_eq!(serde_json::to_string(&TournamentStatus::Playing).unwrap(), "\"G\"");
    }
}
