use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};

/// Source of wall-clock time for the countdown.
pub trait ClockSource {
    fn now(&self) -> NaiveDateTime;
}

/// Local time of the machine.
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Time left until the target, split for display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Countdown {
    /// Whole seconds left until `target`, clamped at zero once it has passed.
    pub fn until(target: NaiveDateTime, now: NaiveDateTime) -> Self {
        let left = (target - now).num_seconds().max(0);
        Self {
            days: left / 86_400,
            hours: left % 86_400 / 3_600,
            minutes: left % 3_600 / 60,
            seconds: left % 60,
        }
    }

    pub fn is_over(&self) -> bool {
        *self == Self::default()
    }

    /// `DD:HH:MM:SS`, with days widening past 99.
    pub fn display(&self) -> String {
        format!(
            "{:02}:{:02}:{:02}:{:02}",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Midnight on the first of January following `now`.
pub fn next_new_year(now: NaiveDateTime) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(now.year() + 1, 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or(NaiveDateTime::MAX)
}
