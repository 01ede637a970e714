// Countdown state machine and remaining-time decomposition
pub mod clock;
pub mod display;
pub mod ticker;

use chrono::{DateTime, Local};

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Message shown once the countdown is over.
pub const ENDED_MESSAGE: &str = "🎉 Event Ended!";

/// One of the four displayed time units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Days, Field::Hours, Field::Minutes, Field::Seconds];

    pub fn label(self) -> &'static str {
        match self {
            Field::Days => "Days",
            Field::Hours => "Hours",
            Field::Minutes => "Minutes",
            Field::Seconds => "Seconds",
        }
    }
}

/// Time left until the target, split into display fields. Hours, minutes and
/// seconds stay inside their natural modulus; days are unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remaining {
    pub days: u64,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl Remaining {
    pub fn field(&self, field: Field) -> u64 {
        match field {
            Field::Days => self.days,
            Field::Hours => u64::from(self.hours),
            Field::Minutes => u64::from(self.minutes),
            Field::Seconds => u64::from(self.seconds),
        }
    }
}

fn split_distance(distance_ms: i64) -> Remaining {
    Remaining {
        days: (distance_ms / MS_PER_DAY) as u64,
        hours: ((distance_ms % MS_PER_DAY) / MS_PER_HOUR) as u32,
        minutes: ((distance_ms % MS_PER_HOUR) / MS_PER_MINUTE) as u32,
        seconds: ((distance_ms % MS_PER_MINUTE) / MS_PER_SECOND) as u32,
    }
}

/// Countdown to a fixed target instant.
///
/// Once the target has passed the countdown is over for good: every later
/// tick keeps returning `None`, whatever instant it is handed.
#[derive(Debug)]
pub struct Countdown {
    target: DateTime<Local>,
    ended: bool,
}

impl Countdown {
    pub fn new(target: DateTime<Local>) -> Self {
        Self {
            target,
            ended: false,
        }
    }

    pub fn target(&self) -> DateTime<Local> {
        self.target
    }

    pub fn has_ended(&self) -> bool {
        self.ended
    }

    /// Recomputes the remaining time at `now`. A distance of exactly zero
    /// ends the countdown on that same tick.
    pub fn tick(&mut self, now: DateTime<Local>) -> Option<Remaining> {
        if self.ended {
            return None;
        }
        let distance = (self.target - now).num_milliseconds();
        if distance <= 0 {
            self.ended = true;
            return None;
        }
        Some(split_distance(distance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn target() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 10, 31, 23, 59, 59).unwrap()
    }

    #[test]
    fn fields_stay_in_bounds_and_account_for_the_distance() {
        let mut countdown = Countdown::new(target());
        let distances: [i64; 8] = [
            1,
            999,
            1_000,
            59_999,
            3_600_000,
            86_399_999,
            86_400_000,
            9_876_543_210,
        ];
        for &distance in &distances {
            let now = target() - Duration::milliseconds(distance);
            let remaining = countdown.tick(now).expect("countdown still running");
            assert!(remaining.hours < 24);
            assert!(remaining.minutes < 60);
            assert!(remaining.seconds < 60);
            let rebuilt = remaining.days as i64 * MS_PER_DAY
                + i64::from(remaining.hours) * MS_PER_HOUR
                + i64::from(remaining.minutes) * MS_PER_MINUTE
                + i64::from(remaining.seconds) * MS_PER_SECOND;
            assert!(rebuilt <= distance, "rebuilt {rebuilt} > distance {distance}");
            assert!(distance < rebuilt + 1_000, "lost more than a second at {distance}");
        }
    }

    #[test]
    fn one_full_day_before_the_target() {
        let mut countdown = Countdown::new(target());
        let now = Local.with_ymd_and_hms(2025, 10, 30, 23, 59, 59).unwrap();
        assert_eq!(
            countdown.tick(now),
            Some(Remaining {
                days: 1,
                hours: 0,
                minutes: 0,
                seconds: 0,
            })
        );
    }

    #[test]
    fn a_distance_of_exactly_zero_ends_on_that_tick() {
        let mut countdown = Countdown::new(target());
        assert_eq!(countdown.tick(target()), None);
        assert!(countdown.has_ended());
    }

    #[test]
    fn ended_is_terminal_even_if_the_clock_goes_backwards() {
        let mut countdown = Countdown::new(target());
        assert_eq!(countdown.tick(target() + Duration::seconds(5)), None);
        assert!(countdown.has_ended());
        // Later instants stay ended, and so does an earlier one.
        assert_eq!(countdown.tick(target() + Duration::days(1)), None);
        assert_eq!(countdown.tick(target() - Duration::days(1)), None);
        assert!(countdown.has_ended());
    }

    #[test]
    fn remaining_exposes_every_field_by_name() {
        let remaining = Remaining {
            days: 123,
            hours: 4,
            minutes: 5,
            seconds: 6,
        };
        assert_eq!(remaining.field(Field::Days), 123);
        assert_eq!(remaining.field(Field::Hours), 4);
        assert_eq!(remaining.field(Field::Minutes), 5);
        assert_eq!(remaining.field(Field::Seconds), 6);
    }
}
