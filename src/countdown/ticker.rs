// Recurring tick schedule owned by the renderer

use chrono::{DateTime, Duration, Local};

/// Fixed-period schedule. The first poll fires immediately so the display is
/// populated before the first full period has elapsed.
#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    next_due: Option<DateTime<Local>>,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    pub fn every_second() -> Self {
        Self::new(Duration::seconds(1))
    }

    /// True when a tick is due at `now`; firing advances the schedule. After
    /// a stall the missed slots are skipped rather than burst-fired.
    pub fn due(&mut self, now: DateTime<Local>) -> bool {
        match self.next_due {
            None => {
                self.next_due = Some(now + self.period);
                true
            }
            Some(due) if now >= due => {
                let mut next = due + self.period;
                if next <= now {
                    next = now + self.period;
                }
                self.next_due = Some(next);
                true
            }
            Some(_) => false,
        }
    }

    /// When the next tick is scheduled; `None` until the first poll.
    pub fn next_due(&self) -> Option<DateTime<Local>> {
        self.next_due
    }
}
