//! Animated per-field display state.
//!
//! A field keeps showing its previous text while a swap is pending; after a
//! fixed slide delay the new text replaces it. Scheduling a swap while one
//! is already in flight replaces the pending text, so the most recent value
//! is the one that settles.

use chrono::{DateTime, Duration, Local};

use crate::countdown::{Field, Remaining};
use crate::utils::format_field;

/// How long a field stays in its sliding state before the text swap.
pub const SLIDE_MS: i64 = 400;

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingSwap {
    text: String,
    due: DateTime<Local>,
}

/// Display state of a single countdown field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDisplay {
    shown: String,
    pending: Option<PendingSwap>,
}

impl FieldDisplay {
    fn new() -> Self {
        Self {
            shown: "--".to_owned(),
            pending: None,
        }
    }

    /// Schedules an animated swap when `value` formats differently from the
    /// displayed text. Re-rendering an unchanged value is a no-op, and a
    /// value already on its way in does not restart the slide.
    pub fn render(&mut self, value: u64, now: DateTime<Local>) -> bool {
        let formatted = format_field(value);
        if formatted == self.shown {
            return false;
        }
        if let Some(pending) = &self.pending {
            if pending.text == formatted {
                return false;
            }
        }
        self.pending = Some(PendingSwap {
            text: formatted,
            due: now + Duration::milliseconds(SLIDE_MS),
        });
        true
    }

    /// Applies a due swap; returns true when the displayed text changed.
    pub fn settle(&mut self, now: DateTime<Local>) -> bool {
        let due = match &self.pending {
            Some(pending) => now >= pending.due,
            None => false,
        };
        if due {
            if let Some(pending) = self.pending.take() {
                self.shown = pending.text;
            }
        }
        due
    }

    pub fn text(&self) -> &str {
        &self.shown
    }

    pub fn is_sliding(&self) -> bool {
        self.pending.is_some()
    }

    /// Progress of the in-flight slide in `0.0..=1.0`.
    pub fn slide_progress(&self, now: DateTime<Local>) -> Option<f32> {
        self.pending.as_ref().map(|pending| {
            let left = (pending.due - now).num_milliseconds().clamp(0, SLIDE_MS);
            1.0 - left as f32 / SLIDE_MS as f32
        })
    }

    fn next_due(&self) -> Option<DateTime<Local>> {
        self.pending.as_ref().map(|pending| pending.due)
    }
}

/// The four field displays making up the countdown readout.
#[derive(Debug)]
pub struct CountdownDisplay {
    fields: [FieldDisplay; 4],
}

impl CountdownDisplay {
    pub fn new() -> Self {
        Self {
            fields: [
                FieldDisplay::new(),
                FieldDisplay::new(),
                FieldDisplay::new(),
                FieldDisplay::new(),
            ],
        }
    }

    pub fn field(&self, field: Field) -> &FieldDisplay {
        &self.fields[field as usize]
    }

    /// Feeds a fresh remaining-time computation to every field.
    pub fn render(&mut self, remaining: &Remaining, now: DateTime<Local>) {
        for field in Field::ALL {
            self.fields[field as usize].render(remaining.field(field), now);
        }
    }

    /// Applies all swaps that have come due.
    pub fn settle(&mut self, now: DateTime<Local>) {
        for field in &mut self.fields {
            field.settle(now);
        }
    }

    /// Earliest pending swap deadline, if any field is sliding.
    pub fn next_transition(&self) -> Option<DateTime<Local>> {
        self.fields.iter().filter_map(FieldDisplay::next_due).min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn start() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 10, 30, 12, 0, 0).unwrap()
    }

    #[test]
    fn a_changed_value_slides_in_after_the_delay() {
        let mut field = FieldDisplay::new();
        let now = start();
        assert!(field.render(5, now));
        assert!(field.is_sliding());
        assert_eq!(field.text(), "--");

        assert!(!field.settle(now + Duration::milliseconds(399)));
        assert_eq!(field.text(), "--");

        assert!(field.settle(now + Duration::milliseconds(400)));
        assert_eq!(field.text(), "05");
        assert!(!field.is_sliding());
    }

    #[test]
    fn rendering_a_settled_value_again_is_a_no_op() {
        let mut field = FieldDisplay::new();
        let now = start();
        field.render(5, now);
        field.settle(now + Duration::milliseconds(400));

        assert!(!field.render(5, now + Duration::seconds(1)));
        assert!(!field.is_sliding());
        assert_eq!(field.text(), "05");
    }

    #[test]
    fn rendering_an_in_flight_value_does_not_restart_the_slide() {
        let mut field = FieldDisplay::new();
        let now = start();
        field.render(5, now);
        assert!(!field.render(5, now + Duration::milliseconds(200)));

        assert!(field.settle(now + Duration::milliseconds(400)));
        assert_eq!(field.text(), "05");
    }

    #[test]
    fn the_most_recent_value_wins_when_swaps_overlap() {
        let mut field = FieldDisplay::new();
        let now = start();
        field.render(5, now);
        assert!(field.render(6, now + Duration::milliseconds(100)));

        // The replaced swap's deadline no longer applies.
        assert!(!field.settle(now + Duration::milliseconds(400)));
        assert_eq!(field.text(), "--");

        assert!(field.settle(now + Duration::milliseconds(500)));
        assert_eq!(field.text(), "06");
    }

    #[test]
    fn wide_values_settle_untruncated() {
        let mut field = FieldDisplay::new();
        let now = start();
        field.render(123, now);
        field.settle(now + Duration::milliseconds(400));
        assert_eq!(field.text(), "123");
    }

    #[test]
    fn slide_progress_runs_from_zero_to_one() {
        let mut field = FieldDisplay::new();
        let now = start();
        assert_eq!(field.slide_progress(now), None);

        field.render(5, now);
        assert_eq!(field.slide_progress(now), Some(0.0));
        assert_eq!(field.slide_progress(now + Duration::milliseconds(200)), Some(0.5));
        assert_eq!(field.slide_progress(now + Duration::milliseconds(400)), Some(1.0));
    }

    #[test]
    fn the_board_tracks_the_earliest_pending_swap() {
        let mut display = CountdownDisplay::new();
        let now = start();
        assert_eq!(display.next_transition(), None);

        let remaining = Remaining {
            days: 1,
            hours: 0,
            minutes: 0,
            seconds: 0,
        };
        display.render(&remaining, now);
        assert_eq!(
            display.next_transition(),
            Some(now + Duration::milliseconds(SLIDE_MS))
        );

        display.settle(now + Duration::milliseconds(SLIDE_MS));
        assert_eq!(display.next_transition(), None);
        assert_eq!(display.field(Field::Days).text(), "01");
        assert_eq!(display.field(Field::Hours).text(), "00");
        assert_eq!(display.field(Field::Seconds).text(), "00");
    }
}
