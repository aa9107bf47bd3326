//! Frame pacing and minute ticks for the simulator loop.

use std::time::Duration;

use chrono::{NaiveDateTime, Timelike};

/// Target frame time (~20 FPS).
pub const FRAME_TIME: Duration = Duration::from_millis(50);

/// Emits a tick whenever the wall-clock minute changes.
pub struct MinuteTicker {
    last: Option<(u32, u32)>,
}

impl MinuteTicker {
    /// Ticker primed with `now`, so the first call with the same minute is quiet.
    pub fn starting_at(now: &NaiveDateTime) -> Self {
        Self {
            last: Some((now.hour(), now.minute())),
        }
    }

    /// Returns true once per new minute.
    pub fn poll(
        &mut self,
        now: &NaiveDateTime,
    ) -> bool {
        let current = (now.hour(), now.minute());
        if self.last == Some(current) {
            return false;
        }
        self.last = Some(current);
        true
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(
        hour: u32,
        minute: u32,
        second: u32,
    ) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 3)
            .unwrap()
            .and_hms_opt(hour, minute, second)
            .unwrap()
    }

    #[test]
    fn test_ticks_once_per_minute() {
        let mut ticker = MinuteTicker::starting_at(&at(14, 29, 10));
        assert!(!ticker.poll(&at(14, 29, 59)));
        assert!(ticker.poll(&at(14, 30, 0)));
        assert!(!ticker.poll(&at(14, 30, 1)));
        assert!(ticker.poll(&at(15, 30, 0)));
    }
}
