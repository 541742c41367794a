use chrono::{Duration, FixedOffset, NaiveDateTime, Utc};
#[cfg(test)]
use std::sync::Mutex;

/// Source of the current wall-clock time at the prayer location.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the system clock and shifts it to a fixed UTC offset.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.offset).naive_local()
    }
}

/// Clock that only moves when told to.
#[cfg(test)]
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<NaiveDateTime>,
}

#[cfg(test)]
impl ManualClock {
    pub fn new(start: NaiveDateTime) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn set(&self, to: NaiveDateTime) {
        if let Ok(mut now) = self.now.lock() {
            *now = to;
        }
    }

    pub fn advance(&self, by: Duration) {
        if let Ok(mut now) = self.now.lock() {
            *now += by;
        }
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        match self.now.lock() {
            Ok(now) => *now,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

/// Time left until the next local midnight after `now`.
pub fn until_midnight(now: NaiveDateTime) -> Duration {
    let next_day = now.date().succ_opt().unwrap_or(now.date());
    let midnight = next_day.and_hms_opt(0, 0, 0).unwrap_or(now);
    (midnight - now).max(Duration::zero())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 14)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn manual_clock_moves_on_demand() {
        let clock = ManualClock::new(at(12, 0, 0));
        assert_eq!(clock.now(), at(12, 0, 0));
        clock.advance(Duration::seconds(90));
        assert_eq!(clock.now(), at(12, 1, 30));
        clock.set(at(23, 0, 0));
        assert_eq!(clock.now(), at(23, 0, 0));
    }

    #[test]
    fn midnight_deadline() {
        assert_eq!(until_midnight(at(23, 59, 0)), Duration::seconds(60));
        assert_eq!(until_midnight(at(0, 0, 0)), Duration::hours(24));
    }
}
