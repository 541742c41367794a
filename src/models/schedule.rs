use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use super::{Locale, PrayerName};
use crate::error::EngineError;
use crate::utils::format::format_hms;

/// One calendar day's six prayer markers at the fixed location.
///
/// Only constructed through [`PrayerSchedule::new`], which enforces
/// `fajr < sunrise < dhuhr < asr < maghrib < isha`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerSchedule {
    date: NaiveDate,
    times: [NaiveTime; 6],
}

impl PrayerSchedule {
    /// `times` must be in `PrayerName::ALL` order.
    pub fn new(date: NaiveDate, times: [NaiveTime; 6]) -> Result<Self, EngineError> {
        for (i, pair) in times.windows(2).enumerate() {
            if pair[0] >= pair[1] {
                return Err(EngineError::ScheduleComputation {
                    date,
                    reason: format!(
                        "{} ({}) is not before {} ({})",
                        PrayerName::ALL[i],
                        pair[0].format("%H:%M:%S"),
                        PrayerName::ALL[i + 1],
                        pair[1].format("%H:%M:%S"),
                    ),
                });
            }
        }
        Ok(Self { date, times })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self, name: PrayerName) -> NaiveTime {
        self.times[Self::index(name)]
    }

    pub fn fajr(&self) -> NaiveTime {
        self.time(PrayerName::Fajr)
    }

    /// Exactly six events in chronological order.
    pub fn events(&self) -> impl Iterator<Item = PrayerEvent> + '_ {
        PrayerName::ALL
            .iter()
            .zip(self.times.iter())
            .map(|(name, time)| PrayerEvent {
                name: *name,
                instant: self.date.and_time(*time),
            })
    }

    /// Same wall-clock times carried onto another day. Used to keep a
    /// last-known-good schedule alive when a fresh computation fails.
    pub fn rebased(&self, date: NaiveDate) -> Self {
        Self {
            date,
            times: self.times,
        }
    }

    fn index(name: PrayerName) -> usize {
        match name {
            PrayerName::Fajr => 0,
            PrayerName::Sunrise => 1,
            PrayerName::Dhuhr => 2,
            PrayerName::Asr => 3,
            PrayerName::Maghrib => 4,
            PrayerName::Isha => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrayerEvent {
    pub name: PrayerName,
    pub instant: NaiveDateTime,
}

impl PrayerEvent {
    pub fn display_name(&self, locale: Locale) -> &'static str {
        self.name.display_name(locale)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextPrayerState {
    pub event: PrayerEvent,
    pub remaining: Duration,
}

impl NextPrayerState {
    pub fn remaining_secs(&self) -> i64 {
        self.remaining.num_seconds()
    }

    pub fn remaining_hms(&self) -> String {
        format_hms(self.remaining_secs())
    }
}
