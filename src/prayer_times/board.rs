use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use super::calculator::{PrayerCalculator, ScheduleSource, FIXED_LOCATION};
use super::selector::select_next;
use super::tracker::NextPrayerTracker;
use crate::config::AppConfig;
use crate::error::EngineError;
use crate::models::{Locale, NextPrayerState, PrayerName, PrayerSchedule};
use crate::utils::format::format_time;
use crate::utils::hijri::{gregorian_label, hijri_label};

#[derive(Debug, Clone, Serialize)]
pub struct NextPrayerView {
    pub prayer: PrayerName,
    pub label: String,
    pub at: String,
    pub remaining: String,
    pub remaining_secs: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PrayerRow {
    pub prayer: PrayerName,
    pub label: String,
    pub time: String,
    pub passed: bool,
    pub highlighted: bool,
}

/// Read-only snapshot handed to the widgets and CLI printers.
#[derive(Debug, Clone, Serialize)]
pub struct BoardView {
    pub location: String,
    pub locale: Locale,
    pub date: Option<NaiveDate>,
    pub gregorian: String,
    pub hijri: String,
    pub next: Option<NextPrayerView>,
    pub rows: Vec<PrayerRow>,
}

/// Owns today's schedule and the stabilized next prayer. Each tick runs
/// the schedule source (only when the date changed), then the selector,
/// then the tracker.
pub struct PrayerBoard<S: ScheduleSource> {
    source: S,
    locale: Locale,
    hijri_offset: i32,
    today: Option<NaiveDate>,
    schedule: Option<PrayerSchedule>,
    tomorrow_fajr: Option<NaiveDateTime>,
    tracker: NextPrayerTracker,
    // Cleared when the last tick had nothing to select from
    selectable: bool,
    last_tick: Option<NaiveDateTime>,
    gregorian: String,
    hijri: String,
}

impl<S: ScheduleSource> PrayerBoard<S> {
    pub fn new(source: S, locale: Locale, hijri_offset: i32, tracker: NextPrayerTracker) -> Self {
        Self {
            source,
            locale,
            hijri_offset,
            today: None,
            schedule: None,
            tomorrow_fajr: None,
            tracker,
            selectable: false,
            last_tick: None,
            gregorian: String::new(),
            hijri: String::new(),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
        if let Some(date) = self.today {
            self.refresh_labels(date);
        }
    }

    pub fn schedule(&self) -> Option<&PrayerSchedule> {
        self.schedule.as_ref()
    }

    /// The stabilized next prayer from the last tick, if there was one.
    pub fn next(&self) -> Option<&NextPrayerState> {
        if self.selectable {
            self.tracker.current()
        } else {
            None
        }
    }

    /// Load `date`'s schedule and labels. When the computation fails the
    /// last good schedule is carried over onto `date`; an unsupported date
    /// leaves the board empty.
    pub fn refresh_day(&mut self, date: NaiveDate) {
        log::debug!("Loading prayer schedule for {}", date);

        match self.source.schedule_for(date) {
            Ok(schedule) => self.schedule = Some(schedule),
            Err(e @ EngineError::UnsupportedDate { .. }) => {
                log::warn!("{}", e);
                self.schedule = None;
            }
            Err(e) => {
                log::warn!("{}", e);
                self.schedule = self.schedule.take().map(|s| s.rebased(date));
                if self.schedule.is_some() {
                    log::warn!("Keeping last known schedule for {}", date);
                }
            }
        }

        let tomorrow = date.succ_opt();
        self.tomorrow_fajr = match tomorrow.map(|d| self.source.schedule_for(d)) {
            Some(Ok(next_day)) => Some(next_day.date().and_time(next_day.fajr())),
            Some(Err(e @ EngineError::UnsupportedDate { .. })) => {
                log::warn!("{}", e);
                None
            }
            Some(Err(e)) => {
                log::warn!("{}", e);
                self.fallback_tomorrow_fajr(tomorrow)
            }
            None => None,
        };

        self.today = Some(date);
        self.refresh_labels(date);
    }

    fn fallback_tomorrow_fajr(&self, tomorrow: Option<NaiveDate>) -> Option<NaiveDateTime> {
        let schedule = self.schedule.as_ref()?;
        Some(tomorrow?.and_time(schedule.fajr()))
    }

    fn refresh_labels(&mut self, date: NaiveDate) {
        self.gregorian = gregorian_label(date, self.locale);
        self.hijri = hijri_label(date, self.hijri_offset, self.locale);
    }

    /// Run one tick at `now` and return the stabilized next prayer.
    pub fn tick(&mut self, now: NaiveDateTime) -> Option<&NextPrayerState> {
        if self.today != Some(now.date()) {
            self.refresh_day(now.date());
        }

        self.selectable = match select_next(self.schedule.as_ref(), self.tomorrow_fajr, now) {
            Ok(candidate) => {
                self.tracker.observe(candidate, now);
                true
            }
            Err(e) => {
                log::debug!("{}", e);
                false
            }
        };
        self.last_tick = Some(now);
        self.next()
    }

    pub fn view(&self) -> BoardView {
        let location = self.source.location();
        let location = match self.locale {
            Locale::Ar => location.name_ar.to_string(),
            Locale::En | Locale::Fr => location.name.to_string(),
        };

        let next = self.next().map(|n| NextPrayerView {
            prayer: n.event.name,
            label: n.event.display_name(self.locale).to_string(),
            at: format_time(n.event.instant.time()),
            remaining: n.remaining_hms(),
            remaining_secs: n.remaining_secs(),
        });

        let rows = self
            .schedule
            .iter()
            .flat_map(|s| s.events())
            .map(|event| PrayerRow {
                prayer: event.name,
                label: event.display_name(self.locale).to_string(),
                time: format_time(event.instant.time()),
                passed: self.last_tick.is_some_and(|now| event.instant <= now),
                highlighted: next.as_ref().is_some_and(|n| n.prayer == event.name),
            })
            .collect();

        BoardView {
            location,
            locale: self.locale,
            date: self.today,
            gregorian: self.gregorian.clone(),
            hijri: self.hijri.clone(),
            next,
            rows,
        }
    }
}

impl PrayerBoard<PrayerCalculator> {
    /// Board for the fixed location with display and engine settings from
    /// `config`.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Ok(Self::new(
            PrayerCalculator::new(FIXED_LOCATION)?,
            config.display.locale,
            config.display.hijri_offset,
            NextPrayerTracker::new(config.engine.dwell()),
        ))
    }
}
