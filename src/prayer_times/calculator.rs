use anyhow::{anyhow, Result};
use chrono::{Datelike, FixedOffset, NaiveDate, NaiveTime};
use salah::prelude::*;

use crate::error::EngineError;
use crate::models::PrayerSchedule;

pub const MIN_SUPPORTED_YEAR: i32 = 2000;
pub const MAX_SUPPORTED_YEAR: i32 = 2100;

/// A place the schedule is computed for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub name: &'static str,
    pub name_ar: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    /// Minutes east of UTC.
    pub tz_offset_minutes: i32,
    pub calc_method: &'static str,
    pub madhab: &'static str,
}

/// The board always shows this location.
pub const FIXED_LOCATION: Location = Location {
    name: "Tripoli, Lebanon",
    name_ar: "طرابلس، لبنان",
    latitude: 34.4367,
    longitude: 35.8497,
    tz_offset_minutes: 120,
    calc_method: "MuslimWorldLeague",
    madhab: "Shafi",
};

impl Location {
    pub fn offset(&self) -> Result<FixedOffset> {
        FixedOffset::east_opt(self.tz_offset_minutes * 60)
            .ok_or_else(|| anyhow!("Invalid timezone offset: {}", self.tz_offset_minutes))
    }
}

/// Anything that can hand out a day's schedule.
pub trait ScheduleSource {
    fn schedule_for(&self, date: NaiveDate) -> Result<PrayerSchedule, EngineError>;

    fn location(&self) -> &Location;
}

pub struct PrayerCalculator {
    location: Location,
    offset: FixedOffset,
}

impl PrayerCalculator {
    pub fn new(location: Location) -> Result<Self> {
        // Validate method + madhab early
        parse_method(location.calc_method)?;
        parse_madhab(location.madhab)?;
        Ok(Self {
            offset: location.offset()?,
            location,
        })
    }

    /// Compute the six markers for `date` in the location's local time.
    pub fn get_schedule(&self, date: NaiveDate) -> Result<PrayerSchedule, EngineError> {
        if !(MIN_SUPPORTED_YEAR..=MAX_SUPPORTED_YEAR).contains(&date.year()) {
            return Err(EngineError::UnsupportedDate {
                date,
                min_year: MIN_SUPPORTED_YEAR,
                max_year: MAX_SUPPORTED_YEAR,
            });
        }

        let computation_error = |reason: String| EngineError::ScheduleComputation { date, reason };

        let coords = Coordinates::new(self.location.latitude, self.location.longitude);
        let method = parse_method(self.location.calc_method)
            .map_err(|e| computation_error(e.to_string()))?;
        let madhab =
            parse_madhab(self.location.madhab).map_err(|e| computation_error(e.to_string()))?;
        let params = Configuration::with(method, madhab);

        let times = salah::prelude::PrayerSchedule::new()
            .on(date)
            .for_location(coords)
            .with_configuration(params)
            .calculate()
            .map_err(|e| computation_error(format!("Prayer calculation failed: {}", e)))?;

        let offset = self.offset;
        let to_local = |utc: chrono::DateTime<chrono::Utc>| -> NaiveTime {
            utc.with_timezone(&offset).time()
        };

        PrayerSchedule::new(
            date,
            [
                to_local(times.time(Prayer::Fajr)),
                to_local(times.time(Prayer::Sunrise)),
                to_local(times.time(Prayer::Dhuhr)),
                to_local(times.time(Prayer::Asr)),
                to_local(times.time(Prayer::Maghrib)),
                to_local(times.time(Prayer::Isha)),
            ],
        )
    }
}

impl ScheduleSource for PrayerCalculator {
    fn schedule_for(&self, date: NaiveDate) -> Result<PrayerSchedule, EngineError> {
        self.get_schedule(date)
    }

    fn location(&self) -> &Location {
        &self.location
    }
}

fn parse_method(s: &str) -> Result<Method> {
    match s {
        "MuslimWorldLeague" => Ok(Method::MuslimWorldLeague),
        "Egyptian" => Ok(Method::Egyptian),
        "Karachi" => Ok(Method::Karachi),
        "UmmAlQura" => Ok(Method::UmmAlQura),
        "Dubai" => Ok(Method::Dubai),
        "MoonsightingCommittee" => Ok(Method::MoonsightingCommittee),
        "NorthAmerica" => Ok(Method::NorthAmerica),
        "Kuwait" => Ok(Method::Kuwait),
        "Qatar" => Ok(Method::Qatar),
        "Singapore" => Ok(Method::Singapore),
        "Tehran" => Ok(Method::Tehran),
        "Turkey" => Ok(Method::Turkey),
        "Other" => Ok(Method::Other),
        _ => Err(anyhow!("Unknown calculation method: '{}'", s)),
    }
}

fn parse_madhab(s: &str) -> Result<Madhab> {
    match s {
        "Hanafi" => Ok(Madhab::Hanafi),
        "Shafi" | "Shafi'i" => Ok(Madhab::Shafi),
        _ => Err(anyhow!("Unknown madhab: '{}'", s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PrayerName;
    use chrono::Duration;

    fn calc() -> PrayerCalculator {
        PrayerCalculator::new(FIXED_LOCATION).unwrap()
    }

    #[test]
    fn rejects_unknown_method() {
        let mut loc = FIXED_LOCATION;
        loc.calc_method = "Lunar";
        assert!(PrayerCalculator::new(loc).is_err());
    }

    #[test]
    fn times_are_strictly_increasing_across_range() {
        let calc = calc();
        let mut date = NaiveDate::from_ymd_opt(MIN_SUPPORTED_YEAR, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(MAX_SUPPORTED_YEAR, 12, 31).unwrap();
        while date <= end {
            let schedule = calc.get_schedule(date).unwrap();
            let times: Vec<NaiveTime> = PrayerName::ALL.iter().map(|p| schedule.time(*p)).collect();
            assert!(
                times.windows(2).all(|w| w[0] < w[1]),
                "non-increasing schedule on {}",
                date
            );
            date += Duration::days(37);
        }
    }

    #[test]
    fn same_date_gives_identical_schedule() {
        let calc = calc();
        let date = NaiveDate::from_ymd_opt(2025, 6, 21).unwrap();
        assert_eq!(calc.get_schedule(date).unwrap(), calc.get_schedule(date).unwrap());
    }

    #[test]
    fn dhuhr_is_near_local_noon() {
        let schedule = calc()
            .get_schedule(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap())
            .unwrap();
        let dhuhr = schedule.time(PrayerName::Dhuhr);
        assert!(dhuhr > NaiveTime::from_hms_opt(11, 0, 0).unwrap());
        assert!(dhuhr < NaiveTime::from_hms_opt(12, 30, 0).unwrap());
    }

    #[test]
    fn out_of_range_dates_are_unsupported() {
        let calc = calc();
        for date in [
            NaiveDate::from_ymd_opt(1999, 12, 31).unwrap(),
            NaiveDate::from_ymd_opt(2101, 1, 1).unwrap(),
        ] {
            assert!(matches!(
                calc.get_schedule(date),
                Err(EngineError::UnsupportedDate { .. })
            ));
        }
    }
}
