use chrono::NaiveDateTime;

use crate::error::EngineError;
use crate::models::{NextPrayerState, PrayerEvent, PrayerName, PrayerSchedule};

/// Pick the first of today's events strictly after `now`. An event whose
/// instant equals `now` has already passed. After Isha the answer is
/// `tomorrow_fajr`, measured as an absolute duration across midnight.
pub fn select_next(
    today: Option<&PrayerSchedule>,
    tomorrow_fajr: Option<NaiveDateTime>,
    now: NaiveDateTime,
) -> Result<NextPrayerState, EngineError> {
    let today = today.ok_or(EngineError::NoScheduleAvailable)?;

    let event = match today.events().find(|e| e.instant > now) {
        Some(event) => event,
        None => PrayerEvent {
            name: PrayerName::Fajr,
            instant: tomorrow_fajr
                .filter(|instant| *instant > now)
                .ok_or(EngineError::NoScheduleAvailable)?,
        },
    };

    Ok(NextPrayerState {
        remaining: event.instant - now,
        event,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        today().and_hms_opt(h, m, s).unwrap()
    }

    fn schedule() -> PrayerSchedule {
        PrayerSchedule::new(
            today(),
            [t(5, 0), t(6, 20), t(12, 15), t(15, 40), t(18, 10), t(19, 30)],
        )
        .unwrap()
    }

    fn tomorrow_fajr() -> NaiveDateTime {
        today().succ_opt().unwrap().and_time(t(5, 0))
    }

    #[test]
    fn event_reached_exactly_counts_as_passed() {
        let next = select_next(Some(&schedule()), Some(tomorrow_fajr()), at(12, 15, 0)).unwrap();
        assert_eq!(next.event.name, PrayerName::Asr);
        assert_eq!(next.remaining_hms(), "03:25:00");
    }

    #[test]
    fn one_second_before_boundary() {
        let next = select_next(Some(&schedule()), Some(tomorrow_fajr()), at(12, 14, 59)).unwrap();
        assert_eq!(next.event.name, PrayerName::Dhuhr);
        assert_eq!(next.remaining_hms(), "00:00:01");
    }

    #[test]
    fn sunrise_is_a_selectable_event() {
        let next = select_next(Some(&schedule()), Some(tomorrow_fajr()), at(5, 30, 0)).unwrap();
        assert_eq!(next.event.name, PrayerName::Sunrise);
    }

    #[test]
    fn before_fajr_selects_todays_fajr() {
        let next = select_next(Some(&schedule()), Some(tomorrow_fajr()), at(0, 30, 0)).unwrap();
        assert_eq!(next.event.name, PrayerName::Fajr);
        assert_eq!(next.event.instant, at(5, 0, 0));
        assert_eq!(next.remaining_hms(), "04:30:00");
    }

    #[test]
    fn after_isha_wraps_to_tomorrow_fajr() {
        let next = select_next(Some(&schedule()), Some(tomorrow_fajr()), at(20, 0, 0)).unwrap();
        assert_eq!(next.event.name, PrayerName::Fajr);
        assert_eq!(next.event.instant, tomorrow_fajr());
        assert_eq!(next.remaining_hms(), "09:00:00");
    }

    #[test]
    fn exactly_at_isha_wraps() {
        let next = select_next(Some(&schedule()), Some(tomorrow_fajr()), at(19, 30, 0)).unwrap();
        assert_eq!(next.event.instant, tomorrow_fajr());
    }

    #[test]
    fn missing_schedule_is_a_value_not_a_panic() {
        assert_eq!(
            select_next(None, Some(tomorrow_fajr()), at(12, 0, 0)),
            Err(EngineError::NoScheduleAvailable)
        );
        assert_eq!(
            select_next(Some(&schedule()), None, at(21, 0, 0)),
            Err(EngineError::NoScheduleAvailable)
        );
    }
}
