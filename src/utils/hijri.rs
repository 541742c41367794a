use anyhow::{Context, Result};
use chrono::{Datelike, Duration, NaiveDate};
use hijri_date::HijriDate;

use crate::models::Locale;

/// Islamic month names (index 0 = Muharram = month 1)
const HIJRI_MONTHS_EN: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi' al-Awwal",
    "Rabi' al-Thani",
    "Jumada al-Awwal",
    "Jumada al-Thani",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qi'dah",
    "Dhu al-Hijjah",
];

const HIJRI_MONTHS_FR: [&str; 12] = [
    "Mouharram",
    "Safar",
    "Rabia al awal",
    "Rabia ath-thani",
    "Joumada al oula",
    "Joumada ath-thania",
    "Rajab",
    "Chaabane",
    "Ramadan",
    "Chawwal",
    "Dhou al qi`da",
    "Dhou al-hijja",
];

const HIJRI_MONTHS_AR: [&str; 12] = [
    "محرم",
    "صفر",
    "ربيع الأول",
    "ربيع الآخر",
    "جمادى الأولى",
    "جمادى الآخرة",
    "رجب",
    "شعبان",
    "رمضان",
    "شوال",
    "ذو القعدة",
    "ذو الحجة",
];

fn hijri_month_name(month: usize, locale: Locale) -> &'static str {
    let table = match locale {
        Locale::Ar => &HIJRI_MONTHS_AR,
        Locale::En => &HIJRI_MONTHS_EN,
        Locale::Fr => &HIJRI_MONTHS_FR,
    };
    if (1..=12).contains(&month) {
        table[month - 1]
    } else {
        "?"
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HijriInfo {
    pub day: usize,
    pub month: usize,
    pub year: usize,
}

impl HijriInfo {
    pub fn formatted(&self, locale: Locale) -> String {
        let month = hijri_month_name(self.month, locale);
        match locale {
            Locale::Ar => format!("{} {} {} هـ", self.day, month, self.year),
            Locale::En | Locale::Fr => format!("{} {} {} AH", self.day, month, self.year),
        }
    }
}

/// Convert a Gregorian date, shifted by `offset_days` for local moon
/// sighting (e.g. -1 where the month starts a day after Saudi Arabia).
pub fn to_hijri(date: NaiveDate, offset_days: i32) -> Result<HijriInfo> {
    let adjusted = Duration::try_days(i64::from(offset_days))
        .and_then(|offset| date.checked_add_signed(offset))
        .with_context(|| format!("Hijri offset of {} days from {} is out of range", offset_days, date))?;
    let hd = HijriDate::from_gr(
        adjusted.year() as usize,
        adjusted.month() as usize,
        adjusted.day() as usize,
    )
    .map_err(|e| anyhow::anyhow!("Hijri conversion error: {}", e))?;

    Ok(HijriInfo {
        day: hd.day(),
        month: hd.month(),
        year: hd.year(),
    })
}

/// Hijri label for `date`, or an empty string when conversion fails.
pub fn hijri_label(date: NaiveDate, offset_days: i32, locale: Locale) -> String {
    match to_hijri(date, offset_days) {
        Ok(info) => info.formatted(locale),
        Err(e) => {
            log::warn!("No Hijri label for {}: {}", date, e);
            String::new()
        }
    }
}

/// Localized Gregorian label, e.g. "Friday 14 March 2025".
pub fn gregorian_label(date: NaiveDate, locale: Locale) -> String {
    let weekday = locale.weekday(date.weekday().num_days_from_monday());
    let month = locale.gregorian_month(date.month());
    match locale {
        Locale::Ar => format!("{}، {} {} {}", weekday, date.day(), month, date.year()),
        Locale::En | Locale::Fr => {
            format!("{} {} {} {}", weekday, date.day(), month, date.year())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_names_cover_all_locales() {
        assert_eq!(hijri_month_name(9, Locale::En), "Ramadan");
        assert_eq!(hijri_month_name(9, Locale::Ar), "رمضان");
        assert_eq!(hijri_month_name(10, Locale::Fr), "Chawwal");
        assert_eq!(hijri_month_name(0, Locale::En), "?");
    }

    #[test]
    fn offset_shifts_the_day() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let base = to_hijri(date, 0).unwrap();
        let next = to_hijri(date, 1).unwrap();
        assert_ne!(base, next);
    }

    #[test]
    fn huge_offset_is_an_error_not_a_panic() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        assert!(to_hijri(date, i32::MAX).is_err());
        assert!(to_hijri(date, i32::MIN).is_err());
        assert_eq!(hijri_label(date, i32::MAX, Locale::En), "");
    }

    #[test]
    fn gregorian_labels() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        assert_eq!(gregorian_label(date, Locale::En), "Friday 14 March 2025");
        assert_eq!(gregorian_label(date, Locale::Fr), "vendredi 14 mars 2025");
        assert!(gregorian_label(date, Locale::Ar).starts_with("الجمعة"));
    }

    #[test]
    fn arabic_hijri_label_has_suffix() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        assert!(hijri_label(date, 0, Locale::Ar).ends_with("هـ"));
    }
}
