use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ar,
    En,
    Fr,
}

const GREGORIAN_MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

const GREGORIAN_MONTHS_FR: [&str; 12] = [
    "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août", "septembre",
    "octobre", "novembre", "décembre",
];

const GREGORIAN_MONTHS_AR: [&str; 12] = [
    "يناير", "فبراير", "مارس", "أبريل", "مايو", "يونيو", "يوليو", "أغسطس", "سبتمبر", "أكتوبر",
    "نوفمبر", "ديسمبر",
];

// Monday first, matching chrono's `num_days_from_monday`
const WEEKDAYS_EN: [&str; 7] = [
    "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
];

const WEEKDAYS_FR: [&str; 7] = [
    "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi", "dimanche",
];

const WEEKDAYS_AR: [&str; 7] = [
    "الاثنين", "الثلاثاء", "الأربعاء", "الخميس", "الجمعة", "السبت", "الأحد",
];

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Ar => "ar",
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }

    /// `month` is 1-based.
    pub fn gregorian_month(&self, month: u32) -> &'static str {
        let table = match self {
            Locale::Ar => &GREGORIAN_MONTHS_AR,
            Locale::En => &GREGORIAN_MONTHS_EN,
            Locale::Fr => &GREGORIAN_MONTHS_FR,
        };
        match month {
            1..=12 => table[(month - 1) as usize],
            _ => "?",
        }
    }

    /// `weekday` counts from Monday = 0.
    pub fn weekday(&self, weekday: u32) -> &'static str {
        let table = match self {
            Locale::Ar => &WEEKDAYS_AR,
            Locale::En => &WEEKDAYS_EN,
            Locale::Fr => &WEEKDAYS_FR,
        };
        table.get(weekday as usize).copied().unwrap_or("?")
    }

    pub fn next_prayer_title(&self) -> &'static str {
        match self {
            Locale::Ar => "الصلاة القادمة",
            Locale::En => "Next Prayer",
            Locale::Fr => "Prochaine prière",
        }
    }

    pub fn prayers_title(&self) -> &'static str {
        match self {
            Locale::Ar => "مواقيت الصلاة",
            Locale::En => "Prayer Times",
            Locale::Fr => "Horaires de prière",
        }
    }

    pub fn remaining_label(&self) -> &'static str {
        match self {
            Locale::Ar => "متبقي",
            Locale::En => "in",
            Locale::Fr => "dans",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Locale {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ar" | "arabic" => Ok(Locale::Ar),
            "en" | "english" => Ok(Locale::En),
            "fr" | "french" | "français" => Ok(Locale::Fr),
            _ => Err(anyhow::anyhow!("Unknown locale: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_and_names() {
        assert_eq!("AR".parse::<Locale>().unwrap(), Locale::Ar);
        assert_eq!("english".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("fr".parse::<Locale>().unwrap(), Locale::Fr);
        assert!("de".parse::<Locale>().is_err());
    }

    #[test]
    fn month_and_weekday_tables() {
        assert_eq!(Locale::En.gregorian_month(1), "January");
        assert_eq!(Locale::Fr.gregorian_month(8), "août");
        assert_eq!(Locale::Ar.gregorian_month(12), "ديسمبر");
        assert_eq!(Locale::En.gregorian_month(13), "?");
        assert_eq!(Locale::En.weekday(4), "Friday");
        assert_eq!(Locale::Ar.weekday(4), "الجمعة");
    }
}
