use serde::{Deserialize, Serialize};

use super::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrayerName {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl PrayerName {
    /// All six markers in chronological order.
    pub const ALL: [PrayerName; 6] = [
        PrayerName::Fajr,
        PrayerName::Sunrise,
        PrayerName::Dhuhr,
        PrayerName::Asr,
        PrayerName::Maghrib,
        PrayerName::Isha,
    ];

    pub fn display_name(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Ar => match self {
                PrayerName::Fajr => "الفجر",
                PrayerName::Sunrise => "الشروق",
                PrayerName::Dhuhr => "الظهر",
                PrayerName::Asr => "العصر",
                PrayerName::Maghrib => "المغرب",
                PrayerName::Isha => "العشاء",
            },
            Locale::En => match self {
                PrayerName::Fajr => "Fajr",
                PrayerName::Sunrise => "Sunrise",
                PrayerName::Dhuhr => "Dhuhr",
                PrayerName::Asr => "Asr",
                PrayerName::Maghrib => "Maghrib",
                PrayerName::Isha => "Isha",
            },
            Locale::Fr => match self {
                PrayerName::Fajr => "Fajr",
                PrayerName::Sunrise => "Chourouk",
                PrayerName::Dhuhr => "Dhohr",
                PrayerName::Asr => "Asr",
                PrayerName::Maghrib => "Maghrib",
                PrayerName::Isha => "Icha",
            },
        }
    }
}

impl std::fmt::Display for PrayerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name(Locale::En))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn localized_labels() {
        assert_eq!(PrayerName::Isha.display_name(Locale::Ar), "العشاء");
        assert_eq!(PrayerName::Dhuhr.display_name(Locale::Fr), "Dhohr");
        assert_eq!(PrayerName::Maghrib.to_string(), "Maghrib");
    }
}
