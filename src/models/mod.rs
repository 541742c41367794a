pub mod locale;
pub mod prayer;
pub mod schedule;

pub use locale::Locale;
pub use prayer::PrayerName;
pub use schedule::{NextPrayerState, PrayerEvent, PrayerSchedule};
