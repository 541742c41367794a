use chrono::NaiveTime;
use unicode_width::UnicodeWidthStr;

/// Format a duration in seconds as zero-padded "HH:MM:SS". Negative
/// durations render as "00:00:00".
pub fn format_hms(secs: i64) -> String {
    let secs = secs.max(0);
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Format a NaiveTime to "HH:MM"
pub fn format_time(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// Pad `s` with spaces to `width` terminal columns. `format!("{:<w$}")`
/// counts chars, which misaligns Arabic labels.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hms_formatting() {
        assert_eq!(format_hms(0), "00:00:00");
        assert_eq!(format_hms(1), "00:00:01");
        assert_eq!(format_hms(3661), "01:01:01");
        assert_eq!(format_hms(9 * 3600), "09:00:00");
        assert_eq!(format_hms(-5), "00:00:00");
    }

    #[test]
    fn time_formatting() {
        let t = NaiveTime::from_hms_opt(5, 7, 59).unwrap();
        assert_eq!(format_time(t), "05:07");
    }

    #[test]
    fn pads_by_display_width() {
        assert_eq!(pad_to_width("Asr", 6), "Asr   ");
        assert_eq!(pad_to_width("Maghrib", 3), "Maghrib");
    }
}
