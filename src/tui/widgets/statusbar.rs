use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::Locale;
use crate::tui::theme;

fn hints(locale: Locale) -> [(&'static str, &'static str); 4] {
    match locale {
        Locale::Ar => [
            ("[l]", " اللغة  "),
            ("[r]", " تحديث  "),
            ("[?]", " مساعدة  "),
            ("[Esc]", " خروج"),
        ],
        Locale::En => [
            ("[l]", " language  "),
            ("[r]", " refresh  "),
            ("[?]", " help  "),
            ("[Esc]", " quit"),
        ],
        Locale::Fr => [
            ("[l]", " langue  "),
            ("[r]", " actualiser  "),
            ("[?]", " aide  "),
            ("[Esc]", " quitter"),
        ],
    }
}

/// Key hints in the board's current language.
pub fn render(frame: &mut Frame, area: Rect, locale: Locale) {
    let spans: Vec<Span> = hints(locale)
        .into_iter()
        .flat_map(|(key, label)| [Span::styled(key, theme::gold()), Span::styled(label, theme::dim())])
        .collect();

    let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_follow_the_locale() {
        assert_eq!(hints(Locale::En)[0], ("[l]", " language  "));
        assert_eq!(hints(Locale::Fr)[3].1, " quitter");
        assert!(hints(Locale::Ar)[1].1.contains("تحديث"));
    }

    #[test]
    fn keys_are_the_same_in_every_locale() {
        let keys = |l| hints(l).map(|(k, _)| k);
        assert_eq!(keys(Locale::Ar), keys(Locale::En));
        assert_eq!(keys(Locale::Fr), keys(Locale::En));
    }
}
