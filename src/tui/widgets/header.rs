use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::prayer_times::BoardView;
use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, view: &BoardView) {
    let title_line = Line::from(vec![
        Span::styled("  مواقيت  ", theme::gold().add_modifier(Modifier::BOLD)),
        Span::styled(view.location.as_str(), theme::gold()),
    ]);

    let mut date_spans = Vec::new();
    if !view.hijri.is_empty() {
        date_spans.push(Span::styled(view.hijri.as_str(), theme::amber()));
        date_spans.push(Span::styled("  ·  ", theme::dim()));
    }
    date_spans.push(Span::styled(view.gregorian.as_str(), theme::dim()));

    let text = vec![title_line, Line::from(""), Line::from(date_spans)];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::gold().add_modifier(Modifier::BOLD))
        .style(theme::base());

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
