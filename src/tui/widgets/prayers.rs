use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
    Frame,
};

use crate::prayer_times::BoardView;
use crate::tui::theme;
use crate::utils::format::pad_to_width;

pub fn render(frame: &mut Frame, area: Rect, view: &BoardView) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", view.locale.prayers_title()),
            theme::gold(),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    if view.rows.is_empty() {
        let empty = List::new(vec![ListItem::new(Line::from(Span::styled(
            "  --:--",
            theme::dim(),
        )))])
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = view
        .rows
        .iter()
        .map(|row| {
            let (marker, name_style, time_style) = if row.highlighted {
                ("▸ ", theme::highlighted_row(), theme::highlighted_row())
            } else if row.passed {
                ("  ", theme::dim(), theme::dim())
            } else {
                ("  ", theme::bold(), theme::amber())
            };

            let line = Line::from(vec![
                Span::styled(marker, theme::gold()),
                Span::styled(pad_to_width(&row.label, 10), name_style),
                Span::styled(row.time.as_str(), time_style),
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
