use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use tui_big_text::{BigText, PixelSize};

use crate::prayer_times::BoardView;
use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, view: &BoardView) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", view.locale.next_prayer_title()),
            theme::gold(),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Nothing to show until a schedule is available
    let Some(next) = &view.next else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // name + time
            Constraint::Length(4), // countdown
            Constraint::Min(0),
        ])
        .split(inner);

    let title = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                format!("  {}", next.label),
                theme::gold().add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", next.at), theme::dim()),
        ]),
        Line::from(Span::styled(
            format!("  {}", view.locale.remaining_label()),
            theme::dim(),
        )),
    ]);
    frame.render_widget(title, chunks[0]);

    let countdown = BigText::builder()
        .pixel_size(PixelSize::Quadrant)
        .style(theme::amber().add_modifier(Modifier::BOLD))
        .lines(vec![Line::from(next.remaining.clone())])
        .build();
    frame.render_widget(countdown, chunks[1]);
}
