use anyhow::Result;
use crossterm::event::{KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::Locale;
use crate::prayer_times::{BoardView, PrayerBoard, PrayerCalculator};
use crate::tui::events::{Event, EventHandler};
use crate::tui::theme;
use crate::tui::widgets::{header, next_prayer, prayers, statusbar};
use crate::utils::clock::Clock;

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Dashboard,
    Help,
}

pub struct App {
    pub view: View,
    pub should_quit: bool,
    board: PrayerBoard<PrayerCalculator>,
    clock: Arc<dyn Clock>,
    // Snapshot rendered by draw(); refreshed after every tick or action
    snapshot: BoardView,
}

impl App {
    pub fn new(board: PrayerBoard<PrayerCalculator>, clock: Arc<dyn Clock>) -> Self {
        let snapshot = board.view();
        App {
            view: View::Dashboard,
            should_quit: false,
            board,
            clock,
            snapshot,
        }
    }

    pub fn tick(&mut self) {
        self.board.tick(self.clock.now());
        self.snapshot = self.board.view();
    }

    /// Reload the schedule and date labels for the new day, then tick.
    pub fn day_rollover(&mut self) {
        let now = self.clock.now();
        log::debug!("Day rollover at {}", now);
        self.board.refresh_day(now.date());
        self.tick();
    }

    fn cycle_locale(&mut self) {
        let next = match self.board.locale() {
            Locale::Ar => Locale::En,
            Locale::En => Locale::Fr,
            Locale::Fr => Locale::Ar,
        };
        self.board.set_locale(next);
        self.snapshot = self.board.view();
    }

    pub fn handle_key(&mut self, key: crossterm::event::KeyEvent) {
        // Only handle actual key presses — ignore release/repeat events from some terminals
        if key.kind != KeyEventKind::Press {
            return;
        }
        match self.view {
            View::Dashboard => self.handle_dashboard_key(key),
            View::Help => self.handle_help_key(key),
        }
    }

    fn handle_dashboard_key(&mut self, key: crossterm::event::KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Char('?') => {
                self.view = View::Help;
            }
            KeyCode::Char('l') => {
                self.cycle_locale();
            }
            KeyCode::Char('r') => {
                self.tick();
            }
            _ => {}
        }
    }

    fn handle_help_key(&mut self, key: crossterm::event::KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') => {
                self.view = View::Dashboard;
            }
            _ => {}
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        self.draw_dashboard(frame);
        if self.view == View::Help {
            self.draw_help_overlay(frame);
        }
    }

    fn draw_dashboard(&self, frame: &mut Frame) {
        let area = frame.area();

        // Clear background
        frame.render_widget(Block::default().style(theme::base()), area);

        let outer_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // header
                Constraint::Min(0),    // body
                Constraint::Length(1), // status bar
            ])
            .split(area);

        header::render(frame, outer_chunks[0], &self.snapshot);
        statusbar::render(frame, outer_chunks[2], self.snapshot.locale);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(outer_chunks[1]);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(8), Constraint::Min(0)])
            .split(columns[0]);
        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(8), Constraint::Min(0)])
            .split(columns[1]);

        prayers::render(frame, left[0], &self.snapshot);
        next_prayer::render(frame, right[0], &self.snapshot);
    }

    fn draw_help_overlay(&self, frame: &mut Frame) {
        let area = frame.area();

        // Center a help box
        let popup_area = Rect {
            x: area.width / 4,
            y: area.height / 4,
            width: area.width / 2,
            height: area.height / 2,
        };

        frame.render_widget(Clear, popup_area);

        let help_text = vec![
            Line::from(Span::styled(
                "  Keybindings",
                theme::gold().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("  [l]          ", theme::gold()),
                Span::styled("Switch language (ar / en / fr)", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [r]          ", theme::gold()),
                Span::styled("Recompute countdown now", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [?]          ", theme::gold()),
                Span::styled("Toggle help", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [Esc] / [q]  ", theme::gold()),
                Span::styled("Quit", theme::dim()),
            ]),
        ];

        let block = Block::default()
            .title(Span::styled(" Help ", theme::gold()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::gold())
            .style(theme::surface());

        let paragraph = Paragraph::new(help_text).block(block);
        frame.render_widget(paragraph, popup_area);
    }
}

pub fn run(config: AppConfig, clock: Arc<dyn Clock>) -> Result<()> {
    let board = PrayerBoard::from_config(&config)?;
    let mut app = App::new(board, clock.clone());
    app.tick();

    let mut terminal = ratatui::init();
    let events = EventHandler::new(config.engine.tick_interval(), clock);

    let result = (|| -> Result<()> {
        loop {
            terminal.draw(|frame| app.draw(frame))?;

            match events.next()? {
                Event::Key(key) => {
                    app.handle_key(key);
                    if app.should_quit {
                        break;
                    }
                }
                Event::Tick => app.tick(),
                Event::DayRollover => app.day_rollover(),
            }
        }
        Ok(())
    })();

    ratatui::restore();
    // Dropping `events` here disconnects the channel and stops its thread
    drop(events);
    result
}
