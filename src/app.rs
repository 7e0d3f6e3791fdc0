use crate::calendar::{MonthGrid, MonthView, SelectMove};
use crate::events::{first_event_on, EventSource};
use crate::help::Help;
use crate::panels::{DetailsPane, EventsPane, DETAILS_HEIGHT, EVENTS_WIDTH};
use crate::theme::BASE_STYLE;
use crossterm::event::{read, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::{StatefulWidget, Widget},
    Terminal,
};
use std::io::{self, Write};

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct App<P> {
    view: MonthView,
    source: P,
    state: AppState,
}

impl<P: EventSource> App<P> {
    pub(crate) fn new(view: MonthView, source: P) -> App<P> {
        App {
            view,
            source,
            state: AppState::Calendar,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(terminal)?;
            self.handle_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(&mut *self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = read()?
        {
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.state = AppState::Quitting;
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                self.beep()?;
            }
        }
        // Non-key events (resize, focus) fall through and trigger a redraw
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match self.state {
            AppState::Calendar => match key {
                KeyCode::Char('h') | KeyCode::Left => self.view.move_selection(SelectMove::Left),
                KeyCode::Char('l') | KeyCode::Right => self.view.move_selection(SelectMove::Right),
                KeyCode::Char('k') | KeyCode::Up => self.view.move_selection(SelectMove::Up),
                KeyCode::Char('j') | KeyCode::Down => self.view.move_selection(SelectMove::Down),
                KeyCode::Char('n') | KeyCode::PageDown => self.view.month_forwards().is_ok(),
                KeyCode::Char('p') | KeyCode::PageUp => self.view.month_backwards().is_ok(),
                KeyCode::Char('0') | KeyCode::Home => {
                    self.view.jump_to_today();
                    true
                }
                KeyCode::Esc => {
                    if !self.view.clear_selection() {
                        self.state = AppState::Quitting;
                    }
                    true
                }
                KeyCode::Char('q') => {
                    self.state = AppState::Quitting;
                    true
                }
                KeyCode::Char('?') => {
                    self.state = AppState::Helping;
                    true
                }
                _ => false,
            },
            AppState::Helping => {
                self.state = AppState::Calendar;
                true
            }
            AppState::Quitting => false,
        }
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }
}

impl<P: EventSource> Widget for &mut App<P> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        let selected = self.view.selected();
        let details = if selected.is_some() { DETAILS_HEIGHT } else { 0 };
        let [main_area, details_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(details)]).areas(area);
        let [calendar_area, events_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(EVENTS_WIDTH)])
                .areas(main_area);
        let events = self.source.events();
        MonthGrid::new(events).render(calendar_area, buf, &mut self.view);
        EventsPane(events).render(events_area, buf);
        if let Some(date) = selected {
            DetailsPane {
                date,
                event: first_event_on(events, date),
            }
            .render(details_area, buf);
        }
        if self.state == AppState::Helping {
            Help.render(area, buf);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AppState {
    Calendar,
    Helping,
    Quitting,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::StaticEvents;
    use time::macros::date;
    use time::Month;

    fn demo_app() -> App<StaticEvents> {
        App::new(MonthView::new(date!(2025 - 01 - 22)), StaticEvents::demo())
    }

    fn render(app: &mut App<StaticEvents>) -> Buffer {
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        app.render(area, &mut buffer);
        buffer
    }

    fn row_string(buf: &Buffer, y: u16) -> String {
        (0..80)
            .map(|x| buf.cell((x, y)).expect("cell should exist").symbol())
            .collect()
    }

    #[test]
    fn test_month_navigation_keys() {
        let mut app = demo_app();
        assert!(app.handle_key(KeyCode::Char('n')), "next month key");
        assert_eq!(app.view.current().month(), Month::February, "one month forward");
        assert!(app.handle_key(KeyCode::Char('p')), "previous month key");
        assert_eq!(app.view.current(), date!(2025 - 01 - 22), "back to the start");
        assert!(app.handle_key(KeyCode::PageUp), "page up key");
        assert_eq!(app.view.current().month(), Month::December, "one month back");
        assert!(app.handle_key(KeyCode::Home), "home key");
        assert_eq!(app.view.current(), date!(2025 - 01 - 22), "back at today");
    }

    #[test]
    fn test_selection_keys() {
        let mut app = demo_app();
        assert!(app.handle_key(KeyCode::Down), "first move should select");
        assert_eq!(
            app.view.selected(),
            Some(date!(2025 - 01 - 22)),
            "today selected first"
        );
        assert!(app.handle_key(KeyCode::Down), "move down should succeed");
        assert_eq!(
            app.view.selected(),
            Some(date!(2025 - 01 - 29)),
            "one week down"
        );
        assert!(app.handle_key(KeyCode::Char('h')), "move left should succeed");
        assert_eq!(
            app.view.selected(),
            Some(date!(2025 - 01 - 28)),
            "one day left"
        );
    }

    #[test]
    fn test_escape_clears_selection_then_quits() {
        let mut app = demo_app();
        assert!(app.handle_key(KeyCode::Right), "first move should select");
        assert!(app.handle_key(KeyCode::Esc), "escape should clear");
        assert_eq!(app.view.selected(), None, "selection should be gone");
        assert!(!app.quitting(), "first escape should not quit");
        assert!(app.handle_key(KeyCode::Esc), "escape should quit");
        assert!(app.quitting(), "second escape should quit");
    }

    #[test]
    fn test_invalid_key_rejected() {
        let mut app = demo_app();
        assert!(!app.handle_key(KeyCode::Char('x')), "unbound key");
    }

    #[test]
    fn test_help_dismissed_by_any_key() {
        let mut app = demo_app();
        assert!(app.handle_key(KeyCode::Char('?')), "help key");
        let buffer = render(&mut app);
        assert!(
            (0..24).any(|y| row_string(&buffer, y).contains(" Commands ")),
            "help overlay should be shown"
        );
        assert!(app.handle_key(KeyCode::Char('x')), "any key dismisses help");
        assert_eq!(app.state, AppState::Calendar, "back to the calendar");
    }

    #[test]
    fn test_render_layout() {
        let mut app = demo_app();
        let buffer = render(&mut app);
        let top = row_string(&buffer, 0);
        assert!(top.contains("January 2025"), "title in {top:?}");
        assert!(top.contains(" Events (3) "), "events pane title in {top:?}");
        let header = row_string(&buffer, 1);
        assert!(header.contains("Su"), "weekday header in {header:?}");
        assert!(
            header.contains("• Team Meeting"),
            "first event entry in {header:?}"
        );
    }

    #[test]
    fn test_render_details_after_selection() {
        let mut app = demo_app();
        assert!(app.handle_key(KeyCode::Down), "first move should select");
        let buffer = render(&mut app);
        assert!(
            row_string(&buffer, 20).contains(" Selected Date "),
            "details pane title"
        );
        assert!(
            row_string(&buffer, 21).contains("Wednesday, January 22, 2025"),
            "selected date line"
        );
        assert!(
            row_string(&buffer, 22).contains("• Project Deadline"),
            "matched event line"
        );
    }

    #[test]
    fn test_no_details_without_selection() {
        let mut app = demo_app();
        let buffer = render(&mut app);
        assert!(
            !row_string(&buffer, 20).contains(" Selected Date "),
            "details pane should be absent"
        );
    }
}
