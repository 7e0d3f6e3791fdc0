use super::grid::{build_grid, DayCell, GridCell, DAYS_IN_WEEK};
use super::view::MonthView;
use crate::events::Event;
use crate::theme::{
    marker_style, BASE_STYLE, SELECTED_MODIFIER, TITLE_STYLE, TODAY_STYLE, WEEKDAY_STYLE,
};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Span, Text},
    widgets::{Paragraph, StatefulWidget, Widget},
};
use time::Month;

static HEADER: &str = " Su     Mo     Tu     We     Th     Fr     Sa ";

/// Width of the calendar in columns
const MAIN_WIDTH: u16 = 46;

/// Number of columns per day of week
const DAY_WIDTH: u16 = 7;

/// Number of lines taken up by the title, the weekday names, and their rule
const HEADER_LINES: u16 = 3;

/// Number of lines taken up by each week of the calendar: the day numbers
/// and the event-marker line below them
const WEEK_LINES: u16 = 2;

/// Column within a day cell at which the event marker is drawn, directly
/// under the day number
const MARKER_OFFSET: u16 = 2;

const MARKER: &str = "•";

const ACS_HLINE: char = '─';

/// Renders one month of `state` as a grid: leading blanks, then a cell per
/// day, with today bracketed, the selection reversed, and a colored bullet
/// under each day that carries an event.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct MonthGrid<'a> {
    events: &'a [Event],
}

impl<'a> MonthGrid<'a> {
    pub(crate) fn new(events: &'a [Event]) -> MonthGrid<'a> {
        MonthGrid { events }
    }
}

impl StatefulWidget for MonthGrid<'_> {
    type State = MonthView;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let left = area.width.saturating_sub(MAIN_WIDTH) / 2;
        let [_, grid_area, _] = Layout::horizontal([
            Constraint::Length(left),
            Constraint::Length(MAIN_WIDTH.min(area.width)),
            Constraint::Min(0),
        ])
        .areas(area);
        let current = state.current();
        let cells = build_grid(current, self.events, state.today());
        let mut canvas = GridCanvas::new(grid_area, buf);
        canvas.draw_title(current.year(), current.month());
        canvas.draw_weekday_header();
        let mut week_no = 0u16;
        let mut col = 0u16;
        for cell in &cells {
            if let GridCell::Day(day) = cell {
                let selected = state.selected() == Some(day.date);
                canvas.draw_day(week_no, col, &day_span(day, selected));
                if let Some(event) = day.event {
                    canvas.draw_marker(week_no, col, event.color);
                }
            }
            col += 1;
            if col == u16::from(DAYS_IN_WEEK) {
                col = 0;
                week_no += 1;
            }
        }
    }
}

fn day_span(day: &DayCell<'_>, selected: bool) -> Span<'static> {
    let number = day.number();
    let (content, mut style) = if day.is_today {
        (format!("[{number:2}]"), TODAY_STYLE)
    } else {
        (format!(" {number:2} "), BASE_STYLE)
    };
    if selected {
        style = style.add_modifier(SELECTED_MODIFIER);
    }
    Span::styled(content, style)
}

#[derive(Debug, Eq, PartialEq)]
struct GridCanvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl<'a> GridCanvas<'a> {
    fn new(area: Rect, buf: &'a mut Buffer) -> Self {
        Self { area, buf }
    }

    fn draw_title(&mut self, year: i32, month: Month) {
        let title = format!("{month} {year}");
        let width = u16::try_from(title.len()).unwrap_or(u16::MAX);
        let x = MAIN_WIDTH.saturating_sub(width) / 2;
        self.mvprint(0, x, title, Some(TITLE_STYLE));
    }

    fn draw_weekday_header(&mut self) {
        self.mvprint(1, 0, HEADER, Some(WEEKDAY_STYLE));
        self.hline(2, 0, ACS_HLINE, MAIN_WIDTH);
    }

    fn draw_day(&mut self, week_no: u16, col: u16, s: &Span<'_>) {
        self.mvprint(
            week_no * WEEK_LINES + HEADER_LINES,
            DAY_WIDTH * col,
            &s.content,
            Some(s.style),
        );
    }

    fn draw_marker(&mut self, week_no: u16, col: u16, color: Color) {
        self.mvprint(
            week_no * WEEK_LINES + HEADER_LINES + 1,
            DAY_WIDTH * col + MARKER_OFFSET,
            MARKER,
            Some(marker_style(color)),
        );
    }

    fn mvprint<S: AsRef<str>>(&mut self, y: u16, x: u16, s: S, style: Option<Style>) {
        if y < self.area.height && x < self.area.width {
            let text = Text::styled(s.as_ref(), style.unwrap_or_default());
            let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
            // A Paragraph truncates text that would extend beyond the grid's
            // area; the Rect handed to it must stay inside the frame, or the
            // render panics.
            Paragraph::new(text).render(
                Rect {
                    x: x + self.area.x,
                    y: y + self.area.y,
                    width: (self.area.width - x).min(width),
                    height: 1,
                },
                self.buf,
            );
        }
    }

    fn hline(&mut self, y: u16, x: u16, ch: char, length: u16) {
        self.mvprint(y, x, String::from(ch).repeat(length.into()), None);
    }
}
