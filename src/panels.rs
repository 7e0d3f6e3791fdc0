use crate::events::{human_date, Event};
use crate::theme::{
    marker_style,
    panes::{EVENT_DATE_STYLE, EVENT_TITLE_STYLE, NO_EVENT_STYLE},
    BASE_STYLE,
};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Paragraph, Widget},
};
use time::Date;

/// Number of lines the selected-date pane takes up, borders included
pub(crate) const DETAILS_HEIGHT: u16 = 4;

/// Width of the upcoming-events pane, borders included; wide enough for a
/// long-format date under a two-space indent
pub(crate) const EVENTS_WIDTH: u16 = 34;

/// The upcoming-events pane: every event from the source, in source order,
/// with its colored bullet, title, and long-format date.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct EventsPane<'a>(pub(crate) &'a [Event]);

impl Widget for EventsPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = Vec::with_capacity(self.0.len() * 3);
        for event in self.0 {
            lines.push(Line::from_iter([
                Span::styled("• ", marker_style(event.color)),
                Span::styled(event.title.as_str(), EVENT_TITLE_STYLE),
            ]));
            lines.push(Line::styled(
                format!("  {}", human_date(event.date)),
                EVENT_DATE_STYLE,
            ));
            lines.push(Line::raw(""));
        }
        let count = self.0.len();
        Paragraph::new(Text::from(lines))
            .block(
                Block::bordered()
                    .title(format!(" Events ({count}) "))
                    .title_alignment(Alignment::Center),
            )
            .style(BASE_STYLE)
            .render(area, buf);
    }
}

/// The selected-date pane, shown while a selection exists: the date in long
/// format and the event falling on it, if any.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct DetailsPane<'a> {
    pub(crate) date: Date,
    pub(crate) event: Option<&'a Event>,
}

impl Widget for DetailsPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let event_line = match self.event {
            Some(event) => Line::from_iter([
                Span::styled("• ", marker_style(event.color)),
                Span::styled(event.title.as_str(), EVENT_TITLE_STYLE),
            ]),
            None => Line::styled("No events on this day.", NO_EVENT_STYLE),
        };
        let text = Text::from(vec![Line::raw(human_date(self.date)), event_line]);
        Paragraph::new(text)
            .block(
                Block::bordered()
                    .title(" Selected Date ")
                    .title_alignment(Alignment::Center),
            )
            .style(BASE_STYLE)
            .render(area, buf);
    }
}
