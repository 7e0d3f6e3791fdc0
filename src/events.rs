use ratatui::style::Color;
use time::{
    format_description::FormatItem,
    macros::{date, format_description},
    Date,
};

static HUMAN_FMT: &[FormatItem<'_>] =
    format_description!("[weekday repr:long], [month repr:long] [day padding:none], [year]");

/// A titled, colored, single-day calendar entry.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Event {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) date: Date,
    pub(crate) color: Color,
}

impl Event {
    pub(crate) fn new<I, T>(id: I, title: T, date: Date, color: Color) -> Event
    where
        I: Into<String>,
        T: Into<String>,
    {
        Event {
            id: id.into(),
            title: title.into(),
            date,
            color,
        }
    }
}

/// Source of the events shown in the calendar.  The grid logic only ever
/// reads the slice, so swapping the demo data for a persisted or remote
/// store means implementing this trait and nothing else.
pub(crate) trait EventSource {
    fn events(&self) -> &[Event];
}

/// Returns the first event in `events` falling on `date`.  When two events
/// share a date, the earlier one in source order wins.
pub(crate) fn first_event_on(events: &[Event], date: Date) -> Option<&Event> {
    events.iter().find(|ev| ev.date == date)
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct StaticEvents(Vec<Event>);

impl StaticEvents {
    pub(crate) fn new(events: Vec<Event>) -> StaticEvents {
        StaticEvents(events)
    }

    pub(crate) fn demo() -> StaticEvents {
        StaticEvents(vec![
            Event::new("1", "Team Meeting", date!(2025 - 01 - 15), Color::Blue),
            Event::new("2", "Project Deadline", date!(2025 - 01 - 22), Color::Red),
            Event::new("3", "Birthday Party", date!(2025 - 01 - 28), Color::Green),
        ])
    }
}

impl EventSource for StaticEvents {
    fn events(&self) -> &[Event] {
        &self.0
    }
}

/// Formats a date the way the panes show it to humans, e.g. "Wednesday,
/// January 15, 2025".
pub(crate) fn human_date(date: Date) -> String {
    date.format(&HUMAN_FMT)
        .unwrap_or_else(|_| date.to_string())
}
