use ratatui::style::{Color, Modifier, Style};

pub(crate) const BASE_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

pub(crate) const TODAY_STYLE: Style = Style::new()
    .fg(Color::LightYellow)
    .bg(Color::Black)
    .add_modifier(Modifier::BOLD);

pub(crate) const TITLE_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const WEEKDAY_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const SELECTED_MODIFIER: Modifier = Modifier::REVERSED;

pub(crate) mod panes {
    use super::*;

    pub(crate) const EVENT_TITLE_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

    pub(crate) const EVENT_DATE_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

    pub(crate) const NO_EVENT_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);
}

/// Style for an event's marker bullet, in the event's own color
pub(crate) fn marker_style(color: Color) -> Style {
    BASE_STYLE.fg(color)
}
