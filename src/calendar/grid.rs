use crate::events::{first_event_on, Event};
use std::iter::successors;
use time::{Date, Month};

pub(crate) const DAYS_IN_WEEK: u8 = 7;

/// A rendered unit in the month grid: padding before day 1, or a day of the
/// month.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum GridCell<'a> {
    Blank,
    Day(DayCell<'a>),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct DayCell<'a> {
    pub(crate) date: Date,
    pub(crate) is_today: bool,
    pub(crate) event: Option<&'a Event>,
}

impl DayCell<'_> {
    pub(crate) fn number(&self) -> u8 {
        self.date.day()
    }
}

pub(crate) fn month_length(year: i32, month: Month) -> u8 {
    month.length(year)
}

pub(crate) fn first_of_month(date: Date) -> Date {
    date.replace_day(1)
        .expect("day 1 should be valid in every month")
}

/// Weekday index of day 1 of the given date's month, 0 = Sunday through
/// 6 = Saturday; equals the number of leading blanks in the grid.
pub(crate) fn first_weekday(month_ref: Date) -> u8 {
    first_of_month(month_ref)
        .weekday()
        .number_days_from_sunday()
}

/// Computes the cell sequence for the month containing `month_ref`:
/// `first_weekday` blanks, then one cell per day of the month.  A day cell
/// is flagged when its date is `today` and carries the first event in
/// `events` falling on it.
pub(crate) fn build_grid<'a>(
    month_ref: Date,
    events: &'a [Event],
    today: Date,
) -> Vec<GridCell<'a>> {
    let first = first_of_month(month_ref);
    let blanks = usize::from(first_weekday(first));
    let length = usize::from(month_length(first.year(), first.month()));
    let mut cells = Vec::with_capacity(blanks + length);
    cells.resize(blanks, GridCell::Blank);
    cells.extend(
        successors(Some(first), |&d| d.next_day())
            .take(length)
            .map(|date| {
                GridCell::Day(DayCell {
                    date,
                    is_today: date == today,
                    event: first_event_on(events, date),
                })
            }),
    );
    cells
}
