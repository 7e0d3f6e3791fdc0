use super::grid::{first_of_month, month_length, DAYS_IN_WEEK};
use thiserror::Error;
use time::{Date, Duration, Month};

/// Direction token for one-month navigation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum MonthStep {
    Back,
    Forward,
}

/// Direction token for moving the selection within the displayed month.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum SelectMove {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("reached the end of the calendar")]
pub(crate) struct OutOfTimeError;

/// Steps `date` one calendar month backward or forward.  The day of month is
/// preserved when the target month has it and clamped to the target month's
/// last day otherwise (Jan 31 forward lands on Feb 28/29).  Fails only when
/// the target month lies outside the range `Date` supports.
pub(crate) fn step_month(date: Date, step: MonthStep) -> Result<Date, OutOfTimeError> {
    let month = match step {
        MonthStep::Back => date.month().previous(),
        MonthStep::Forward => date.month().next(),
    };
    let year = match (step, month) {
        (MonthStep::Forward, Month::January) => date.year() + 1,
        (MonthStep::Back, Month::December) => date.year() - 1,
        _ => date.year(),
    };
    let day = date.day().min(month_length(year, month));
    Date::from_calendar_date(year, month, day).map_err(|_| OutOfTimeError)
}

/// The navigator: currently displayed month (kept as a full reference date so
/// the day of month survives round trips), the fixed `today`, and the
/// selection.  Every operation produces new `Date` values; nothing is
/// mutated in place.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct MonthView {
    today: Date,
    current: Date,
    selected: Option<Date>,
}

impl MonthView {
    pub(crate) fn new(today: Date) -> MonthView {
        MonthView {
            today,
            current: today,
            selected: None,
        }
    }

    pub(crate) fn start_date(mut self, date: Date) -> MonthView {
        self.current = date;
        self
    }

    pub(crate) fn today(&self) -> Date {
        self.today
    }

    pub(crate) fn current(&self) -> Date {
        self.current
    }

    pub(crate) fn selected(&self) -> Option<Date> {
        self.selected
    }

    pub(crate) fn month_forwards(&mut self) -> Result<(), OutOfTimeError> {
        self.current = step_month(self.current, MonthStep::Forward)?;
        Ok(())
    }

    pub(crate) fn month_backwards(&mut self) -> Result<(), OutOfTimeError> {
        self.current = step_month(self.current, MonthStep::Back)?;
        Ok(())
    }

    pub(crate) fn jump_to_today(&mut self) {
        self.current = self.today;
    }

    /// Clears the selection; returns `false` if there was none to clear.
    pub(crate) fn clear_selection(&mut self) -> bool {
        self.selected.take().is_some()
    }

    /// Moves the selection one day horizontally or one week vertically,
    /// clamped to the displayed month.  When no day of the displayed month
    /// is selected yet, the first move selects today (if displayed) or day
    /// 1.  Returns `false` for a move that would leave the month.
    pub(crate) fn move_selection(&mut self, mv: SelectMove) -> bool {
        let Some(sel) = self
            .selected
            .filter(|date| same_month(*date, self.current))
        else {
            self.selected = Some(self.initial_selection());
            return true;
        };
        let offset = match mv {
            SelectMove::Left => -1,
            SelectMove::Right => 1,
            SelectMove::Up => -i64::from(DAYS_IN_WEEK),
            SelectMove::Down => i64::from(DAYS_IN_WEEK),
        };
        let Some(target) = sel.checked_add(Duration::days(offset)) else {
            return false;
        };
        if same_month(target, self.current) {
            self.selected = Some(target);
            true
        } else {
            false
        }
    }

    fn initial_selection(&self) -> Date {
        if same_month(self.today, self.current) {
            self.today
        } else {
            first_of_month(self.current)
        }
    }
}

pub(crate) fn same_month(a: Date, b: Date) -> bool {
    a.year() == b.year() && a.month() == b.month()
}
