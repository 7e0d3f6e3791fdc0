mod grid;
mod view;
mod widget;
pub(crate) use self::view::{MonthView, SelectMove};
pub(crate) use self::widget::MonthGrid;
