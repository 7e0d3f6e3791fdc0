mod app;
mod calendar;
mod events;
mod help;
mod panels;
mod theme;
use crate::app::App;
use crate::calendar::MonthView;
use crate::events::StaticEvents;
use anyhow::Context;
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use time::{format_description::FormatItem, macros::format_description, Date, OffsetDateTime};

static YMD_FMT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run { date: Option<Date> },
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut date = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Value(value) if date.is_none() => {
                    let value = value.string()?;
                    match Date::parse(&value, &YMD_FMT) {
                        Ok(d) => date = Some(d),
                        Err(e) => {
                            return Err(lexopt::Error::ParsingFailed {
                                value,
                                error: Box::new(e),
                            })
                        }
                    }
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run { date })
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run { date } => {
                let today = OffsetDateTime::now_local()
                    .context("failed to determine local date")?
                    .date();
                let mut view = MonthView::new(today);
                if let Some(date) = date {
                    view = view.start_date(date);
                }
                with_terminal(|terminal| {
                    terminal.hide_cursor().context("failed to hide cursor")?;
                    App::new(view, StaticEvents::demo()).run(terminal)?;
                    Ok(())
                })
            }
            Command::Help => {
                println!("Usage: evcal [YYYY-MM-DD]");
                println!();
                println!("Terminal month calendar highlighting today and days with events");
                println!();
                println!("Options:");
                println!("  -h, --help        Display this help message and exit");
                println!("  -V, --version     Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(&mut DefaultTerminal) -> anyhow::Result<T>,
{
    let mut terminal = ratatui::init();
    let r = func(&mut terminal);
    ratatui::restore();
    r
}
