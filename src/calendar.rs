use chrono::{Datelike, Month, NaiveDate, Weekday};
use num_traits::FromPrimitive;
use std::fmt;

use crate::clock::{Clock, SystemClock};
use crate::datemath;
use crate::error::*;
use crate::render;
use crate::tz::Tz;

/// A single resolved month. Only obtainable through [`CalendarBuilder`], so
/// `month` is always in `1..=12`, `year` at least 1 and `start_weekday` the
/// weekday of the 1st.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Calendar {
    year: i32,
    month: u32,
    start_weekday: Weekday,
}

impl Calendar {
    /// Resolves a calendar for the current month, local timezone, with
    /// `options` applied in order.
    pub fn new<I>(options: I) -> Result<Calendar>
    where
        I: IntoIterator<Item = CalendarOption>,
    {
        CalendarBuilder::new().options(options).build()
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn start_weekday(&self) -> Weekday {
        self.start_weekday
    }

    /// 0 is Sunday.
    pub fn start_weekday_index(&self) -> u32 {
        self.start_weekday.num_days_from_sunday()
    }

    pub fn days(&self) -> u32 {
        datemath::days_in_month(self.year as i64, self.month)
    }

    pub fn render(&self) -> String {
        render::render(self)
    }
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalendarOption {
    Year(i64),
    Month(i64),
}

impl CalendarOption {
    fn apply(&self, draft: &mut Draft) -> Result<()> {
        match *self {
            CalendarOption::Year(year) => {
                if year < 1 {
                    return Err(Error::new(
                        ErrorKind::InvalidArgument,
                        &format!("invalid year {}, must be at least 1", year),
                    ));
                }
                if year > NaiveDate::MAX.year() as i64 {
                    return Err(Error::new(
                        ErrorKind::InvalidArgument,
                        &format!(
                            "invalid year {}, must be at most {}",
                            year,
                            NaiveDate::MAX.year()
                        ),
                    ));
                }
                draft.year = year as i32;
            }
            CalendarOption::Month(month) => {
                let month = Month::from_i64(month).ok_or_else(|| {
                    Error::new(
                        ErrorKind::InvalidArgument,
                        &format!("invalid month {}, must be between 1 and 12", month),
                    )
                })?;
                draft.month = month.number_from_month();
            }
        }

        Ok(())
    }
}

struct Draft {
    year: i32,
    month: u32,
}

/// Collects year and month overrides and resolves them into a [`Calendar`].
///
/// Overrides are validated in the order they were given when [`build`] is
/// called; the first invalid one is returned as the error.
///
/// [`build`]: CalendarBuilder::build
#[derive(Clone, Debug)]
pub struct CalendarBuilder<C: Clock = SystemClock> {
    clock: C,
    tz: Tz,
    options: Vec<CalendarOption>,
}

impl Default for CalendarBuilder<SystemClock> {
    fn default() -> Self {
        CalendarBuilder {
            clock: SystemClock,
            tz: Tz::default(),
            options: Vec::new(),
        }
    }
}

impl CalendarBuilder<SystemClock> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock> CalendarBuilder<C> {
    pub fn with_clock<C2: Clock>(self, clock: C2) -> CalendarBuilder<C2> {
        CalendarBuilder {
            clock,
            tz: self.tz,
            options: self.options,
        }
    }

    pub fn timezone(mut self, tz: Tz) -> Self {
        self.tz = tz;
        self
    }

    pub fn year(self, year: i64) -> Self {
        self.option(CalendarOption::Year(year))
    }

    pub fn month(self, month: i64) -> Self {
        self.option(CalendarOption::Month(month))
    }

    pub fn option(mut self, option: CalendarOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn options<I>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = CalendarOption>,
    {
        self.options.extend(options);
        self
    }

    pub fn build(&self) -> Result<Calendar> {
        let today = self.clock.today(&self.tz);
        let mut draft = Draft {
            year: today.year(),
            month: today.month(),
        };

        for option in &self.options {
            option.apply(&mut draft)?;
        }

        let start_weekday = datemath::first_weekday(draft.year, draft.month, &self.tz)?;

        log::debug!(
            "resolved calendar {:04}-{:02} starting on {} ({})",
            draft.year,
            draft.month,
            start_weekday,
            self.tz
        );

        Ok(Calendar {
            year: draft.year,
            month: draft.month,
            start_weekday,
        })
    }
}
