use chrono::Weekday;
use itertools::Itertools;
use std::iter;

use crate::calendar::Calendar;
use crate::locale::WeekdayLabels;

/// How a [`Calendar`] is laid out as text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    labels: WeekdayLabels,
    week_start: Weekday,
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            labels: WeekdayLabels::default(),
            week_start: Weekday::Mon,
        }
    }
}

impl Layout {
    const COLUMNS: usize = 7;
    const BLANK_CELL: &'static str = "   ";

    pub fn new(labels: WeekdayLabels, week_start: Weekday) -> Self {
        Layout { labels, week_start }
    }

    pub fn labels(mut self, labels: WeekdayLabels) -> Self {
        self.labels = labels;
        self
    }

    pub fn week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = week_start;
        self
    }

    /// Weekdays in column order.
    pub fn weekdays(&self) -> impl Iterator<Item = Weekday> {
        iter::successors(Some(self.week_start), |day| Some(day.succ())).take(Self::COLUMNS)
    }

    pub fn column_of(&self, weekday: Weekday) -> usize {
        let offset = weekday.num_days_from_monday() + 7 - self.week_start.num_days_from_monday();
        offset as usize % Self::COLUMNS
    }

    pub fn header(&self) -> String {
        self.weekdays().map(|day| self.labels.label(day)).join(" ")
    }

    /// Renders the header line followed by one line per week. Every 7th cell
    /// is followed by a newline, the last week is not padded.
    pub fn render(&self, calendar: &Calendar) -> String {
        let offset = self.column_of(calendar.start_weekday());

        let cells: Vec<String> = iter::repeat_with(|| Self::BLANK_CELL.to_owned())
            .take(offset)
            .chain((1..=calendar.days()).map(|day| format!("{:>2} ", day)))
            .collect();

        let mut out = self.header();
        out.push('\n');
        out.push_str(
            &cells
                .chunks(Self::COLUMNS)
                .map(|week| week.concat())
                .join("\n"),
        );
        if cells.len() % Self::COLUMNS == 0 {
            out.push('\n');
        }

        out
    }
}

/// Renders `calendar` with the default layout.
pub fn render(calendar: &Calendar) -> String {
    Layout::default().render(calendar)
}
