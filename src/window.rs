//! Calendar window: the week-aligned year the chart covers.

use chrono::{Datelike, Duration, Local, Months, NaiveDate};

/// Days per grid column.
pub const DAYS_PER_WEEK: u32 = 7;

/// Format used for every human-readable date label ("Sun Oct 13 2024").
pub const DATE_LABEL_FORMAT: &str = "%a %b %d %Y";

/// A (week, day) coordinate inside a calendar window.
///
/// `day` counts from Sunday (0) to Saturday (6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPos {
    pub week: u32,
    pub day: u32,
}

/// The date range covered by one chart.
///
/// `start_date` is always a Sunday. `total_weeks` counts only complete weeks
/// between `start_date` and `end_date`; a partial trailing week is truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarWindow {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_weeks: u32,
}

impl CalendarWindow {
    /// Window for the year ending on the local "today".
    pub fn today() -> Self {
        Self::ending(Local::now().date_naive())
    }

    /// Window for the year ending on `today`.
    ///
    /// The start is one calendar year before `today`, snapped back to the
    /// Sunday on or before it.
    pub fn ending(today: NaiveDate) -> Self {
        let year_ago = today
            .checked_sub_months(Months::new(12))
            .unwrap_or(today - Duration::days(365));
        let start_date = week_start(year_ago);
        let total_weeks = ((today - start_date).num_days() / DAYS_PER_WEEK as i64).max(0) as u32;
        Self {
            start_date,
            end_date: today,
            total_weeks,
        }
    }

    /// Number of (week, day) slots in the window.
    pub fn slot_count(&self) -> usize {
        self.total_weeks as usize * DAYS_PER_WEEK as usize
    }

    /// The date `weeks` whole weeks after the window start.
    pub fn date_after_weeks(&self, weeks: u32) -> NaiveDate {
        self.start_date + Duration::weeks(weeks as i64)
    }

    /// Grid position of `date`, or `None` when it falls outside the window.
    pub fn position_of(&self, date: NaiveDate) -> Option<GridPos> {
        let days = (date - self.start_date).num_days();
        if days < 0 {
            return None;
        }
        let week = days / DAYS_PER_WEEK as i64;
        if week >= self.total_weeks as i64 {
            return None;
        }
        Some(GridPos {
            week: week as u32,
            day: day_of_week(date),
        })
    }

    /// Date sitting at a grid position.
    pub fn date_at(&self, pos: GridPos) -> NaiveDate {
        self.date_after_weeks(pos.week) + Duration::days(pos.day as i64)
    }

    /// Label for a whole week column: `"<sunday> - <saturday>"`.
    pub fn week_label(&self, week: u32) -> String {
        let anchor = self.date_after_weeks(week);
        format!(
            "{} - {}",
            date_label(week_start(anchor)),
            date_label(week_end(anchor))
        )
    }
}

/// Day of week counted from Sunday.
pub fn day_of_week(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

/// The Sunday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(day_of_week(date) as i64)
}

/// The Saturday closing the week that contains `date`.
pub fn week_end(date: NaiveDate) -> NaiveDate {
    week_start(date) + Duration::days(6)
}

pub fn date_label(date: NaiveDate) -> String {
    date.format(DATE_LABEL_FORMAT).to_string()
}
