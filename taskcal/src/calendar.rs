//! Calendar view state: month / week / day navigation and grid layout.
//!
//! The view only tracks which days are on screen. Event placement is a
//! filter over the planner's events, see `Planner::events_on`.

use chrono::{Datelike, Months, NaiveDate, TimeDelta, Weekday};

/// Number of cells in the month grid (six weeks).
pub const MONTH_GRID_DAYS: usize = 42;

/// Which span of time the calendar shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CalendarMode {
    /// Six-week grid around the focus month.
    #[default]
    Month,
    /// The seven days of the focus week.
    Week,
    /// The focus day only.
    Day,
}

impl std::fmt::Display for CalendarMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Month => write!(f, "month"),
            Self::Week => write!(f, "week"),
            Self::Day => write!(f, "day"),
        }
    }
}

/// First day of the displayed week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    /// Weeks run Sunday to Saturday.
    #[default]
    Sunday,
    /// Weeks run Monday to Sunday.
    Monday,
}

impl WeekStart {
    /// The corresponding chrono weekday.
    #[must_use]
    pub const fn weekday(self) -> Weekday {
        match self {
            Self::Sunday => Weekday::Sun,
            Self::Monday => Weekday::Mon,
        }
    }
}

/// Navigable calendar view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarView {
    /// Current span.
    pub mode: CalendarMode,
    /// Day the view is anchored on.
    pub focus: NaiveDate,
    /// First day of each displayed week.
    pub week_start: WeekStart,
}

impl CalendarView {
    /// Creates a view anchored on `focus`.
    #[must_use]
    pub const fn new(mode: CalendarMode, focus: NaiveDate, week_start: WeekStart) -> Self {
        Self {
            mode,
            focus,
            week_start,
        }
    }

    /// Moves forward one month, week, or day.
    pub fn next(&mut self) {
        self.focus = shift(self.focus, self.mode, 1);
        tracing::debug!(focus = %self.focus, mode = %self.mode, "calendar next");
    }

    /// Moves back one month, week, or day.
    pub fn prev(&mut self) {
        self.focus = shift(self.focus, self.mode, -1);
        tracing::debug!(focus = %self.focus, mode = %self.mode, "calendar prev");
    }

    /// Jumps to `today`.
    pub const fn today(&mut self, today: NaiveDate) {
        self.focus = today;
    }

    /// Switches the span, keeping the focus day.
    pub const fn set_mode(&mut self, mode: CalendarMode) {
        self.mode = mode;
    }

    /// Days on screen, in display order.
    ///
    /// Month: [`MONTH_GRID_DAYS`] days starting at the week containing the
    /// 1st. Week: the seven days of the focus week. Day: the focus day.
    #[must_use]
    pub fn visible_days(&self) -> Vec<NaiveDate> {
        let (first, count) = match self.mode {
            CalendarMode::Month => (
                start_of_week(first_day_of_month(self.focus), self.week_start),
                MONTH_GRID_DAYS,
            ),
            CalendarMode::Week => (start_of_week(self.focus, self.week_start), 7),
            CalendarMode::Day => (self.focus, 1),
        };
        first.iter_days().take(count).collect()
    }

    /// Weekday column headers starting at the configured week start.
    #[must_use]
    pub fn weekday_labels(&self) -> [&'static str; 7] {
        let mut labels = [""; 7];
        let mut day = self.week_start.weekday();
        for label in &mut labels {
            *label = weekday_label(day);
            day = day.succ();
        }
        labels
    }

    /// Header text for the current span.
    #[must_use]
    pub fn title(&self) -> String {
        match self.mode {
            CalendarMode::Month => self.focus.format("%B %Y").to_string(),
            CalendarMode::Week => {
                let first = start_of_week(self.focus, self.week_start);
                let last = add_days(first, 6);
                format!("{} - {}", first.format("%b %d %Y"), last.format("%b %d %Y"))
            }
            CalendarMode::Day => self.focus.format("%A, %b %d %Y").to_string(),
        }
    }

    /// Whether `day` belongs to the focus month (month grid shading).
    #[must_use]
    pub fn in_focus_month(&self, day: NaiveDate) -> bool {
        day.year() == self.focus.year() && day.month() == self.focus.month()
    }
}

fn shift(date: NaiveDate, mode: CalendarMode, step: i32) -> NaiveDate {
    match mode {
        CalendarMode::Month => {
            let months = Months::new(step.unsigned_abs());
            if step >= 0 {
                date.checked_add_months(months)
            } else {
                date.checked_sub_months(months)
            }
            .unwrap_or(date)
        }
        CalendarMode::Week => add_days(date, i64::from(step) * 7),
        CalendarMode::Day => add_days(date, i64::from(step)),
    }
}

fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(TimeDelta::days(days))
        .unwrap_or(date)
}

fn start_of_week(day: NaiveDate, week_start: WeekStart) -> NaiveDate {
    let day_idx = i64::from(day.weekday().num_days_from_monday());
    let start_idx = i64::from(week_start.weekday().num_days_from_monday());
    add_days(day, -((7 + day_idx - start_idx) % 7))
}

const fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}
