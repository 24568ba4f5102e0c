use chrono::Weekday;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Named relative time range used to filter records against "now".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TimeWindow {
    #[default]
    All,
    #[serde(alias = "day")]
    #[value(alias = "day")]
    Today,
    #[serde(alias = "week")]
    #[value(alias = "week")]
    ThisWeek,
    #[serde(alias = "month")]
    #[value(alias = "month")]
    ThisMonth,
    #[serde(alias = "year")]
    #[value(alias = "year")]
    ThisYear,
}

impl TimeWindow {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeWindow::All => "all",
            TimeWindow::Today => "today",
            TimeWindow::ThisWeek => "this-week",
            TimeWindow::ThisMonth => "this-month",
            TimeWindow::ThisYear => "this-year",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeWindow::All => "All Time",
            TimeWindow::Today => "Today",
            TimeWindow::ThisWeek => "This Week",
            TimeWindow::ThisMonth => "This Month",
            TimeWindow::ThisYear => "This Year",
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First day of the calendar week.
///
/// Monday gives ISO-8601 weeks; Sunday matches the US locale week.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

impl WeekStart {
    pub fn weekday(&self) -> Weekday {
        match self {
            WeekStart::Monday => Weekday::Mon,
            WeekStart::Sunday => Weekday::Sun,
        }
    }
}

/// Which subset the percentage summary is computed over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SummaryScope {
    /// Only the records on the current page.
    #[default]
    Page,
    /// Every record inside the selected window, across all pages.
    Window,
}

impl SummaryScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryScope::Page => "page",
            SummaryScope::Window => "window",
        }
    }
}
