use crate::models::{TimeWindow, WeekStart};
use crate::utils::date::month_last_day;
use chrono::{Datelike, Days, NaiveDate, NaiveDateTime};

/// Decide whether `record_date` falls inside `window` relative to `now`.
///
/// Weeks are compared by their first day, so a week spanning New Year is
/// still a single week.
pub fn belongs_to_window(
    record_date: NaiveDate,
    window: TimeWindow,
    now: NaiveDateTime,
    week_start: WeekStart,
) -> bool {
    let today = now.date();

    match window {
        TimeWindow::All => true,
        TimeWindow::Today => record_date == today,
        TimeWindow::ThisWeek => {
            start_of_week(record_date, week_start) == start_of_week(today, week_start)
        }
        TimeWindow::ThisMonth => {
            record_date.year() == today.year() && record_date.month() == today.month()
        }
        TimeWindow::ThisYear => record_date.year() == today.year(),
    }
}

/// First day of the week containing `date`.
pub fn start_of_week(date: NaiveDate, week_start: WeekStart) -> NaiveDate {
    let first = week_start.weekday().num_days_from_monday();
    let offset = (date.weekday().num_days_from_monday() + 7 - first) % 7;

    date.checked_sub_days(Days::new(u64::from(offset))).unwrap_or(NaiveDate::MIN)
}

/// Inclusive date range covered by `window` at `now`. `None` for `All`.
pub fn window_bounds(
    window: TimeWindow,
    now: NaiveDateTime,
    week_start: WeekStart,
) -> Option<(NaiveDate, NaiveDate)> {
    let today = now.date();

    match window {
        TimeWindow::All => None,
        TimeWindow::Today => Some((today, today)),
        TimeWindow::ThisWeek => {
            let first = start_of_week(today, week_start);
            let last = first.checked_add_days(Days::new(6)).unwrap_or(NaiveDate::MAX);
            Some((first, last))
        }
        TimeWindow::ThisMonth => {
            let first = today.with_day(1)?;
            let last = today.with_day(month_last_day(today.year(), today.month())?)?;
            Some((first, last))
        }
        TimeWindow::ThisYear => {
            let first = NaiveDate::from_ymd_opt(today.year(), 1, 1)?;
            let last = NaiveDate::from_ymd_opt(today.year(), 12, 31)?;
            Some((first, last))
        }
    }
}
