use crate::core::aggregator::{StatusTally, tally};
use crate::core::filter::filter_records;
use crate::core::paginator::paginate;
use crate::models::{
    AttendanceRecord, AttendanceSummary, DEFAULT_PAGE_SIZE, SummaryScope, TimeWindow, WeekStart,
};
use chrono::NaiveDateTime;
use serde::Serialize;

/// Knobs that shape a recompute but are not user navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewSettings {
    pub page_size: usize,
    pub week_start: WeekStart,
    pub scope: SummaryScope,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            week_start: WeekStart::default(),
            scope: SummaryScope::default(),
        }
    }
}

/// Display-ready result of one Filter → Paginate → Summarize pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewState {
    pub window: TimeWindow,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    /// Records inside the window, across all pages.
    pub filtered_count: usize,
    pub page_slice: Vec<AttendanceRecord>,
    pub summary: AttendanceSummary,
    pub tally: StatusTally,
    pub scope: SummaryScope,
    /// Nothing matched the window: render "no records", not an error.
    pub no_records: bool,
}

/// Run the whole pipeline for one set of inputs.
pub fn recompute(
    records: &[AttendanceRecord],
    window: TimeWindow,
    page: usize,
    now: NaiveDateTime,
    settings: &ViewSettings,
) -> ViewState {
    let filtered = filter_records(records, window, now, settings.week_start);
    let slice = paginate(&filtered, page, settings.page_size);

    let counts = match settings.scope {
        SummaryScope::Page => tally(slice.items.iter().copied()),
        SummaryScope::Window => tally(filtered.iter().copied()),
    };

    ViewState {
        window,
        page,
        page_size: settings.page_size,
        total_pages: slice.total_pages,
        filtered_count: filtered.len(),
        page_slice: slice.items.into_iter().cloned().collect(),
        summary: counts.to_summary(),
        tally: counts,
        scope: settings.scope,
        no_records: filtered.is_empty(),
    }
}
