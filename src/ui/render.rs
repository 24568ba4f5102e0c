//! Terminal rendering of a view: summary block plus the current page.

use crate::core::classifier::window_bounds;
use crate::core::{ViewState, ViewSettings};
use crate::models::{AttendanceRecord, RecordOwner, SummaryScope};
use crate::utils::colors::{CYAN, GREEN, MAGENTA, RED, YELLOW, colorize_optional, paint};
use crate::utils::formatting::{bold, describe_status, format_pct, mins2readable};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_optional_time;
use chrono::NaiveDateTime;

pub fn render_view(
    owner: &RecordOwner,
    state: &ViewState,
    settings: &ViewSettings,
    now: NaiveDateTime,
    color: bool,
) -> String {
    let mut out = String::new();

    let title = format!("Attendance Summary for {owner}");
    out.push_str(&if color { bold(&title) } else { title });
    out.push('\n');

    let range = match window_bounds(state.window, now, settings.week_start) {
        Some((from, to)) if from == to => format!(" ({from})"),
        Some((from, to)) => format!(" ({from} → {to})"),
        None => String::new(),
    };
    out.push_str(&format!(
        "{} {}{}\n\n",
        paint("Window:", CYAN, color),
        state.window.label(),
        range
    ));

    out.push_str(&render_summary(state, color));
    out.push('\n');

    if state.no_records {
        out.push_str("No attendance records found.\n");
        return out;
    }

    if state.page_slice.is_empty() {
        out.push_str(&format!(
            "Page {} is past the last page ({}).\n",
            state.page, state.total_pages
        ));
        return out;
    }

    out.push_str(&render_records(&state.page_slice, color));
    out.push_str(&format!(
        "\nPage {} of {} ({} records in window)\n",
        state.page, state.total_pages, state.filtered_count
    ));

    out
}

pub fn render_summary(state: &ViewState, color: bool) -> String {
    let s = &state.summary;
    let scope_note = match state.scope {
        SummaryScope::Page => "current page",
        SummaryScope::Window => "whole window",
    };

    let mut out = format!(
        "{}  {}  {}  {}   [{}]\n",
        paint(&format!("Present: {}", format_pct(s.present)), GREEN, color),
        paint(&format!("On Leave: {}", format_pct(s.on_leave)), YELLOW, color),
        paint(&format!("Absent: {}", format_pct(s.absent)), RED, color),
        paint(&format!("Late: {}", format_pct(s.late)), MAGENTA, color),
        scope_note,
    );

    if state.tally.unknown > 0 {
        out.push_str(&format!(
            "{} record(s) with an unknown status code are counted in the total only.\n",
            state.tally.unknown
        ));
    }

    out
}

pub fn render_records(records: &[AttendanceRecord], color: bool) -> String {
    let mut table = Table::new(vec![
        Column::new("ID"),
        Column::new("Date"),
        Column::new("Status"),
        Column::new("Check-in"),
        Column::new("Check-out"),
        Column::new("Worked"),
    ]);

    for r in records {
        let (label, status_color) = describe_status(&r.status);
        let worked = r
            .worked_minutes()
            .map(|m| mins2readable(m, false, false))
            .unwrap_or_else(|| "--:--".to_string());

        let optional = |v: String| if color { colorize_optional(&v) } else { v };

        table.add_row(vec![
            r.id.to_string(),
            r.date_str(),
            paint(&label, status_color, color),
            optional(format_optional_time(r.check_in_time)),
            optional(format_optional_time(r.check_out_time)),
            optional(worked),
        ]);
    }

    table.render()
}
