mod common;
use common::{at, day, many, rec};
use rattendance::core::{
    ManualClock, SourceState, ViewOrchestrator, ViewOutcome, ViewSettings, ViewState, recompute,
};
use rattendance::errors::AppError;
use rattendance::models::{RecordOwner, SummaryScope, TimeWindow, WeekStart};
use rattendance::source::MemorySource;

fn orchestrator_at(clock: &ManualClock, settings: ViewSettings) -> ViewOrchestrator {
    ViewOrchestrator::new(RecordOwner::Me(1), settings, Box::new(clock.clone()))
}

fn ready(outcome: &ViewOutcome) -> &ViewState {
    outcome.state().expect("view should be ready")
}

#[test]
fn test_this_month_scenario() {
    // P and L today, A forty days ago
    let now = at(2026, 10, 21, 10, 0);
    let records = vec![
        rec(1, day(2026, 10, 21), "P"),
        rec(2, day(2026, 10, 21), "L"),
        rec(3, day(2026, 9, 11), "A"),
    ];

    let state = recompute(&records, TimeWindow::ThisMonth, 1, now, &ViewSettings::default());

    assert_eq!(state.filtered_count, 2);
    assert_eq!(state.summary.present, 50.0);
    assert_eq!(state.summary.late, 50.0);
    assert_eq!(state.summary.absent, 0.0);
    assert_eq!(state.summary.on_leave, 0.0);
    assert!(!state.no_records);
}

#[test]
fn test_page_scope_vs_window_scope() {
    let now = at(2026, 10, 21, 10, 0);
    // 12 records: P,L,A,O cycling; page 2 holds ids 11 (A) and 12 (O)
    let records = many(12, day(2026, 10, 21));

    let page_scope = recompute(&records, TimeWindow::All, 2, now, &ViewSettings::default());
    assert_eq!(page_scope.page_slice.len(), 2);
    assert_eq!(page_scope.tally.total, 2);
    assert_eq!(page_scope.summary.absent, 50.0);
    assert_eq!(page_scope.summary.on_leave, 50.0);
    assert_eq!(page_scope.summary.present, 0.0);

    let settings = ViewSettings {
        scope: SummaryScope::Window,
        ..ViewSettings::default()
    };
    let window_scope = recompute(&records, TimeWindow::All, 2, now, &settings);
    assert_eq!(window_scope.tally.total, 12);
    assert_eq!(window_scope.summary.present, 25.0);
    assert_eq!(window_scope.summary.late, 25.0);
}

#[test]
fn test_loading_until_fetch_completes() {
    let clock = ManualClock::new(at(2026, 10, 21, 10, 0));
    let mut orch = orchestrator_at(&clock, ViewSettings::default());

    let ticket = orch.begin_fetch(RecordOwner::Me(1));
    assert_eq!(orch.outcome(), &ViewOutcome::Loading);

    // navigation while loading keeps the outcome as Loading
    orch.select_window(TimeWindow::Today);
    assert_eq!(orch.outcome(), &ViewOutcome::Loading);

    assert!(orch.complete_fetch(ticket, Ok(vec![rec(1, day(2026, 10, 21), "P")])));
    let state = ready(orch.outcome());
    assert_eq!(state.window, TimeWindow::Today);
    assert_eq!(state.filtered_count, 1);
}

#[test]
fn test_stale_fetch_is_ignored() {
    let clock = ManualClock::new(at(2026, 10, 21, 10, 0));
    let mut orch = orchestrator_at(&clock, ViewSettings::default());

    let first = orch.begin_fetch(RecordOwner::TeamMember(7));
    let second = orch.begin_fetch(RecordOwner::TeamMember(9));
    assert_eq!(first.owner(), RecordOwner::TeamMember(7));

    assert!(orch.complete_fetch(second, Ok(vec![rec(40, day(2026, 10, 20), "O")])));
    // the slower response for the previous owner arrives late
    assert!(!orch.complete_fetch(first, Ok(many(5, day(2026, 10, 21)))));

    let state = ready(orch.outcome());
    assert_eq!(state.filtered_count, 1);
    assert_eq!(state.page_slice[0].id, 40);
    assert_eq!(orch.owner(), RecordOwner::TeamMember(9));
}

#[test]
fn test_owner_change_resets_window_and_page() {
    let clock = ManualClock::new(at(2026, 10, 21, 10, 0));
    let source = MemorySource::new()
        .with_records(1, many(30, day(2026, 10, 21)))
        .with_records(7, many(30, day(2026, 10, 21)));
    let mut orch = orchestrator_at(&clock, ViewSettings::default());

    orch.load(&source, RecordOwner::Me(1));
    orch.select_window(TimeWindow::ThisMonth);
    orch.select_page(3);
    assert_eq!(orch.page(), 3);

    // reloading the same owner keeps navigation state
    orch.load(&source, RecordOwner::Me(1));
    assert_eq!(orch.window(), TimeWindow::ThisMonth);
    assert_eq!(orch.page(), 3);

    orch.load(&source, RecordOwner::TeamMember(7));
    assert_eq!(orch.window(), TimeWindow::All);
    assert_eq!(orch.page(), 1);
    assert_eq!(ready(orch.outcome()).page, 1);
}

#[test]
fn test_select_window_resets_page() {
    let clock = ManualClock::new(at(2026, 10, 21, 10, 0));
    let source = MemorySource::new().with_records(1, many(25, day(2026, 10, 21)));
    let mut orch = orchestrator_at(&clock, ViewSettings::default());

    orch.load(&source, RecordOwner::Me(1));
    orch.select_page(2);
    assert_eq!(orch.page(), 2);

    let state = ready(orch.select_window(TimeWindow::Today));
    assert_eq!(state.page, 1);
    assert_eq!(state.total_pages, 3);
}

#[test]
fn test_select_page_is_clamped() {
    let clock = ManualClock::new(at(2026, 10, 21, 10, 0));
    let source = MemorySource::new().with_records(1, many(25, day(2026, 10, 21)));
    let mut orch = orchestrator_at(&clock, ViewSettings::default());
    orch.load(&source, RecordOwner::Me(1));

    let state = ready(orch.select_page(4));
    assert_eq!(state.page, 3);
    assert_eq!(state.page_slice.len(), 5);

    let state = ready(orch.select_page(0));
    assert_eq!(state.page, 1);
    assert_eq!(state.page_slice.len(), 10);
}

#[test]
fn test_set_page_size_goes_back_to_first_page() {
    let clock = ManualClock::new(at(2026, 10, 21, 10, 0));
    let source = MemorySource::new().with_records(1, many(25, day(2026, 10, 21)));
    let mut orch = orchestrator_at(&clock, ViewSettings::default());
    orch.load(&source, RecordOwner::Me(1));
    orch.select_page(3);

    let state = ready(orch.set_page_size(5));
    assert_eq!(state.page, 1);
    assert_eq!(state.total_pages, 5);
    assert_eq!(state.page_slice.len(), 5);
}

#[test]
fn test_refresh_after_midnight_moves_today() {
    let clock = ManualClock::new(at(2026, 10, 21, 23, 59));
    let source = MemorySource::new().with_records(
        1,
        vec![
            rec(1, day(2026, 10, 21), "P"),
            rec(2, day(2026, 10, 22), "L"),
        ],
    );
    let mut orch = orchestrator_at(&clock, ViewSettings::default());
    orch.load(&source, RecordOwner::Me(1));

    let before = ready(orch.select_window(TimeWindow::Today)).clone();
    assert_eq!(before.page_slice.len(), 1);
    assert_eq!(before.page_slice[0].id, 1);

    clock.set(at(2026, 10, 22, 0, 1));
    let after = ready(orch.refresh());
    assert_eq!(after.page_slice.len(), 1);
    assert_eq!(after.page_slice[0].id, 2);
    assert_eq!(after.summary.late, 100.0);
}

#[test]
fn test_week_start_setting_changes_membership() {
    // Sunday 2026-10-18 against Wednesday 2026-10-21
    let clock = ManualClock::new(at(2026, 10, 21, 12, 0));
    let source = MemorySource::new().with_records(1, vec![rec(1, day(2026, 10, 18), "A")]);
    let mut orch = orchestrator_at(&clock, ViewSettings::default());
    orch.load(&source, RecordOwner::Me(1));

    assert!(ready(orch.select_window(TimeWindow::ThisWeek)).no_records);

    let sunday = ViewSettings {
        week_start: WeekStart::Sunday,
        ..ViewSettings::default()
    };
    let state = ready(orch.set_settings(sunday));
    assert!(!state.no_records);
    assert_eq!(state.summary.absent, 100.0);
}

#[test]
fn test_empty_is_not_unavailable() {
    let clock = ManualClock::new(at(2026, 10, 21, 10, 0));
    let mut orch = orchestrator_at(&clock, ViewSettings::default());

    let state = ready(orch.load(&MemorySource::new(), RecordOwner::Me(1)));
    assert!(state.no_records);
    assert!(state.summary.is_zero());
    assert_eq!(state.total_pages, 1);
    assert_eq!(orch.source_state(), &SourceState::Ready(Vec::new()));
}

#[test]
fn test_unavailable_source() {
    let clock = ManualClock::new(at(2026, 10, 21, 10, 0));
    let mut orch = orchestrator_at(&clock, ViewSettings::default());

    let outcome = orch.load(&MemorySource::unavailable("timeout"), RecordOwner::Me(1));
    match outcome {
        ViewOutcome::Unavailable { reason } => assert!(reason.contains("timeout")),
        other => panic!("expected unavailable, got {other:?}"),
    }

    let ticket = orch.begin_fetch(RecordOwner::Me(1));
    orch.complete_fetch(ticket, Err(AppError::SourceUnavailable("502".into())));
    assert!(matches!(orch.outcome(), ViewOutcome::Unavailable { .. }));
    assert!(orch.outcome().state().is_none());
}

#[test]
fn test_input_records_are_not_mutated() {
    let now = at(2026, 10, 21, 10, 0);
    let records = many(7, day(2026, 10, 21));
    let snapshot = records.clone();

    let _ = recompute(&records, TimeWindow::ThisWeek, 2, now, &ViewSettings::default());
    assert_eq!(records, snapshot);
}
