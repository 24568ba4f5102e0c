//! View orchestrator: owns the navigation state (owner, window, page) and
//! republishes the view every time one of its inputs changes.

use crate::core::clock::Clock;
use crate::core::filter::filter_records;
use crate::core::paginator::{clamp_page, total_pages};
use crate::core::view::{ViewSettings, ViewState, recompute};
use crate::errors::AppResult;
use crate::models::{AttendanceRecord, RecordOwner, TimeWindow};
use crate::source::RecordSource;
use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::debug;

/// Where the record set currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceState {
    Awaiting,
    Ready(Vec<AttendanceRecord>),
    Unavailable(String),
}

/// What the presentation layer should show.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ViewOutcome {
    Loading,
    Unavailable { reason: String },
    Ready(ViewState),
}

impl ViewOutcome {
    pub fn state(&self) -> Option<&ViewState> {
        match self {
            ViewOutcome::Ready(state) => Some(state),
            _ => None,
        }
    }
}

/// Handle for one in-flight fetch. Only the latest ticket is honoured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    owner: RecordOwner,
}

impl FetchTicket {
    pub fn owner(&self) -> RecordOwner {
        self.owner
    }
}

pub struct ViewOrchestrator {
    owner: RecordOwner,
    window: TimeWindow,
    page: usize,
    settings: ViewSettings,
    source: SourceState,
    generation: u64,
    clock: Box<dyn Clock>,
    outcome: ViewOutcome,
}

impl ViewOrchestrator {
    pub fn new(owner: RecordOwner, settings: ViewSettings, clock: Box<dyn Clock>) -> Self {
        Self {
            owner,
            window: TimeWindow::All,
            page: 1,
            settings,
            source: SourceState::Awaiting,
            generation: 0,
            clock,
            outcome: ViewOutcome::Loading,
        }
    }

    pub fn owner(&self) -> RecordOwner {
        self.owner
    }

    pub fn window(&self) -> TimeWindow {
        self.window
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn settings(&self) -> &ViewSettings {
        &self.settings
    }

    pub fn source_state(&self) -> &SourceState {
        &self.source
    }

    pub fn outcome(&self) -> &ViewOutcome {
        &self.outcome
    }

    /// Current reading of the orchestrator's clock.
    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    /// Start fetching records for `owner`.
    ///
    /// A different owner resets the window to `All` and the page to 1.
    /// Until the ticket is completed the outcome stays `Loading`.
    pub fn begin_fetch(&mut self, owner: RecordOwner) -> FetchTicket {
        if owner != self.owner {
            debug!(from = %self.owner, to = %owner, "record owner changed, resetting window and page");
            self.owner = owner;
            self.window = TimeWindow::All;
            self.page = 1;
        }

        self.generation += 1;
        self.source = SourceState::Awaiting;
        self.outcome = ViewOutcome::Loading;

        FetchTicket {
            generation: self.generation,
            owner,
        }
    }

    /// Apply a fetch result. Returns false when the ticket was superseded
    /// by a later `begin_fetch`; the result is then dropped.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: AppResult<Vec<AttendanceRecord>>,
    ) -> bool {
        if ticket.generation != self.generation {
            debug!(
                ticket = ticket.generation,
                latest = self.generation,
                "discarding stale fetch result"
            );
            return false;
        }

        self.source = match result {
            Ok(records) => {
                debug!(owner = %ticket.owner, records = records.len(), "records ready");
                SourceState::Ready(records)
            }
            Err(e) => {
                debug!(owner = %ticket.owner, error = %e, "record source unavailable");
                SourceState::Unavailable(e.to_string())
            }
        };

        self.recompute();
        true
    }

    /// Fetch synchronously from `source` and publish the result.
    pub fn load(&mut self, source: &dyn RecordSource, owner: RecordOwner) -> &ViewOutcome {
        let ticket = self.begin_fetch(owner);
        let result = source.fetch(&owner);
        self.complete_fetch(ticket, result);
        &self.outcome
    }

    pub fn select_window(&mut self, window: TimeWindow) -> &ViewOutcome {
        self.window = window;
        self.page = 1;
        self.recompute();
        &self.outcome
    }

    /// Move to `page`, clamped into the pages available for the current window.
    pub fn select_page(&mut self, page: usize) -> &ViewOutcome {
        let now = self.clock.now();

        self.page = match &self.source {
            SourceState::Ready(records) => {
                let filtered = filter_records(records, self.window, now, self.settings.week_start);
                clamp_page(page, total_pages(filtered.len(), self.settings.page_size))
            }
            _ => page.max(1),
        };

        self.recompute_at(now);
        &self.outcome
    }

    /// Change how many records fit on a page. Goes back to page 1.
    pub fn set_page_size(&mut self, page_size: usize) -> &ViewOutcome {
        self.settings.page_size = page_size;
        self.page = 1;
        self.recompute();
        &self.outcome
    }

    pub fn set_settings(&mut self, settings: ViewSettings) -> &ViewOutcome {
        if settings.page_size != self.settings.page_size {
            self.page = 1;
        }
        self.settings = settings;
        self.recompute();
        &self.outcome
    }

    /// Recompute against a fresh "now" without changing any input.
    pub fn refresh(&mut self) -> &ViewOutcome {
        self.recompute();
        &self.outcome
    }

    fn recompute(&mut self) {
        let now = self.clock.now();
        self.recompute_at(now);
    }

    fn recompute_at(&mut self, now: NaiveDateTime) {
        self.outcome = match &self.source {
            SourceState::Awaiting => ViewOutcome::Loading,
            SourceState::Unavailable(reason) => ViewOutcome::Unavailable {
                reason: reason.clone(),
            },
            SourceState::Ready(records) => {
                let state = recompute(records, self.window, self.page, now, &self.settings);
                debug!(
                    window = %state.window,
                    page = state.page,
                    total_pages = state.total_pages,
                    filtered = state.filtered_count,
                    "view recomputed"
                );
                ViewOutcome::Ready(state)
            }
        };
    }
}
