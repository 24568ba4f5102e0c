//! Attendance classification and aggregation engine.
//!
//! Filter → Paginate → Summarize, driven by the view orchestrator.

pub mod aggregator;
pub mod classifier;
pub mod clock;
pub mod filter;
pub mod orchestrator;
pub mod paginator;
pub mod view;

pub use aggregator::{StatusTally, summarize, tally};
pub use classifier::{belongs_to_window, window_bounds};
pub use clock::{Clock, ManualClock, SystemClock};
pub use filter::filter_records;
pub use orchestrator::{FetchTicket, SourceState, ViewOrchestrator, ViewOutcome};
pub use paginator::{PageSlice, clamp_page, paginate, total_pages};
pub use view::{ViewSettings, ViewState, recompute};
