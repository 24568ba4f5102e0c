pub mod owner;
pub mod page;
pub mod record;
pub mod status;
pub mod summary;
pub mod window;

pub use owner::RecordOwner;
pub use page::{DEFAULT_PAGE_SIZE, Page};
pub use record::AttendanceRecord;
pub use status::AttendanceStatus;
pub use summary::AttendanceSummary;
pub use window::{SummaryScope, TimeWindow, WeekStart};
