//! Record sources: where attendance records come from.
//!
//! The engine never fetches on its own; it is handed whatever a source
//! returns for the requested owner.

pub mod file;
pub mod memory;
mod row;

pub use file::FileSource;
pub use memory::MemorySource;

use crate::errors::AppResult;
use crate::models::{AttendanceRecord, RecordOwner};

pub trait RecordSource {
    /// All records belonging to `owner`, in no particular order.
    ///
    /// An owner without records is `Ok(vec![])`; `Err(SourceUnavailable)` is
    /// reserved for a feed that could not be obtained at all.
    fn fetch(&self, owner: &RecordOwner) -> AppResult<Vec<AttendanceRecord>>;
}
