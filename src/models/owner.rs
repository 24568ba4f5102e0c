use serde::Serialize;
use std::fmt;

/// Whose records are being viewed.
///
/// The user id is always passed explicitly; switching between owners is what
/// triggers the window/page reset in the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "user_id", rename_all = "snake_case")]
pub enum RecordOwner {
    Me(u64),
    TeamMember(u64),
}

impl RecordOwner {
    pub fn user_id(&self) -> u64 {
        match self {
            RecordOwner::Me(id) | RecordOwner::TeamMember(id) => *id,
        }
    }
}

impl fmt::Display for RecordOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordOwner::Me(id) => write!(f, "my attendance (user {id})"),
            RecordOwner::TeamMember(id) => write!(f, "team member {id}"),
        }
    }
}
