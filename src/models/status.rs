use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Classification of a single attendance record.
///
/// The feed encodes statuses as single-letter codes. Anything that does not
/// match one of the four known codes is kept as `Unknown` with the original
/// code, so it can be reported instead of silently dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttendanceStatus {
    Present, // P
    OnLeave, // O
    Absent,  // A
    Late,    // L
    Unknown(String),
}

impl AttendanceStatus {
    pub fn code(&self) -> &str {
        match self {
            AttendanceStatus::Present => "P",
            AttendanceStatus::OnLeave => "O",
            AttendanceStatus::Absent => "A",
            AttendanceStatus::Late => "L",
            AttendanceStatus::Unknown(code) => code,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::OnLeave => "On Leave",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::Late => "Late",
            AttendanceStatus::Unknown(_) => "Unknown",
        }
    }

    /// Convert feed code → enum. Never fails: unrecognised codes become `Unknown`.
    ///
    /// Single-letter codes are matched exactly; the long names are accepted
    /// case-insensitively as aliases.
    pub fn from_code(raw: &str) -> Self {
        let code = raw.trim();
        match code {
            "P" => return AttendanceStatus::Present,
            "O" => return AttendanceStatus::OnLeave,
            "A" => return AttendanceStatus::Absent,
            "L" => return AttendanceStatus::Late,
            _ => {}
        }

        match code.to_lowercase().replace([' ', '-'], "_").as_str() {
            "present" => AttendanceStatus::Present,
            "on_leave" | "onleave" => AttendanceStatus::OnLeave,
            "absent" => AttendanceStatus::Absent,
            "late" => AttendanceStatus::Late,
            _ => AttendanceStatus::Unknown(raw.to_string()),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, AttendanceStatus::Unknown(_))
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for AttendanceStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for AttendanceStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(AttendanceStatus::from_code(&raw))
    }
}
