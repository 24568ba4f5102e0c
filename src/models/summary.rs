use serde::Serialize;

/// Percentage breakdown of statuses, each value rounded to 2 decimals.
///
/// The four values only sum to 100 when every record carried a known code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct AttendanceSummary {
    pub present: f64,
    pub on_leave: f64,
    pub absent: f64,
    pub late: f64,
}

impl AttendanceSummary {
    pub fn is_zero(&self) -> bool {
        self.present == 0.0 && self.on_leave == 0.0 && self.absent == 0.0 && self.late == 0.0
    }
}
