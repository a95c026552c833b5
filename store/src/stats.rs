//! Aggregates derived from store records for dashboard cards.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::{AttendanceRecord, AttendanceStatus};

/// Percentage of `part` in `whole`, rounded to one decimal. `0.0` when `whole` is zero.
pub fn rate(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    let pct = part as f64 / whole as f64 * 100.0;
    (pct * 10.0).round() / 10.0
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AttendanceSummary {
    pub total: usize,
    pub present: usize,
    pub absent: usize,
    pub late: usize,
    /// Record count per method label.
    pub by_method: BTreeMap<String, usize>,
    pub class_size: usize,
    /// `present + late` over `class_size`, in percent.
    pub attendance_rate: f64,
}

impl AttendanceSummary {
    pub fn from_records<'a, I>(records: I, class_size: usize) -> Self
    where
        I: IntoIterator<Item = &'a AttendanceRecord>,
    {
        let mut summary = AttendanceSummary {
            class_size,
            ..Default::default()
        };

        for r in records {
            summary.total += 1;
            match r.status {
                AttendanceStatus::Present => summary.present += 1,
                AttendanceStatus::Absent => summary.absent += 1,
                AttendanceStatus::Late => summary.late += 1,
            }
            *summary
                .by_method
                .entry(r.method.label().to_string())
                .or_insert(0) += 1;
        }

        summary.attendance_rate = rate(summary.present + summary.late, class_size);
        summary
    }

    pub fn count(&self, status: AttendanceStatus) -> usize {
        match status {
            AttendanceStatus::Present => self.present,
            AttendanceStatus::Absent => self.absent,
            AttendanceStatus::Late => self.late,
        }
    }
}
