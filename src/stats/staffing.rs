// src/stats/staffing.rs

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::records::StaffingRecord;
use crate::stats::grouping::{group_counts, GroupCount};
use crate::stats::percentage;

/// Staff-presence statistics for a single date.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffingSummary {
    /// The queried date, rendered `YYYY-MM-DD`.
    pub date: String,
    pub total_staff: u32,
    pub present_staff: u32,
    /// Integer percentage of staff present.
    pub present_rate: u32,
    /// Tallies per department, discovered from the data. Rows without a
    /// department land in the "Autre" bucket at mapping time.
    pub departments: BTreeMap<String, GroupCount>,
}

/// Presence statistics for `date`. `None` when no roster row matches the
/// date, which presentation renders as "no data" rather than "0%".
pub fn staffing_summary(records: &[StaffingRecord], date: NaiveDate) -> Option<StaffingSummary> {
    let day = date.format("%Y-%m-%d").to_string();
    let staff_for_date: Vec<&StaffingRecord> = records
        .iter()
        .filter(|record| record.date.as_deref() == Some(day.as_str()))
        .collect();

    if staff_for_date.is_empty() {
        return None;
    }

    let total_staff = staff_for_date.len() as u32;
    let present_staff = staff_for_date.iter().filter(|staff| staff.present).count() as u32;
    let departments = group_counts(
        staff_for_date.iter().copied(),
        |staff| staff.department.clone(),
        |staff| staff.present,
    );

    Some(StaffingSummary {
        date: day,
        total_staff,
        present_staff,
        present_rate: percentage(present_staff, total_staff),
        departments,
    })
}
