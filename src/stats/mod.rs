pub mod availability;
pub mod grouping;
pub mod staffing;

pub use availability::{availability_summary, AvailabilitySummary};
pub use grouping::{group_counts, GroupCount};
pub use staffing::{staffing_summary, StaffingSummary};

/// Integer percentage of `part` in `whole`, rounded half away from zero.
/// Zero when `whole` is zero; no fractional percentages are surfaced.
pub(crate) fn percentage(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    (100.0 * f64::from(part) / f64::from(whole)).round() as u32
}
