// src/stats/availability.rs

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::HotelConfig;
use crate::domain::records::AvailabilityRecord;
use crate::stats::grouping::{group_counts, GroupCount};
use crate::stats::percentage;

/// Room-occupancy statistics for a single date.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilitySummary {
    /// The queried date, rendered `YYYY-MM-DD`.
    pub date: String,
    pub total_rooms: u32,
    pub available_rooms: u32,
    /// Integer percentage of occupied rooms.
    pub occupation_rate: u32,
    /// True when no row matched the date and `total_rooms` is the
    /// configured capacity instead of an observed count. Callers that
    /// need real occupancy must check this.
    pub assumed_capacity: bool,
    /// Tallies for the fixed room-type buckets, present even when empty.
    /// Rows with an unrecognized room type are counted in no bucket.
    pub room_types: BTreeMap<String, GroupCount>,
}

/// Occupancy statistics for `date`. `None` when nothing has been imported
/// at all; a date with no rows yields a placeholder summary built on the
/// configured capacity, flagged via `assumed_capacity`.
pub fn availability_summary(
    records: &[AvailabilityRecord],
    date: NaiveDate,
    config: &HotelConfig,
) -> Option<AvailabilitySummary> {
    if records.is_empty() {
        return None;
    }

    let day = date.format("%Y-%m-%d").to_string();
    let rooms_for_date: Vec<&AvailabilityRecord> = records
        .iter()
        .filter(|record| record.date.as_deref() == Some(day.as_str()))
        .collect();

    let assumed_capacity = rooms_for_date.is_empty();
    let total_rooms = if assumed_capacity {
        config.assumed_room_capacity
    } else {
        rooms_for_date.len() as u32
    };
    let available_rooms = rooms_for_date.iter().filter(|room| room.available).count() as u32;
    let occupation_rate = percentage(total_rooms.saturating_sub(available_rooms), total_rooms);

    // Fixed buckets: seed all three, then take over the counts that fell
    // into them. Anything else stays uncounted.
    let counted = group_counts(
        rooms_for_date.iter().copied(),
        |room| room.room_type.clone(),
        |room| room.available,
    );
    let mut room_types: BTreeMap<String, GroupCount> = config
        .room_type_buckets
        .iter()
        .map(|bucket| (bucket.clone(), GroupCount::default()))
        .collect();
    for (room_type, count) in counted {
        if let Some(bucket) = room_types.get_mut(&room_type) {
            *bucket = count;
        }
    }

    Some(AvailabilitySummary {
        date: day,
        total_rooms,
        available_rooms,
        occupation_rate,
        assumed_capacity,
        room_types,
    })
}
