// src/config.rs

/// Fixed facts about the hotel that the statistics fall back on when the
/// uploaded data is silent. Defaults describe the property this dashboard
/// was built for (45 rooms across three room types).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotelConfig {
    /// Room count assumed when a date has no availability rows at all.
    /// A display convenience, not a computed statistic: summaries built
    /// on it carry an `assumed_capacity` flag.
    pub assumed_room_capacity: u32,

    /// Room-type buckets the availability breakdown reports on. Rows with
    /// any other room type stay out of the per-type counts.
    pub room_type_buckets: Vec<String>,
}

impl Default for HotelConfig {
    fn default() -> Self {
        Self {
            assumed_room_capacity: 45,
            room_type_buckets: vec![
                "standard".to_string(),
                "superieure".to_string(),
                "suite".to_string(),
            ],
        }
    }
}
