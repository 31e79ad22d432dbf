// src/pricing.rs
//
// Stay-price quoting over the uploaded tariff table. The surcharge and
// discount policy lives here and nowhere else.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::domain::records::TariffRecord;

/// Surcharge multiplier for the party size. Flat table for 1..=4 guests;
/// any other size gets no surcharge.
fn party_multiplier(party_size: u32) -> f64 {
    match party_size {
        2 => 1.2,
        3 => 1.4,
        4 => 1.6,
        _ => 1.0,
    }
}

/// Length-of-stay discount. The thresholds are mutually exclusive: only
/// the deepest applicable discount applies.
fn stay_discount(nights: u32) -> f64 {
    if nights >= 7 {
        0.90
    } else if nights >= 3 {
        0.95
    } else {
        1.0
    }
}

/// Rate magnitudes stay textual on the record; absence counts as zero and
/// an unparseable value degrades to zero instead of poisoning the total.
fn parse_rate(value: Option<&str>) -> f64 {
    value.and_then(|value| value.parse::<f64>().ok()).unwrap_or(0.0)
}

/// Quoted total for a stay, in whole currency units.
///
/// Looks for a tariff row matching the date and room type exactly, then
/// falls back to the room type's first row regardless of date (the
/// table's "default rate" convention). `None` when the room type has no
/// row at all — render that as "no quote available", not as 0. Callers
/// are expected to constrain `nights >= 1`; this function does not.
pub fn quote(
    records: &[TariffRecord],
    date: NaiveDate,
    room_type: &str,
    party_size: u32,
    nights: u32,
) -> Option<i64> {
    let day = date.format("%Y-%m-%d").to_string();
    let wanted = room_type.trim().to_lowercase();
    let is_weekend = matches!(date.weekday(), Weekday::Sat | Weekday::Sun);

    let row = records
        .iter()
        .find(|record| {
            record.date.as_deref() == Some(day.as_str())
                && record.room_type.as_deref() == Some(wanted.as_str())
        })
        .or_else(|| {
            records
                .iter()
                .find(|record| record.room_type.as_deref() == Some(wanted.as_str()))
        })?;

    let nightly_rate = if is_weekend {
        parse_rate(row.weekend_rate.as_deref().or(row.base_rate.as_deref()))
    } else {
        parse_rate(row.base_rate.as_deref())
    };

    let total =
        nightly_rate * party_multiplier(party_size) * f64::from(nights) * stay_discount(nights);
    Some(total.round() as i64)
}
