// src/competition.rs
//
// Same-date price comparison against competitor hotels. The reference
// hotel ("ours") is whichever hotel appears first in source order among
// the date's rows — a positional convention the data producer must
// follow, since the format carries no explicit own-hotel flag.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::records::CompetitorRateRecord;

/// Competitive position for one date.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitiveAnalysis {
    /// The queried date, rendered `YYYY-MM-DD`.
    pub date: String,
    pub reference_hotel: String,
    /// Competitor -> room type -> percentage differential against the
    /// reference hotel, one decimal. Positive means the competitor is
    /// dearer. Room types the reference hotel has no usable price for
    /// are skipped.
    pub price_differences: BTreeMap<String, BTreeMap<String, f64>>,
    /// Competitor -> mean differential over shared room types. A
    /// competitor sharing no room type with the reference hotel is
    /// omitted entirely.
    pub average_differences: BTreeMap<String, f64>,
    /// One row per reference-hotel room type, in first-appearance order,
    /// carrying every hotel's price for that type when it has one.
    pub chart: Vec<RoomTypePrices>,
}

/// Chart row: one room type, each hotel's public rate for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomTypePrices {
    pub room_type: String,
    pub prices: Vec<HotelPrice>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotelPrice {
    pub hotel: String,
    pub price: f64,
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Competitive analysis for `date`; `None` when no rate row matches it.
pub fn analyze(records: &[CompetitorRateRecord], date: NaiveDate) -> Option<CompetitiveAnalysis> {
    let day = date.format("%Y-%m-%d").to_string();
    let rates_for_date: Vec<&CompetitorRateRecord> = records
        .iter()
        .filter(|record| record.date.as_deref() == Some(day.as_str()))
        .collect();

    if rates_for_date.is_empty() {
        return None;
    }

    // Hotel -> (room type -> price), both levels in first-appearance
    // order, duplicate (hotel, room type) pairs resolved last-write-wins.
    let mut hotels: Vec<(String, Vec<(String, f64)>)> = Vec::new();
    for record in &rates_for_date {
        let index = match hotels
            .iter()
            .position(|(name, _)| *name == record.hotel_name)
        {
            Some(index) => index,
            None => {
                hotels.push((record.hotel_name.clone(), Vec::new()));
                hotels.len() - 1
            }
        };
        let prices = &mut hotels[index].1;
        match prices.iter_mut().find(|(kind, _)| *kind == record.room_type) {
            Some((_, price)) => *price = record.public_rate,
            None => prices.push((record.room_type.clone(), record.public_rate)),
        }
    }

    let (reference_hotel, reference_prices) = hotels[0].clone();

    let mut price_differences = BTreeMap::new();
    let mut average_differences = BTreeMap::new();
    for (hotel, prices) in hotels.iter().skip(1) {
        let mut differences = BTreeMap::new();
        let mut sum = 0.0;
        let mut shared = 0u32;

        for (room_type, price) in prices {
            let reference_price = reference_prices
                .iter()
                .find(|(kind, _)| kind == room_type)
                .map(|(_, price)| *price)
                .unwrap_or(0.0);
            // A zero reference price means no usable quote; skip rather
            // than divide by it.
            if reference_price == 0.0 {
                continue;
            }

            let difference = (price - reference_price) / reference_price * 100.0;
            differences.insert(room_type.clone(), round1(difference));
            sum += difference;
            shared += 1;
        }

        if shared > 0 {
            average_differences.insert(hotel.clone(), round1(sum / f64::from(shared)));
        }
        price_differences.insert(hotel.clone(), differences);
    }

    let chart = reference_prices
        .iter()
        .map(|(room_type, _)| RoomTypePrices {
            room_type: room_type.clone(),
            prices: hotels
                .iter()
                .filter_map(|(hotel, prices)| {
                    prices
                        .iter()
                        .find(|(kind, price)| kind == room_type && *price != 0.0)
                        .map(|(_, price)| HotelPrice {
                            hotel: hotel.clone(),
                            price: *price,
                        })
                })
                .collect(),
        })
        .collect();

    Some(CompetitiveAnalysis {
        date: day,
        reference_hotel,
        price_differences,
        average_differences,
        chart,
    })
}
