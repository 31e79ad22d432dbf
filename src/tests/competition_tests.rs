// src/tests/competition_tests.rs

use chrono::NaiveDate;

use crate::competition::analyze;
use crate::domain::records::CompetitorRateRecord;

fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").expect("test date")
}

fn rate(day: &str, hotel: &str, room_type: &str, price: f64) -> CompetitorRateRecord {
    CompetitorRateRecord {
        date: Some(day.to_string()),
        hotel_id: None,
        hotel_name: hotel.to_string(),
        category: None,
        room_type: room_type.to_string(),
        public_rate: price,
    }
}

/// Two hotels, two shared room types: HotelA is the reference; HotelB
/// is 10% dearer on standard and 5% cheaper on suites.
fn worked_example() -> Vec<CompetitorRateRecord> {
    vec![
        rate("2025-04-07", "HotelA", "standard", 100.0),
        rate("2025-04-07", "HotelA", "suite", 200.0),
        rate("2025-04-07", "HotelB", "standard", 110.0),
        rate("2025-04-07", "HotelB", "suite", 190.0),
    ]
}

#[test]
fn percentage_differentials_against_the_reference_hotel() {
    let analysis = analyze(&worked_example(), date("2025-04-07")).expect("rows for the date");

    assert_eq!(analysis.reference_hotel, "HotelA");

    let hotel_b = &analysis.price_differences["HotelB"];
    assert_eq!(hotel_b["standard"], 10.0);
    assert_eq!(hotel_b["suite"], -5.0);
    assert_eq!(analysis.average_differences["HotelB"], 2.5);
}

#[test]
fn reference_hotel_is_the_first_row_in_source_order() {
    let mut records = worked_example();
    records.rotate_left(2); // HotelB rows now come first

    let analysis = analyze(&records, date("2025-04-07")).expect("rows for the date");

    assert_eq!(analysis.reference_hotel, "HotelB");
    assert!(analysis.price_differences.contains_key("HotelA"));
}

#[test]
fn no_rows_for_the_date_yields_none() {
    assert!(analyze(&worked_example(), date("2025-04-08")).is_none());
    assert!(analyze(&[], date("2025-04-07")).is_none());
}

#[test]
fn zero_reference_price_skips_the_room_type() {
    let records = vec![
        rate("2025-04-07", "HotelA", "standard", 100.0),
        rate("2025-04-07", "HotelA", "economy", 0.0),
        rate("2025-04-07", "HotelB", "standard", 110.0),
        rate("2025-04-07", "HotelB", "economy", 50.0),
    ];

    let analysis = analyze(&records, date("2025-04-07")).expect("rows for the date");

    let hotel_b = &analysis.price_differences["HotelB"];
    assert!(hotel_b.get("economy").is_none());
    assert_eq!(analysis.average_differences["HotelB"], 10.0);
}

#[test]
fn competitor_with_no_shared_room_type_is_omitted_from_averages() {
    let records = vec![
        rate("2025-04-07", "HotelA", "standard", 100.0),
        rate("2025-04-07", "HotelC", "penthouse", 500.0),
    ];

    let analysis = analyze(&records, date("2025-04-07")).expect("rows for the date");

    assert!(analysis.average_differences.get("HotelC").is_none());
    // The competitor still appears in the differential map, just empty.
    assert!(analysis.price_differences["HotelC"].is_empty());
}

#[test]
fn duplicate_hotel_room_type_pairs_resolve_last_write_wins() {
    let records = vec![
        rate("2025-04-07", "HotelA", "standard", 100.0),
        rate("2025-04-07", "HotelB", "standard", 90.0),
        rate("2025-04-07", "HotelB", "standard", 120.0),
    ];

    let analysis = analyze(&records, date("2025-04-07")).expect("rows for the date");

    assert_eq!(analysis.price_differences["HotelB"]["standard"], 20.0);
}

#[test]
fn chart_rows_follow_the_reference_hotels_room_types() {
    let records = vec![
        rate("2025-04-07", "HotelA", "suite", 200.0),
        rate("2025-04-07", "HotelA", "standard", 100.0),
        rate("2025-04-07", "HotelB", "standard", 110.0),
    ];

    let analysis = analyze(&records, date("2025-04-07")).expect("rows for the date");

    // First-appearance order of the reference hotel's types, not sorted.
    let row_types: Vec<&str> = analysis
        .chart
        .iter()
        .map(|row| row.room_type.as_str())
        .collect();
    assert_eq!(row_types, vec!["suite", "standard"]);

    // HotelB quotes no suite, so the suite row carries only HotelA.
    let suite_row = &analysis.chart[0];
    assert_eq!(suite_row.prices.len(), 1);
    assert_eq!(suite_row.prices[0].hotel, "HotelA");

    let standard_row = &analysis.chart[1];
    let hotels: Vec<&str> = standard_row
        .prices
        .iter()
        .map(|price| price.hotel.as_str())
        .collect();
    assert_eq!(hotels, vec!["HotelA", "HotelB"]);
}

#[test]
fn one_decimal_rounding_on_differentials() {
    let records = vec![
        rate("2025-04-07", "HotelA", "standard", 90.0),
        rate("2025-04-07", "HotelB", "standard", 100.0),
    ];

    let analysis = analyze(&records, date("2025-04-07")).expect("rows for the date");

    // (100 - 90) / 90 = 11.111...% -> 11.1
    assert_eq!(analysis.price_differences["HotelB"]["standard"], 11.1);
    assert_eq!(analysis.average_differences["HotelB"], 11.1);
}
