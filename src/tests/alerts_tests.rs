// src/tests/alerts_tests.rs

use chrono::NaiveDate;

use crate::alerts::{Alert, AlertFeed, AlertFilter, AlertLevel};

fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").expect("test date")
}

fn alert(id: &str, day: &str, module: &str, level: AlertLevel, read: bool) -> Alert {
    Alert {
        id: id.to_string(),
        date: date(day),
        module: module.to_string(),
        kind: "Suivi".to_string(),
        level,
        message: format!("alerte {id}"),
        read,
    }
}

/// A feed shaped like the dashboard's seed data: seven alerts across the
/// four modules, three of them already read.
fn sample_feed() -> AlertFeed {
    AlertFeed::new(vec![
        alert("1", "2025-04-07", "Staff", AlertLevel::Warning, false),
        alert("2", "2025-04-07", "Disponibilites", AlertLevel::Success, false),
        alert("3", "2025-04-06", "Tarifs", AlertLevel::Info, true),
        alert("4", "2025-04-06", "Concurrence", AlertLevel::Warning, false),
        alert("5", "2025-04-05", "Disponibilites", AlertLevel::Error, false),
        alert("6", "2025-04-05", "Staff", AlertLevel::Info, true),
        alert("7", "2025-04-04", "Tarifs", AlertLevel::Success, true),
    ])
}

#[test]
fn unread_count_and_tallies() {
    let feed = sample_feed();

    assert_eq!(feed.len(), 7);
    assert_eq!(feed.unread_count(), 4);

    let by_module = feed.count_by_module();
    assert_eq!(by_module["Staff"], 2);
    assert_eq!(by_module["Disponibilites"], 2);
    assert_eq!(by_module["Tarifs"], 2);
    assert_eq!(by_module["Concurrence"], 1);

    let by_level = feed.count_by_level();
    assert_eq!(by_level[&AlertLevel::Warning], 2);
    assert_eq!(by_level[&AlertLevel::Error], 1);
}

#[test]
fn filters_compose_and_date_bounds_are_inclusive() {
    let feed = sample_feed();

    let staff_only = feed.filter(&AlertFilter {
        module: Some("Staff".to_string()),
        ..AlertFilter::default()
    });
    assert_eq!(staff_only.len(), 2);

    let warnings_in_window = feed.filter(&AlertFilter {
        level: Some(AlertLevel::Warning),
        from: Some(date("2025-04-06")),
        to: Some(date("2025-04-07")),
        ..AlertFilter::default()
    });
    let ids: Vec<&str> = warnings_in_window
        .iter()
        .map(|alert| alert.id.as_str())
        .collect();
    assert_eq!(ids, vec!["1", "4"]);

    let empty = feed.filter(&AlertFilter {
        module: Some("Inexistant".to_string()),
        ..AlertFilter::default()
    });
    assert!(empty.is_empty());
}

#[test]
fn mark_read_returns_a_new_snapshot_and_leaves_the_original_alone() {
    let feed = sample_feed();

    let updated = feed.mark_read("1");

    // Step 1: the original snapshot is untouched.
    assert_eq!(feed.unread_count(), 4);
    assert!(!feed.alerts()[0].read);

    // Step 2: the new snapshot carries the transition.
    assert_eq!(updated.unread_count(), 3);
    assert!(updated.alerts()[0].read);

    // Step 3: everything else is unchanged.
    assert_eq!(feed.alerts()[1..], updated.alerts()[1..]);
}

#[test]
fn marking_an_unknown_id_is_a_no_op() {
    let feed = sample_feed();

    let updated = feed.mark_read("999");

    assert_eq!(feed, updated);
}

#[test]
fn mark_all_read_clears_the_unread_count() {
    let feed = sample_feed();

    let updated = feed.mark_all_read();

    assert_eq!(updated.unread_count(), 0);
    assert_eq!(updated.len(), feed.len());
    assert_eq!(feed.unread_count(), 4);
}
