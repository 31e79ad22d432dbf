// src/alerts.rs
//
// The operational alert feed shown next to the metrics. Alerts are not
// uploaded; presentation (or a future rule engine) constructs them. The
// feed is an immutable snapshot: read-marking is a state transition by
// identifier that returns a new feed, never a flag flipped behind other
// readers' backs.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

/// Severity of an alert, mirroring the dashboard's badge levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// One operational alert.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    pub date: NaiveDate,
    /// Dashboard module the alert originates from, e.g. "Staff".
    pub module: String,
    /// Free-text alert category, e.g. "Personnel".
    pub kind: String,
    pub level: AlertLevel,
    pub message: String,
    pub read: bool,
}

/// Criteria for narrowing the feed. Unset fields match everything; the
/// date bounds are inclusive.
#[derive(Debug, Clone, Default)]
pub struct AlertFilter {
    pub module: Option<String>,
    pub level: Option<AlertLevel>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

/// Immutable snapshot of the alert feed, in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertFeed {
    alerts: Vec<Alert>,
}

impl AlertFeed {
    pub fn new(alerts: Vec<Alert>) -> Self {
        Self { alerts }
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    pub fn unread_count(&self) -> usize {
        self.alerts.iter().filter(|alert| !alert.read).count()
    }

    /// Alert count per originating module, over the whole feed.
    pub fn count_by_module(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for alert in &self.alerts {
            *counts.entry(alert.module.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Alert count per severity level, over the whole feed.
    pub fn count_by_level(&self) -> BTreeMap<AlertLevel, usize> {
        let mut counts = BTreeMap::new();
        for alert in &self.alerts {
            *counts.entry(alert.level).or_insert(0) += 1;
        }
        counts
    }

    /// Alerts satisfying every set criterion, in feed order.
    pub fn filter(&self, filter: &AlertFilter) -> Vec<&Alert> {
        self.alerts
            .iter()
            .filter(|alert| {
                filter
                    .module
                    .as_deref()
                    .map_or(true, |module| alert.module == module)
                    && filter.level.map_or(true, |level| alert.level == level)
                    && filter.from.map_or(true, |from| alert.date >= from)
                    && filter.to.map_or(true, |to| alert.date <= to)
            })
            .collect()
    }

    /// A new feed with the given alert marked read. Marking an unknown id
    /// is a no-op that still returns a full snapshot.
    pub fn mark_read(&self, id: &str) -> AlertFeed {
        AlertFeed {
            alerts: self
                .alerts
                .iter()
                .map(|alert| {
                    let mut alert = alert.clone();
                    if alert.id == id {
                        alert.read = true;
                    }
                    alert
                })
                .collect(),
        }
    }

    /// A new feed with every alert marked read.
    pub fn mark_all_read(&self) -> AlertFeed {
        AlertFeed {
            alerts: self
                .alerts
                .iter()
                .map(|alert| {
                    let mut alert = alert.clone();
                    alert.read = true;
                    alert
                })
                .collect(),
        }
    }
}
