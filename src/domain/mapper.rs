// src/domain/mapper.rs
//
// Flat records in, typed domain records out. Defaulting and boolean
// coercion happen here exactly once; downstream components never go back
// to the raw strings. No business-rule validation: an unknown room type
// passes through and simply forms its own bucket later.

use serde::Serialize;

use crate::domain::records::{
    AvailabilityRecord, CompetitorRateRecord, Domain, StaffingRecord, TariffRecord,
    DEFAULT_DEPARTMENT, DEFAULT_HOTEL_NAME, DEFAULT_ROOM_TYPE,
};
use crate::tabular::FlatRecord;

/// Typed records for one domain, in source order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DomainRecords {
    Availability(Vec<AvailabilityRecord>),
    Staffing(Vec<StaffingRecord>),
    Tariffs(Vec<TariffRecord>),
    CompetitorRates(Vec<CompetitorRateRecord>),
}

impl DomainRecords {
    pub fn domain(&self) -> Domain {
        match self {
            DomainRecords::Availability(_) => Domain::Availability,
            DomainRecords::Staffing(_) => Domain::Staffing,
            DomainRecords::Tariffs(_) => Domain::Tariff,
            DomainRecords::CompetitorRates(_) => Domain::CompetitorRate,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            DomainRecords::Availability(records) => records.len(),
            DomainRecords::Staffing(records) => records.len(),
            DomainRecords::Tariffs(records) => records.len(),
            DomainRecords::CompetitorRates(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Maps every flat record into the typed shape for `domain`. Pure and
/// stateless; never drops a record, whatever it is missing.
pub fn map_all(domain: Domain, records: &[FlatRecord]) -> DomainRecords {
    match domain {
        Domain::Availability => {
            DomainRecords::Availability(records.iter().map(map_availability).collect())
        }
        Domain::Staffing => DomainRecords::Staffing(records.iter().map(map_staffing).collect()),
        Domain::Tariff => DomainRecords::Tariffs(records.iter().map(map_tariff).collect()),
        Domain::CompetitorRate => {
            DomainRecords::CompetitorRates(records.iter().map(map_competitor_rate).collect())
        }
    }
}

/// Exactly "true" and "1" are truthy; every other value, a missing field
/// and the empty string included, is false.
pub fn is_truthy(value: Option<&str>) -> bool {
    matches!(value, Some("true") | Some("1"))
}

fn map_availability(record: &FlatRecord) -> AvailabilityRecord {
    AvailabilityRecord {
        date: optional(record, "date"),
        room_id: optional(record, "chambreId"),
        room_type: normalized_or(record.get("chambreType"), DEFAULT_ROOM_TYPE),
        available: is_truthy(record.get("disponible")),
    }
}

fn map_staffing(record: &FlatRecord) -> StaffingRecord {
    StaffingRecord {
        date: optional(record, "date"),
        employee_id: optional(record, "employeId"),
        name: optional(record, "nom"),
        role: optional(record, "poste"),
        department: non_blank(record.get("departement"))
            .map(str::to_string)
            .unwrap_or_else(|| DEFAULT_DEPARTMENT.to_string()),
        present: is_truthy(record.get("present")),
        shift_start: optional(record, "heureDebut"),
        shift_end: optional(record, "heureFin"),
    }
}

fn map_tariff(record: &FlatRecord) -> TariffRecord {
    TariffRecord {
        date: optional(record, "date"),
        room_type: non_blank(record.get("chambreType")).map(|value| value.to_lowercase()),
        base_rate: optional(record, "tarifBase"),
        special_rate: optional(record, "tarifSpecial"),
        weekend_rate: optional(record, "tarifWeekend"),
    }
}

fn map_competitor_rate(record: &FlatRecord) -> CompetitorRateRecord {
    CompetitorRateRecord {
        date: optional(record, "date"),
        hotel_id: optional(record, "hotelId"),
        hotel_name: non_blank(record.get("hotelNom"))
            .map(str::to_string)
            .unwrap_or_else(|| DEFAULT_HOTEL_NAME.to_string()),
        category: optional(record, "categorie"),
        room_type: normalized_or(record.get("chambreType"), DEFAULT_ROOM_TYPE),
        public_rate: parse_magnitude(record.get("tarifPublic")),
    }
}

/// Blank collapses to absent so downstream fallback chains treat an empty
/// cell and a short row identically.
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

fn optional(record: &FlatRecord, column: &str) -> Option<String> {
    non_blank(record.get(column)).map(str::to_string)
}

fn normalized_or(value: Option<&str>, fallback: &str) -> String {
    match non_blank(value) {
        Some(value) => value.to_lowercase(),
        None => fallback.to_string(),
    }
}

/// Decimal magnitude with a zero default: absent and unparseable values
/// both degrade to 0 rather than letting a NaN reach any output.
fn parse_magnitude(value: Option<&str>) -> f64 {
    non_blank(value)
        .and_then(|value| value.parse::<f64>().ok())
        .unwrap_or(0.0)
}
