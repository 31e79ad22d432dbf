// src/domain/records.rs

use std::str::FromStr;

use serde::Serialize;

use crate::errors::EngineError;

/// Room type assumed when a row leaves the column blank.
pub const DEFAULT_ROOM_TYPE: &str = "standard";

/// Grouping bucket for staff rows with no department.
pub const DEFAULT_DEPARTMENT: &str = "Autre";

/// Stand-in name for competitor rows with no hotel name.
pub const DEFAULT_HOTEL_NAME: &str = "Inconnu";

/// Category of uploaded tabular data. Each upload targets exactly one
/// domain and replaces the session's records for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Domain {
    Availability,
    Staffing,
    Tariff,
    CompetitorRate,
}

impl FromStr for Domain {
    type Err = EngineError;

    /// Parses the domain tag presentation passes alongside an upload.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.trim().to_lowercase().as_str() {
            "availability" => Ok(Domain::Availability),
            "staffing" => Ok(Domain::Staffing),
            "tariff" => Ok(Domain::Tariff),
            "competitor-rate" => Ok(Domain::CompetitorRate),
            other => Err(EngineError::UnknownDomain(other.to_string())),
        }
    }
}

/// Room availability for one room on one date.
///
/// Columns: `date`, `chambreId`, `chambreType`, `disponible`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRecord {
    pub date: Option<String>,
    pub room_id: Option<String>,
    /// Trimmed and lowercased; `"standard"` when the column is blank.
    pub room_type: String,
    pub available: bool,
}

/// One roster line for one employee on one date.
///
/// Columns: `date`, `employeId`, `nom`, `poste`, `departement`, `present`,
/// `heureDebut`, `heureFin`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffingRecord {
    pub date: Option<String>,
    pub employee_id: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
    /// Free-text grouping key; `"Autre"` when the column is blank.
    pub department: String,
    pub present: bool,
    /// Shift bounds are free text and only meaningful when `present`.
    pub shift_start: Option<String>,
    pub shift_end: Option<String>,
}

/// Nightly rates for one room type on one date.
///
/// Columns: `date`, `chambreType`, `tarifBase`, `tarifSpecial`,
/// `tarifWeekend`. Rate magnitudes stay textual here: the tariff
/// calculator is their one consumer and parses them with a zero default.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TariffRecord {
    pub date: Option<String>,
    /// Trimmed and lowercased; `None` when blank (such a row never
    /// matches a quote request).
    pub room_type: Option<String>,
    pub base_rate: Option<String>,
    pub special_rate: Option<String>,
    pub weekend_rate: Option<String>,
}

/// One published competitor rate for one date.
///
/// Columns: `date`, `hotelId`, `hotelNom`, `categorie`, `chambreType`,
/// `tarifPublic`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorRateRecord {
    pub date: Option<String>,
    pub hotel_id: Option<String>,
    /// `"Inconnu"` when the column is blank.
    pub hotel_name: String,
    pub category: Option<String>,
    /// Trimmed and lowercased; `"standard"` when the column is blank.
    pub room_type: String,
    /// Zero when the column is blank or not a number.
    pub public_rate: f64,
}
