// src/dataset.rs
//
// The in-memory dataset for the current session. Each upload replaces
// the whole collection for its domain; nothing is merged or edited in
// place, so a reader holding records never sees a mix of old and new
// rows. All queries are synchronous pure functions over the current
// snapshot.

use chrono::NaiveDate;
use log::debug;

use crate::competition::{self, CompetitiveAnalysis};
use crate::config::HotelConfig;
use crate::domain::mapper::{map_all, DomainRecords};
use crate::domain::records::{
    AvailabilityRecord, CompetitorRateRecord, Domain, StaffingRecord, TariffRecord,
};
use crate::errors::EngineError;
use crate::pricing;
use crate::stats::availability::{availability_summary, AvailabilitySummary};
use crate::stats::staffing::{staffing_summary, StaffingSummary};
use crate::tabular;

/// Parses a query date arriving from presentation as text.
pub fn parse_query_date(raw: &str) -> Result<NaiveDate, EngineError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| EngineError::InvalidDate(raw.to_string()))
}

/// Session-scoped record store plus the engine configuration.
#[derive(Debug, Clone, Default)]
pub struct HotelDataset {
    config: HotelConfig,
    availability: Vec<AvailabilityRecord>,
    staffing: Vec<StaffingRecord>,
    tariffs: Vec<TariffRecord>,
    competitor_rates: Vec<CompetitorRateRecord>,
}

impl HotelDataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: HotelConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &HotelConfig {
        &self.config
    }

    /// Parses `raw_text` and replaces the records held for `domain`
    /// wholesale. Returns the number of records now loaded for it.
    pub fn ingest(&mut self, domain: Domain, raw_text: &str) -> usize {
        let flat = tabular::parse(raw_text);
        debug!("ingest {:?}: {} data rows", domain, flat.len());

        match map_all(domain, &flat) {
            DomainRecords::Availability(records) => {
                self.availability = records;
                self.availability.len()
            }
            DomainRecords::Staffing(records) => {
                self.staffing = records;
                self.staffing.len()
            }
            DomainRecords::Tariffs(records) => {
                self.tariffs = records;
                self.tariffs.len()
            }
            DomainRecords::CompetitorRates(records) => {
                self.competitor_rates = records;
                self.competitor_rates.len()
            }
        }
    }

    pub fn availability(&self) -> &[AvailabilityRecord] {
        &self.availability
    }

    pub fn staffing(&self) -> &[StaffingRecord] {
        &self.staffing
    }

    pub fn tariffs(&self) -> &[TariffRecord] {
        &self.tariffs
    }

    pub fn competitor_rates(&self) -> &[CompetitorRateRecord] {
        &self.competitor_rates
    }

    /// Occupancy statistics for `date`; see `stats::availability`.
    pub fn availability_summary(&self, date: NaiveDate) -> Option<AvailabilitySummary> {
        availability_summary(&self.availability, date, &self.config)
    }

    /// Presence statistics for `date`; see `stats::staffing`.
    pub fn staffing_summary(&self, date: NaiveDate) -> Option<StaffingSummary> {
        staffing_summary(&self.staffing, date)
    }

    /// Quoted stay total against the loaded tariff table; see `pricing`.
    pub fn quote(
        &self,
        date: NaiveDate,
        room_type: &str,
        party_size: u32,
        nights: u32,
    ) -> Option<i64> {
        pricing::quote(&self.tariffs, date, room_type, party_size, nights)
    }

    /// Same-date competitor comparison; see `competition`.
    pub fn competitive_analysis(&self, date: NaiveDate) -> Option<CompetitiveAnalysis> {
        competition::analyze(&self.competitor_rates, date)
    }
}
