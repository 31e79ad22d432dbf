// src/lib.rs
//
// Metrics engine for a single-hotel operations dashboard. Presentation
// hands the engine a raw delimited-text blob and a domain selector; the
// engine turns it into typed records held for the session and derives the
// statistics shown to the user (occupancy, staffing, stay quotes,
// competitor price differentials). The engine performs no I/O and renders
// nothing.

pub mod alerts;
pub mod competition;
pub mod config;
pub mod dataset;
pub mod domain;
pub mod errors;
pub mod pricing;
pub mod stats;
pub mod tabular;

#[cfg(test)]
mod tests;

pub use config::HotelConfig;
pub use dataset::HotelDataset;
pub use domain::{Domain, DomainRecords};
pub use errors::EngineError;
