pub mod mapper;
pub mod records;

pub use mapper::{map_all, DomainRecords};
pub use records::{
    AvailabilityRecord, CompetitorRateRecord, Domain, StaffingRecord, TariffRecord,
};
