// errors.rs
use std::fmt;

/// Errors surfaced at the presentation boundary (bad domain tag, bad
/// query date). The computation core itself never fails: incomplete rows
/// degrade to defaults and no-data cases come back as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    UnknownDomain(String),
    InvalidDate(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::UnknownDomain(tag) => write!(f, "Unknown data domain: {tag}"),
            EngineError::InvalidDate(raw) => {
                write!(f, "Invalid date (expected YYYY-MM-DD): {raw}")
            }
        }
    }
}

impl std::error::Error for EngineError {}
