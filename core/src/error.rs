use crate::types::{Dollars, Months};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashError {
    #[error("Tenure out of range: {value} months (expected {min}..={max})")]
    InvalidTenure { value: i64, min: Months, max: Months },

    #[error("Monthly charges out of range: ${value} (expected {min}..={max})")]
    InvalidMonthlyCharges { value: Dollars, min: Dollars, max: Dollars },

    #[error("Unknown value '{value}' for {field}")]
    UnknownOption { field: &'static str, value: String },

    #[error("Region '{name}' not found")]
    UnknownRegion { name: String },

    #[error("Unknown view mode '{name}'")]
    UnknownViewMode { name: String },

    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type DashResult<T> = Result<T, DashError>;
