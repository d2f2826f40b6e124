pub use crate::alerts::{merge_alerts, AlertHistory, AlertRecord, Severity};
pub use crate::monitor::{MonitorState, TickOutcome};
pub use crate::simulator::advance;
pub use crate::vitals::{
    BloodPressure, PatientContext, Vital, VitalBand, VitalStatus, VitalsSnapshot,
};

/// Common error type for engine operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum VitalsError {
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),
    #[error("{vital} reading {value} outside band [{lower}, {upper}]")]
    OutOfBand {
        vital: Vital,
        value: f64,
        lower: f64,
        upper: f64,
    },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type VitalsResult<T> = Result<T, VitalsError>;
