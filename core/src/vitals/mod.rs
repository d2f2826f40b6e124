pub mod band;
pub mod patient;
pub mod snapshot;

pub use band::{Vital, VitalBand, VitalStatus};
pub use patient::PatientContext;
pub use snapshot::{BloodPressure, VitalsSnapshot};
