use serde::{Deserialize, Serialize};

use crate::prelude::{VitalsError, VitalsResult};
use crate::vitals::band::Vital;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BloodPressure {
    pub systolic: f64,
    pub diastolic: f64,
}

/// One complete set of vital-sign readings at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VitalsSnapshot {
    pub heart_rate: f64,
    pub blood_pressure: BloodPressure,
    pub temperature: f64,
    pub oxygen_level: f64,
    pub respiratory_rate: f64,
    pub glucose: f64,
}

impl VitalsSnapshot {
    /// Resting baseline every simulation starts from.
    pub const fn initial() -> Self {
        Self {
            heart_rate: 72.0,
            blood_pressure: BloodPressure {
                systolic: 120.0,
                diastolic: 80.0,
            },
            temperature: 98.6,
            oxygen_level: 98.0,
            respiratory_rate: 16.0,
            glucose: 95.0,
        }
    }

    /// Rejects snapshots carrying non-finite readings.
    pub fn validate(&self) -> VitalsResult<()> {
        for vital in Vital::ALL {
            let value = vital.value_in(self);
            if !value.is_finite() {
                return Err(VitalsError::InvalidSnapshot(format!(
                    "{} is not a finite reading ({})",
                    vital, value
                )));
            }
        }
        Ok(())
    }

    /// Rejects snapshots with any reading outside its clamp band.
    pub fn check_bands(&self) -> VitalsResult<()> {
        self.validate()?;
        for vital in Vital::ALL {
            let band = vital.band();
            let value = vital.value_in(self);
            if !band.contains(value) {
                return Err(VitalsError::OutOfBand {
                    vital,
                    value,
                    lower: band.lower,
                    upper: band.upper,
                });
            }
        }
        Ok(())
    }
}

impl Default for VitalsSnapshot {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_snapshot_sits_inside_every_band() {
        assert!(VitalsSnapshot::initial().check_bands().is_ok());
    }

    #[test]
    fn validate_rejects_nan_reading() {
        let snapshot = VitalsSnapshot {
            temperature: f64::NAN,
            ..VitalsSnapshot::initial()
        };
        assert!(matches!(
            snapshot.validate(),
            Err(VitalsError::InvalidSnapshot(_))
        ));
    }

    #[test]
    fn check_bands_reports_offending_vital() {
        let snapshot = VitalsSnapshot {
            glucose: 130.0,
            ..VitalsSnapshot::initial()
        };
        match snapshot.check_bands() {
            Err(VitalsError::OutOfBand { vital, upper, .. }) => {
                assert_eq!(vital, Vital::Glucose);
                assert_eq!(upper, 120.0);
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn snapshot_with_missing_field_fails_to_parse() {
        let json = r#"{"heartRate":72.0,"bloodPressure":{"systolic":120.0,"diastolic":80.0},
            "temperature":98.6,"oxygenLevel":98.0,"respiratoryRate":16.0}"#;
        assert!(serde_json::from_str::<VitalsSnapshot>(json).is_err());
    }

    #[test]
    fn snapshot_serializes_with_camel_case_fields() {
        let value = serde_json::to_value(VitalsSnapshot::initial()).unwrap();
        assert_eq!(value["heartRate"], 72.0);
        assert_eq!(value["bloodPressure"]["diastolic"], 80.0);
    }
}
