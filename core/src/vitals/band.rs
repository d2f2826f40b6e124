use serde::{Deserialize, Serialize};
use std::fmt;

use crate::vitals::snapshot::VitalsSnapshot;

/// Clamp band and per-tick step for a single vital sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VitalBand {
    pub lower: f64,
    pub upper: f64,
    pub max_step: f64,
}

impl VitalBand {
    pub const fn new(lower: f64, upper: f64, max_step: f64) -> Self {
        Self {
            lower,
            upper,
            max_step,
        }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.lower, self.upper)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// One random-walk step. `unit` is a uniform draw in `[0, 1)`, mapped to a
    /// perturbation in `[-max_step / 2, +max_step / 2)` before clamping.
    pub fn walk(&self, prev: f64, unit: f64) -> f64 {
        self.clamp(prev + (unit - 0.5) * self.max_step)
    }
}

/// The banded fields of a [`VitalsSnapshot`], in simulation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Vital {
    HeartRate,
    Systolic,
    Diastolic,
    Temperature,
    OxygenLevel,
    RespiratoryRate,
    Glucose,
}

impl Vital {
    pub const ALL: [Vital; 7] = [
        Vital::HeartRate,
        Vital::Systolic,
        Vital::Diastolic,
        Vital::Temperature,
        Vital::OxygenLevel,
        Vital::RespiratoryRate,
        Vital::Glucose,
    ];

    pub const fn band(self) -> VitalBand {
        match self {
            Vital::HeartRate => VitalBand::new(60.0, 100.0, 4.0),
            Vital::Systolic => VitalBand::new(110.0, 140.0, 3.0),
            Vital::Diastolic => VitalBand::new(70.0, 90.0, 2.0),
            Vital::Temperature => VitalBand::new(97.0, 99.5, 0.2),
            Vital::OxygenLevel => VitalBand::new(95.0, 100.0, 0.5),
            Vital::RespiratoryRate => VitalBand::new(12.0, 20.0, 1.0),
            Vital::Glucose => VitalBand::new(80.0, 120.0, 3.0),
        }
    }

    pub fn value_in(self, snapshot: &VitalsSnapshot) -> f64 {
        match self {
            Vital::HeartRate => snapshot.heart_rate,
            Vital::Systolic => snapshot.blood_pressure.systolic,
            Vital::Diastolic => snapshot.blood_pressure.diastolic,
            Vital::Temperature => snapshot.temperature,
            Vital::OxygenLevel => snapshot.oxygen_level,
            Vital::RespiratoryRate => snapshot.respiratory_rate,
            Vital::Glucose => snapshot.glucose,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Vital::HeartRate => "heart rate",
            Vital::Systolic => "systolic pressure",
            Vital::Diastolic => "diastolic pressure",
            Vital::Temperature => "temperature",
            Vital::OxygenLevel => "oxygen level",
            Vital::RespiratoryRate => "respiratory rate",
            Vital::Glucose => "blood glucose",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Vital::HeartRate => "bpm",
            Vital::Systolic | Vital::Diastolic => "mmHg",
            Vital::Temperature => "°F",
            Vital::OxygenLevel => "%",
            Vital::RespiratoryRate => "breaths/min",
            Vital::Glucose => "mg/dL",
        }
    }

    /// Display status for a reading. Only heart rate, temperature and oxygen
    /// carry a normal range; the other vitals always report normal.
    pub fn status_of(self, value: f64) -> VitalStatus {
        let normal = match self {
            Vital::HeartRate => (60.0..=100.0).contains(&value),
            Vital::Temperature => (97.0..=99.5).contains(&value),
            Vital::OxygenLevel => value >= 95.0,
            _ => true,
        };
        if normal {
            VitalStatus::Normal
        } else {
            VitalStatus::Alert
        }
    }
}

impl fmt::Display for Vital {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VitalStatus {
    Normal,
    Alert,
}
