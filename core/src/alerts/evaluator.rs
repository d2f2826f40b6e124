use chrono::{DateTime, Utc};

use crate::alerts::record::{AlertRecord, Severity};
use crate::vitals::VitalsSnapshot;

pub const HEART_RATE_ABNORMAL: &str = "Heart rate abnormal";
pub const TEMPERATURE_ABNORMAL: &str = "Temperature abnormal";
pub const LOW_OXYGEN: &str = "Low oxygen level";

/// Checks `snapshot` against the clinical rules, stamping alerts with the current time.
pub fn evaluate(snapshot: &VitalsSnapshot) -> Vec<AlertRecord> {
    evaluate_at(snapshot, Utc::now())
}

/// Rule order is fixed: heart rate, temperature, oxygen. Rules are independent,
/// so one snapshot may raise several alerts.
pub fn evaluate_at(snapshot: &VitalsSnapshot, at: DateTime<Utc>) -> Vec<AlertRecord> {
    let mut alerts = Vec::new();

    if snapshot.heart_rate > 100.0 || snapshot.heart_rate < 60.0 {
        alerts.push(AlertRecord::new(Severity::Warning, HEART_RATE_ABNORMAL, at));
    }
    if snapshot.temperature > 99.5 || snapshot.temperature < 97.0 {
        alerts.push(AlertRecord::new(Severity::Warning, TEMPERATURE_ABNORMAL, at));
    }
    if snapshot.oxygen_level < 95.0 {
        alerts.push(AlertRecord::new(Severity::Critical, LOW_OXYGEN, at));
    }

    alerts
}
