use log::{debug, info, warn};

use crate::alerts::AlertRecord;
use crate::monitor::MonitorState;
use crate::prelude::VitalsError;

/// Routes engine events to the `log` facade.
pub struct LogManager;

impl LogManager {
    pub fn new() -> Self {
        Self
    }

    pub fn record_tick(&self, state: &MonitorState) {
        let snapshot = &state.snapshot;
        debug!(
            "tick {} -> hr {:.1} bp {:.0}/{:.0} temp {:.1} spo2 {:.1} rr {:.1} glucose {:.1}",
            state.ticks,
            snapshot.heart_rate,
            snapshot.blood_pressure.systolic,
            snapshot.blood_pressure.diastolic,
            snapshot.temperature,
            snapshot.oxygen_level,
            snapshot.respiratory_rate,
            snapshot.glucose
        );
    }

    pub fn record_alert(&self, alert: &AlertRecord) {
        if alert.is_critical() {
            warn!("critical alert: {}", alert.message);
        } else {
            info!("warning alert: {}", alert.message);
        }
    }

    pub fn record_failure(&self, tick: u64, err: &VitalsError) {
        warn!("tick {} skipped, keeping last good snapshot: {}", tick, err);
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}
