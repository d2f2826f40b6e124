use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;

use crate::alerts::{evaluate_at, merge_alerts, AlertHistory, AlertRecord};
use crate::prelude::VitalsResult;
use crate::simulator::advance;
use crate::vitals::{Vital, VitalStatus, VitalsSnapshot};

/// Result of one successful tick: the new state plus the alerts it raised.
#[derive(Debug, Clone, PartialEq)]
pub struct TickOutcome {
    pub state: MonitorState,
    pub raised: Vec<AlertRecord>,
}

/// Everything a scheduler carries between ticks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonitorState {
    pub snapshot: VitalsSnapshot,
    pub alerts: AlertHistory,
    pub ticks: u64,
    pub last_updated: DateTime<Utc>,
}

impl MonitorState {
    pub fn new(snapshot: VitalsSnapshot, now: DateTime<Utc>) -> Self {
        Self {
            snapshot,
            alerts: AlertHistory::new(),
            ticks: 0,
            last_updated: now,
        }
    }

    /// Advances the snapshot and evaluates the result against the alert rules.
    ///
    /// Returns a fresh state; on error `self` is still the last good state.
    pub fn step<R: Rng>(&self, rng: &mut R, now: DateTime<Utc>) -> VitalsResult<TickOutcome> {
        let snapshot = advance(&self.snapshot, rng)?;
        let raised = evaluate_at(&snapshot, now);
        let alerts = merge_alerts(self.alerts.clone(), raised.clone());

        Ok(TickOutcome {
            state: MonitorState {
                snapshot,
                alerts,
                ticks: self.ticks + 1,
                last_updated: now,
            },
            raised,
        })
    }

    pub fn statuses(&self) -> Vec<(Vital, VitalStatus)> {
        Vital::ALL
            .iter()
            .map(|&vital| (vital, vital.status_of(vital.value_in(&self.snapshot))))
            .collect()
    }
}

impl Default for MonitorState {
    fn default() -> Self {
        Self::new(VitalsSnapshot::initial(), Utc::now())
    }
}
