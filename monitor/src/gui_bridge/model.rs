use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vitalcore::prelude::{
    AlertRecord, MonitorState, PatientContext, Vital, VitalStatus, VitalsSnapshot,
};

/// One vital-sign card as the dashboard renders it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingView {
    pub vital: Vital,
    pub label: String,
    pub value: f64,
    pub unit: String,
    pub status: VitalStatus,
}

/// Everything the external dashboard needs for one render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardModel {
    pub patient: PatientContext,
    pub vitals: VitalsSnapshot,
    pub readings: Vec<ReadingView>,
    pub alerts: Vec<AlertRecord>,
    pub ticks: u64,
    pub last_updated: DateTime<Utc>,
}

impl DashboardModel {
    pub fn from_state(patient: &PatientContext, state: &MonitorState) -> Self {
        let readings = state
            .statuses()
            .into_iter()
            .map(|(vital, status)| ReadingView {
                vital,
                label: vital.label().to_string(),
                value: vital.value_in(&state.snapshot),
                unit: vital.unit().to_string(),
                status,
            })
            .collect();

        Self {
            patient: patient.clone(),
            vitals: state.snapshot,
            readings,
            alerts: state.alerts.as_vec(),
            ticks: state.ticks,
            last_updated: state.last_updated,
        }
    }
}
