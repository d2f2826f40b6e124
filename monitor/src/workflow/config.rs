use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use vitalcore::prelude::{PatientContext, VitalsError, VitalsResult, VitalsSnapshot};

pub const DEFAULT_TICK_INTERVAL_MS: u64 = 2_000;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    pub tick_interval_ms: u64,
    pub seed: Option<u64>,
    pub ticks: Option<u64>,
    pub patient: PatientContext,
    pub initial_vitals: Option<VitalsSnapshot>,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            seed: None,
            ticks: None,
            patient: PatientContext::default(),
            initial_vitals: None,
        }
    }
}

impl MonitorConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading monitor config {}", path_ref.display()))?;
        let config: MonitorConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing monitor config {}", path_ref.display()))?;
        config
            .validate()
            .with_context(|| format!("validating monitor config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(tick_interval_ms: u64, seed: Option<u64>, ticks: Option<u64>) -> Self {
        Self {
            tick_interval_ms,
            seed,
            ticks,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> VitalsResult<()> {
        if self.tick_interval_ms == 0 {
            return Err(VitalsError::InvalidConfig(
                "tick_interval_ms must be greater than zero".into(),
            ));
        }
        if let Some(initial) = self.initial_vitals.as_ref() {
            initial.check_bands()?;
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn starting_snapshot(&self) -> VitalsSnapshot {
        self.initial_vitals.unwrap_or_else(VitalsSnapshot::initial)
    }
}
