use chrono::Utc;
use rand::{rngs::StdRng, SeedableRng};
use vitalcore::prelude::MonitorState;

use crate::workflow::config::MonitorConfig;

/// Random source and starting point for one simulation run.
pub struct SimulationProfile {
    pub rng: StdRng,
    pub state: MonitorState,
}

impl SimulationProfile {
    pub fn from_config(config: &MonitorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let state = MonitorState::new(config.starting_snapshot(), Utc::now());
        Self { rng, state }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitalcore::prelude::{BloodPressure, VitalsSnapshot};

    #[test]
    fn profile_starts_from_baseline_by_default() {
        let profile = SimulationProfile::from_config(&MonitorConfig::default());
        assert_eq!(profile.state.snapshot, VitalsSnapshot::initial());
        assert_eq!(profile.state.ticks, 0);
        assert!(profile.state.alerts.is_empty());
    }

    #[test]
    fn profile_uses_configured_initial_vitals() {
        let initial = VitalsSnapshot {
            heart_rate: 88.0,
            blood_pressure: BloodPressure {
                systolic: 130.0,
                diastolic: 85.0,
            },
            ..VitalsSnapshot::initial()
        };
        let config = MonitorConfig {
            initial_vitals: Some(initial),
            ..Default::default()
        };
        let profile = SimulationProfile::from_config(&config);
        assert_eq!(profile.state.snapshot, initial);
    }

    #[test]
    fn seeded_profiles_walk_identically() {
        let config = MonitorConfig::from_args(2_000, Some(21), None);
        let mut a = SimulationProfile::from_config(&config);
        let mut b = SimulationProfile::from_config(&config);
        let now = Utc::now();
        let next_a = a.state.step(&mut a.rng, now).unwrap().state;
        let next_b = b.state.step(&mut b.rng, now).unwrap().state;
        assert_eq!(next_a.snapshot, next_b.snapshot);
    }
}
