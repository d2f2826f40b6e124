use rand::Rng;

use crate::prelude::VitalsResult;
use crate::vitals::{BloodPressure, Vital, VitalsSnapshot};

/// Produces the next snapshot by a bounded random walk from `prev`.
///
/// Every field moves by a uniform perturbation of at most half its band's
/// `max_step` and is clamped back into the band afterwards, so the result is
/// always in range regardless of where `prev` sat. Draws are taken in
/// [`Vital::ALL`] order.
pub fn advance<R: Rng>(prev: &VitalsSnapshot, rng: &mut R) -> VitalsResult<VitalsSnapshot> {
    prev.validate()?;

    let mut step = |vital: Vital| vital.band().walk(vital.value_in(prev), rng.gen::<f64>());

    let heart_rate = step(Vital::HeartRate);
    let systolic = step(Vital::Systolic);
    let diastolic = step(Vital::Diastolic);
    let temperature = step(Vital::Temperature);
    let oxygen_level = step(Vital::OxygenLevel);
    let respiratory_rate = step(Vital::RespiratoryRate);
    let glucose = step(Vital::Glucose);

    Ok(VitalsSnapshot {
        heart_rate,
        blood_pressure: BloodPressure {
            systolic,
            diastolic,
        },
        temperature,
        oxygen_level,
        respiratory_rate,
        glucose,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::VitalsError;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn upper_bounds() -> VitalsSnapshot {
        VitalsSnapshot {
            heart_rate: 100.0,
            blood_pressure: BloodPressure {
                systolic: 140.0,
                diastolic: 90.0,
            },
            temperature: 99.5,
            oxygen_level: 100.0,
            respiratory_rate: 20.0,
            glucose: 120.0,
        }
    }

    fn lower_bounds() -> VitalsSnapshot {
        VitalsSnapshot {
            heart_rate: 60.0,
            blood_pressure: BloodPressure {
                systolic: 110.0,
                diastolic: 70.0,
            },
            temperature: 97.0,
            oxygen_level: 95.0,
            respiratory_rate: 12.0,
            glucose: 80.0,
        }
    }

    #[test]
    fn advance_stays_within_bands_over_long_walk() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut snapshot = VitalsSnapshot::initial();
        for _ in 0..5_000 {
            snapshot = advance(&snapshot, &mut rng).unwrap();
            assert!(snapshot.check_bands().is_ok(), "{:?}", snapshot);
        }
    }

    #[test]
    fn advance_clamps_to_upper_bound_without_overshoot() {
        // All-ones bits yield the largest possible draw below 1.0.
        let mut rng = StepRng::new(u64::MAX, 0);
        let next = advance(&upper_bounds(), &mut rng).unwrap();
        assert_eq!(next, upper_bounds());
    }

    #[test]
    fn advance_clamps_to_lower_bound_without_undershoot() {
        let mut rng = StepRng::new(0, 0);
        let next = advance(&lower_bounds(), &mut rng).unwrap();
        assert_eq!(next, lower_bounds());
    }

    #[test]
    fn advance_moves_each_field_by_at_most_half_a_step() {
        let mut rng = StdRng::seed_from_u64(42);
        let prev = VitalsSnapshot::initial();
        let next = advance(&prev, &mut rng).unwrap();
        for vital in Vital::ALL {
            let delta = (vital.value_in(&next) - vital.value_in(&prev)).abs();
            assert!(delta <= vital.band().max_step / 2.0, "{} moved {}", vital, delta);
        }
    }

    #[test]
    fn advance_rejects_malformed_snapshot() {
        let mut rng = StdRng::seed_from_u64(1);
        let broken = VitalsSnapshot {
            oxygen_level: f64::INFINITY,
            ..VitalsSnapshot::initial()
        };
        assert!(matches!(
            advance(&broken, &mut rng),
            Err(VitalsError::InvalidSnapshot(_))
        ));
    }

    #[test]
    fn same_seed_reproduces_same_walk() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        let start = VitalsSnapshot::initial();
        assert_eq!(advance(&start, &mut a).unwrap(), advance(&start, &mut b).unwrap());
    }
}
