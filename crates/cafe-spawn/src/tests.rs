//! Unit tests for cafe-spawn.

use std::io::Cursor;

use cafe_core::{ServiceTimings, SimRng};

use crate::{Arrival, ArrivalPlan, SpawnError, SpawnPolicy, Spawner, load_arrivals_reader};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Base patience 30 s, no jitter.
fn timings() -> ServiceTimings {
    ServiceTimings { base_patience_secs: 30.0, patience_jitter_secs: 0.0, ..ServiceTimings::default() }
}

fn scheduled(times: &[f64]) -> SpawnPolicy {
    let arrivals = times.iter().map(|&t| Arrival::new(t, None)).collect();
    SpawnPolicy::Scheduled(ArrivalPlan::new(arrivals).unwrap())
}

fn times(arrivals: &[Arrival]) -> Vec<f64> {
    arrivals.iter().map(|a| a.at_secs).collect()
}

// ── ArrivalPlan ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod plan_tests {
    use super::*;

    #[test]
    fn new_sorts_by_time() {
        let plan = ArrivalPlan::new(vec![
            Arrival::new(5.0, None),
            Arrival::new(1.0, Some(10.0)),
            Arrival::new(3.0, None),
        ])
        .unwrap();
        assert_eq!(times(plan.arrivals()), vec![1.0, 3.0, 5.0]);
    }

    #[test]
    fn negative_time_rejected() {
        let err = ArrivalPlan::new(vec![Arrival::new(0.0, None), Arrival::new(-1.0, None)]).unwrap_err();
        assert!(matches!(err, SpawnError::InvalidArrival { index: 1, .. }));
    }

    #[test]
    fn nan_patience_rejected() {
        let err = ArrivalPlan::new(vec![Arrival::new(0.0, Some(f64::NAN))]).unwrap_err();
        assert!(matches!(err, SpawnError::InvalidArrival { index: 0, .. }));
    }

    #[test]
    fn patience_or_falls_back() {
        assert_eq!(Arrival::new(0.0, None).patience_or(12.0), 12.0);
        assert_eq!(Arrival::new(0.0, Some(4.0)).patience_or(12.0), 4.0);
    }
}

// ── SpawnPolicy ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod policy_tests {
    use super::*;

    #[test]
    fn zero_interval_rejected() {
        let policy = SpawnPolicy::Periodic { interval_secs: 0.0, jitter_secs: 0.0, limit: None };
        assert!(matches!(policy.validate(), Err(SpawnError::InvalidPolicy(_))));
    }

    #[test]
    fn jitter_must_stay_below_interval() {
        let policy = SpawnPolicy::Periodic { interval_secs: 2.0, jitter_secs: 2.0, limit: None };
        assert!(policy.validate().is_err());
        assert!(Spawner::new(policy, &timings(), SimRng::new(0)).is_err());
    }

    #[test]
    fn default_is_valid() {
        assert!(SpawnPolicy::default().validate().is_ok());
    }
}

// ── Spawner ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod spawner_tests {
    use super::*;

    #[test]
    fn scheduled_releases_in_order_once() {
        let mut spawner = Spawner::new(scheduled(&[0.0, 1.0, 1.0, 4.0]), &timings(), SimRng::new(1)).unwrap();

        assert_eq!(times(&spawner.due(0.0)), vec![0.0]);
        assert!(spawner.due(0.5).is_empty());
        assert_eq!(times(&spawner.due(1.0)), vec![1.0, 1.0]);
        assert!(!spawner.is_exhausted());
        assert_eq!(times(&spawner.due(10.0)), vec![4.0]);
        assert!(spawner.is_exhausted());
        assert!(spawner.due(20.0).is_empty());
        assert_eq!(spawner.emitted(), 4);
    }

    #[test]
    fn missing_patience_gets_base() {
        let mut spawner = Spawner::new(scheduled(&[0.0]), &timings(), SimRng::new(1)).unwrap();
        assert_eq!(spawner.due(0.0)[0].patience_secs, Some(30.0));
    }

    #[test]
    fn own_patience_is_kept() {
        let plan = ArrivalPlan::new(vec![Arrival::new(0.0, Some(7.5))]).unwrap();
        let mut spawner = Spawner::new(SpawnPolicy::Scheduled(plan), &timings(), SimRng::new(1)).unwrap();
        assert_eq!(spawner.due(0.0)[0].patience_secs, Some(7.5));
    }

    #[test]
    fn periodic_without_jitter_is_regular() {
        let policy = SpawnPolicy::Periodic { interval_secs: 2.0, jitter_secs: 0.0, limit: None };
        let mut spawner = Spawner::new(policy, &timings(), SimRng::new(1)).unwrap();
        assert_eq!(times(&spawner.due(0.0)), vec![0.0]);
        assert!(spawner.due(1.9).is_empty());
        assert_eq!(times(&spawner.due(6.0)), vec![2.0, 4.0, 6.0]);
        assert!(!spawner.is_exhausted());
    }

    #[test]
    fn periodic_limit_stops_arrivals() {
        let policy = SpawnPolicy::Periodic { interval_secs: 1.0, jitter_secs: 0.0, limit: Some(3) };
        let mut spawner = Spawner::new(policy, &timings(), SimRng::new(1)).unwrap();
        assert_eq!(spawner.due(100.0).len(), 3);
        assert!(spawner.is_exhausted());
        assert!(spawner.due(200.0).is_empty());
    }

    #[test]
    fn periodic_jitter_is_bounded_and_seeded() {
        let policy = SpawnPolicy::Periodic { interval_secs: 5.0, jitter_secs: 1.0, limit: Some(50) };
        let jittered = ServiceTimings { patience_jitter_secs: 3.0, ..timings() };

        let mut a = Spawner::new(policy.clone(), &jittered, SimRng::new(9)).unwrap();
        let mut b = Spawner::new(policy, &jittered, SimRng::new(9)).unwrap();
        let first = a.due(1_000.0);
        assert_eq!(first, b.due(1_000.0), "same seed, same arrivals");

        for pair in first.windows(2) {
            let gap = pair[1].at_secs - pair[0].at_secs;
            assert!((4.0..=6.0).contains(&gap), "gap {gap}");
        }
        for arrival in &first {
            let p = arrival.patience_secs.unwrap();
            assert!((27.0..=33.0).contains(&p), "patience {p}");
        }
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader_tests {
    use super::*;

    #[test]
    fn parses_rows_with_optional_patience() {
        let csv = "at_secs,patience_secs\n4.0,45\n0.0,20\n2.5,\n";
        let plan = load_arrivals_reader(Cursor::new(csv)).unwrap();
        assert_eq!(
            plan.arrivals(),
            &[
                Arrival::new(0.0, Some(20.0)),
                Arrival::new(2.5, None),
                Arrival::new(4.0, Some(45.0)),
            ]
        );
    }

    #[test]
    fn tolerates_whitespace() {
        let csv = "at_secs, patience_secs\n 1.0 , 3 \n";
        let plan = load_arrivals_reader(Cursor::new(csv)).unwrap();
        assert_eq!(plan.arrivals(), &[Arrival::new(1.0, Some(3.0))]);
    }

    #[test]
    fn bad_number_is_parse_error() {
        let csv = "at_secs,patience_secs\nsoon,10\n";
        assert!(matches!(load_arrivals_reader(Cursor::new(csv)), Err(SpawnError::Parse(_))));
    }

    #[test]
    fn negative_time_is_invalid() {
        let csv = "at_secs,patience_secs\n-3,10\n";
        assert!(matches!(
            load_arrivals_reader(Cursor::new(csv)),
            Err(SpawnError::InvalidArrival { index: 0, .. })
        ));
    }

    #[test]
    fn empty_file_is_empty_plan() {
        let plan = load_arrivals_reader(Cursor::new("at_secs,patience_secs\n")).unwrap();
        assert!(plan.is_empty());
    }
}
