//! Unit tests for sir-agent.

#[cfg(test)]
mod health {
    use crate::{Health, SirCounts};

    #[test]
    fn transitions_are_monotone() {
        assert_eq!(Health::Susceptible.infect(), Health::Infected);
        assert_eq!(Health::Infected.recover(), Health::Recovered);
        // No other edge exists.
        assert_eq!(Health::Infected.infect(), Health::Infected);
        assert_eq!(Health::Recovered.infect(), Health::Recovered);
        assert_eq!(Health::Susceptible.recover(), Health::Susceptible);
        assert_eq!(Health::Recovered.recover(), Health::Recovered);
    }

    #[test]
    fn labels() {
        assert_eq!(Health::Infected.to_string(), "infected");
        assert_eq!(Health::default(), Health::Susceptible);
    }

    #[test]
    fn tally_sums_to_len() {
        let states = [
            Health::Susceptible,
            Health::Infected,
            Health::Infected,
            Health::Recovered,
            Health::Susceptible,
        ];
        let c = SirCounts::tally(&states);
        assert_eq!(c, SirCounts { susceptible: 2, infected: 2, recovered: 1 });
        assert_eq!(c.total(), states.len());
        assert_eq!(c.to_string(), "S=2 I=2 R=1");
    }
}

#[cfg(test)]
mod recovery_threshold {
    use sir_core::{AgentId, AgentRng, RecoveryModel};

    use crate::draw_recovery_threshold;

    #[test]
    fn fixed_equals_mean() {
        let mut rng = AgentRng::new(1, AgentId(0));
        for _ in 0..10 {
            assert_eq!(draw_recovery_threshold(RecoveryModel::Fixed, 5.0, &mut rng), 5.0);
        }
    }

    #[test]
    fn exponential_sample_mean_is_close() {
        let mut rng = AgentRng::new(7, AgentId(3));
        let n = 20_000;
        let sum: f64 = (0..n)
            .map(|_| draw_recovery_threshold(RecoveryModel::Exponential, 5.0, &mut rng))
            .sum();
        let mean = sum / n as f64;
        // Standard error of the mean is 5 / sqrt(20000) ≈ 0.035.
        assert!((mean - 5.0).abs() < 0.25, "sample mean {mean}");
    }

    #[test]
    fn exponential_is_non_negative() {
        let mut rng = AgentRng::new(0, AgentId(0));
        for _ in 0..1000 {
            assert!(draw_recovery_threshold(RecoveryModel::Exponential, 2.0, &mut rng) >= 0.0);
        }
    }
}

#[cfg(test)]
mod store {
    use sir_core::AgentId;

    use crate::{AgentStore, Health};

    #[test]
    fn new_store_all_susceptible() {
        let s = AgentStore::new(4);
        assert_eq!(s.count, 4);
        assert_eq!(s.counts().susceptible, 4);
        assert_eq!(s.agent_ids().count(), 4);
        assert!(!s.is_empty());
        assert!(AgentStore::new(0).is_empty());
    }

    #[test]
    fn infect_only_from_susceptible() {
        let mut s = AgentStore::new(2);
        assert!(s.infect(AgentId(0), 3.0));
        assert!(!s.infect(AgentId(0), 9.0), "second infection is a no-op");
        assert_eq!(s.recovery_threshold[0], 3.0);
        assert_eq!(s.health[0], Health::Infected);
        assert_eq!(s.infected_steps[0], 0);
    }

    #[test]
    fn progress_recovers_at_threshold() {
        let mut s = AgentStore::new(1);
        s.infect(AgentId(0), 3.0);
        assert!(!s.progress_infection(AgentId(0), 1.0));
        assert!(!s.progress_infection(AgentId(0), 1.0));
        assert!(s.progress_infection(AgentId(0), 1.0), "clock 3.0 >= threshold 3.0");
        assert_eq!(s.health[0], Health::Recovered);
    }

    #[test]
    fn recovered_never_changes() {
        let mut s = AgentStore::new(1);
        s.infect(AgentId(0), 0.5);
        s.progress_infection(AgentId(0), 1.0);
        assert_eq!(s.health[0], Health::Recovered);
        assert!(!s.infect(AgentId(0), 1.0));
        assert!(!s.progress_infection(AgentId(0), 1.0));
        assert_eq!(s.health[0], Health::Recovered);
    }

    #[test]
    fn progress_ignores_susceptible() {
        let mut s = AgentStore::new(1);
        assert!(!s.progress_infection(AgentId(0), 100.0));
        assert_eq!(s.infected_steps[0], 0);
    }

    #[test]
    fn clock_with_inexact_time_step_recovers_on_time() {
        // 0.1 has no exact binary form; summing it ten times lands below 1.0.
        let mut s = AgentStore::new(1);
        s.infect(AgentId(0), 1.0);
        for step in 1..10 {
            assert!(!s.progress_infection(AgentId(0), 0.1), "recovered early at step {step}");
        }
        assert!(s.progress_infection(AgentId(0), 0.1), "clock 10 * 0.1 reaches 1.0");
        assert_eq!(s.infected_steps[0], 10);
        assert_eq!(s.infection_clock(AgentId(0), 0.1), 1.0);
    }

    #[test]
    fn ids_in_is_ascending() {
        let mut s = AgentStore::new(5);
        s.infect(AgentId(3), 1.0);
        s.infect(AgentId(1), 1.0);
        assert_eq!(s.ids_in(Health::Infected), vec![AgentId(1), AgentId(3)]);
    }
}

#[cfg(test)]
mod builder {
    use sir_core::{Parameters, Point, SirError};

    use crate::{Health, PopulationBuilder};

    fn params(n: usize) -> Parameters {
        Parameters { population: n, ..Parameters::default() }
    }

    #[test]
    fn build_allocates_all_arrays() {
        let p = params(50);
        let (store, rngs) = PopulationBuilder::new(&p).build().unwrap();
        assert_eq!(store.count, 50);
        assert_eq!(store.position.len(), 50);
        assert_eq!(store.heading.len(), 50);
        assert_eq!(store.health.len(), 50);
        assert_eq!(rngs.len(), 50);
    }

    #[test]
    fn single_index_zero_infector() {
        let p = params(100);
        let (store, _) = PopulationBuilder::new(&p).build().unwrap();
        assert_eq!(store.health[0], Health::Infected);
        assert_eq!(store.infected_steps[0], 0);
        let c = store.counts();
        assert_eq!((c.susceptible, c.infected, c.recovered), (99, 1, 0));
    }

    #[test]
    fn seed_set_is_leading_indices() {
        let p = Parameters { population: 10, initial_infected: 3, ..Parameters::default() };
        let (store, _) = PopulationBuilder::new(&p).build().unwrap();
        assert!(store.health[..3].iter().all(|h| h.is_infected()));
        assert!(store.health[3..].iter().all(|h| h.is_susceptible()));
    }

    #[test]
    fn positions_inside_domain() {
        let p = Parameters { population: 500, width: 3.0, height: 7.0, ..Parameters::default() };
        let (store, _) = PopulationBuilder::new(&p).build().unwrap();
        let d = p.domain();
        assert!(store.position.iter().all(|&q| d.contains(q)));
    }

    #[test]
    fn same_seed_same_layout() {
        let p = params(64);
        let (a, _) = PopulationBuilder::new(&p).build().unwrap();
        let (b, _) = PopulationBuilder::new(&p).build().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seed_different_layout() {
        let a = PopulationBuilder::new(&Parameters { seed: 1, ..params(16) }).build().unwrap().0;
        let b = PopulationBuilder::new(&Parameters { seed: 2, ..params(16) }).build().unwrap().0;
        assert_ne!(a.position, b.position);
    }

    #[test]
    fn invalid_parameters_rejected_before_allocation() {
        let p = Parameters { infection_probability: 1.5, ..params(10) };
        let err = PopulationBuilder::new(&p).build().unwrap_err();
        assert!(matches!(err, SirError::InvalidParameters { field: "infection_probability", .. }));
    }

    #[test]
    fn explicit_positions_used() {
        let p = Parameters { population: 2, ..Parameters::default() };
        let pts = vec![Point::new(1.0, 1.0), Point::new(2.0, 3.0)];
        let (store, _) = PopulationBuilder::new(&p)
            .positions(pts.clone())
            .headings(vec![0.0, 1.0])
            .build()
            .unwrap();
        assert_eq!(store.position, pts);
        assert_eq!(store.heading, vec![0.0, 1.0]);
    }

    #[test]
    fn explicit_positions_length_checked() {
        let p = Parameters { population: 3, ..Parameters::default() };
        let err = PopulationBuilder::new(&p)
            .positions(vec![Point::new(1.0, 1.0)])
            .build()
            .unwrap_err();
        assert!(matches!(err, SirError::InvalidParameters { field: "positions", .. }));
    }

    #[test]
    fn explicit_positions_must_be_in_domain() {
        let p = Parameters { population: 1, ..Parameters::default() };
        let err = PopulationBuilder::new(&p)
            .positions(vec![Point::new(-1.0, 1.0)])
            .build()
            .unwrap_err();
        assert!(matches!(err, SirError::InvalidParameters { field: "positions", .. }));
    }

    #[test]
    fn empty_population() {
        let p = Parameters { population: 0, initial_infected: 0, ..Parameters::default() };
        let (store, rngs) = PopulationBuilder::new(&p).build().unwrap();
        assert!(store.is_empty());
        assert!(rngs.is_empty());
    }
}
