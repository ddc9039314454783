//! Unit tests for sir-motion.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use sir_core::{AgentId, AgentRng, Domain, Point};

use crate::{BounceMotion, MotionModel, Stationary};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn rng() -> AgentRng {
    AgentRng::new(42, AgentId(0))
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

const BOX: Domain = Domain::new(10.0, 10.0);

// ── BounceMotion ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod bounce {
    use super::*;

    #[test]
    fn straight_line_step() {
        let m = BounceMotion::new(1.0, 0.0).advance(Point::new(5.0, 5.0), 0.0, &BOX, &mut rng());
        assert!(close(m.position.x, 6.0) && close(m.position.y, 5.0));
        assert_eq!(m.heading, 0.0);
    }

    #[test]
    fn diagonal_step_length() {
        let h = PI / 4.0;
        let m = BounceMotion::new(2.0, 0.0).advance(Point::new(1.0, 1.0), h, &BOX, &mut rng());
        let d = m.position.distance_sq(Point::new(1.0, 1.0)).sqrt();
        assert!(close(d, 2.0));
    }

    #[test]
    fn reflects_off_right_wall() {
        let m = BounceMotion::new(1.0, 0.0).advance(Point::new(9.5, 5.0), 0.0, &BOX, &mut rng());
        assert_eq!(m.position.x, 10.0, "clamped onto the wall");
        assert!(close(m.heading, PI), "now heading in -x");
    }

    #[test]
    fn reflects_off_bottom_wall() {
        let down = 3.0 * FRAC_PI_2;
        let m = BounceMotion::new(1.0, 0.0).advance(Point::new(4.0, 0.2), down, &BOX, &mut rng());
        assert_eq!(m.position.y, 0.0);
        assert!(close(m.heading, FRAC_PI_2), "now heading in +y, got {}", m.heading);
    }

    #[test]
    fn corner_reflects_both_axes() {
        let m = BounceMotion::new(1.0, 0.0).advance(Point::new(9.9, 9.9), PI / 4.0, &BOX, &mut rng());
        assert_eq!(m.position, Point::new(10.0, 10.0));
        assert!(close(m.heading, 5.0 * PI / 4.0));
    }

    #[test]
    fn zero_step_size_stays_put() {
        let p = Point::new(3.0, 7.0);
        let m = BounceMotion::new(0.0, 0.0).advance(p, 1.234, &BOX, &mut rng());
        assert_eq!(m.position, p);
    }

    #[test]
    fn tiny_negative_heading_wraps_below_tau() {
        let p = Point::new(3.0, 7.0);
        for h in [-1e-17, -f64::MIN_POSITIVE, -0.0] {
            let m = BounceMotion::new(0.0, 0.0).advance(p, h, &BOX, &mut rng());
            assert!((0.0..TAU).contains(&m.heading), "heading {h} wrapped to {}", m.heading);
        }
    }

    #[test]
    fn never_leaves_domain() {
        let motion = BounceMotion::new(0.7, 0.3);
        let domain = Domain::new(3.0, 2.0);
        let mut r = rng();
        let mut p = Point::new(1.5, 1.0);
        let mut h = 0.4;
        for _ in 0..10_000 {
            let m = motion.advance(p, h, &domain, &mut r);
            assert!(domain.contains(m.position), "escaped to {}", m.position);
            assert!((0.0..=std::f64::consts::TAU).contains(&m.heading));
            p = m.position;
            h = m.heading;
        }
    }

    #[test]
    fn step_larger_than_domain_is_clamped() {
        let m = BounceMotion::new(100.0, 0.0).advance(Point::new(5.0, 5.0), 0.3, &BOX, &mut rng());
        assert!(BOX.contains(m.position));
    }

    #[test]
    fn jitter_is_deterministic_per_seed() {
        let motion = BounceMotion::new(0.5, 0.2);
        let a = motion.advance(Point::new(5.0, 5.0), 1.0, &BOX, &mut rng());
        let b = motion.advance(Point::new(5.0, 5.0), 1.0, &BOX, &mut rng());
        assert_eq!(a, b);
    }

    #[test]
    fn jitter_bounded() {
        let motion = BounceMotion::new(0.0, 0.1);
        let mut r = rng();
        for _ in 0..1000 {
            let m = motion.advance(Point::new(5.0, 5.0), 1.0, &BOX, &mut r);
            assert!((m.heading - 1.0).abs() <= 0.1 + 1e-12);
        }
    }

    #[test]
    fn from_params_copies_fields() {
        let p = sir_core::Parameters { step_size: 0.25, heading_jitter: 0.05, ..Default::default() };
        assert_eq!(BounceMotion::from_params(&p), BounceMotion::new(0.25, 0.05));
    }
}

// ── advance_all ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod advance_all {
    use super::*;
    use sir_agent::{AgentRngs, AgentStore};

    #[test]
    fn moves_every_agent() {
        let mut store = AgentStore::new(3);
        store.position = vec![Point::new(1.0, 1.0), Point::new(2.0, 2.0), Point::new(3.0, 3.0)];
        store.heading = vec![0.0, FRAC_PI_2, PI];
        let mut rngs = AgentRngs::new(3, 1);
        BounceMotion::new(0.5, 0.0).advance_all(&mut store, &mut rngs, &BOX);
        assert!(close(store.position[0].x, 1.5));
        assert!(close(store.position[1].y, 2.5));
        assert!(close(store.position[2].x, 2.5));
    }

    #[test]
    fn stationary_leaves_store_unchanged() {
        let mut store = AgentStore::new(2);
        store.position = vec![Point::new(1.0, 1.0), Point::new(2.0, 2.0)];
        let before = store.clone();
        let mut rngs = AgentRngs::new(2, 1);
        Stationary.advance_all(&mut store, &mut rngs, &BOX);
        assert_eq!(store, before);
    }
}
