//! Constant-speed motion with specular reflection at the domain walls.

use std::f64::consts::{PI, TAU};

use sir_core::{AgentRng, Domain, Parameters, Point};

use crate::{Move, MotionModel};

/// Each step an agent:
///
/// 1. perturbs its heading by `U(-jitter, +jitter)` (skipped, and no
///    randomness consumed, when `jitter == 0`);
/// 2. moves `step_size` along the heading;
/// 3. if that left the domain on an axis, reflects the heading on that axis
///    and clamps the coordinate onto the wall.
///
/// The result is always inside the closed domain, and the heading is kept
/// in `[0, 2π)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BounceMotion {
    pub step_size: f64,
    pub jitter:    f64,
}

impl BounceMotion {
    pub fn new(step_size: f64, jitter: f64) -> Self {
        Self { step_size, jitter }
    }

    pub fn from_params(params: &Parameters) -> Self {
        Self::new(params.step_size, params.heading_jitter)
    }
}

impl MotionModel for BounceMotion {
    fn advance(&self, position: Point, heading: f64, domain: &Domain, rng: &mut AgentRng) -> Move {
        let mut heading = heading;
        if self.jitter > 0.0 {
            heading += rng.gen_range(-self.jitter..=self.jitter);
        }

        let x = position.x + self.step_size * heading.cos();
        let y = position.y + self.step_size * heading.sin();

        if x < 0.0 || x > domain.width {
            heading = PI - heading;
        }
        if y < 0.0 || y > domain.height {
            heading = -heading;
        }

        Move { position: domain.clamp(Point::new(x, y)), heading: wrap_heading(heading) }
    }
}

/// Map `heading` into `[0, 2π)`.  `rem_euclid` rounds tiny negative angles
/// up to exactly `2π`, which is folded back to 0.
#[inline]
fn wrap_heading(heading: f64) -> f64 {
    let h = heading.rem_euclid(TAU);
    if h >= TAU { 0.0 } else { h }
}
