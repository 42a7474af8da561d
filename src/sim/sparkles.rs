// sparkles.rs - Drifting dust points
//
// Positions fill a cube of edge `scale` around the origin. Each sparkle
// circles its spawn point within DRIFT on every axis; the phase is seeded
// from its own x so the cloud never moves as one.

use glam::Vec3;
use log::debug;

use super::FrameClock;
use crate::config::SparkleConfig;
use crate::rng::RandomSource;
use crate::world::sample_points;

const DRIFT: f32 = 0.2;

// Spreads nearby x values over many phase turns
const PHASE_SPREAD: f32 = 100.0;

pub struct SparkleField {
    config: SparkleConfig,
    points: Vec<Vec3>,
    clock: FrameClock,
}

impl SparkleField {
    pub fn new(config: SparkleConfig, rng: &mut impl RandomSource) -> Self {
        let mut field = Self { config, points: Vec::new(), clock: FrameClock::new() };
        field.regenerate(rng);
        field
    }

    pub fn regenerate(&mut self, rng: &mut impl RandomSource) {
        self.points = sample_points(self.config.count, &self.config.extents(), rng);
        debug!("sparkles: {} points in a {} cube", self.points.len(), self.config.scale);
    }

    pub fn tick(&mut self, now_ms: f64) -> f32 {
        self.clock.advance_to(now_ms)
    }

    pub fn elapsed(&self) -> f32 {
        self.clock.elapsed()
    }

    /// Spawn positions
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn config(&self) -> &SparkleConfig {
        &self.config
    }

    /// Drifted position of `base` at time `t`
    pub fn position_at(&self, base: Vec3, t: f32) -> Vec3 {
        let p = t * self.config.speed + base.x * PHASE_SPREAD;
        base + Vec3::new(p.cos(), p.sin(), (2.0 * p).cos()) * DRIFT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::GOLD;
    use crate::rng::Xorshift32;

    #[test]
    fn presets_fill_their_cube() {
        let field = SparkleField::new(SparkleConfig::hero(), &mut Xorshift32::new(17));
        assert_eq!(field.points().len(), 80);
        let cube = field.config().extents();
        assert!(field.points().iter().all(|&p| cube.contains(p)));
    }

    #[test]
    fn drift_stays_near_spawn() {
        let field = SparkleField::new(SparkleConfig::constellation(GOLD), &mut Xorshift32::new(2));
        for &base in field.points() {
            for i in 0..30 {
                let d = field.position_at(base, i as f32 * 0.4) - base;
                assert!(d.abs().max_element() <= DRIFT + 1e-5, "{d}");
            }
        }
    }

    #[test]
    fn zero_count_is_empty() {
        let cfg = SparkleConfig { count: 0, ..SparkleConfig::subtle() };
        let mut field = SparkleField::new(cfg, &mut Xorshift32::default());
        field.tick(0.0);
        field.tick(1_000.0);
        assert!(field.points().is_empty());
        assert_eq!(field.elapsed(), 1.0);
    }
}
