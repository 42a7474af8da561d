// constellation.rs - Nodes joined by proximity lines
//
// Points and edges are generated together on mount and replaced together
// on regenerate. Only the group rotation changes per frame.

use glam::Vec3;
use log::debug;

use super::{FrameClock, Spin};
use crate::config::ConstellationConfig;
use crate::rng::RandomSource;
use crate::world::{Edge, proximity_edges, sample_points};

pub struct Constellation {
    config: ConstellationConfig,
    points: Vec<Vec3>,
    edges: Vec<Edge>,
    spin: Spin,
    clock: FrameClock,
    generation: u32,
}

impl Constellation {
    pub fn new(config: ConstellationConfig, rng: &mut impl RandomSource) -> Self {
        let spin = Spin::about_y(config.rotation_rate);
        let mut scene = Self {
            config,
            points: Vec::new(),
            edges: Vec::new(),
            spin,
            clock: FrameClock::new(),
            generation: 0,
        };
        scene.regenerate(rng);
        scene
    }

    /// Fresh point set, and an edge set rebuilt from it in full
    pub fn regenerate(&mut self, rng: &mut impl RandomSource) {
        let extents = self.config.extents();
        self.points = sample_points(self.config.point_count, &extents, rng);
        self.edges = proximity_edges(&self.points, self.config.connection_threshold);
        self.generation = self.generation.wrapping_add(1);
        debug!(
            "constellation #{}: {} points, {} edges (threshold {})",
            self.generation,
            self.points.len(),
            self.edges.len(),
            self.config.connection_threshold
        );
    }

    /// Advance to a host timestamp in ms; returns the group y rotation
    pub fn tick(&mut self, now_ms: f64) -> f32 {
        let t = self.clock.advance_to(now_ms);
        self.spin.angles(t).y
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn config(&self) -> &ConstellationConfig {
        &self.config
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Edge endpoints as positions, in edge order
    pub fn segments(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        self.edges.iter().map(|e| (self.points[e.a], self.points[e.b]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Xorshift32;

    #[test]
    fn every_edge_indexes_the_current_points() {
        let mut rng = Xorshift32::new(11);
        let mut scene = Constellation::new(ConstellationConfig::default(), &mut rng);
        for _ in 0..5 {
            let n = scene.points().len();
            assert_eq!(n, 25);
            for e in scene.edges() {
                assert!(e.a < e.b && e.b < n);
                let d = scene.points()[e.a].distance(scene.points()[e.b]);
                assert!(d < 3.5);
            }
            scene.regenerate(&mut rng);
        }
        assert_eq!(scene.generation(), 6);
    }

    #[test]
    fn regenerate_replaces_edges_in_full() {
        let mut rng = Xorshift32::new(5);
        let mut scene = Constellation::new(ConstellationConfig::default(), &mut rng);
        scene.regenerate(&mut rng);
        let expected = proximity_edges(scene.points(), 3.5);
        assert_eq!(scene.edges(), expected.as_slice());
    }

    #[test]
    fn zero_points_draws_nothing() {
        let cfg = ConstellationConfig { point_count: 0, ..Default::default() };
        let scene = Constellation::new(cfg, &mut Xorshift32::default());
        assert!(scene.points().is_empty());
        assert!(scene.edges().is_empty());
        assert_eq!(scene.segments().count(), 0);
    }

    #[test]
    fn rotation_follows_elapsed_time() {
        let mut scene = Constellation::new(ConstellationConfig::default(), &mut Xorshift32::default());
        assert_eq!(scene.tick(1_000.0), 0.0);
        let r = scene.tick(11_000.0);
        assert!((r - 0.5).abs() < 1e-6);
        assert_eq!(scene.tick(5_000.0), r);
    }

    #[test]
    fn segments_pair_up_edge_endpoints() {
        let scene = Constellation::new(ConstellationConfig::default(), &mut Xorshift32::new(9));
        for ((a, b), e) in scene.segments().zip(scene.edges()) {
            assert_eq!(a, scene.points()[e.a]);
            assert_eq!(b, scene.points()[e.b]);
        }
    }
}
