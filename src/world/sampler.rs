// sampler.rs - Uniform point placement
//
// Each axis is sampled independently: center + (2r - 1) * half_extent.
// Depth is usually shallower than width/height.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::rng::RandomSource;

/// Axis-aligned box points are drawn from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extents {
    /// Half-width per axis
    pub half: Vec3,
    /// Box center
    #[serde(default)]
    pub center: Vec3,
}

impl Extents {
    pub const fn new(half: Vec3) -> Self {
        Self { half, center: Vec3::ZERO }
    }

    /// From full widths, the way the site describes its boxes
    pub fn from_size(width: f32, height: f32, depth: f32) -> Self {
        Self::new(Vec3::new(width, height, depth) * 0.5)
    }

    pub fn with_center(mut self, center: Vec3) -> Self {
        self.center = center;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.center.is_finite() {
            return Err(EngineError::NonFiniteCoordinate("extent center"));
        }
        for (axis, value) in [('x', self.half.x), ('y', self.half.y), ('z', self.half.z)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(EngineError::InvalidExtent { axis, value });
            }
        }
        Ok(())
    }

    #[inline]
    pub fn sample(&self, rng: &mut impl RandomSource) -> Vec3 {
        let x = rng.next_f32() - 0.5;
        let y = rng.next_f32() - 0.5;
        let z = rng.next_f32() - 0.5;
        self.center + Vec3::new(x, y, z) * 2.0 * self.half
    }
}

/// `count` independent samples from `extents`
pub fn sample_points(count: usize, extents: &Extents, rng: &mut impl RandomSource) -> Vec<Vec3> {
    (0..count).map(|_| extents.sample(rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::tests::Sequence;
    use crate::rng::{PlatformRandom, Xorshift32};

    impl Extents {
        pub(crate) fn contains(&self, p: Vec3) -> bool {
            let d = (p - self.center).abs();
            d.x <= self.half.x && d.y <= self.half.y && d.z <= self.half.z
        }
    }

    #[test]
    fn fixed_sequence_maps_to_known_points() {
        let ext = Extents::from_size(8.0, 6.0, 4.0);
        let mut seq = Sequence::new(&[0.0, 0.5, 0.75]);
        let p = sample_points(1, &ext, &mut seq);
        assert_eq!(p, vec![Vec3::new(-4.0, 0.0, 1.0)]);
    }

    #[test]
    fn center_offsets_every_sample() {
        let ext = Extents::from_size(2.0, 2.0, 8.0).with_center(Vec3::new(0.0, 0.0, -4.0));
        let mut seq = Sequence::new(&[0.5]);
        assert_eq!(ext.sample(&mut seq), Vec3::new(0.0, 0.0, -4.0));
    }

    #[test]
    fn samples_stay_inside_the_box() {
        let ext = Extents::from_size(15.0, 12.0, 8.0).with_center(Vec3::new(0.0, 0.0, -4.0));
        let mut rng = Xorshift32::new(3);
        for p in sample_points(500, &ext, &mut rng) {
            assert!(ext.contains(p), "{p} escaped");
        }
    }

    #[test]
    fn zero_count_is_empty() {
        let mut rng = Xorshift32::default();
        assert!(sample_points(0, &Extents::from_size(1.0, 1.0, 1.0), &mut rng).is_empty());
    }

    #[test]
    fn platform_source_differs_between_calls() {
        let ext = Extents::from_size(8.0, 6.0, 4.0);
        let a = sample_points(25, &ext, &mut PlatformRandom);
        let b = sample_points(25, &ext, &mut PlatformRandom);
        assert_ne!(a, b);
    }

    #[test]
    fn validate_rejects_flat_or_broken_boxes() {
        assert!(Extents::from_size(1.0, 1.0, 1.0).validate().is_ok());
        assert_eq!(
            Extents::new(Vec3::new(1.0, 0.0, 1.0)).validate(),
            Err(EngineError::InvalidExtent { axis: 'y', value: 0.0 })
        );
        assert!(Extents::new(Vec3::new(f32::NAN, 1.0, 1.0)).validate().is_err());
        assert!(Extents::new(Vec3::ONE).with_center(Vec3::splat(f32::INFINITY)).validate().is_err());
    }
}
