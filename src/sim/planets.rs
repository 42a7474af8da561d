// planets.rs - Floating background spheres
//
// Colors come from the field's color mode; size and bob speed are drawn
// per planet. Count, color mode and area define the layout; changing any of
// them rebuilds the field. Opacity is applied in place.

use glam::Vec3;
use log::debug;

use super::{FrameClock, Sway};
use crate::color::Rgb;
use crate::config::PlanetFieldConfig;
use crate::rng::RandomSource;

const SCALE_MIN: f32 = 0.2;
const SCALE_SPREAD: f32 = 0.6;
const SPEED_MIN: f32 = 0.1;
const SPEED_SPREAD: f32 = 0.4;

// Vertical float range, world units
const FLOAT_RANGE: f32 = 0.5;

const TILT_INTENSITY: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Planet {
    pub position: Vec3,
    pub scale: f32,
    pub color: Rgb,
    /// Bob frequency multiplier
    pub speed: f32,
}

impl Planet {
    fn spawn(config: &PlanetFieldConfig, rng: &mut impl RandomSource) -> Self {
        // Color first, then position, then size and speed
        let color = config.color_mode.pick(rng);
        let position = config.extents().sample(rng);
        let scale = SCALE_MIN + rng.next_f32() * SCALE_SPREAD;
        let speed = SPEED_MIN + rng.next_f32() * SPEED_SPREAD;
        Self { position, scale, color, speed }
    }

    /// Position at time `t`, drifting within +-FLOAT_RANGE on y
    pub fn position_at(&self, t: f32) -> Vec3 {
        let phase = t * self.speed + self.position.x;
        self.position + Vec3::new(0.0, phase.sin() * FLOAT_RANGE, 0.0)
    }

    /// Euler tilt at time `t`; phase comes from x like the bob
    pub fn rotation_at(&self, t: f32) -> Vec3 {
        Sway::new(self.speed, TILT_INTENSITY, 1.0).tilt(t, self.position.x)
    }
}

/// Same layout inputs, so the current planets can be kept
fn same_layout(a: &PlanetFieldConfig, b: &PlanetFieldConfig) -> bool {
    a.count == b.count && a.color_mode == b.color_mode && a.area == b.area
}

pub struct PlanetField {
    config: PlanetFieldConfig,
    planets: Vec<Planet>,
    clock: FrameClock,
}

impl PlanetField {
    pub fn new(config: PlanetFieldConfig, rng: &mut impl RandomSource) -> Self {
        let mut field = Self { config, planets: Vec::new(), clock: FrameClock::new() };
        field.regenerate(rng);
        field
    }

    pub fn regenerate(&mut self, rng: &mut impl RandomSource) {
        let config = &self.config;
        self.planets = (0..config.count).map(|_| Planet::spawn(config, rng)).collect();
        debug!("planet field: {} planets ({:?})", self.planets.len(), self.config.color_mode);
    }

    /// Swap config. Returns true if the planets were rebuilt.
    pub fn reconfigure(&mut self, config: PlanetFieldConfig, rng: &mut impl RandomSource) -> bool {
        let rebuild = !same_layout(&config, &self.config);
        self.config = config;
        if rebuild {
            self.regenerate(rng);
        }
        rebuild
    }

    pub fn tick(&mut self, now_ms: f64) -> f32 {
        self.clock.advance_to(now_ms)
    }

    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn config(&self) -> &PlanetFieldConfig {
        &self.config
    }

    pub fn elapsed(&self) -> f32 {
        self.clock.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{AMBER_700, ColorMode, GOLD, STONE_200};
    use crate::rng::Xorshift32;
    use crate::rng::tests::Sequence;

    #[test]
    fn spawn_consumes_samples_in_order() {
        // color, x, y, z, scale, speed
        let mut seq = Sequence::new(&[0.9, 0.5, 0.5, 0.5, 1.0, 0.0]);
        let p = Planet::spawn(&PlanetFieldConfig::hero(), &mut seq);
        assert_eq!(p.color, AMBER_700);
        assert_eq!(p.position, Vec3::new(0.0, 0.0, -4.0));
        assert!((p.scale - 0.8).abs() < 1e-6);
        assert!((p.speed - 0.1).abs() < 1e-6);
    }

    #[test]
    fn attributes_stay_in_range() {
        let field = PlanetField::new(PlanetFieldConfig::hero(), &mut Xorshift32::new(21));
        assert_eq!(field.planets().len(), 25);
        let ext = field.config().extents();
        for p in field.planets() {
            assert!(ext.contains(p.position));
            assert!((0.2..=0.8).contains(&p.scale));
            assert!((0.1..=0.5).contains(&p.speed));
        }
    }

    #[test]
    fn light_mode_uses_light_palette_only() {
        let field = PlanetField::new(PlanetFieldConfig::subtle(), &mut Xorshift32::new(2));
        assert!(field.planets().iter().all(|p| p.color == GOLD || p.color == STONE_200));
    }

    #[test]
    fn reconfigure_rebuilds_only_on_change() {
        let mut rng = Xorshift32::new(4);
        let mut field = PlanetField::new(PlanetFieldConfig::subtle(), &mut rng);
        assert!(!field.reconfigure(PlanetFieldConfig::subtle(), &mut rng));

        let dark = PlanetFieldConfig { color_mode: ColorMode::Dark, count: 3, ..PlanetFieldConfig::subtle() };
        assert!(field.reconfigure(dark, &mut rng));
        assert_eq!(field.planets().len(), 3);

        let wider = PlanetFieldConfig { area: 20.0, ..field.config().clone() };
        assert!(field.reconfigure(wider, &mut rng));
    }

    #[test]
    fn opacity_change_keeps_layout() {
        let mut rng = Xorshift32::new(4);
        let mut field = PlanetField::new(PlanetFieldConfig::subtle(), &mut rng);
        let before = field.planets().to_vec();

        let faded = PlanetFieldConfig { opacity: 0.3, ..PlanetFieldConfig::subtle() };
        assert!(!field.reconfigure(faded, &mut rng));
        assert_eq!(field.planets(), before.as_slice());
        assert_eq!(field.config().opacity, 0.3);
    }

    #[test]
    fn tilt_is_bounded_by_intensity() {
        let field = PlanetField::new(PlanetFieldConfig::hero(), &mut Xorshift32::new(3));
        for p in field.planets() {
            for i in 0..40 {
                let r = p.rotation_at(i as f32 * 0.9);
                assert!(r.x.abs() <= 0.5 / 8.0 + 1e-6);
                assert!(r.z.abs() <= 0.5 / 20.0 + 1e-6);
            }
        }
    }

    #[test]
    fn float_stays_within_range() {
        let field = PlanetField::new(PlanetFieldConfig::hero(), &mut Xorshift32::new(8));
        for p in field.planets() {
            for i in 0..50 {
                let q = p.position_at(i as f32 * 0.31);
                assert!((q.y - p.position.y).abs() <= FLOAT_RANGE + 1e-5);
                assert_eq!(q.x, p.position.x);
            }
        }
    }
}
