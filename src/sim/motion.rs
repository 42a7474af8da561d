// motion.rs - Time-driven transforms
//
// Everything here is a pure function of elapsed seconds, so a frame can be
// recomputed from scratch and independent elements never drift together.

use glam::Vec3;

/// Elapsed-time accumulator fed once per rendered frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameClock {
    start_ms: Option<f64>,
    elapsed: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance to the host timestamp (ms, monotonic). The first call pins
    /// the origin. Timestamps that go backwards are ignored.
    pub fn advance_to(&mut self, now_ms: f64) -> f32 {
        let start = *self.start_ms.get_or_insert(now_ms);
        let t = ((now_ms - start) / 1000.0) as f32;
        if t >= self.elapsed {
            self.elapsed = t;
        }
        self.elapsed
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

/// Constant angular velocity per axis on top of a base orientation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    /// rad/s
    pub rate: Vec3,
    pub base: Vec3,
}

impl Spin {
    pub const fn new(rate: Vec3, base: Vec3) -> Self {
        Self { rate, base }
    }

    pub const fn about_y(rate: f32) -> Self {
        Self::new(Vec3::new(0.0, rate, 0.0), Vec3::ZERO)
    }

    /// Euler angles (x, y, z) at time `t`
    #[inline]
    pub fn angles(&self, t: f32) -> Vec3 {
        self.base + self.rate * t
    }
}

/// Vertical float. The phase comes from the element's own x so that
/// neighbours do not bob in lockstep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bob {
    pub amplitude: f32,
}

impl Bob {
    pub const fn new(amplitude: f32) -> Self {
        Self { amplitude }
    }

    #[inline]
    pub fn offset(&self, base: Vec3, t: f32) -> Vec3 {
        Vec3::new(base.x, base.y + (t + base.x).sin() * self.amplitude, base.z)
    }
}

/// Slow whole-object float: a small tilt on all three axes plus a vertical
/// drift, both driven by one quarter-rate phase.
///
/// tilt  = (cos p / 8, sin p / 8, sin p / 20) * rotation_intensity
/// lift  = sin p * range * float_intensity,  p = (t + phase) / 4 * speed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sway {
    pub speed: f32,
    pub rotation_intensity: f32,
    pub float_intensity: f32,
    /// Half-height of the drift before `float_intensity`
    pub range: f32,
}

impl Sway {
    pub const DEFAULT_RANGE: f32 = 0.1;

    pub const fn new(speed: f32, rotation_intensity: f32, float_intensity: f32) -> Self {
        Self { speed, rotation_intensity, float_intensity, range: Self::DEFAULT_RANGE }
    }

    #[inline]
    fn angle(&self, t: f32, phase: f32) -> f32 {
        (t + phase) / 4.0 * self.speed
    }

    pub fn tilt(&self, t: f32, phase: f32) -> Vec3 {
        let p = self.angle(t, phase);
        Vec3::new(p.cos() / 8.0, p.sin() / 8.0, p.sin() / 20.0) * self.rotation_intensity
    }

    pub fn lift(&self, t: f32, phase: f32) -> f32 {
        self.angle(t, phase).sin() * self.range * self.float_intensity
    }
}
