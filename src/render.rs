// render.rs - Flatten scene state into GPU-ready buffers
//
// The host reads these through ptr/len and wraps them in Float32Arrays:
//   markers   = xyz per node                      (points)
//   segments  = xyz xyz per edge                  (lineSegments position attribute)
//   instances = xyz euler scale per planet        (instanced spheres)
//   colors    = rgb per planet, channels in [0,1]
//   decor     = xyz euler scale per hero element (symbols, the atom, then
//               the parent group)
//   sparkles  = xyz per sparkle

use glam::Vec3;

use crate::sim::{Constellation, HeroDecor, PlanetField, SparkleField};

/// Floats per transform record: position, euler angles, uniform scale
pub const TRANSFORM_STRIDE: usize = 7;

#[derive(Default)]
pub struct Encoder {
    markers: Vec<f32>,
    segments: Vec<f32>,
    instances: Vec<f32>,
    colors: Vec<f32>,
    decor: Vec<f32>,
    sparkles: Vec<f32>,
}

fn push_transform(buf: &mut Vec<f32>, p: Vec3, r: Vec3, scale: f32) {
    buf.extend_from_slice(&[p.x, p.y, p.z, r.x, r.y, r.z, scale]);
}

impl Encoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Static geometry; only needs redoing after a regenerate
    pub fn encode_constellation(&mut self, scene: &Constellation) {
        self.markers.clear();
        self.segments.clear();
        self.markers.reserve(scene.points().len() * 3);
        self.segments.reserve(scene.edges().len() * 6);

        for p in scene.points() {
            self.markers.extend_from_slice(&p.to_array());
        }
        for (a, b) in scene.segments() {
            self.segments.extend_from_slice(&a.to_array());
            self.segments.extend_from_slice(&b.to_array());
        }
    }

    /// Per-frame planet transforms at the field's current time
    pub fn encode_planets(&mut self, field: &PlanetField) {
        self.instances.clear();
        self.colors.clear();
        let t = field.elapsed();

        for planet in field.planets() {
            push_transform(&mut self.instances, planet.position_at(t), planet.rotation_at(t), planet.scale);
            self.colors.extend_from_slice(&planet.color.to_unit());
        }
    }

    /// Per-frame glyph, atom and group transforms
    pub fn encode_decor(&mut self, decor: &HeroDecor) {
        self.decor.clear();
        let t = decor.elapsed();

        for symbol in decor.symbols() {
            push_transform(&mut self.decor, symbol.position_at(t), symbol.rotation_at(t), 1.0);
        }
        let atom = decor.atom();
        push_transform(&mut self.decor, atom.position, atom.rotation_at(t), atom.scale);

        let (lift, tilt) = decor.group_transform(t);
        push_transform(&mut self.decor, lift, tilt, 1.0);
    }

    /// Per-frame drifted sparkle positions
    pub fn encode_sparkles(&mut self, field: &SparkleField) {
        self.sparkles.clear();
        self.sparkles.reserve(field.points().len() * 3);
        let t = field.elapsed();

        for &base in field.points() {
            self.sparkles.extend_from_slice(&field.position_at(base, t).to_array());
        }
    }

    pub fn markers(&self) -> &[f32] {
        &self.markers
    }

    pub fn segments(&self) -> &[f32] {
        &self.segments
    }

    pub fn instances(&self) -> &[f32] {
        &self.instances
    }

    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    pub fn decor(&self) -> &[f32] {
        &self.decor
    }

    pub fn sparkles(&self) -> &[f32] {
        &self.sparkles
    }
}
