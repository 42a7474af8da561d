// decor.rs - Hero banner glyphs and the atom marker
//
// Fixed placements. Each element derives its transform from elapsed time
// alone, so they animate independently. The whole group also sways as one.

use glam::Vec3;

use super::{Bob, FrameClock, Spin, Sway};
use crate::color::{AMBER_700, GOLD, Rgb, STONE_600, STONE_900};

const SYMBOL_BOB: Bob = Bob::new(0.1);
const SYMBOL_SPIN_RATE: f32 = 0.2;
const GROUP_SWAY: Sway = Sway::new(2.0, 0.2, 0.5);

#[derive(Debug, Clone, PartialEq)]
pub struct FloatingSymbol {
    pub glyph: &'static str,
    pub position: Vec3,
    pub color: Rgb,
    pub base_rotation: Vec3,
}

impl FloatingSymbol {
    pub const fn new(glyph: &'static str, position: Vec3, color: Rgb) -> Self {
        Self { glyph, position, color, base_rotation: Vec3::ZERO }
    }

    pub fn position_at(&self, t: f32) -> Vec3 {
        SYMBOL_BOB.offset(self.position, t)
    }

    /// Only y turns; x and z keep their base angles
    pub fn rotation_at(&self, t: f32) -> Vec3 {
        Spin::new(Vec3::new(0.0, SYMBOL_SPIN_RATE, 0.0), self.base_rotation).angles(t)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub position: Vec3,
    pub scale: f32,
    pub nucleus: Rgb,
}

impl Atom {
    const SPIN: Spin = Spin::new(Vec3::new(0.3, 0.2, 0.0), Vec3::ZERO);

    pub fn rotation_at(&self, t: f32) -> Vec3 {
        Self::SPIN.angles(t)
    }
}

/// Everything drawn over the hero planet field
pub struct HeroDecor {
    symbols: Vec<FloatingSymbol>,
    atom: Atom,
    clock: FrameClock,
}

impl Default for HeroDecor {
    fn default() -> Self {
        Self::new()
    }
}

impl HeroDecor {
    pub fn new() -> Self {
        let symbols = vec![
            FloatingSymbol::new("\u{3c0}", Vec3::new(-2.5, 1.0, -1.0), STONE_900),
            FloatingSymbol::new("\u{26a1}", Vec3::new(2.5, 1.5, -2.0), AMBER_700),
            FloatingSymbol::new("\u{1f916}", Vec3::new(3.0, -1.5, 0.0), STONE_900),
            FloatingSymbol::new("{ }", Vec3::new(0.0, 2.5, -3.0), STONE_600),
        ];
        let atom = Atom { position: Vec3::new(-2.0, -1.5, 0.0), scale: 0.8, nucleus: GOLD };
        Self { symbols, atom, clock: FrameClock::new() }
    }

    pub fn tick(&mut self, now_ms: f64) -> f32 {
        self.clock.advance_to(now_ms)
    }

    pub fn elapsed(&self) -> f32 {
        self.clock.elapsed()
    }

    pub fn symbols(&self) -> &[FloatingSymbol] {
        &self.symbols
    }

    pub fn atom(&self) -> &Atom {
        &self.atom
    }

    /// Offset and tilt applied to the parent of every glyph and the atom
    pub fn group_transform(&self, t: f32) -> (Vec3, Vec3) {
        let lift = Vec3::new(0.0, GROUP_SWAY.lift(t, 0.0), 0.0);
        (lift, GROUP_SWAY.tilt(t, 0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_symbols_and_an_atom() {
        let decor = HeroDecor::new();
        let glyphs: Vec<_> = decor.symbols().iter().map(|s| s.glyph).collect();
        assert_eq!(glyphs, ["π", "⚡", "🤖", "{ }"]);
        assert_eq!(decor.atom().scale, 0.8);
    }

    #[test]
    fn symbols_spin_and_bob() {
        let decor = HeroDecor::new();
        let s = &decor.symbols()[0];
        let r = s.rotation_at(5.0);
        assert!((r.y - 1.0).abs() < 1e-6);
        assert_eq!((r.x, r.z), (0.0, 0.0));

        let p = s.position_at(2.5);
        // sin(2.5 - 2.5) == 0
        assert!((p.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn atom_spins_on_two_axes() {
        let decor = HeroDecor::new();
        let r = decor.atom().rotation_at(10.0);
        assert!((r.x - 3.0).abs() < 1e-5);
        assert!((r.y - 2.0).abs() < 1e-5);
    }

    #[test]
    fn group_sways_gently() {
        let decor = HeroDecor::new();
        let (lift, tilt) = decor.group_transform(0.0);
        assert_eq!(lift, Vec3::ZERO);
        assert!((tilt.x - 0.025).abs() < 1e-6);

        for i in 0..50 {
            let (lift, tilt) = decor.group_transform(i as f32 * 0.5);
            assert!(lift.y.abs() <= 0.05 + 1e-6);
            assert!(tilt.abs().max_element() <= 0.025 + 1e-6);
        }
    }
}
