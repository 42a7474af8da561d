// diagrams.rs - Interval-driven explainer widgets
//
// Both advance one step per timer fire. The host owns the timer; these only
// hold the state a single tick mutates.

/// Transit phase step period
pub const TRANSIT_PERIOD_MS: u32 = 30;
/// Layer highlight period
pub const LAYER_PERIOD_MS: u32 = 800;

const TRANSIT_STEP: f32 = 0.5;
const TRANSIT_SPAN: f32 = 100.0;
const TRANSIT_HALF_WIDTH: f32 = 25.0;
const TRANSIT_FLUX: f32 = 0.85;

/// Planet crossing a star, with the matching dip in measured flux.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TransitDiagram {
    phase: f32,
}

impl TransitDiagram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Phase in [0, 100); doubles as the planet's left offset in percent
    pub fn phase(&self) -> f32 {
        self.phase
    }

    pub fn tick(&mut self) -> f32 {
        self.phase = (self.phase + TRANSIT_STEP) % TRANSIT_SPAN;
        self.phase
    }

    /// Planet offset from the star's center, -50..50
    pub fn position(&self) -> f32 {
        self.phase - TRANSIT_SPAN / 2.0
    }

    pub fn is_transiting(&self) -> bool {
        self.position().abs() < TRANSIT_HALF_WIDTH
    }

    /// Relative brightness
    pub fn flux(&self) -> f32 {
        if self.is_transiting() { TRANSIT_FLUX } else { 1.0 }
    }
}

pub const LAYER_NAMES: [&str; 5] = ["Input", "Conv2D", "ReLU", "Dense", "Output"];

/// Highlight sweeping through the layers of a small network.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayerPipeline {
    active: usize,
}

impl LayerPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self) -> usize {
        self.active = (self.active + 1) % LAYER_NAMES.len();
        self.active
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn active_name(&self) -> &'static str {
        LAYER_NAMES[self.active]
    }

    pub fn is_complete(&self) -> bool {
        self.active == LAYER_NAMES.len() - 1
    }

    /// Fraction of the progress bar filled, (0, 1]
    pub fn progress(&self) -> f32 {
        (self.active + 1) as f32 / LAYER_NAMES.len() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transit_wraps_after_two_hundred_ticks() {
        let mut d = TransitDiagram::new();
        for _ in 0..199 {
            d.tick();
        }
        assert_eq!(d.phase(), 99.5);
        assert_eq!(d.tick(), 0.0);
    }

    #[test]
    fn flux_dips_only_over_the_star() {
        let mut d = TransitDiagram::new();
        let mut dips = 0;
        for _ in 0..200 {
            d.tick();
            if d.is_transiting() {
                assert_eq!(d.flux(), 0.85);
                assert!(d.phase() > 25.0 && d.phase() < 75.0);
                dips += 1;
            } else {
                assert_eq!(d.flux(), 1.0);
            }
        }
        // phases 25.5 ..= 74.5
        assert_eq!(dips, 99);
    }

    #[test]
    fn pipeline_cycles_through_five_layers() {
        let mut p = LayerPipeline::new();
        assert_eq!(p.active_name(), "Input");
        assert_eq!(p.progress(), 0.2);
        let seen: Vec<_> = (0..5).map(|_| p.tick()).collect();
        assert_eq!(seen, [1, 2, 3, 4, 0]);
    }

    #[test]
    fn pipeline_completes_on_output() {
        let mut p = LayerPipeline::new();
        while !p.is_complete() {
            p.tick();
        }
        assert_eq!(p.active_name(), "Output");
        assert_eq!(p.progress(), 1.0);
    }
}
