//! Scene configuration.
//!
//! Plain serde structs with site defaults. The host passes partial objects;
//! anything omitted falls back to the default for that field.

use glam::Vec3;
use serde::{Deserialize, Deserializer, Serialize};

use crate::color::{ColorMode, GOLD, Rgb, STONE_700};
use crate::error::{EngineError, Result};
use crate::world::Extents;

/// Link distance for the constellation, tuned by eye.
pub const CONNECTION_THRESHOLD: f32 = 3.5;

/// Constellation point count.
pub const CONSTELLATION_POINTS: usize = 25;

/// Counts arrive from JS as plain numbers; negatives mean "none".
fn lenient_count<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<usize, D::Error> {
    let n = i64::deserialize(d)?;
    Ok(usize::try_from(n).unwrap_or(0))
}

/// Configuration for the node/edge constellation backdrop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstellationConfig {
    /// Number of nodes. Zero or negative draws nothing.
    #[serde(deserialize_with = "lenient_count")]
    pub point_count: usize,

    /// Half-width of the sampling box per axis.
    pub half_extent: Vec3,

    /// Center of the sampling box.
    pub center: Vec3,

    /// Nodes closer than this are joined by a line.
    pub connection_threshold: f32,

    /// Marker and line color.
    pub tint: Rgb,

    /// Group rotation about y, rad/s.
    pub rotation_rate: f32,

    /// Marker radius in world units.
    pub marker_radius: f32,

    /// Line opacity in [0, 1].
    pub line_opacity: f32,
}

impl Default for ConstellationConfig {
    fn default() -> Self {
        Self {
            point_count: CONSTELLATION_POINTS,
            half_extent: Vec3::new(4.0, 3.0, 2.0),
            center: Vec3::ZERO,
            connection_threshold: CONNECTION_THRESHOLD,
            tint: GOLD,
            rotation_rate: 0.05,
            marker_radius: 0.06,
            line_opacity: 0.2,
        }
    }
}

impl ConstellationConfig {
    pub fn extents(&self) -> Extents {
        Extents::new(self.half_extent).with_center(self.center)
    }

    pub fn validate(&self) -> Result<()> {
        self.extents().validate()?;
        for (name, v) in [
            ("connection_threshold", self.connection_threshold),
            ("rotation_rate", self.rotation_rate),
            ("marker_radius", self.marker_radius),
            ("line_opacity", self.line_opacity),
        ] {
            if !v.is_finite() {
                return Err(EngineError::NonFiniteCoordinate(name));
            }
        }
        Ok(())
    }
}

/// Configuration for the floating planet/bubble field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanetFieldConfig {
    /// Number of planets. Zero or negative draws nothing.
    #[serde(deserialize_with = "lenient_count")]
    pub count: usize,

    /// Palette the planet colors are drawn from.
    pub color_mode: ColorMode,

    /// Shared material opacity.
    pub opacity: f32,

    /// Full width of the field; height is 0.8x, depth is fixed.
    pub area: f32,
}

/// Depth of every planet field (full width).
pub const PLANET_DEPTH: f32 = 8.0;

/// Planet fields sit behind the origin by this much.
pub const PLANET_DEPTH_OFFSET: f32 = -4.0;

impl Default for PlanetFieldConfig {
    fn default() -> Self {
        Self { count: 20, color_mode: ColorMode::Mixed, opacity: 0.8, area: 15.0 }
    }
}

impl PlanetFieldConfig {
    /// Hero banner backdrop.
    pub fn hero() -> Self {
        Self { count: 25, color_mode: ColorMode::Mixed, opacity: 0.9, area: 15.0 }
    }

    /// Backdrop for ordinary sections.
    pub fn subtle() -> Self {
        Self { count: 12, color_mode: ColorMode::Light, opacity: 0.5, area: 12.0 }
    }

    pub fn extents(&self) -> Extents {
        Extents::from_size(self.area, self.area * 0.8, PLANET_DEPTH)
            .with_center(Vec3::new(0.0, 0.0, PLANET_DEPTH_OFFSET))
    }

    pub fn validate(&self) -> Result<()> {
        if !self.opacity.is_finite() {
            return Err(EngineError::NonFiniteCoordinate("opacity"));
        }
        self.extents().validate()
    }
}

/// Configuration for a drifting sparkle cloud.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SparkleConfig {
    #[serde(deserialize_with = "lenient_count")]
    pub count: usize,

    /// Edge length of the cube the sparkles fill, centred on the origin.
    pub scale: f32,

    /// Point size in pixels.
    pub size: f32,

    /// Drift phase rate.
    pub speed: f32,

    pub opacity: f32,

    pub color: Rgb,
}

impl Default for SparkleConfig {
    fn default() -> Self {
        Self::subtle()
    }
}

impl SparkleConfig {
    /// Dust over the hero banner.
    pub fn hero() -> Self {
        Self { count: 80, scale: 12.0, size: 4.0, speed: 0.4, opacity: 0.7, color: STONE_700 }
    }

    /// Sparkles around the constellation, in its tint.
    pub fn constellation(tint: Rgb) -> Self {
        Self { count: 80, scale: 15.0, size: 2.0, speed: 0.2, opacity: 0.4, color: tint }
    }

    /// Light gold sparkles behind ordinary sections.
    pub fn subtle() -> Self {
        Self { count: 40, scale: 10.0, size: 3.0, speed: 0.3, opacity: 0.5, color: GOLD }
    }

    pub fn extents(&self) -> Extents {
        Extents::from_size(self.scale, self.scale, self.scale)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, v) in [("size", self.size), ("speed", self.speed), ("opacity", self.opacity)] {
            if !v.is_finite() {
                return Err(EngineError::NonFiniteCoordinate(name));
            }
        }
        self.extents().validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constellation_defaults_match_site() {
        let c = ConstellationConfig::default();
        assert_eq!(c.point_count, 25);
        assert_eq!(c.connection_threshold, 3.5);
        assert_eq!(c.extents(), Extents::from_size(8.0, 6.0, 4.0));
        assert!(c.validate().is_ok());
    }

    #[test]
    fn planet_presets() {
        let hero = PlanetFieldConfig::hero();
        assert_eq!((hero.count, hero.color_mode), (25, ColorMode::Mixed));
        let subtle = PlanetFieldConfig::subtle();
        assert_eq!((subtle.count, subtle.color_mode, subtle.area), (12, ColorMode::Light, 12.0));

        let ext = hero.extents();
        assert_eq!(ext.half, Vec3::new(7.5, 6.0, 4.0));
        assert_eq!(ext.center, Vec3::new(0.0, 0.0, -4.0));
    }

    #[test]
    fn non_positive_area_is_rejected() {
        let cfg = PlanetFieldConfig { area: 0.0, ..PlanetFieldConfig::default() };
        assert!(matches!(cfg.validate(), Err(EngineError::InvalidExtent { axis: 'x', .. })));
    }

    #[test]
    fn non_finite_threshold_is_rejected() {
        let cfg = ConstellationConfig { connection_threshold: f32::INFINITY, ..Default::default() };
        assert_eq!(cfg.validate(), Err(EngineError::NonFiniteCoordinate("connection_threshold")));
    }

    #[test]
    fn zero_threshold_is_valid_config() {
        // Draws points without lines
        let cfg = ConstellationConfig { connection_threshold: 0.0, ..Default::default() };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn negative_counts_decode_as_empty() {
        let cfg: ConstellationConfig = serde_json::from_str(r#"{"point_count": -5}"#).unwrap();
        assert_eq!(cfg.point_count, 0);
        assert_eq!(cfg.connection_threshold, CONNECTION_THRESHOLD);

        let cfg: PlanetFieldConfig = serde_json::from_str(r#"{"count": -1, "color_mode": "dark"}"#).unwrap();
        assert_eq!((cfg.count, cfg.color_mode), (0, ColorMode::Dark));

        let cfg: ConstellationConfig = serde_json::from_str(r#"{"point_count": 40}"#).unwrap();
        assert_eq!(cfg.point_count, 40);
    }

    #[test]
    fn partial_sparkle_config_keeps_defaults() {
        let cfg: SparkleConfig = serde_json::from_str(r##"{"count": 10, "color": "#44403c"}"##).unwrap();
        assert_eq!(cfg.count, 10);
        assert_eq!(cfg.color, STONE_700);
        assert_eq!(cfg.scale, SparkleConfig::subtle().scale);
    }

    #[test]
    fn sparkle_presets() {
        let hero = SparkleConfig::hero();
        assert_eq!((hero.count, hero.scale, hero.color), (80, 12.0, STONE_700));
        assert_eq!(SparkleConfig::constellation(GOLD).color, GOLD);
        assert_eq!(hero.extents().half, Vec3::splat(6.0));

        let flat = SparkleConfig { scale: 0.0, ..SparkleConfig::hero() };
        assert!(flat.validate().is_err());
    }
}
