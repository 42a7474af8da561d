// color.rs - Tints and the weighted color-mode palettes
//
// Palettes are two-entry tables with a cutoff: a sample above the cutoff
// picks the first entry. The weights are eyeballed, not derived.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::rng::RandomSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (leading `#` optional)
    pub fn from_hex(s: &str) -> Result<Self, EngineError> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        let bad = || EngineError::InvalidColor(s.to_string());
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(bad());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| bad());
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Linear [0, 1] channels for GPU buffers
    pub fn to_unit(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Rgb {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

// Named tints used across the site
pub const GOLD: Rgb = Rgb::new(0xC5, 0xA0, 0x59);
pub const STONE_200: Rgb = Rgb::new(0xd6, 0xd3, 0xd1);
pub const STONE_600: Rgb = Rgb::new(0x57, 0x53, 0x4e);
pub const STONE_700: Rgb = Rgb::new(0x44, 0x40, 0x3c);
pub const STONE_900: Rgb = Rgb::new(0x1c, 0x19, 0x17);
pub const AMBER_700: Rgb = Rgb::new(0xb4, 0x53, 0x09);

/// Two colors and the cutoff above which the first one wins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub first: Rgb,
    pub second: Rgb,
    pub cutoff: f32,
}

impl Palette {
    pub fn pick(&self, rng: &mut impl RandomSource) -> Rgb {
        if rng.next_f32() > self.cutoff { self.first } else { self.second }
    }
}

pub const DARK_PALETTE: Palette = Palette { first: STONE_700, second: STONE_900, cutoff: 0.5 };
pub const LIGHT_PALETTE: Palette = Palette { first: GOLD, second: STONE_200, cutoff: 0.5 };
pub const MIXED_PALETTE: Palette = Palette { first: AMBER_700, second: STONE_700, cutoff: 0.6 };

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Dark,
    Light,
    #[default]
    Mixed,
}

impl ColorMode {
    pub fn palette(self) -> &'static Palette {
        match self {
            ColorMode::Dark => &DARK_PALETTE,
            ColorMode::Light => &LIGHT_PALETTE,
            ColorMode::Mixed => &MIXED_PALETTE,
        }
    }

    pub fn pick(self, rng: &mut impl RandomSource) -> Rgb {
        self.palette().pick(rng)
    }
}

impl FromStr for ColorMode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(ColorMode::Dark),
            "light" => Ok(ColorMode::Light),
            "mixed" => Ok(ColorMode::Mixed),
            other => Err(EngineError::Config(format!("unknown color mode '{other}'"))),
        }
    }
}
