//! Error types for the engine.
//!
//! Geometry, sampling and navigation are total. Only configuration loading,
//! anchor validation and browser glue can fail.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Extents must be finite and strictly positive on every axis.
    #[error("invalid extent on {axis} axis: {value}")]
    InvalidExtent { axis: char, value: f32 },

    /// A coordinate or scalar that must be finite was NaN or infinite.
    #[error("non-finite value for {0}")]
    NonFiniteCoordinate(&'static str),

    /// Tint strings are `#rrggbb` or `rrggbb`.
    #[error("invalid color '{0}'")]
    InvalidColor(String),

    /// No section carries this anchor id.
    #[error("unknown section '{0}'")]
    UnknownSection(String),

    /// An anchor id appears more than once on the page.
    #[error("anchor '{0}' appears more than once")]
    DuplicateAnchor(String),

    /// A required anchor id is missing from the page.
    #[error("anchor '{0}' is missing")]
    MissingAnchor(String),

    /// Configuration object could not be decoded.
    #[error("config error: {0}")]
    Config(String),

    /// The host page refused an operation (listener, timer, frame).
    #[error("browser error: {0}")]
    Browser(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;

impl From<EngineError> for JsValue {
    fn from(e: EngineError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let e = EngineError::InvalidExtent { axis: 'z', value: -1.0 };
        assert_eq!(e.to_string(), "invalid extent on z axis: -1");
        assert_eq!(
            EngineError::DuplicateAnchor("lab".into()).to_string(),
            "anchor 'lab' appears more than once"
        );
    }
}
