//! Sheet geometry and styling configuration.

use std::path::Path;

use kurbo::Size;
use peniko::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::animation::SpringConfig;

/// Default height of the fully open sheet.
pub const DEFAULT_MAX_HEIGHT: f64 = 300.0;
/// Default fraction of `max_height` that stays visible when closed.
pub const DEFAULT_MIN_HEIGHT_RATIO: f64 = 0.2;
/// Default corner radius of the sheet and indicator.
pub const DEFAULT_CORNER_RADIUS: f64 = 20.0;
/// Default fraction of `max_height` a drag must exceed to snap.
pub const DEFAULT_SNAP_RATIO: f64 = 0.1;
/// Default indicator handle size.
pub const DEFAULT_INDICATOR_SIZE: Size = Size::new(100.0, 5.0);

/// Configuration errors, reported when loading or validating a config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("max height must be finite and non-negative, got {0}")]
    InvalidMaxHeight(f64),
    #[error("min height ratio must be within [0, 1], got {0}")]
    InvalidMinHeightRatio(f64),
    #[error("snap ratio must be within [0, 1], got {0}")]
    InvalidSnapRatio(f64),
    #[error("indicator size must be non-negative, got {width}x{height}")]
    InvalidIndicatorSize { width: f64, height: f64 },
    #[error(
        "spring response and damping must be positive, got response={response} \
         damping={damping_fraction}"
    )]
    InvalidSpring { response: f64, damping_fraction: f64 },
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SheetColor {
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}

impl From<Color> for SheetColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self::new(rgba.r, rgba.g, rgba.b, rgba.a)
    }
}

impl From<SheetColor> for Color {
    fn from(color: SheetColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Immutable description of a bottom sheet.
///
/// The minimum height is stored as a ratio of `max_height` and derived on
/// demand, so a config always describes a consistent geometry for any
/// `max_height`. Construction never validates; call [`SheetConfig::validate`]
/// at boundaries where a bad value should be reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    min_height_ratio: f64,
    max_height: f64,
    corner_radius: f64,
    indicator_size: Size,
    snap_ratio: f64,
    indicator_color: SheetColor,
    indicator_background_color: SheetColor,
    spring: SpringConfig,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            min_height_ratio: DEFAULT_MIN_HEIGHT_RATIO,
            max_height: DEFAULT_MAX_HEIGHT,
            corner_radius: DEFAULT_CORNER_RADIUS,
            indicator_size: DEFAULT_INDICATOR_SIZE,
            snap_ratio: DEFAULT_SNAP_RATIO,
            indicator_color: SheetColor::BLACK,
            indicator_background_color: SheetColor::WHITE,
            spring: SpringConfig::INTERACTIVE,
        }
    }
}

impl SheetConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the visible fraction of the sheet when closed.
    pub fn with_min_height_ratio(mut self, ratio: f64) -> Self {
        self.min_height_ratio = ratio;
        self
    }

    /// Set the height of the fully open sheet.
    pub fn with_max_height(mut self, max_height: f64) -> Self {
        self.max_height = max_height;
        self
    }

    /// Set the corner radius.
    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Set the indicator handle size.
    pub fn with_indicator_size(mut self, size: Size) -> Self {
        self.indicator_size = size;
        self
    }

    /// Set the fraction of `max_height` a drag must exceed to snap.
    pub fn with_snap_ratio(mut self, ratio: f64) -> Self {
        self.snap_ratio = ratio;
        self
    }

    /// Set the indicator fill color.
    pub fn with_indicator_color(mut self, color: impl Into<SheetColor>) -> Self {
        self.indicator_color = color.into();
        self
    }

    /// Set the sheet background color.
    pub fn with_indicator_background_color(mut self, color: impl Into<SheetColor>) -> Self {
        self.indicator_background_color = color.into();
        self
    }

    /// Set the open/close transition spring.
    pub fn with_spring(mut self, spring: SpringConfig) -> Self {
        self.spring = spring;
        self
    }

    pub fn min_height_ratio(&self) -> f64 {
        self.min_height_ratio
    }

    /// Visible height of the closed sheet.
    pub fn min_height(&self) -> f64 {
        self.min_height_ratio * self.max_height
    }

    pub fn max_height(&self) -> f64 {
        self.max_height
    }

    pub fn corner_radius(&self) -> f64 {
        self.corner_radius
    }

    pub fn indicator_size(&self) -> Size {
        self.indicator_size
    }

    pub fn snap_ratio(&self) -> f64 {
        self.snap_ratio
    }

    pub fn indicator_color(&self) -> Color {
        self.indicator_color.into()
    }

    /// Background color of the whole sheet (the indicator sits on it).
    pub fn indicator_background_color(&self) -> Color {
        self.indicator_background_color.into()
    }

    pub fn spring(&self) -> SpringConfig {
        self.spring
    }

    /// Offset applied to the sheet when it is closed.
    pub fn closed_offset(&self) -> f64 {
        self.max_height - self.min_height()
    }

    /// Minimum vertical drag distance that commits a snap.
    pub fn snap_threshold(&self) -> f64 {
        self.max_height * self.snap_ratio
    }

    /// Check the documented invariants.
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.max_height.is_finite() || self.max_height < 0.0 {
            return Err(ConfigError::InvalidMaxHeight(self.max_height));
        }
        if !(0.0..=1.0).contains(&self.min_height_ratio) {
            return Err(ConfigError::InvalidMinHeightRatio(self.min_height_ratio));
        }
        if !(0.0..=1.0).contains(&self.snap_ratio) {
            return Err(ConfigError::InvalidSnapRatio(self.snap_ratio));
        }
        let size = self.indicator_size;
        if !(size.width >= 0.0 && size.height >= 0.0) {
            return Err(ConfigError::InvalidIndicatorSize {
                width: size.width,
                height: size.height,
            });
        }
        if !(self.spring.response > 0.0 && self.spring.damping_fraction > 0.0) {
            return Err(ConfigError::InvalidSpring {
                response: self.spring.response,
                damping_fraction: self.spring.damping_fraction,
            });
        }
        Ok(())
    }

    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::debug!("Loaded sheet config from {}", path.display());
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let config = SheetConfig::default();
        assert!((config.min_height() - 60.0).abs() < 1e-9);
        assert!((config.closed_offset() - 240.0).abs() < 1e-9);
        assert!((config.snap_threshold() - 30.0).abs() < 1e-9);
        assert_eq!(config.indicator_size(), Size::new(100.0, 5.0));
        assert_eq!(SheetColor::from(config.indicator_color()), SheetColor::BLACK);
        assert_eq!(
            SheetColor::from(config.indicator_background_color()),
            SheetColor::WHITE
        );
    }

    #[test]
    fn test_min_height_follows_max_height() {
        let config = SheetConfig::new()
            .with_max_height(500.0)
            .with_min_height_ratio(0.5);
        assert!((config.min_height() - 250.0).abs() < 1e-9);
        assert!((config.closed_offset() - 250.0).abs() < 1e-9);
    }

    #[test]
    fn test_construction_does_not_validate() {
        // Out-of-range values are accepted and only reported on request.
        let config = SheetConfig::new().with_min_height_ratio(1.5);
        assert!(config.closed_offset() < 0.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidMinHeightRatio(r)) if (r - 1.5).abs() < 1e-9
        ));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(SheetConfig::default().validate().is_ok());
        assert!(matches!(
            SheetConfig::new().with_max_height(-1.0).validate(),
            Err(ConfigError::InvalidMaxHeight(_))
        ));
        assert!(matches!(
            SheetConfig::new().with_snap_ratio(2.0).validate(),
            Err(ConfigError::InvalidSnapRatio(_))
        ));
        assert!(matches!(
            SheetConfig::new()
                .with_indicator_size(Size::new(-1.0, 5.0))
                .validate(),
            Err(ConfigError::InvalidIndicatorSize { .. })
        ));
        assert!(matches!(
            SheetConfig::new()
                .with_spring(SpringConfig::new(0.0, 1.0))
                .validate(),
            Err(ConfigError::InvalidSpring { .. })
        ));
    }

    #[test]
    fn test_color_conversion() {
        let color = SheetColor::new(12, 34, 56, 78);
        let peniko: Color = color.into();
        assert_eq!(SheetColor::from(peniko), color);
    }

    #[test]
    fn test_from_json_partial() {
        let config = SheetConfig::from_json(r#"{ "max_height": 400.0 }"#).unwrap();
        assert!((config.max_height() - 400.0).abs() < 1e-9);
        assert!((config.min_height() - 80.0).abs() < 1e-9);
        assert!((config.snap_ratio() - DEFAULT_SNAP_RATIO).abs() < 1e-9);
    }

    #[test]
    fn test_from_json_partial_spring() {
        let config = SheetConfig::from_json(r#"{ "spring": { "response": 0.3 } }"#).unwrap();
        assert_eq!(config.spring().response, 0.3);
        assert_eq!(
            config.spring().damping_fraction,
            SpringConfig::INTERACTIVE.damping_fraction
        );
    }

    #[test]
    fn test_from_json_colors() {
        let config = SheetConfig::from_json(
            r#"{ "indicator_color": { "r": 200, "g": 0, "b": 0, "a": 255 } }"#,
        )
        .unwrap();
        assert_eq!(
            SheetColor::from(config.indicator_color()),
            SheetColor::rgb(200, 0, 0)
        );
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(matches!(
            SheetConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            SheetConfig::from_json(r#"{ "snap_ratio": -0.5 }"#),
            Err(ConfigError::InvalidSnapRatio(_))
        ));
    }

    #[test]
    fn test_json_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheet.json");
        let config = SheetConfig::new()
            .with_max_height(420.0)
            .with_corner_radius(12.0)
            .with_indicator_color(SheetColor::rgb(30, 40, 50));
        std::fs::write(&path, config.to_json().unwrap()).unwrap();

        let loaded = SheetConfig::from_json_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = SheetConfig::from_json_file(dir.path().join("missing.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
