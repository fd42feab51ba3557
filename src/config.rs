//! Static analysis configuration
//!
//! One immutable record, authored once and handed to every builder. The
//! built-in defaults reproduce the reference NBR loss analysis; a JSON file
//! with the same shape can override any field.

use std::fmt;
use std::path::Path;

use rgb::RGB8;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Palette color, written as `#RRGGBB` (or shorthand `#RGB`) in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(RGB8);

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(RGB8 { r, g, b })
    }

    pub fn rgb(&self) -> RGB8 {
        self.0
    }

    pub fn from_hex(s: &str) -> std::result::Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidColor(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());

        match hex.len() {
            6 => Ok(Self::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            // #abc is #aabbcc
            3 => Ok(Self::new(
                channel(&hex[0..1])? * 0x11,
                channel(&hex[1..2])? * 0x11,
                channel(&hex[2..3])? * 0x11,
            )),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let RGB8 { r, g, b } = self.0;
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}

impl TryFrom<String> for Color {
    type Error = ConfigError;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        Self::from_hex(&s)
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_string()
    }
}

/// Visualization parameters for one rendered layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisParams {
    pub min: f64,
    pub max: f64,
    pub palette: Vec<Color>,
}

impl VisParams {
    /// Parameters for a classified layer: one palette slot per class index.
    /// A single class gives `min == max`, which is valid here but not for an
    /// authored parameter set.
    pub(crate) fn classes(palette: &[Color]) -> Self {
        Self {
            min: 0.0,
            max: palette.len().saturating_sub(1) as f64,
            palette: palette.to_vec(),
        }
    }

    /// Check the authored invariants: `min < max` and a non-empty palette.
    pub fn validate(&self, name: &str) -> std::result::Result<(), ConfigError> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min >= self.max {
            return Err(ConfigError::InvalidRange {
                name: name.to_string(),
                min: self.min,
                max: self.max,
            });
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette(name.to_string()));
        }
        Ok(())
    }
}

/// Analysis period in calendar years, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Domain {
    pub start: i32,
    pub end: i32,
}

impl Domain {
    pub fn new(start: i32, end: i32) -> std::result::Result<Self, ConfigError> {
        if end < start {
            return Err(ConfigError::DegenerateDomain { start, end });
        }
        Ok(Self { start, end })
    }

    /// Number of years covered, counting both ends.
    pub fn years(&self) -> i64 {
        self.end as i64 - self.start as i64 + 1
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub start_year: i32,
    pub end_year: i32,
    /// Discrete detection-year palette; its length is the bin count.
    pub yod_palette: Vec<Color>,
    pub magnitude: VisParams,
    pub duration: VisParams,
    pub prevalence: VisParams,
    pub rate: VisParams,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_year: 1985,
            end_year: 2025,
            yod_palette: vec![
                Color::new(0x94, 0x00, 0xD3),
                Color::new(0x4B, 0x00, 0x82),
                Color::new(0x00, 0x00, 0xFF),
                Color::new(0x00, 0xFF, 0x00),
                Color::new(0xFF, 0xFF, 0x00),
                Color::new(0xFF, 0x7F, 0x00),
                Color::new(0xFF, 0x00, 0x00),
            ],
            magnitude: VisParams {
                min: 200.0,
                max: 800.0,
                palette: vec![
                    Color::new(0xff, 0xff, 0xcc),
                    Color::new(0xa1, 0xda, 0xb4),
                    Color::new(0x41, 0xb6, 0xc4),
                    Color::new(0x2c, 0x7f, 0xb8),
                    Color::new(0x25, 0x34, 0x94),
                ],
            },
            duration: VisParams {
                min: 1.0,
                max: 20.0,
                palette: vec![
                    Color::new(0xf7, 0xfc, 0xf0),
                    Color::new(0xcc, 0xeb, 0xc5),
                    Color::new(0x7b, 0xcc, 0xc4),
                    Color::new(0x2b, 0x8c, 0xbe),
                    Color::new(0x08, 0x40, 0x81),
                ],
            },
            prevalence: VisParams {
                min: 100.0,
                max: 800.0,
                palette: vec![
                    Color::new(0xff, 0xf7, 0xec),
                    Color::new(0xfe, 0xe8, 0xc8),
                    Color::new(0xfd, 0xd4, 0x9e),
                    Color::new(0xfc, 0x8d, 0x59),
                    Color::new(0xd7, 0x30, 0x1f),
                    Color::new(0x7f, 0x00, 0x00),
                ],
            },
            rate: VisParams {
                min: -100.0,
                max: 100.0,
                palette: vec![
                    Color::new(0x67, 0x00, 0x1f),
                    Color::new(0xd6, 0x60, 0x4d),
                    Color::new(0xfd, 0xdb, 0xc7),
                    Color::new(0xd1, 0xe5, 0xf0),
                    Color::new(0x43, 0x93, 0xc3),
                    Color::new(0x21, 0x66, 0xac),
                ],
            },
        }
    }
}

impl Config {
    /// Load a JSON config file. Fields left out keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn domain(&self) -> std::result::Result<Domain, ConfigError> {
        Domain::new(self.start_year, self.end_year)
    }

    /// Validate every authored value up front.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        self.domain()?;
        if self.yod_palette.is_empty() {
            return Err(ConfigError::EmptyPalette("year of detection".to_string()));
        }
        self.magnitude.validate("magnitude")?;
        self.duration.validate("duration")?;
        self.prevalence.validate("prevalence")?;
        self.rate.validate("rate")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_colors() {
        assert_eq!(Color::from_hex("#9400D3"), Ok(Color::new(0x94, 0x00, 0xd3)));
        assert_eq!(Color::from_hex("#fff"), Ok(Color::new(255, 255, 255)));
        assert_eq!(Color::new(0x41, 0xb6, 0xc4).to_string(), "#41b6c4");
    }

    #[test]
    fn test_reject_bad_colors() {
        for bad in ["9400D3", "#9400D", "#GGGGGG", "", "#", "#ééé", "#+f+f+f", "#-1-1-1", "#+ff"] {
            assert!(
                matches!(Color::from_hex(bad), Err(ConfigError::InvalidColor(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.yod_palette.len(), 7);
        assert_eq!(config.domain().unwrap().years(), 41);
    }

    #[test]
    fn test_vis_params_require_ascending_range() {
        let params = VisParams {
            min: 5.0,
            max: 5.0,
            palette: vec![Color::new(0, 0, 0)],
        };
        assert!(matches!(
            params.validate("x"),
            Err(ConfigError::InvalidRange { .. })
        ));

        let nan = VisParams {
            min: f64::NAN,
            ..params.clone()
        };
        assert!(nan.validate("x").is_err());
    }

    #[test]
    fn test_vis_params_require_palette() {
        let params = VisParams {
            min: 0.0,
            max: 1.0,
            palette: vec![],
        };
        assert_eq!(
            params.validate("rate"),
            Err(ConfigError::EmptyPalette("rate".to_string()))
        );
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: Config =
            serde_json::from_str(r##"{"start_year": 2000, "yod_palette": ["#000", "#fff"]}"##)
                .unwrap();
        assert_eq!(config.start_year, 2000);
        assert_eq!(config.end_year, 2025);
        assert_eq!(config.yod_palette.len(), 2);
        assert_eq!(config.rate, Config::default().rate);
    }

    #[test]
    fn test_json_with_invalid_color_fails() {
        let result: std::result::Result<Config, _> =
            serde_json::from_str(r#"{"yod_palette": ["red"]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_degenerate_domain() {
        assert_eq!(
            Domain::new(2025, 1985),
            Err(ConfigError::DegenerateDomain {
                start: 2025,
                end: 1985
            })
        );
        assert_eq!(Domain::new(2000, 2000).unwrap().years(), 1);
    }
}
