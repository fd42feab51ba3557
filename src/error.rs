//! Error types

use thiserror::Error;

/// Invalid static configuration. Always fatal, raised before any layer,
/// pixel or legend panel is produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("degenerate domain: end year {end} is before start year {start}")]
    DegenerateDomain { start: i32, end: i32 },

    #[error("bin count must be at least 1")]
    NoBins,

    #[error("bin size must be positive, got {0}")]
    NonPositiveBinSize(i64),

    #[error("empty palette for {0}")]
    EmptyPalette(String),

    #[error("invalid range for {name}: min {min} must be below max {max}")]
    InvalidRange { name: String, min: f64, max: f64 },

    #[error("invalid color {0:?} (expected #RRGGBB or #RGB)")]
    InvalidColor(String),

    #[error("legend arity mismatch: {colors} colors but {labels} labels")]
    ArityMismatch { colors: usize, labels: usize },
}

/// Failure evaluating a deferred field against concrete bands.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("band not found: {0}")]
    MissingBand(String),

    #[error("band {name} is {actual} pixels, expected {expected}")]
    SizeMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to render legend: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, Error>;
