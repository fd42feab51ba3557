//! Legend swatch entries

use crate::config::Color;
use crate::error::ConfigError;

/// One swatch color with its range label.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub swatch: Color,
    pub label: String,
}

/// Pair palette slot `i` with label `i`, keeping palette order.
///
/// Labels are never deduplicated; two bins may show the same text.
pub fn build_entries(
    palette: &[Color],
    labels: &[String],
) -> Result<Vec<LegendEntry>, ConfigError> {
    if palette.len() != labels.len() {
        return Err(ConfigError::ArityMismatch {
            colors: palette.len(),
            labels: labels.len(),
        });
    }

    Ok(palette
        .iter()
        .zip(labels)
        .map(|(&swatch, label)| LegendEntry {
            swatch,
            label: label.clone(),
        })
        .collect())
}
