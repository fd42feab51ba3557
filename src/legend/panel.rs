//! Titled legend panels

use super::entry::{LegendEntry, build_entries};
use crate::classify::continuous_labels;
use crate::config::{Color, VisParams};
use crate::error::ConfigError;

/// A title over an ordered list of entries; the first entry renders topmost.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendPanel {
    pub title: String,
    pub entries: Vec<LegendEntry>,
}

impl LegendPanel {
    pub fn build(title: &str, entries: Vec<LegendEntry>) -> Self {
        Self {
            title: title.to_string(),
            entries,
        }
    }

    /// Panel for a continuous layer, labels inferred from its parameters.
    pub fn continuous(title: &str, params: &VisParams) -> Result<Self, ConfigError> {
        let labels = continuous_labels(params);
        Ok(Self::build(title, build_entries(&params.palette, &labels)?))
    }

    /// Panel for a classified layer with one label per class.
    pub fn discrete(
        title: &str,
        palette: &[Color],
        labels: &[String],
    ) -> Result<Self, ConfigError> {
        Ok(Self::build(title, build_entries(palette, labels)?))
    }
}
