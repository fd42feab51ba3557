//! Composite legend holding one panel per layer

use super::panel::LegendPanel;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Orientation {
    /// Panels left to right
    #[default]
    SideBySide,
    /// Panels top to bottom
    Stacked,
}

/// Panels in display order, which follows the order layers were added to the map.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendContainer {
    pub panels: Vec<LegendPanel>,
    pub orientation: Orientation,
}

impl LegendContainer {
    pub fn build(panels: Vec<LegendPanel>, orientation: Orientation) -> Self {
        Self {
            panels,
            orientation,
        }
    }
}
