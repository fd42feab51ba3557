//! Rendering adaptors for the legend tree

mod chart;
mod colors;
mod terminal;

pub use chart::ChartRenderer;
pub use terminal::TerminalRenderer;

use crate::error::Result;
use crate::legend::LegendContainer;

/// Turns a legend container into a concrete output.
pub trait LegendRenderer {
    type Output;

    fn render(&self, legend: &LegendContainer) -> Result<Self::Output>;
}
