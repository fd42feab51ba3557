//! Legend image rendering
//!
//! Each panel gets its own grid: a category axis carrying the entry labels
//! and one stacked bar per entry painting the swatch on its row.

use charming::{
    Chart, ImageRenderer,
    component::{Axis, Grid, Title},
    element::{AxisLabel, AxisType, Color, ItemStyle, TextStyle},
    renderer::ImageFormat,
    series::Bar,
};
use tracing::debug;

use super::LegendRenderer;
use super::colors::{COLOR_BACKGROUND, COLOR_LABEL, COLOR_TEXT};
use crate::error::{Error, Result};
use crate::legend::{LegendContainer, LegendPanel, Orientation};

/// Image size for side-by-side legends (2x for Retina quality)
const SIDE_BY_SIDE_WIDTH: u32 = 2800;
const SIDE_BY_SIDE_HEIGHT: u32 = 900;

/// Image width and per-panel height for stacked legends
const STACKED_WIDTH: u32 = 1000;
const STACKED_PANEL_HEIGHT: u32 = 500;

/// Saves the legend as a PNG image.
pub struct ChartRenderer {
    pub output_path: String,
}

/// Grid and title placement for one panel, as percentages of the image
struct Slot {
    title_left: String,
    title_top: String,
    left: String,
    right: String,
    top: String,
    bottom: String,
}

fn slot(orientation: Orientation, index: usize, count: usize) -> Slot {
    let share = 100.0 / count as f64;
    let start = share * index as f64;
    let end = 100.0 - share * (index + 1) as f64;

    match orientation {
        Orientation::SideBySide => Slot {
            title_left: format!("{:.1}%", start + 1.0),
            title_top: "4%".to_string(),
            left: format!("{:.1}%", start + 1.0),
            right: format!("{:.1}%", end + share * 0.45),
            top: "18%".to_string(),
            bottom: "6%".to_string(),
        },
        Orientation::Stacked => Slot {
            title_left: "3%".to_string(),
            title_top: format!("{:.1}%", start + 1.0),
            left: "3%".to_string(),
            right: "55%".to_string(),
            top: format!("{:.1}%", start + share * 0.22),
            bottom: format!("{:.1}%", end + share * 0.05),
        },
    }
}

/// Add one panel's title, axes and swatch bars to the chart
fn add_panel(mut chart: Chart, panel: &LegendPanel, index: usize, slot: Slot) -> Chart {
    // Category axes grow upward; reverse so the first entry is on top
    let labels: Vec<String> = panel.entries.iter().rev().map(|e| e.label.clone()).collect();
    let rows = labels.len();

    chart = chart
        .title(
            Title::new()
                .text(&panel.title)
                .left(slot.title_left.as_str())
                .top(slot.title_top.as_str())
                .text_style(TextStyle::new().color(COLOR_TEXT).font_size(28)),
        )
        .grid(
            Grid::new()
                .left(slot.left.as_str())
                .right(slot.right.as_str())
                .top(slot.top.as_str())
                .bottom(slot.bottom.as_str()),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Value)
                .grid_index(index as f64)
                .max(1)
                .show(false),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Category)
                .grid_index(index as f64)
                .data(labels)
                .axis_label(AxisLabel::new().color(COLOR_LABEL).font_size(22)),
        );

    for (row, entry) in panel.entries.iter().rev().enumerate() {
        let data: Vec<f64> = (0..rows).map(|r| if r == row { 1.0 } else { 0.0 }).collect();
        let color = entry.swatch.to_string();

        chart = chart.series(
            Bar::new()
                .name(&entry.label)
                .data(data)
                .stack(format!("panel{}", index))
                .x_axis_index(index as f64)
                .y_axis_index(index as f64)
                .item_style(ItemStyle::new().color(color.as_str())),
        );
    }

    chart
}

impl ChartRenderer {
    fn chart(&self, legend: &LegendContainer) -> Chart {
        let count = legend.panels.len().max(1);
        let mut chart =
            Chart::new().background_color(Color::Value(COLOR_BACKGROUND.to_string()));

        for (index, panel) in legend.panels.iter().enumerate() {
            chart = add_panel(chart, panel, index, slot(legend.orientation, index, count));
        }
        chart
    }

    fn size(&self, legend: &LegendContainer) -> (u32, u32) {
        match legend.orientation {
            Orientation::SideBySide => (SIDE_BY_SIDE_WIDTH, SIDE_BY_SIDE_HEIGHT),
            Orientation::Stacked => (
                STACKED_WIDTH,
                STACKED_PANEL_HEIGHT * legend.panels.len().max(1) as u32,
            ),
        }
    }
}

impl LegendRenderer for ChartRenderer {
    type Output = ();

    fn render(&self, legend: &LegendContainer) -> Result<()> {
        if legend.panels.is_empty() {
            return Err(Error::Render("No panels to render".to_string()));
        }

        let chart = self.chart(legend);
        let (width, height) = self.size(legend);
        debug!(width, height, path = %self.output_path, "rendering legend image");

        let mut renderer = ImageRenderer::new(width, height);
        renderer
            .save_format(ImageFormat::Png, &chart, &self.output_path)
            .map_err(|e| Error::Render(e.to_string()))?;

        Ok(())
    }
}
