//! Legend as terminal text with truecolor swatches

use colored::*;

use super::LegendRenderer;
use crate::error::Result;
use crate::legend::{LegendContainer, LegendEntry, LegendPanel, Orientation};

/// Blank cells painted with the swatch color
const SWATCH: &str = "    ";
/// Columns between side-by-side panels
const PANEL_GAP: usize = 3;

/// Renders the legend as lines of text.
///
/// With `colors` off, swatches are shown as hex codes instead of painted cells.
pub struct TerminalRenderer {
    pub colors: bool,
}

/// Rendered line plus its visible width (escape codes excluded)
struct Line {
    text: String,
    width: usize,
}

impl TerminalRenderer {
    fn swatch(&self, entry: &LegendEntry) -> Line {
        if self.colors {
            let c = entry.swatch.rgb();
            Line {
                text: SWATCH.on_truecolor(c.r, c.g, c.b).to_string(),
                width: SWATCH.len(),
            }
        } else {
            let hex = entry.swatch.to_string();
            Line {
                width: hex.len(),
                text: hex,
            }
        }
    }

    fn panel_lines(&self, panel: &LegendPanel) -> Vec<Line> {
        let mut lines = vec![Line {
            text: panel.title.bold().to_string(),
            width: panel.title.chars().count(),
        }];
        for entry in &panel.entries {
            let swatch = self.swatch(entry);
            lines.push(Line {
                text: format!("{} {}", swatch.text, entry.label),
                width: swatch.width + 1 + entry.label.chars().count(),
            });
        }
        lines
    }
}

impl LegendRenderer for TerminalRenderer {
    type Output = String;

    fn render(&self, legend: &LegendContainer) -> Result<String> {
        let blocks: Vec<Vec<Line>> = legend
            .panels
            .iter()
            .map(|p| self.panel_lines(p))
            .collect();

        let rows: Vec<String> = match legend.orientation {
            Orientation::Stacked => blocks
                .iter()
                .map(|block| {
                    block
                        .iter()
                        .map(|line| line.text.as_str())
                        .collect::<Vec<_>>()
                        .join("\n")
                })
                .collect::<Vec<_>>()
                .join("\n\n")
                .lines()
                .map(str::to_string)
                .collect(),
            Orientation::SideBySide => {
                let widths: Vec<usize> = blocks
                    .iter()
                    .map(|b| b.iter().map(|l| l.width).max().unwrap_or(0))
                    .collect();
                let height = blocks.iter().map(Vec::len).max().unwrap_or(0);

                (0..height)
                    .map(|row| {
                        let mut out = String::new();
                        for (i, block) in blocks.iter().enumerate() {
                            let last = i + 1 == blocks.len();
                            let (text, width) = block
                                .get(row)
                                .map_or(("", 0), |l| (l.text.as_str(), l.width));
                            out.push_str(text);
                            if !last {
                                out.push_str(&" ".repeat(widths[i] - width + PANEL_GAP));
                            }
                        }
                        out.trim_end().to_string()
                    })
                    .collect()
            }
        };

        Ok(rows.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Color;
    use crate::legend::build_entries;

    fn panel(title: &str, labels: &[&str]) -> LegendPanel {
        let palette: Vec<Color> = labels.iter().map(|_| Color::new(255, 0, 0)).collect();
        let labels: Vec<String> = labels.iter().map(|s| s.to_string()).collect();
        LegendPanel::build(title, build_entries(&palette, &labels).unwrap())
    }

    fn plain() -> TerminalRenderer {
        colored::control::set_override(false);
        TerminalRenderer { colors: false }
    }

    #[test]
    fn test_side_by_side_rows() {
        let legend = LegendContainer::build(
            vec![panel("First", &["1 – 2", "2 – 3"]), panel("Second", &["x"])],
            Orientation::SideBySide,
        );
        let text = plain().render(&legend).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("First"));
        assert!(lines[0].ends_with("Second"));
        assert_eq!(lines[1], "#ff0000 1 – 2   #ff0000 x");
        assert_eq!(lines[2], "#ff0000 2 – 3");
    }

    #[test]
    fn test_stacked_rows() {
        let legend = LegendContainer::build(
            vec![panel("First", &["a"]), panel("Second", &["b"])],
            Orientation::Stacked,
        );
        let text = plain().render(&legend).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["First", "#ff0000 a", "", "Second", "#ff0000 b"]);
    }

    #[test]
    fn test_panels_rendered_in_given_order() {
        let legend = LegendContainer::build(
            vec![panel("B", &["1"]), panel("A", &["2"])],
            Orientation::SideBySide,
        );
        let text = plain().render(&legend).unwrap();
        let first = text.lines().next().unwrap();
        assert!(first.find('B').unwrap() < first.find('A').unwrap());
    }
}
