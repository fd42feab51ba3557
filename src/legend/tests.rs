//! Unit tests for legend module

use super::*;
use crate::config::{Color, VisParams};
use crate::error::ConfigError;

fn palette(n: usize) -> Vec<Color> {
    (0..n).map(|i| Color::new(i as u8 * 40, 0, 255)).collect()
}

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_entries_pair_in_palette_order() {
    let colors = palette(3);
    let entries = build_entries(&colors, &labels(&["a", "b", "c"])).unwrap();
    assert_eq!(entries.len(), 3);
    for (i, entry) in entries.iter().enumerate() {
        assert_eq!(entry.swatch, colors[i]);
    }
    assert_eq!(entries[0].label, "a");
    assert_eq!(entries[2].label, "c");
}

#[test]
fn test_entries_arity_mismatch() {
    let result = build_entries(&palette(5), &labels(&["1", "2", "3", "4"]));
    assert_eq!(
        result,
        Err(ConfigError::ArityMismatch {
            colors: 5,
            labels: 4
        })
    );
}

#[test]
fn test_entries_keep_duplicate_labels() {
    let entries = build_entries(&palette(2), &labels(&["2000", "2000"])).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].label, entries[1].label);
}

#[test]
fn test_continuous_panel() {
    let params = VisParams {
        min: 200.0,
        max: 800.0,
        palette: palette(5),
    };
    let panel = LegendPanel::continuous("Magnitude of Change", &params).unwrap();
    assert_eq!(panel.title, "Magnitude of Change");
    assert_eq!(panel.entries.len(), 5);
    assert_eq!(panel.entries[0].label, "200 – 320");
    assert_eq!(panel.entries[4].swatch, params.palette[4]);
}

#[test]
fn test_discrete_panel_arity_checked() {
    let result = LegendPanel::discrete("Year", &palette(7), &labels(&["1985"]));
    assert!(matches!(result, Err(ConfigError::ArityMismatch { .. })));
}

#[test]
fn test_container_preserves_panel_order() {
    let a = LegendPanel::build("A", vec![]);
    let b = LegendPanel::build("B", vec![]);
    let c = LegendPanel::build("C", vec![]);

    let forward = LegendContainer::build(
        vec![a.clone(), b.clone(), c.clone()],
        Orientation::SideBySide,
    );
    let titles: Vec<&str> = forward.panels.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["A", "B", "C"]);

    let reordered = LegendContainer::build(vec![c, a, b], Orientation::Stacked);
    let titles: Vec<&str> = reordered.panels.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["C", "A", "B"]);
    assert_eq!(reordered.orientation, Orientation::Stacked);
}

#[test]
fn test_default_orientation_is_side_by_side() {
    assert_eq!(Orientation::default(), Orientation::SideBySide);
}
