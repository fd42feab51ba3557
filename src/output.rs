use colored::*;

use crate::classify::{Bin, BinScheme};
use crate::layer::{LayerKind, SUMMARY_REFERENCE};
use crate::pipeline::Layer;

fn style_label(label: &str) -> ColoredString {
    label.bold()
}

pub(crate) fn print_error(msg: &str) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

pub(crate) fn print_warning(msg: &str) {
    eprintln!("{}: {}", "warning".yellow().bold(), msg);
}

pub(crate) fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}

pub(crate) fn print_scheme(scheme: &BinScheme) {
    let domain = scheme.domain();
    println!(
        "Analysis period: {}-{} ({} years)",
        domain.start,
        domain.end,
        domain.years()
    );
    println!(
        "Detection-year bins: {} of {} years",
        scheme.n_bins(),
        scheme.bin_size()
    );
    println!();
}

pub(crate) fn print_bins(bins: &[Bin]) {
    println!("Bins:");
    for bin in bins {
        if bin.is_empty() {
            println!("  {:>2}: {} (no years)", bin.index, bin.label);
        } else {
            println!("  {:>2}: {}", bin.index, bin.label);
        }
    }
    println!();
}

pub(crate) fn print_layer(index: usize, layer: &Layer) {
    let palette: Vec<String> = layer.vis.palette.iter().map(|c| c.to_string()).collect();
    println!(
        "{} {}",
        style_label(&format!("[{}]", index + 1)),
        layer.name()
    );
    println!("    band:    {}", layer.kind.band());
    println!("    range:   {} .. {}", layer.vis.min, layer.vis.max);
    println!("    palette: {}", palette.join(" "));
    println!("    field:   {}", layer.field);
}

pub(crate) fn print_class_row(value: f64, class: Option<f64>, label: Option<&str>) {
    match (class, label) {
        (Some(c), Some(label)) => println!("{:>8} {:>6}  {}", value, c, label),
        _ => println!("{:>8} {:>6}  {}", value, "-", "no data".dimmed()),
    }
}

pub(crate) fn print_histogram_row(label: &str, count: usize, total: usize) {
    let pct = if total > 0 {
        count as f64 / total as f64 * 100.0
    } else {
        0.0
    };
    println!("{:<12} {:>6} {:>6.1}%", label, count, pct);
}

pub(crate) fn print_descriptions() {
    for kind in LayerKind::SUMMARY_ORDER {
        println!("{}", style_label(kind.display_name()));
        for line in kind.description() {
            println!("  {}", line);
        }
    }
    println!();
    println!("Reference: {}", SUMMARY_REFERENCE);
}
