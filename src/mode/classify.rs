//! Classification mode: run the deferred year classes over given years

use tracing::debug;

use crate::classify::{BandStack, Field};
use crate::layer::LayerKind;
use crate::output::{
    print_bins, print_class_row, print_error, print_histogram_row, print_scheme, print_separator,
};
use crate::pipeline::Composite;

/// Classify one pixel per year and print the class histogram
pub fn run_classify(composite: &Composite, years: &[f64], quiet: bool) {
    let Some(layer) = composite
        .layers
        .iter()
        .find(|l| l.kind == LayerKind::YearOfDetection)
    else {
        print_error("No detection-year layer");
        std::process::exit(1);
    };

    let stack = BandStack::new()
        .with_band(LayerKind::YearOfDetection.band(), Field::from_samples(years))
        .unwrap_or_else(|e| {
            print_error(&e.to_string());
            std::process::exit(1);
        });
    let labels = composite.scheme.labels();

    if !quiet {
        print_scheme(&composite.scheme);
        print_bins(&composite.scheme.bins());
        println!("Class field: {}", layer.field);
        println!();
    }

    // Per-pixel listing and histogram evaluate the field independently
    let evaluate = || {
        layer.field.evaluate(&stack).unwrap_or_else(|e| {
            print_error(&e.to_string());
            std::process::exit(1);
        })
    };

    println!("[Classes]");
    println!("{:>8} {:>6}  BIN", "YEAR", "CLASS");
    print_separator(28);
    let classes = evaluate();
    for (&year, class) in years.iter().zip(classes.values()) {
        debug_assert_eq!(class.map(|c| c as usize), composite.scheme.class_of(year));
        let label = class.and_then(|c| labels.get(c as usize)).map(String::as_str);
        print_class_row(year, *class, label);
    }

    println!();
    println!("[Histogram]");
    print_separator(28);
    let histogram_field = evaluate();
    let mut counts = vec![0usize; labels.len()];
    let mut masked = 0usize;
    for class in histogram_field.values() {
        match class {
            Some(c) => {
                if let Some(n) = counts.get_mut(*c as usize) {
                    *n += 1;
                }
            }
            None => masked += 1,
        }
    }
    debug!(pixels = histogram_field.len(), masked, "histogram");

    let total = histogram_field.len();
    for (label, count) in labels.iter().zip(&counts) {
        print_histogram_row(label, *count, total);
    }
    print_histogram_row("no data", masked, total);
}
