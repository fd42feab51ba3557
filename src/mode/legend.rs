//! Legend mode: print the composite legend, optionally save it as an image

use crate::output::{print_descriptions, print_error, print_scheme};
use crate::pipeline::Composite;
use crate::render::{ChartRenderer, LegendRenderer, TerminalRenderer};

/// Print the legend and, if requested, save it as PNG
pub fn run_legend(composite: &Composite, quiet: bool, colors: bool, image_path: Option<&str>) {
    if !quiet {
        print_scheme(&composite.scheme);
    }

    let text = TerminalRenderer { colors }
        .render(&composite.legend)
        .unwrap_or_else(|e| {
            print_error(&e.to_string());
            std::process::exit(1);
        });
    println!("{}", text);

    if !quiet {
        println!();
        print_descriptions();
    }

    if let Some(path) = image_path {
        let renderer = ChartRenderer {
            output_path: path.to_string(),
        };
        if let Err(e) = renderer.render(&composite.legend) {
            print_error(&e.to_string());
            std::process::exit(1);
        } else {
            eprintln!("Legend saved to: {}", path);
        }
    }
}
