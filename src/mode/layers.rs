//! Layers mode: list the map layers in render order

use crate::output::{print_layer, print_scheme};
use crate::pipeline::Composite;

pub fn run_layers(composite: &Composite, quiet: bool) {
    if !quiet {
        print_scheme(&composite.scheme);
    }

    for (i, layer) in composite.layers.iter().enumerate() {
        print_layer(i, layer);
    }
}
