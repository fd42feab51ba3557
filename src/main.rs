mod classify;
mod config;
mod error;
mod layer;
mod legend;
mod mode;
mod output;
mod pipeline;
mod render;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use legend::Orientation;
use output::{print_error, print_warning};
use pipeline::Composite;

#[derive(Parser)]
#[command(
    name = "changemap",
    version,
    about = "Year-of-detection classes and composite legends for disturbance change maps",
    after_help = "Examples:
  changemap                                  Print the composite legend
  changemap --image legend.png               Also save the legend as PNG
  changemap --stacked                        Stack legend panels vertically
  changemap 1984 1985 1991 2025              Classify detection years
  changemap --layers                         List map layers in render order
  changemap --config nbr.json                Use a custom analysis config"
)]
struct Args {
    /// Detection years to classify (one pixel each). Without years, prints the legend.
    #[arg(allow_negative_numbers = true, value_name = "YEAR")]
    years: Vec<f64>,

    /// List the map layers in render order with their class expressions
    #[arg(short, long)]
    layers: bool,

    /// Stack legend panels vertically instead of side by side
    #[arg(short, long)]
    stacked: bool,

    /// Output the legend as PNG image (legend mode only)
    #[arg(long, value_name = "PATH")]
    image: Option<String>,

    /// JSON config file (defaults to the built-in 1985-2025 analysis)
    #[arg(short, long, value_name = "PATH")]
    config: Option<String>,

    /// Suppress explanations (show data only)
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Show debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        print_warning("logging already initialized");
    }
}

fn main() {
    let args = Args::parse();

    // Handle --no-color
    if args.no_color {
        colored::control::set_override(false);
    }

    setup_logging(args.verbose);

    let legend_mode = args.years.is_empty() && !args.layers;

    // Validate option combinations
    if args.layers && !args.years.is_empty() {
        print_error("--layers cannot be used with years");
        std::process::exit(1);
    }

    if args.image.is_some() && !legend_mode {
        print_error("--image can only be used in legend mode (no years, no --layers)");
        std::process::exit(1);
    }

    if args.stacked && !legend_mode {
        print_error("--stacked can only be used in legend mode (no years, no --layers)");
        std::process::exit(1);
    }

    // Validate image output path
    if let Some(ref path) = args.image {
        use std::path::Path;
        if let Some(parent) = Path::new(path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            print_error(&format!("Directory does not exist: {}", parent.display()));
            std::process::exit(1);
        }
        if !path.to_ascii_lowercase().ends_with(".png") {
            print_warning("legend image is written as PNG regardless of the file extension");
        }
    }

    // Everything is validated before any output is produced
    let config = mode::load_config(args.config.as_deref()).unwrap_or_else(|e| {
        print_error(&e.to_string());
        std::process::exit(1);
    });

    let orientation = if args.stacked {
        Orientation::Stacked
    } else {
        Orientation::SideBySide
    };

    let composite = Composite::build(&config, orientation).unwrap_or_else(|e| {
        print_error(&e.to_string());
        std::process::exit(1);
    });

    // Dispatch to appropriate mode
    if args.layers {
        mode::run_layers(&composite, args.quiet);
    } else if !args.years.is_empty() {
        mode::run_classify(&composite, &args.years, args.quiet);
    } else {
        let colors = colored::control::SHOULD_COLORIZE.should_colorize();
        mode::run_legend(&composite, args.quiet, colors, args.image.as_deref());
    }
}
